use std::borrow::Cow;

const BOM: char = '\u{FEFF}';

/// Drops a leading BOM and rewrites `\r\n` and lone `\r` as `\n`.
pub(crate) fn normalize(text: &str) -> Cow<'_, str> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

//! Base64 payload decoding.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use thiserror::Error;

use crate::diagnostics::{DecodeDiagnostics, TracingDiagnostics};

/// Standard alphabet, padding optional, non-zero trailing bits ignored.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

const BOM: char = '\u{FEFF}';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// Decodes a standard-alphabet base64 string and reads the bytes as UTF-8.
///
/// ASCII whitespace is ignored, padding may be omitted and leftover bits in
/// the final symbol are dropped. Invalid UTF-8 sequences become U+FFFD and a
/// leading BOM is removed, so only malformed base64 fails.
///
/// Failures are reported through [`TracingDiagnostics`] before being
/// returned.
///
/// # Example
///
/// ```
/// use tabsniff_data_url::{decode_base64_to_text, DecodeError};
///
/// assert_eq!(decode_base64_to_text("SGVsbG8=").unwrap(), "Hello");
/// assert_eq!(decode_base64_to_text("SGVsbG8").unwrap(), "Hello");
/// assert!(matches!(
///     decode_base64_to_text("SGVs*G8="),
///     Err(DecodeError::InvalidBase64(_))
/// ));
/// ```
pub fn decode_base64_to_text(payload: &str) -> Result<String, DecodeError> {
    decode_base64_to_text_with(payload, &TracingDiagnostics)
}

/// Like [`decode_base64_to_text`], reporting failures to `diagnostics`.
pub fn decode_base64_to_text_with(
    payload: &str,
    diagnostics: &dyn DecodeDiagnostics,
) -> Result<String, DecodeError> {
    let result = decode(payload);
    if let Err(error) = &result {
        diagnostics.decode_failed(payload, error);
    }
    result
}

/// Decodes like [`decode_base64_to_text`] but returns an empty string on
/// failure. An empty result is indistinguishable from an empty payload.
pub fn decode_base64_to_text_lossy(payload: &str) -> String {
    decode_base64_to_text(payload).unwrap_or_default()
}

fn decode(payload: &str) -> Result<String, DecodeError> {
    let bytes = if payload.bytes().any(|b| b.is_ascii_whitespace()) {
        let compact: String = payload
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        FORGIVING.decode(compact)?
    } else {
        FORGIVING.decode(payload)?
    };
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.strip_prefix(BOM).unwrap_or(&*text).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NoopDiagnostics;
    use std::cell::RefCell;

    #[test]
    fn decodes_ascii_and_multibyte() {
        assert_eq!(decode_base64_to_text("SGVsbG8=").unwrap(), "Hello");
        assert_eq!(decode_base64_to_text("").unwrap(), "");
        // "日本" in UTF-8
        assert_eq!(decode_base64_to_text("5pel5pys").unwrap(), "日本");
    }

    #[test]
    fn ignores_ascii_whitespace() {
        assert_eq!(decode_base64_to_text("SGVs\nbG8=").unwrap(), "Hello");
        assert_eq!(decode_base64_to_text(" SGVsbG8= ").unwrap(), "Hello");
    }

    #[test]
    fn accepts_missing_padding_and_trailing_bits() {
        assert_eq!(decode_base64_to_text("SGVsbG8").unwrap(), "Hello");
        assert_eq!(decode_base64_to_text("SGk").unwrap(), "Hi");
        assert_eq!(decode_base64_to_text("SGVsbG9=").unwrap(), "Hello");
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["@@@@", "S=VsbG8=", "SGVs*G8=", "A"] {
            assert!(
                matches!(decode_base64_to_text(bad), Err(DecodeError::InvalidBase64(_))),
                "expected InvalidBase64 for {bad:?}"
            );
        }
    }

    #[test]
    fn replaces_non_utf8_bytes() {
        // 0xFF 0xFE 'A'
        assert_eq!(decode_base64_to_text("//5B").unwrap(), "\u{FFFD}\u{FFFD}A");
    }

    #[test]
    fn strips_leading_bom() {
        // 0xEF 0xBB 0xBF 'A'
        assert_eq!(decode_base64_to_text("77u/QQ==").unwrap(), "A");
        // only the first one
        assert_eq!(decode_base64_to_text("77u/77u/QQ==").unwrap(), "\u{FEFF}A");
    }

    #[test]
    fn reports_failures_to_diagnostics() {
        let seen = RefCell::new(Vec::new());
        let sink = |payload: &str, _: &DecodeError| seen.borrow_mut().push(payload.to_string());

        assert!(decode_base64_to_text_with("!!", &sink).is_err());
        assert!(decode_base64_to_text_with("SGk=", &sink).is_ok());
        assert_eq!(*seen.borrow(), vec!["!!".to_string()]);
    }

    #[test]
    fn lossy_returns_empty_on_failure() {
        assert_eq!(decode_base64_to_text_lossy("SGk="), "Hi");
        assert_eq!(decode_base64_to_text_lossy("!!"), "");
        assert!(decode_base64_to_text_with("!!", &NoopDiagnostics).is_err());
    }
}

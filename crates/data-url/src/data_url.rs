//! Data URL header parsing.

use std::fmt;

use crate::decode::{decode_base64_to_text_with, DecodeError};
use crate::diagnostics::{DecodeDiagnostics, TracingDiagnostics};

const PREFIX: &str = "data:";
const BASE64_TOKEN: &str = "base64";

/// MIME type assumed when the header leaves it empty.
pub const DEFAULT_MIME: &str = "text/plain";

/// The parts of a `data:` URL. The payload is kept exactly as it appeared
/// after the first comma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub is_base64: bool,
    pub payload: String,
}

impl DataUrl {
    /// Returns the payload as text, decoding it first when it is base64.
    pub fn text(&self) -> Result<String, DecodeError> {
        self.text_with(&TracingDiagnostics)
    }

    /// Like [`DataUrl::text`], reporting decode failures to `diagnostics`.
    pub fn text_with(&self, diagnostics: &dyn DecodeDiagnostics) -> Result<String, DecodeError> {
        if self.is_base64 {
            decode_base64_to_text_with(&self.payload, diagnostics)
        } else {
            Ok(self.payload.clone())
        }
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PREFIX)?;
        f.write_str(&self.mime)?;
        if self.is_base64 {
            write!(f, ";{BASE64_TOKEN}")?;
        }
        write!(f, ",{}", self.payload)
    }
}

/// Splits a `data:` URL into MIME type, base64 flag and raw payload.
///
/// Returns `None` when `url` does not start with `data:` or has no comma
/// after the prefix. The MIME type is the first `;`-separated header part,
/// [`DEFAULT_MIME`] when that part is empty. Any part equal to `base64`
/// marks the payload as base64.
///
/// Examples:
/// - `"data:,hello"` -> `text/plain`, not base64, `"hello"`
/// - `"data:text/csv;base64,YSxi"` -> `text/csv`, base64, `"YSxi"`
/// - `"https://x"` -> `None`
pub fn parse_data_url(url: &str) -> Option<DataUrl> {
    let rest = url.strip_prefix(PREFIX)?;
    let (header, payload) = rest.split_once(',')?;

    let mime = header
        .split(';')
        .next()
        .filter(|first| !first.is_empty())
        .unwrap_or(DEFAULT_MIME)
        .to_string();
    let is_base64 = header.split(';').any(|part| part == BASE64_TOKEN);

    Some(DataUrl {
        mime,
        is_base64,
        payload: payload.to_string(),
    })
}

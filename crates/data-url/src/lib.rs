//! `data:` URL parsing and base64 payload decoding.
//!
//! A data URL embeds inline content as `data:[mime][;base64],payload`.
//! [`parse_data_url`] splits one into its parts without touching the
//! payload; [`decode_base64_to_text`] turns a base64 payload into UTF-8 text.
//!
//! # Example
//!
//! ```
//! use tabsniff_data_url::{decode_base64_to_text, parse_data_url};
//!
//! let url = parse_data_url("data:text/plain;base64,SGVsbG8=").unwrap();
//! assert_eq!(url.mime, "text/plain");
//! assert!(url.is_base64);
//! assert_eq!(decode_base64_to_text(&url.payload).unwrap(), "Hello");
//! ```

mod data_url;
mod decode;
mod diagnostics;

pub use data_url::{parse_data_url, DataUrl, DEFAULT_MIME};
pub use decode::{
    decode_base64_to_text, decode_base64_to_text_lossy, decode_base64_to_text_with, DecodeError,
};
pub use diagnostics::{DecodeDiagnostics, NoopDiagnostics, TracingDiagnostics};

//! Load a table from CSV text or from a `data:` URL carrying CSV.
//!
//! This crate composes [`tabsniff_data_url`] and [`tabsniff_csv`]: input
//! that parses as a data URL has its payload decoded first, anything else is
//! parsed as CSV directly.
//!
//! # Example
//!
//! ```
//! use tabsniff::load_table;
//!
//! // "a,b\n1,2"
//! let table = load_table("data:text/csv;base64,YSxiCjEsMg==").unwrap();
//! assert_eq!(table.headers, Some(vec!["a".to_string(), "b".to_string()]));
//! assert_eq!(load_table("a,b\n1,2").unwrap(), table);
//! ```

use std::io::Read;

use thiserror::Error;

pub use tabsniff_csv::{
    is_numeric, parse_csv, AlwaysHeader, CsvError, CsvParser, Delimiter, DelimiterSniffer,
    FirstLineSniffer, FixedDelimiter, HeaderClassifier, NoHeader, NonNumericHeader, ParsedTable,
};
pub use tabsniff_data_url::{
    decode_base64_to_text, decode_base64_to_text_lossy, decode_base64_to_text_with,
    parse_data_url, DataUrl, DecodeDiagnostics, DecodeError, NoopDiagnostics, TracingDiagnostics,
};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Csv(#[from] CsvError),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// How CSV problems are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// [`CsvParser::parse`]: never fails, repairs ragged rows.
    #[default]
    Lenient,
    /// [`CsvParser::try_parse`]: rejects unterminated quotes and ragged rows.
    Strict,
}

/// Loads a table with the default parser in lenient mode.
pub fn load_table(input: &str) -> Result<ParsedTable, LoadError> {
    load_table_with(input, &CsvParser::default(), ParseMode::Lenient)
}

/// Loads a table from `input`, decoding it first when it is a data URL.
pub fn load_table_with(
    input: &str,
    parser: &CsvParser,
    mode: ParseMode,
) -> Result<ParsedTable, LoadError> {
    let text = match parse_data_url(input) {
        Some(url) => {
            tracing::debug!(mime = %url.mime, is_base64 = url.is_base64, "input is a data URL");
            url.text()?
        }
        None => input.to_string(),
    };
    match mode {
        ParseMode::Lenient => Ok(parser.parse(&text)),
        ParseMode::Strict => Ok(parser.try_parse(&text)?),
    }
}

/// Reads all of `reader` as UTF-8 and loads a table from it.
pub fn load_table_from_reader(
    mut reader: impl Read,
    parser: &CsvParser,
    mode: ParseMode,
) -> Result<ParsedTable, LoadError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    load_table_with(&input, parser, mode)
}

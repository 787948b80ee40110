use thiserror::Error;

/// Errors from [`CsvParser::try_parse`](crate::CsvParser::try_parse).
///
/// Line numbers are 1-based and count lines of the normalized text,
/// including the blank lines that parsing skips.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CsvError {
    #[error("line {line}: unterminated quoted field")]
    MalformedRow { line: usize },
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
}

//! The parsing pipeline.

use std::fmt;

use crate::delimiter::{DelimiterSniffer, FirstLineSniffer};
use crate::error::CsvError;
use crate::header::{HeaderClassifier, NonNumericHeader};
use crate::normalize::normalize;
use crate::split::{split_line, unquote_field};
use crate::table::ParsedTable;

/// CSV parser with pluggable delimiter and header inference.
///
/// The default parser sniffs the delimiter from the first line
/// ([`FirstLineSniffer`]) and promotes an all-non-numeric first row to a
/// header ([`NonNumericHeader`]).
pub struct CsvParser {
    sniffer: Box<dyn DelimiterSniffer>,
    header: Box<dyn HeaderClassifier>,
}

/// One non-empty input line after splitting and unquoting.
struct Row {
    line: usize,
    fields: Vec<String>,
    unterminated_quote: bool,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            sniffer: Box::new(FirstLineSniffer),
            header: Box::new(NonNumericHeader),
        }
    }
}

impl fmt::Debug for CsvParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvParser").finish_non_exhaustive()
    }
}

impl CsvParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sniffer(mut self, sniffer: impl DelimiterSniffer + 'static) -> Self {
        self.sniffer = Box::new(sniffer);
        self
    }

    pub fn with_header_classifier(mut self, classifier: impl HeaderClassifier + 'static) -> Self {
        self.header = Box::new(classifier);
        self
    }

    /// Parses `text` into a table. Never fails.
    ///
    /// An unterminated quoted field keeps the rest of its line as one raw
    /// field. Under a header, short rows are padded with empty fields and
    /// long rows are truncated.
    pub fn parse(&self, text: &str) -> ParsedTable {
        let mut rows = self.split_rows(text).into_iter();
        let Some(first) = rows.next() else {
            return ParsedTable::default();
        };
        if !self.promotes(&first) {
            let rows = std::iter::once(first).chain(rows).map(|row| row.fields).collect();
            return ParsedTable {
                headers: None,
                rows,
            };
        }

        let width = first.fields.len();
        let rows = rows
            .map(|mut row| {
                if row.fields.len() != width {
                    tracing::debug!(
                        line = row.line,
                        expected = width,
                        found = row.fields.len(),
                        "resizing row to header width"
                    );
                    row.fields.resize(width, String::new());
                }
                row.fields
            })
            .collect();
        ParsedTable {
            headers: Some(first.fields),
            rows,
        }
    }

    /// Parses `text`, rejecting unterminated quoted fields and rows whose
    /// field count differs from the header.
    pub fn try_parse(&self, text: &str) -> Result<ParsedTable, CsvError> {
        let rows = self.split_rows(text);
        if let Some(row) = rows.iter().find(|row| row.unterminated_quote) {
            return Err(CsvError::MalformedRow { line: row.line });
        }
        let mut rows = rows.into_iter();
        let Some(first) = rows.next() else {
            return Ok(ParsedTable::default());
        };
        if !self.promotes(&first) {
            let rows = std::iter::once(first).chain(rows).map(|row| row.fields).collect();
            return Ok(ParsedTable {
                headers: None,
                rows,
            });
        }

        let width = first.fields.len();
        let rows = rows
            .map(|row| {
                if row.fields.len() == width {
                    Ok(row.fields)
                } else {
                    Err(CsvError::FieldCountMismatch {
                        line: row.line,
                        expected: width,
                        found: row.fields.len(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ParsedTable {
            headers: Some(first.fields),
            rows,
        })
    }

    fn promotes(&self, first: &Row) -> bool {
        let is_header = self.header.is_header(&first.fields);
        tracing::trace!(is_header, fields = first.fields.len(), "classified first row");
        is_header
    }

    fn split_rows(&self, text: &str) -> Vec<Row> {
        let text = normalize(text);
        let delimiter = self.sniffer.sniff(&text);
        tracing::trace!(%delimiter, "sniffed delimiter");

        text.split('\n')
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(index, line)| {
                let split = split_line(line, delimiter.as_byte());
                Row {
                    line: index + 1,
                    fields: split.fields.into_iter().map(unquote_field).collect(),
                    unterminated_quote: split.unterminated_quote,
                }
            })
            .collect()
    }
}

/// Parses `text` with the default [`CsvParser`].
///
/// # Example
///
/// ```
/// use tabsniff_csv::parse_csv;
///
/// let table = parse_csv("1;2;3\n4;5;6");
/// assert_eq!(table.headers, None);
/// assert_eq!(table.rows.len(), 2);
/// ```
pub fn parse_csv(text: &str) -> ParsedTable {
    CsvParser::default().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delimiter::{Delimiter, FixedDelimiter};
    use crate::header::{AlwaysHeader, NoHeader};

    fn strings(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert_eq!(parse_csv(""), ParsedTable::default());
        assert_eq!(parse_csv("\n\n\r\n"), ParsedTable::default());
        assert_eq!(parse_csv("\u{FEFF}"), ParsedTable::default());
    }

    #[test]
    fn header_then_rows() {
        let table = parse_csv("a,b,c\n1,2,3");
        assert_eq!(table.headers, Some(strings(&["a", "b", "c"])));
        assert_eq!(table.rows, vec![strings(&["1", "2", "3"])]);
    }

    #[test]
    fn numeric_first_row_is_data() {
        let table = parse_csv("1,2,3\n4,5,6");
        assert_eq!(table.headers, None);
        assert_eq!(table.rows, vec![strings(&["1", "2", "3"]), strings(&["4", "5", "6"])]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let table = parse_csv("a,b\r\n\r\n1,2\r\n\r\n3,4\r\n");
        assert_eq!(table.rows, vec![strings(&["1", "2"]), strings(&["3", "4"])]);
    }

    #[test]
    fn lenient_parse_resizes_rows_under_header() {
        let table = parse_csv("a,b,c\n1\n1,2,3,4");
        assert_eq!(
            table.rows,
            vec![strings(&["1", "", ""]), strings(&["1", "2", "3"])]
        );
    }

    #[test]
    fn lenient_parse_keeps_unterminated_quote_raw() {
        let table = parse_csv("x,y\na,\"b,c");
        assert_eq!(table.rows, vec![strings(&["a", "\"b,c"])]);
    }

    #[test]
    fn try_parse_reports_line_numbers() {
        let parser = CsvParser::new();
        assert_eq!(
            parser.try_parse("x,y\n\na,\"b,c"),
            Err(CsvError::MalformedRow { line: 3 })
        );
        assert_eq!(
            parser.try_parse("x,y\n1,2\n1"),
            Err(CsvError::FieldCountMismatch {
                line: 3,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(parser.try_parse("x,y\n1,2"), Ok(parse_csv("x,y\n1,2")));
    }

    #[test]
    fn try_parse_allows_ragged_rows_without_header() {
        let table = CsvParser::new().try_parse("1,2\n3").unwrap();
        assert_eq!(table.rows, vec![strings(&["1", "2"]), strings(&["3"])]);
    }

    #[test]
    fn parser_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CsvParser>();
    }

    #[test]
    fn strategies_are_swappable() {
        let parser = CsvParser::new()
            .with_sniffer(FixedDelimiter(Delimiter::Semicolon))
            .with_header_classifier(NoHeader);
        let table = parser.parse("a,b;c");
        assert_eq!(table.headers, None);
        assert_eq!(table.rows, vec![strings(&["a,b", "c"])]);

        let table = CsvParser::new()
            .with_header_classifier(AlwaysHeader)
            .parse("2023,2024\n1,2");
        assert_eq!(table.headers, Some(strings(&["2023", "2024"])));
        assert_eq!(table.rows, vec![strings(&["1", "2"])]);
    }
}

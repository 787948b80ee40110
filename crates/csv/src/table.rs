//! Parsed table value.

use serde::{Deserialize, Serialize};

use crate::delimiter::Delimiter;

/// Rows of a parsed document, with the first row split off when it was
/// recognized as a header.
///
/// When `headers` is present every row has exactly as many fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl ParsedTable {
    /// Serializes the table back to CSV text.
    ///
    /// Rows are joined with `\n`. A field is quoted, with inner quotes
    /// doubled, when it contains `delimiter`, a quote or a line break, or when
    /// it is the only field of its row and empty (an empty line would be
    /// skipped on re-parse).
    ///
    /// Parsing splits lines before it looks at quotes, so a field holding
    /// `\n` or `\r` comes back as several rows even though it is quoted here.
    pub fn to_csv(&self, delimiter: Delimiter) -> String {
        let mut out = String::new();
        let lines = self.headers.iter().chain(self.rows.iter());
        for (i, row) in lines.enumerate() {
            if i > 0 {
                out.push('\n');
            }
            write_row(&mut out, row, delimiter.as_char());
        }
        out
    }
}

fn write_row(out: &mut String, row: &[String], delimiter: char) {
    if row.iter().all(String::is_empty) && row.len() <= 1 {
        out.push_str("\"\"");
        return;
    }
    for (i, field) in row.iter().enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        let needs_quotes = field
            .chars()
            .any(|c| c == delimiter || matches!(c, '"' | '\n' | '\r'));
        if needs_quotes {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
}

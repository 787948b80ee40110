//! Field delimiters and delimiter inference.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Comma,
    Semicolon,
    Tab,
}

impl Delimiter {
    /// Inference candidates, in tie-break order.
    pub const CANDIDATES: [Delimiter; 3] = [Delimiter::Comma, Delimiter::Semicolon, Delimiter::Tab];

    pub fn as_char(self) -> char {
        self.as_byte() as char
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
            Delimiter::Tab => b'\t',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Comma => f.write_str(","),
            Delimiter::Semicolon => f.write_str(";"),
            Delimiter::Tab => f.write_str("\\t"),
        }
    }
}

/// Chooses the delimiter for a whole document.
///
/// `text` has already had its BOM stripped and line endings normalized to
/// `\n`.
pub trait DelimiterSniffer: Send + Sync {
    fn sniff(&self, text: &str) -> Delimiter;
}

/// Picks the candidate that splits the first line into the most fields.
///
/// Only the first line is inspected and quotes are not considered. Ties go
/// to the earlier candidate in [`Delimiter::CANDIDATES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLineSniffer;

impl DelimiterSniffer for FirstLineSniffer {
    fn sniff(&self, text: &str) -> Delimiter {
        let first_line = text.split('\n').next().unwrap_or_default();
        let mut best = Delimiter::Comma;
        let mut best_count = 0usize;
        for candidate in Delimiter::CANDIDATES {
            let fields = first_line.bytes().filter(|&b| b == candidate.as_byte()).count() + 1;
            if fields > best_count {
                best_count = fields;
                best = candidate;
            }
        }
        best
    }
}

/// Always answers with the same delimiter.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedDelimiter(pub Delimiter);

impl DelimiterSniffer for FixedDelimiter {
    fn sniff(&self, _text: &str) -> Delimiter {
        self.0
    }
}

//! Delimiter-sniffing, quote-aware CSV parsing.
//!
//! Text goes through a fixed pipeline: BOM stripping, line-ending
//! normalization, delimiter inference, quote-aware row splitting, field
//! unquoting and header inference. Delimiter and header inference are
//! strategies ([`DelimiterSniffer`], [`HeaderClassifier`]) that can be
//! swapped on a [`CsvParser`].
//!
//! # Example
//!
//! ```
//! use tabsniff_csv::parse_csv;
//!
//! let table = parse_csv("name,note\n\"Smith, John\",\"He said \"\"hi\"\"\"");
//! assert_eq!(table.headers.as_deref(), Some(&["name".to_string(), "note".to_string()][..]));
//! assert_eq!(table.rows, vec![vec!["Smith, John".to_string(), "He said \"hi\"".to_string()]]);
//! ```

mod delimiter;
mod error;
mod header;
mod normalize;
mod numeric;
mod parser;
mod split;
mod table;

pub use delimiter::{Delimiter, DelimiterSniffer, FirstLineSniffer, FixedDelimiter};
pub use error::CsvError;
pub use header::{AlwaysHeader, HeaderClassifier, NoHeader, NonNumericHeader};
pub use numeric::is_numeric;
pub use parser::{parse_csv, CsvParser};
pub use table::ParsedTable;

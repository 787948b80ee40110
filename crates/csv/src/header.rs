//! Header row inference.

use crate::numeric::is_numeric;

/// Decides whether the first parsed row names the columns.
pub trait HeaderClassifier: Send + Sync {
    fn is_header(&self, first_row: &[String]) -> bool;
}

/// Treats the first row as a header when none of its fields is numeric.
///
/// This is a guess. A lone all-text data row is promoted to a header, and a
/// header made only of numeric labels (`2023,2024`) is kept as data.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonNumericHeader;

impl HeaderClassifier for NonNumericHeader {
    fn is_header(&self, first_row: &[String]) -> bool {
        first_row.iter().all(|field| !is_numeric(field))
    }
}

/// Never promotes a row.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHeader;

impl HeaderClassifier for NoHeader {
    fn is_header(&self, _first_row: &[String]) -> bool {
        false
    }
}

/// Always promotes the first row.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysHeader;

impl HeaderClassifier for AlwaysHeader {
    fn is_header(&self, _first_row: &[String]) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn non_numeric_header_matrix() {
        assert!(NonNumericHeader.is_header(&row(&["a", "b", "c"])));
        assert!(NonNumericHeader.is_header(&row(&["name", ""])));
        assert!(!NonNumericHeader.is_header(&row(&["name", "1"])));
        assert!(!NonNumericHeader.is_header(&row(&["2023", "2024"])));
    }

    #[test]
    fn fixed_classifiers() {
        assert!(!NoHeader.is_header(&row(&["a"])));
        assert!(AlwaysHeader.is_header(&row(&["1"])));
    }
}

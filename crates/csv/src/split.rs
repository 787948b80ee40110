//! Quote-aware line splitting and field unquoting.

const QUOTE: u8 = b'"';

/// Raw fields of one line, bounding quotes still in place.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct SplitLine<'a> {
    pub fields: Vec<&'a str>,
    /// The line ended inside a quoted field.
    pub unterminated_quote: bool,
}

/// Splits `line` on `delimiter`, skipping delimiters that sit inside double
/// quotes. Every `"` flips the inside-quotes state, so an escaped `""`
/// leaves it unchanged.
pub(crate) fn split_line(line: &str, delimiter: u8) -> SplitLine<'_> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut inside_quotes = false;
    for (i, byte) in line.bytes().enumerate() {
        if byte == QUOTE {
            inside_quotes = !inside_quotes;
        } else if byte == delimiter && !inside_quotes {
            fields.push(&line[start..i]);
            start = i + 1;
        }
    }
    fields.push(&line[start..]);
    SplitLine {
        fields,
        unterminated_quote: inside_quotes,
    }
}

/// Strips bounding quotes and collapses `""` to `"` when `field` both starts
/// and ends with a quote. Anything else, including a lone `"`, is returned
/// unchanged.
pub(crate) fn unquote_field(field: &str) -> String {
    match field.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        Some(inner) => inner.replace("\"\"", "\""),
        None => field.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_matrix() {
        let cases: [(&str, &[&str]); 7] = [
            ("a,b,c", &["a", "b", "c"]),
            ("a", &["a"]),
            (",", &["", ""]),
            ("\"Smith, John\",x", &["\"Smith, John\"", "x"]),
            ("\"He said \"\"hi, there\"\"\",y", &["\"He said \"\"hi, there\"\"\"", "y"]),
            ("a\"b,c", &["a\"b,c"]),
            ("日本,語", &["日本", "語"]),
        ];
        for (line, expected) in cases {
            let split = split_line(line, b',');
            assert_eq!(split.fields, expected, "line {line:?}");
        }
    }

    #[test]
    fn split_flags_unterminated_quote() {
        let split = split_line("a,\"b,c", b',');
        assert_eq!(split.fields, vec!["a", "\"b,c"]);
        assert!(split.unterminated_quote);
        assert!(!split_line("a,\"b\",c", b',').unterminated_quote);
    }

    #[test]
    fn split_respects_other_delimiters() {
        assert_eq!(split_line("a;\"b;c\";d", b';').fields, vec!["a", "\"b;c\"", "d"]);
        assert_eq!(split_line("a\tb,c", b'\t').fields, vec!["a", "b,c"]);
    }

    #[test]
    fn unquote_matrix() {
        assert_eq!(unquote_field("\"Smith, John\""), "Smith, John");
        assert_eq!(unquote_field("\"He said \"\"hi\"\"\""), "He said \"hi\"");
        assert_eq!(unquote_field("\"\""), "");
        assert_eq!(unquote_field("\""), "\"");
        assert_eq!(unquote_field("plain"), "plain");
        assert_eq!(unquote_field("a\"\"b"), "a\"\"b");
        assert_eq!(unquote_field("\"open"), "\"open");
        assert_eq!(unquote_field("close\""), "close\"");
    }
}

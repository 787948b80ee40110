//! Numeric-literal recognition for header inference.
//!
//! Follows the string-to-number grammar of JavaScript's `Number()`, except
//! that empty and whitespace-only strings are not numbers.

/// Returns true when `s` reads as a number.
///
/// Accepted after trimming whitespace: decimal literals with optional sign,
/// fraction and exponent (`-1.5e3`, `.5`, `5.`), unsigned `0x`/`0o`/`0b`
/// integers, and `Infinity` with optional sign.
///
/// ```
/// use tabsniff_csv::is_numeric;
///
/// assert!(is_numeric(" 42 "));
/// assert!(is_numeric("0x1F"));
/// assert!(!is_numeric(""));
/// assert!(!is_numeric("NaN"));
/// assert!(!is_numeric("1,5"));
/// ```
pub fn is_numeric(s: &str) -> bool {
    let t = s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    if t.is_empty() {
        return false;
    }
    if matches!(t, "Infinity" | "+Infinity" | "-Infinity") {
        return true;
    }
    let bytes = t.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
        let digits = &bytes[2..];
        match bytes[1] {
            b'x' | b'X' => return digits.iter().all(u8::is_ascii_hexdigit),
            b'o' | b'O' => return digits.iter().all(|b| (b'0'..=b'7').contains(b)),
            b'b' | b'B' => return digits.iter().all(|b| matches!(b, b'0' | b'1')),
            _ => {}
        }
    }
    is_decimal(bytes)
}

fn is_decimal(bytes: &[u8]) -> bool {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&bytes[i..]);
        i += frac_digits;
    }
    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_digits = count_digits(&bytes[i..]);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }
    i == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

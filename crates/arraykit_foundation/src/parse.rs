//! Integer parsing for string sequences.
//!
//! Two flavours are provided:
//! - [`parse_int`] reads the longest integer prefix and ignores trailing text,
//!   returning `None` only when no digits are present
//! - [`parse_int_strict`] accepts only a complete decimal literal

use crate::error::{Error, Result};

/// Largest magnitude tracked while accumulating digits (`|i64::MIN|`).
const MAGNITUDE_LIMIT: i128 = i64::MAX as i128 + 1;

fn is_leading_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Parses the integer prefix of `text`.
///
/// Leading whitespace is skipped, then one optional `+` or `-`, then an
/// optional `0x`/`0X` selecting base 16. The longest run of digits in the
/// base is consumed and anything after it is ignored, so `"12abc"` is 12 and
/// `"1.9"` is 1. Values beyond the `i64` range saturate.
///
/// Returns `None` when no digit follows the optional sign and prefix.
#[must_use]
pub fn parse_int(text: &str) -> Option<i64> {
    let rest = text.trim_start_matches(is_leading_space);
    let (negative, rest) = if let Some(rest) = rest.strip_prefix('-') {
        (true, rest)
    } else {
        (false, rest.strip_prefix('+').unwrap_or(rest))
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut seen = false;
    let mut magnitude: i128 = 0;
    for d in digits.chars().map_while(|c| c.to_digit(radix)) {
        seen = true;
        magnitude = (magnitude * i128::from(radix) + i128::from(d)).min(MAGNITUDE_LIMIT);
    }
    if !seen {
        return None;
    }

    let signed = if negative { -magnitude } else { magnitude };
    Some(i64::try_from(signed).unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}

/// Parses `text` as a complete decimal integer literal.
///
/// Surrounding whitespace and one leading sign are allowed; anything else,
/// including out-of-range magnitudes, is an [`ErrorKind::InvalidInteger`].
///
/// # Errors
///
/// Returns an error when `text` is not exactly one `i64` literal.
///
/// [`ErrorKind::InvalidInteger`]: crate::ErrorKind::InvalidInteger
pub fn parse_int_strict(text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| Error::invalid_integer(text))
}

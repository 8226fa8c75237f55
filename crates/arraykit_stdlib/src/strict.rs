//! Sequence operations that report bad input instead of normalizing it.
//!
//! Parsing requires each entry to be a complete decimal literal and all
//! arithmetic is checked. Errors carry the operation name and, where one
//! entry is at fault, its index.

use arraykit_foundation::{Error, ErrorContext, Result, parse_int_strict};
use tracing::debug;

use crate::config::Rules;

fn parse_entry(operation: &'static str, index: usize, text: &str) -> Result<i64> {
    parse_int_strict(text).map_err(|err| {
        debug!(operation, index, input = text, "rejected entry");
        err.with_context(ErrorContext::new().with_operation(operation).with_index(index))
    })
}

/// Sums in `i128` so that only the final total has to fit in an `i64`.
fn checked_sum(operation: &'static str, values: &[i64]) -> Result<i64> {
    let total: i128 = values.iter().map(|&n| i128::from(n)).sum();
    i64::try_from(total).map_err(|_| {
        Error::overflow(operation).with_context(ErrorContext::new().with_operation(operation))
    })
}

/// Parses every entry as a complete integer literal.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidInteger`] for the first entry that is not a
/// literal, with its index in the context.
///
/// [`ErrorKind::InvalidInteger`]: arraykit_foundation::ErrorKind::InvalidInteger
pub fn strings_to_integers<S: AsRef<str>>(numbers: &[S]) -> Result<Vec<i64>> {
    numbers
        .iter()
        .enumerate()
        .map(|(i, s)| parse_entry("stringsToIntegers", i, s.as_ref()))
        .collect()
}

/// Strips one leading `$` from each amount and parses the rest strictly.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidInteger`] for the first amount that is not a
/// literal once the symbol is removed.
///
/// [`ErrorKind::InvalidInteger`]: arraykit_foundation::ErrorKind::InvalidInteger
pub fn remove_dollars<S: AsRef<str>>(amounts: &[S]) -> Result<Vec<i64>> {
    let rules = Rules::standard();
    amounts
        .iter()
        .enumerate()
        .map(|(i, a)| parse_entry("removeDollars", i, rules.strip_currency(a.as_ref())))
        .collect()
}

/// Multiplies every number by 3.
///
/// # Errors
///
/// Returns [`ErrorKind::Overflow`] for the first number whose triple does not
/// fit in an `i64`.
///
/// [`ErrorKind::Overflow`]: arraykit_foundation::ErrorKind::Overflow
pub fn triple_numbers(numbers: &[i64]) -> Result<Vec<i64>> {
    numbers
        .iter()
        .enumerate()
        .map(|(i, n)| {
            n.checked_mul(3).ok_or_else(|| {
                Error::overflow("tripleNumbers").with_context(
                    ErrorContext::new()
                        .with_operation("tripleNumbers")
                        .with_index(i),
                )
            })
        })
        .collect()
}

/// Renders the addends as an equation with a checked sum.
///
/// # Errors
///
/// Returns [`ErrorKind::Overflow`] if the sum does not fit in an `i64`.
///
/// [`ErrorKind::Overflow`]: arraykit_foundation::ErrorKind::Overflow
pub fn make_math(addends: &[i64]) -> Result<String> {
    let sum = checked_sum("makeMath", addends)?;
    if addends.is_empty() {
        return Ok("0=0".to_string());
    }
    let terms: Vec<String> = addends.iter().map(i64::to_string).collect();
    Ok(format!("{sum}={}", terms.join("+")))
}

/// Inserts the sum before the first negative right after it, or appends the
/// total, with a checked sum.
///
/// # Errors
///
/// Returns [`ErrorKind::Overflow`] if the inserted sum does not fit in an
/// `i64`.
///
/// [`ErrorKind::Overflow`]: arraykit_foundation::ErrorKind::Overflow
pub fn inject_positive(values: &[i64]) -> Result<Vec<i64>> {
    let mut result = values.to_vec();
    match values.iter().position(|&v| v < 0) {
        Some(at) => result.insert(at + 1, checked_sum("injectPositive", &values[..at])?),
        None => result.push(checked_sum("injectPositive", values)?),
    }
    Ok(result)
}

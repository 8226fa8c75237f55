//! Sequence operations written with iterator adaptors.
//!
//! These are the primary implementations re-exported at the crate root.
//! Arithmetic wraps on `i64` overflow and unparsable numbers become 0; see
//! [`crate::strict`] for variants that report both.

use arraykit_foundation::parse_int;
use tracing::trace;

use crate::config::Rules;

/// Parses the integer prefix of `entry`, normalizing failures to 0.
pub(crate) fn parse_or_zero(entry: &str) -> i64 {
    parse_int(entry).unwrap_or_else(|| {
        trace!(entry, "unparsable entry normalized to 0");
        0
    })
}

pub(crate) fn wrapping_sum(values: &[i64]) -> i64 {
    values.iter().fold(0, |acc, &n| acc.wrapping_add(n))
}

/// Returns the first and last number.
///
/// An empty input gives an empty output and a single number is repeated.
#[must_use]
pub fn book_end_list(numbers: &[i64]) -> Vec<i64> {
    match (numbers.first(), numbers.last()) {
        (Some(&first), Some(&last)) => vec![first, last],
        _ => Vec::new(),
    }
}

/// Multiplies every number by 3.
#[must_use]
pub fn triple_numbers(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().map(|n| n.wrapping_mul(3)).collect()
}

/// Parses every entry as an integer, with 0 for anything unparsable.
#[must_use]
pub fn strings_to_integers<S: AsRef<str>>(numbers: &[S]) -> Vec<i64> {
    numbers.iter().map(|s| parse_or_zero(s.as_ref())).collect()
}

/// Parses dollar amounts such as `"$5"`, with 0 for anything unparsable.
#[must_use]
pub fn remove_dollars<S: AsRef<str>>(amounts: &[S]) -> Vec<i64> {
    Rules::standard().remove_currency(amounts)
}

/// Drops questions and uppercases exclamations.
#[must_use]
pub fn shout_if_exclaiming<S: AsRef<str>>(messages: &[S]) -> Vec<String> {
    Rules::standard().shout_if_exclaiming(messages)
}

/// Counts the words shorter than four characters.
#[must_use]
pub fn count_short_words<S: AsRef<str>>(words: &[S]) -> usize {
    Rules::standard().count_short_words(words)
}

/// Returns true if every color is `red`, `blue` or `green`.
#[must_use]
pub fn all_rgb<S: AsRef<str>>(colors: &[S]) -> bool {
    Rules::standard().all_in_palette(colors)
}

/// Renders the addends as an equation, e.g. `[1, 2, 3]` becomes `"6=1+2+3"`.
///
/// An empty input renders as `"0=0"`.
#[must_use]
pub fn make_math(addends: &[i64]) -> String {
    if addends.is_empty() {
        return "0=0".to_string();
    }
    let terms: Vec<String> = addends.iter().map(i64::to_string).collect();
    format!("{}={}", wrapping_sum(addends), terms.join("+"))
}

/// Inserts the sum of the numbers before the first negative right after it.
///
/// Without a negative number the total is appended instead. Only the first
/// negative triggers an insertion.
#[must_use]
pub fn inject_positive(values: &[i64]) -> Vec<i64> {
    let mut result = values.to_vec();
    match values.iter().position(|&v| v < 0) {
        Some(at) => result.insert(at + 1, wrapping_sum(&values[..at])),
        None => result.push(wrapping_sum(values)),
    }
    result
}

impl Rules {
    /// Strips one leading currency symbol from each amount and parses it.
    #[must_use]
    pub fn remove_currency<S: AsRef<str>>(&self, amounts: &[S]) -> Vec<i64> {
        amounts
            .iter()
            .map(|a| parse_or_zero(self.strip_currency(a.as_ref())))
            .collect()
    }

    /// Drops messages with the question mark and uppercases those with the
    /// exclamation mark.
    #[must_use]
    pub fn shout_if_exclaiming<S: AsRef<str>>(&self, messages: &[S]) -> Vec<String> {
        messages
            .iter()
            .map(AsRef::as_ref)
            .filter(|m| !m.contains(self.question_mark))
            .map(|m| {
                if m.contains(self.exclamation_mark) {
                    m.to_uppercase()
                } else {
                    m.to_string()
                }
            })
            .collect()
    }

    /// Counts the words shorter than the short-word limit.
    #[must_use]
    pub fn count_short_words<S: AsRef<str>>(&self, words: &[S]) -> usize {
        words.iter().filter(|w| self.is_short(w.as_ref())).count()
    }

    /// Returns true if every color is in the palette.
    #[must_use]
    pub fn all_in_palette<S: AsRef<str>>(&self, colors: &[S]) -> bool {
        colors.iter().all(|c| self.in_palette(c.as_ref()))
    }
}

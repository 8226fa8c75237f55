//! Sequence operations written as explicit loops.
//!
//! Each function returns exactly what its counterpart in
//! [`crate::functional`] returns, for every input.

use arraykit_foundation::parse_int;
use tracing::trace;

use crate::config::Rules;

/// Returns the first and last number.
#[must_use]
pub fn book_end_list(numbers: &[i64]) -> Vec<i64> {
    let mut book_end = Vec::with_capacity(2);
    if numbers.is_empty() {
        return book_end;
    }
    book_end.push(numbers[0]);
    book_end.push(numbers[numbers.len() - 1]);
    book_end
}

/// Multiplies every number by 3.
#[must_use]
pub fn triple_numbers(numbers: &[i64]) -> Vec<i64> {
    let mut triples = Vec::with_capacity(numbers.len());
    for &n in numbers {
        triples.push(n.wrapping_mul(3));
    }
    triples
}

/// Parses every entry as an integer, with 0 for anything unparsable.
#[must_use]
pub fn strings_to_integers<S: AsRef<str>>(numbers: &[S]) -> Vec<i64> {
    let mut ints = Vec::with_capacity(numbers.len());
    for entry in numbers {
        let entry = entry.as_ref();
        if let Some(n) = parse_int(entry) {
            ints.push(n);
        } else {
            trace!(entry, "unparsable entry normalized to 0");
            ints.push(0);
        }
    }
    ints
}

/// Parses dollar amounts such as `"$5"`, with 0 for anything unparsable.
#[must_use]
pub fn remove_dollars<S: AsRef<str>>(amounts: &[S]) -> Vec<i64> {
    let rules = Rules::standard();
    let mut stripped = Vec::with_capacity(amounts.len());
    for amount in amounts {
        stripped.push(rules.strip_currency(amount.as_ref()));
    }
    strings_to_integers(&stripped)
}

/// Drops questions and uppercases exclamations.
#[must_use]
pub fn shout_if_exclaiming<S: AsRef<str>>(messages: &[S]) -> Vec<String> {
    let rules = Rules::standard();
    let mut shouted = Vec::new();
    for message in messages {
        let message = message.as_ref();
        if message.contains(rules.question_mark) {
            continue;
        }
        if message.contains(rules.exclamation_mark) {
            shouted.push(message.to_uppercase());
        } else {
            shouted.push(message.to_string());
        }
    }
    shouted
}

/// Counts the words shorter than four characters.
#[must_use]
pub fn count_short_words<S: AsRef<str>>(words: &[S]) -> usize {
    let rules = Rules::standard();
    let mut count = 0;
    for word in words {
        if rules.is_short(word.as_ref()) {
            count += 1;
        }
    }
    count
}

/// Returns true if every color is `red`, `blue` or `green`.
#[must_use]
pub fn all_rgb<S: AsRef<str>>(colors: &[S]) -> bool {
    let rules = Rules::standard();
    for color in colors {
        if !rules.in_palette(color.as_ref()) {
            return false;
        }
    }
    true
}

/// Renders the addends as an equation, e.g. `[1, 2, 3]` becomes `"6=1+2+3"`.
#[must_use]
pub fn make_math(addends: &[i64]) -> String {
    if addends.is_empty() {
        return "0=0".to_string();
    }
    let mut sum: i64 = 0;
    let mut terms = String::new();
    for (i, n) in addends.iter().enumerate() {
        if i > 0 {
            terms.push('+');
        }
        terms.push_str(&n.to_string());
        sum = sum.wrapping_add(*n);
    }
    format!("{sum}={terms}")
}

/// Inserts the sum of the numbers before the first negative right after it,
/// or appends the total when there is no negative.
#[must_use]
pub fn inject_positive(values: &[i64]) -> Vec<i64> {
    let mut result = Vec::with_capacity(values.len() + 1);
    let mut running: i64 = 0;
    let mut injected = false;
    for &value in values {
        result.push(value);
        if injected {
            continue;
        }
        if value < 0 {
            result.push(running);
            injected = true;
        } else {
            running = running.wrapping_add(value);
        }
    }
    if !injected {
        result.push(running);
    }
    result
}

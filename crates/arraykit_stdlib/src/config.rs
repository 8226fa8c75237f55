//! Configurable constants for the string operations.

use std::sync::LazyLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static STANDARD: LazyLock<Rules> = LazyLock::new(Rules::default);

/// Constants used by the string operations.
///
/// The free functions in this crate use [`Rules::standard`]. Build a custom
/// value with the `with_*` methods to change a marker, the palette or the
/// short-word limit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Rules {
    /// Words with fewer characters than this are short.
    pub short_word_limit: usize,

    /// Accepted color names, compared exactly.
    pub palette: Vec<String>,

    /// Symbol stripped from the start of currency amounts.
    pub currency_symbol: char,

    /// Messages containing this character are dropped.
    pub question_mark: char,

    /// Messages containing this character are uppercased.
    pub exclamation_mark: char,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            short_word_limit: 4,
            palette: vec!["red".to_string(), "blue".to_string(), "green".to_string()],
            currency_symbol: '$',
            question_mark: '?',
            exclamation_mark: '!',
        }
    }
}

impl Rules {
    /// Returns the shared default rules.
    #[must_use]
    pub fn standard() -> &'static Rules {
        &STANDARD
    }

    /// Builder method to set the short-word limit.
    #[must_use]
    pub fn with_short_word_limit(mut self, limit: usize) -> Self {
        self.short_word_limit = limit;
        self
    }

    /// Builder method to replace the palette.
    #[must_use]
    pub fn with_palette<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to set the currency symbol.
    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: char) -> Self {
        self.currency_symbol = symbol;
        self
    }

    /// Builder method to set the question marker.
    #[must_use]
    pub fn with_question_mark(mut self, mark: char) -> Self {
        self.question_mark = mark;
        self
    }

    /// Builder method to set the exclamation marker.
    #[must_use]
    pub fn with_exclamation_mark(mut self, mark: char) -> Self {
        self.exclamation_mark = mark;
        self
    }

    /// Removes one leading currency symbol, if present.
    pub(crate) fn strip_currency<'a>(&self, amount: &'a str) -> &'a str {
        amount.strip_prefix(self.currency_symbol).unwrap_or(amount)
    }

    pub(crate) fn is_short(&self, word: &str) -> bool {
        word.chars().count() < self.short_word_limit
    }

    pub(crate) fn in_palette(&self, color: &str) -> bool {
        self.palette.iter().any(|c| c == color)
    }
}

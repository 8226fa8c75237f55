//! Sequence operations for arraykit.
//!
//! This crate provides the operations in several flavours:
//! - [`functional`] - Iterator-based implementations (re-exported at the root)
//! - [`imperative`] - Loop-based implementations with identical results
//! - [`strict`] - Variants that report unparsable input and overflow
//! - [`native`] - By-name dispatch over dynamic values
//! - [`Rules`] - The configurable constants of the string operations

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod functional;
pub mod imperative;
pub mod native;
pub mod strict;

pub use config::Rules;
pub use functional::{
    all_rgb, book_end_list, count_short_words, inject_positive, make_math, remove_dollars,
    shout_if_exclaiming, strings_to_integers, triple_numbers,
};
pub use native::NativeFn;

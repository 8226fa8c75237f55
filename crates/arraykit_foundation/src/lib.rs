//! Core values, types, errors and integer parsing for arraykit.
//!
//! This crate provides:
//! - [`Value`] - Dynamic values for by-name operation calls
//! - [`Type`] - Type descriptors for runtime argument checking
//! - [`Error`] - Rich error types with context
//! - [`parse_int`] / [`parse_int_strict`] - Lenient and strict integer parsing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod parse;
pub mod types;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use parse::{parse_int, parse_int_strict};
pub use types::Type;
pub use value::Value;

//! arraykit - Small pure sequence transformations
//!
//! This crate re-exports all layers of arraykit for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: arraykit_stdlib      — Operations (functional, imperative, strict, by name)
//! Layer 0: arraykit_foundation  — Core types (Value, Type, Error, integer parsing)
//! ```
//!
//! # Example
//!
//! ```
//! use arraykit::stdlib::{inject_positive, make_math};
//!
//! assert_eq!(make_math(&[1, 2, 3]), "6=1+2+3");
//! assert_eq!(inject_positive(&[1, 9, -5, 7]), vec![1, 9, -5, 10, 7]);
//! ```

pub use arraykit_foundation as foundation;
pub use arraykit_stdlib as stdlib;

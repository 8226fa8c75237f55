//! Integration tests for Layer 1: Stdlib
//!
//! Tests for the operations in every flavour: functional, imperative,
//! strict, rules-configured, and by name.

mod logging;
mod native;
mod strict;

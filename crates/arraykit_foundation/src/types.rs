//! Type descriptors for runtime argument checking.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type descriptor for runtime argument checking.
///
/// Used by the by-name registry to validate dynamic arguments and to
/// describe mismatches in errors.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// String type.
    String,
    /// Homogeneous vector type.
    Vec(Box<Type>),
    /// Any type (accepts any value).
    Any,
}

impl Type {
    /// Creates a vector type with the given element type.
    #[must_use]
    pub fn vec(element: Type) -> Self {
        Self::Vec(Box::new(element))
    }

    /// Returns true if this type is `Any`.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Checks if a value type is accepted by this type.
    ///
    /// - `Any` accepts all types
    /// - Primitive types must match exactly
    /// - Vector types check element types recursively; a `vec<any>` actual
    ///   type (an empty or mixed vector) is accepted by every vector type
    #[must_use]
    pub fn accepts(&self, value_type: &Type) -> bool {
        match (self, value_type) {
            (Self::Any, _)
            | (Self::Bool, Self::Bool)
            | (Self::Int, Self::Int)
            | (Self::String, Self::String) => true,
            (Self::Vec(expected), Self::Vec(actual)) => {
                actual.is_any() || expected.accepts(actual)
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::String => write!(f, "string"),
            Self::Vec(t) => write!(f, "vec<{t:?}>"),
            Self::Any => write!(f, "any"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

//! Error types for arraykit.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::Type;

/// Result type for fallible arraykit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for fallible arraykit operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch { expected, actual })
    }

    /// Creates an unknown operation error.
    #[must_use]
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownOperation(name.into()))
    }

    /// Creates an invalid integer error for the given input text.
    #[must_use]
    pub fn invalid_integer(input: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInteger {
            input: input.into(),
        })
    }

    /// Creates an arithmetic overflow error.
    #[must_use]
    pub fn overflow(operation: &'static str) -> Self {
        Self::new(ErrorKind::Overflow { operation })
    }

    /// Returns the entry index recorded in the context, if any.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.context.as_ref().and_then(|ctx| ctx.index)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A value had the wrong runtime type.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected type.
        expected: Type,
        /// The actual type encountered.
        actual: Type,
    },

    /// Wrong number of arguments to an operation.
    #[error("arity mismatch: expected {expected}, got {actual}")]
    ArityMismatch {
        /// Number of arguments the operation takes.
        expected: usize,
        /// Actual number of arguments.
        actual: usize,
    },

    /// No operation is registered under this name.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// Text that is not a complete integer literal.
    #[error("invalid integer: {input:?}")]
    InvalidInteger {
        /// The offending text.
        input: String,
    },

    /// Integer arithmetic left the `i64` range.
    #[error("integer overflow in {operation}")]
    Overflow {
        /// The operation whose arithmetic overflowed.
        operation: &'static str,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the operation that failed.
    pub operation: Option<String>,
    /// Index of the offending entry in the input sequence.
    pub index: Option<usize>,
    /// Stack of calls leading to the failure, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Sets the entry index.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "in {operation}")?;
            if let Some(index) = self.index {
                write!(f, " at entry {index}")?;
            }
        } else if let Some(index) = self.index {
            write!(f, "at entry {index}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}

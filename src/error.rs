//! Error types for csgraph

use crate::dtype::IndexDType;
use thiserror::Error;

/// Result type alias using csgraph's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in csgraph operations
///
/// The core algorithms are total over well-formed input; these errors are
/// raised by the validation and client layers before any algorithm runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Compressed adjacency arrays violate the CSR/CSC invariants
    #[error("Invalid sparse format: {reason}")]
    InvalidFormat {
        /// Which invariant was violated
        reason: String,
    },

    /// Operation requires a square pattern
    #[error("Operation '{op}' requires a square matrix, got shape {shape:?}")]
    NotSquare {
        /// The operation name
        op: &'static str,
        /// Actual shape [rows, cols]
        shape: [usize; 2],
    },

    /// Shape mismatch between an argument and the pattern it applies to
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// A complete matching was required but some columns stayed unmatched
    #[error("Possibly singular input matrix: {unmatched} column(s) could not be matched")]
    StructurallySingular {
        /// Number of unmatched columns
        unmatched: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// A size or index does not fit the selected index type
    #[error("Value {value} does not fit index type {dtype}")]
    IndexOverflow {
        /// The value that overflowed
        value: usize,
        /// Target index type
        dtype: IndexDType,
    },
}

impl Error {
    /// Create an invalid format error
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            reason: reason.into(),
        }
    }

    /// Create a not-square error
    pub fn not_square(op: &'static str, shape: [usize; 2]) -> Self {
        Self::NotSquare { op, shape }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }
}

//! Index type system for compressed sparse structures
//!
//! Pointer and index arrays are stored as signed integers so that `-1` can
//! serve as the "unmatched" sentinel in matching output. Two widths are
//! supported, selected at compile time through the [`SparseIndex`] trait.

mod index;

pub use index::SparseIndex;

use std::fmt;

/// Runtime tag for the index width of a sparse structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexDType {
    /// 32-bit signed indices
    I32,
    /// 64-bit signed indices
    I64,
}

impl IndexDType {
    /// Size of one index in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            IndexDType::I32 => 4,
            IndexDType::I64 => 8,
        }
    }

    /// Largest node count representable with this index type
    #[inline]
    pub const fn max_index(self) -> usize {
        match self {
            IndexDType::I32 => i32::MAX as usize,
            IndexDType::I64 => i64::MAX as usize,
        }
    }

    /// Short name of the type
    pub const fn short_name(self) -> &'static str {
        match self {
            IndexDType::I32 => "i32",
            IndexDType::I64 => "i64",
        }
    }
}

impl fmt::Display for IndexDType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

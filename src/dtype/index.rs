//! Index trait for mapping Rust integer types to IndexDType

use super::IndexDType;
use crate::error::{Error, Result};
use num_traits::{NumCast, PrimInt, Signed};
use std::fmt::{Debug, Display};

/// Trait for integer types usable as sparse pointer/index arrays
///
/// This trait connects Rust's integer types to the algorithms, so the same
/// generic code is monomorphized for `i32` and `i64` with no runtime dispatch.
///
/// # Bounds
/// - `PrimInt + Signed` - Integer arithmetic and comparison (num-traits); signed
///   because `-1` marks unmatched vertices
/// - `Send + Sync + 'static` - Patterns can cross threads in batch operations
pub trait SparseIndex:
    PrimInt + Signed + Send + Sync + Debug + Display + Default + 'static
{
    /// The corresponding IndexDType for this Rust type
    const DTYPE: IndexDType;

    /// Sentinel for "no vertex" (`-1`)
    const NIL: Self;

    /// Convert to a `usize` array offset.
    ///
    /// The value must be non-negative; this is a plain cast in the hot loops.
    fn index(self) -> usize;

    /// Convert from a `usize` known to fit this type.
    fn from_index(i: usize) -> Self;

    /// Returns true if this is the `-1` sentinel
    #[inline]
    fn is_nil(self) -> bool {
        self == Self::NIL
    }

    /// Checked conversion from `usize`
    fn try_from_index(i: usize) -> Result<Self> {
        <Self as NumCast>::from(i).ok_or(Error::IndexOverflow {
            value: i,
            dtype: Self::DTYPE,
        })
    }
}

macro_rules! impl_sparse_index {
    ($t:ty, $dtype:expr) => {
        impl SparseIndex for $t {
            const DTYPE: IndexDType = $dtype;
            const NIL: Self = -1;

            #[inline]
            fn index(self) -> usize {
                self as usize
            }

            #[inline]
            fn from_index(i: usize) -> Self {
                i as $t
            }
        }
    };
}

impl_sparse_index!(i32, IndexDType::I32);
impl_sparse_index!(i64, IndexDType::I64);

//! Traits for sparse matrix ordering algorithms.

use crate::dtype::SparseIndex;
use crate::error::Result;
use crate::sparse::SparsityPattern;

use super::super::types::RcmOptions;

/// Trait for bandwidth-reducing ordering algorithms.
///
/// The permutation is applied symmetrically: `P·A·Pᵀ` where row and column
/// `k` of the result are row and column `perm[k]` of `A`.
pub trait SparseOrdering {
    /// Compute the Reverse Cuthill-McKee permutation of a square pattern.
    ///
    /// Unless `options.symmetric_mode` is set, the pattern is symmetrized
    /// (`A + Aᵀ`) first. CSR and CSC input are both accepted as is.
    ///
    /// # Returns
    ///
    /// Permutation vector `perm` where `perm[k]` is the original index that
    /// should be placed in position `k` of the permuted matrix.
    ///
    /// # Errors
    ///
    /// - [`Error::NotSquare`](crate::error::Error::NotSquare) for a
    ///   rectangular pattern
    fn reverse_cuthill_mckee<I: SparseIndex>(
        &self,
        pattern: &SparsityPattern<I>,
        options: &RcmOptions,
    ) -> Result<Vec<I>>;

    /// Bandwidth of a square pattern under an optional ordering.
    ///
    /// # Errors
    ///
    /// - [`Error::NotSquare`](crate::error::Error::NotSquare) for a
    ///   rectangular pattern
    /// - [`Error::ShapeMismatch`](crate::error::Error::ShapeMismatch) or
    ///   [`Error::InvalidArgument`](crate::error::Error::InvalidArgument) if
    ///   `order` is not a permutation of the nodes
    fn bandwidth<I: SparseIndex>(
        &self,
        pattern: &SparsityPattern<I>,
        order: Option<&[I]>,
    ) -> Result<usize>;
}

//! Traits for bipartite matching algorithms.

use crate::dtype::SparseIndex;
use crate::error::Result;
use crate::sparse::SparsityPattern;

use super::super::types::MatchingOptions;

/// Trait for bipartite matching algorithms on sparse patterns.
///
/// These algorithms find maximum matchings in the bipartite graph formed by
/// the row-column structure of a sparse matrix. A matching pairs rows with
/// columns such that each row and column appears in at most one pair.
pub trait BipartiteMatching {
    /// Compute a maximum matching of the pattern.
    ///
    /// With [`PermType::Row`](crate::algorithm::PermType::Row) the result
    /// has one entry per column: the row matched to it. With
    /// [`PermType::Column`](crate::algorithm::PermType::Column) it has one
    /// entry per row: the column matched to it. Unmatched entries are `-1`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotSquare`](crate::error::Error::NotSquare) for a
    ///   rectangular pattern with the alternating-BFS algorithm
    fn maximum_bipartite_matching<I: SparseIndex>(
        &self,
        pattern: &SparsityPattern<I>,
        options: &MatchingOptions,
    ) -> Result<Vec<I>>;

    /// Compute a row permutation that places a nonzero on every diagonal entry.
    ///
    /// `perm[j]` is the row that moves to position `j`, so row-permuting the
    /// pattern by `perm` gives a zero-free diagonal.
    ///
    /// # Errors
    ///
    /// - [`Error::NotSquare`](crate::error::Error::NotSquare) for a
    ///   rectangular pattern
    /// - [`Error::StructurallySingular`](crate::error::Error::StructurallySingular)
    ///   if some column cannot be matched
    fn maximum_transversal<I: SparseIndex>(&self, pattern: &SparsityPattern<I>)
    -> Result<Vec<I>>;

    /// Compute the structural rank of a pattern of any shape.
    ///
    /// The structural rank is the maximum number of nonzeros that can be placed
    /// on the diagonal by row and column permutations. It equals the size of
    /// the maximum matching.
    ///
    /// # Returns
    ///
    /// The structural rank (0 to min(n_rows, n_cols)).
    fn structural_rank<I: SparseIndex>(&self, pattern: &SparsityPattern<I>) -> Result<usize>;
}

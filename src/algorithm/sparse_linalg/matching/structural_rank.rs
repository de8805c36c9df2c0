//! Structural rank from a maximum matching.

use crate::dtype::SparseIndex;

use super::alternating_bfs::{alternating_bfs_matching, maximum_bipartite_matching};

/// Structural rank of a square pattern.
///
/// Runs the alternating-BFS matcher and counts the matched columns. The
/// structural rank is an upper bound on the numerical rank.
pub fn structural_rank<I: SparseIndex>(indices: &[I], ptrs: &[I], n: usize) -> usize {
    maximum_bipartite_matching(indices, ptrs, n)
        .iter()
        .filter(|m| !m.is_nil())
        .count()
}

/// Structural rank of an `n_rows x n_cols` pattern stored by column.
///
/// Any shape is accepted. Searches are rooted at columns, so callers get the
/// cheapest run when `n_cols <= n_rows`.
pub fn structural_rank_rect<I: SparseIndex>(
    n_rows: usize,
    n_cols: usize,
    col_ptrs: &[I],
    row_indices: &[I],
) -> usize {
    alternating_bfs_matching(n_rows, n_cols, col_ptrs, row_indices).matching_size
}

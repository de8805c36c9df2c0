//! Hopcroft-Karp algorithm for maximum bipartite matching.
//!
//! Finds a maximum cardinality matching in a bipartite graph in O(E√V) time.
//! Unlike the alternating-BFS matcher it accepts rectangular patterns, and it
//! serves as an independent check of matching cardinality.
//!
//! # Algorithm Overview
//!
//! The algorithm alternates between two phases:
//!
//! 1. **BFS phase**: Find shortest augmenting paths from all unmatched columns
//!    to unmatched rows, building a level graph.
//!
//! 2. **DFS phase**: Find a maximal set of vertex-disjoint augmenting paths
//!    in the level graph and augment the matching.
//!
//! This is repeated until no augmenting paths exist.
//!
//! # Complexity
//!
//! - Time: O(E√V) where E = nnz, V = n_rows + n_cols
//! - Space: O(V) for level arrays and matching arrays
//!
//! # References
//!
//! Hopcroft, J. E., & Karp, R. M. (1973). "An n^(5/2) algorithm for maximum
//! matchings in bipartite graphs." SIAM Journal on Computing, 2(4), 225-231.

use std::collections::VecDeque;

use crate::dtype::SparseIndex;
use crate::error::{Error, Result};

use super::result::MatchingResult;

/// Infinite distance in the level graph.
const INF: usize = usize::MAX;

/// Read-only view of the bipartite graph plus the level array.
struct LevelGraph<'a, I: SparseIndex> {
    n_cols: usize,
    col_ptrs: &'a [I],
    row_indices: &'a [I],
    /// dist[j] for column j; dist[n_cols] is the distance of "free row"
    dist: Vec<usize>,
}

/// Compute maximum bipartite matching using Hopcroft-Karp algorithm.
///
/// The bipartite graph has columns on one side (U) and rows on the other (V).
/// An edge exists between column j and row i if the matrix has a nonzero at (i, j).
///
/// # Arguments
///
/// * `n_rows` - Number of rows (|V|)
/// * `n_cols` - Number of columns (|U|)
/// * `col_ptrs` - CSC column pointers (length n_cols + 1)
/// * `row_indices` - CSC row indices (edges from columns to rows)
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `col_ptrs` has the wrong length or
/// `row_indices` is shorter than the stored entry count, and
/// [`Error::InvalidFormat`] if a row index is out of range.
pub fn hopcroft_karp<I: SparseIndex>(
    n_rows: usize,
    n_cols: usize,
    col_ptrs: &[I],
    row_indices: &[I],
) -> Result<MatchingResult<I>> {
    if col_ptrs.len() != n_cols + 1 {
        return Err(Error::InvalidArgument {
            arg: "col_ptrs",
            reason: format!(
                "length {} does not match n_cols + 1 = {}",
                col_ptrs.len(),
                n_cols + 1
            ),
        });
    }

    let nnz = col_ptrs[n_cols].index();
    if row_indices.len() < nnz {
        return Err(Error::InvalidArgument {
            arg: "row_indices",
            reason: format!("length {} is less than nnz = {}", row_indices.len(), nnz),
        });
    }
    if let Some(&bad) = row_indices[..nnz]
        .iter()
        .find(|&&i| i < I::zero() || i.index() >= n_rows)
    {
        return Err(Error::invalid_format(format!(
            "row index {} out of range for {} rows",
            bad, n_rows
        )));
    }

    if n_rows == 0 || n_cols == 0 {
        return Ok(MatchingResult::unmatched(n_rows, n_cols));
    }

    let mut matching = MatchingResult::unmatched(n_rows, n_cols);
    let mut graph = LevelGraph {
        n_cols,
        col_ptrs,
        row_indices,
        dist: vec![0; n_cols + 1],
    };

    while graph.bfs(&matching) {
        for j in 0..n_cols {
            if matching.col_to_row[j].is_nil() && graph.dfs(j, &mut matching) {
                matching.matching_size += 1;
            }
        }
    }

    Ok(matching)
}

impl<I: SparseIndex> LevelGraph<'_, I> {
    /// Distance slot of the column matched to a row (free rows map to n_cols)
    #[inline]
    fn slot(&self, matched_col: I) -> usize {
        if matched_col.is_nil() {
            self.n_cols
        } else {
            matched_col.index()
        }
    }

    /// BFS phase: Build level graph from unmatched columns.
    ///
    /// Returns true if at least one augmenting path exists.
    fn bfs(&mut self, matching: &MatchingResult<I>) -> bool {
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(self.n_cols);

        for j in 0..self.n_cols {
            if matching.col_to_row[j].is_nil() {
                self.dist[j] = 0;
                queue.push_back(j);
            } else {
                self.dist[j] = INF;
            }
        }
        self.dist[self.n_cols] = INF;

        while let Some(j) = queue.pop_front() {
            if self.dist[j] >= self.dist[self.n_cols] {
                continue;
            }
            for idx in self.col_ptrs[j].index()..self.col_ptrs[j + 1].index() {
                let i = self.row_indices[idx].index();
                let matched_col = matching.row_to_col[i];
                let slot = self.slot(matched_col);

                if self.dist[slot] == INF {
                    self.dist[slot] = self.dist[j] + 1;
                    if !matched_col.is_nil() {
                        queue.push_back(slot);
                    }
                }
            }
        }

        self.dist[self.n_cols] != INF
    }

    /// DFS phase: Find augmenting path from column j in the level graph.
    ///
    /// Returns true if an augmenting path was found and the matching was augmented.
    fn dfs(&mut self, j: usize, matching: &mut MatchingResult<I>) -> bool {
        let (start, end) = (self.col_ptrs[j].index(), self.col_ptrs[j + 1].index());

        for idx in start..end {
            let i = self.row_indices[idx].index();
            let matched_col = matching.row_to_col[i];
            let slot = self.slot(matched_col);

            if self.dist[slot] == self.dist[j] + 1
                && (matched_col.is_nil() || self.dfs(slot, matching))
            {
                matching.col_to_row[j] = I::from_index(i);
                matching.row_to_col[i] = I::from_index(j);
                return true;
            }
        }

        // Dead end for this phase
        self.dist[j] = INF;
        false
    }
}

/// Compute maximum transversal (column-to-row matching and its size).
///
/// Convenience wrapper around [`hopcroft_karp`] returning
/// `(col_to_row, row_to_col, structural_rank)`.
pub fn maximum_transversal<I: SparseIndex>(
    n_rows: usize,
    n_cols: usize,
    col_ptrs: &[I],
    row_indices: &[I],
) -> Result<(Vec<I>, Vec<I>, usize)> {
    let result = hopcroft_karp(n_rows, n_cols, col_ptrs, row_indices)?;

    Ok((result.col_to_row, result.row_to_col, result.matching_size))
}

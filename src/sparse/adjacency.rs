//! Borrowed compressed adjacency view
//!
//! This is the input contract shared by every graph algorithm in the crate:
//! an index array, a pointer array and a node count. Node `i` owns the slice
//! `indices[ptrs[i]..ptrs[i + 1]]`. Whether the slices hold column ids (CSR)
//! or row ids (CSC) is up to the caller.

use crate::dtype::SparseIndex;
use crate::error::{Error, Result};

/// Validated, read-only view over compressed adjacency arrays
#[derive(Debug, Clone, Copy)]
pub struct CompressedAdjacency<'a, I: SparseIndex> {
    indices: &'a [I],
    ptrs: &'a [I],
    n_nodes: usize,
    n_targets: usize,
}

impl<'a, I: SparseIndex> CompressedAdjacency<'a, I> {
    /// Create a view over `n_nodes` adjacency slices whose entries lie in
    /// `[0, n_targets)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if any compressed-form invariant is
    /// violated (see [`validate_compressed`]).
    pub fn new(indices: &'a [I], ptrs: &'a [I], n_nodes: usize, n_targets: usize) -> Result<Self> {
        validate_compressed(indices, ptrs, n_nodes, n_targets)?;
        Ok(Self {
            indices,
            ptrs,
            n_nodes,
            n_targets,
        })
    }

    /// Create a view over a square adjacency (graph on `n` nodes).
    pub fn square(indices: &'a [I], ptrs: &'a [I], n: usize) -> Result<Self> {
        Self::new(indices, ptrs, n, n)
    }

    /// Wrap arrays that were already validated by their owner.
    pub(crate) fn from_validated(
        indices: &'a [I],
        ptrs: &'a [I],
        n_nodes: usize,
        n_targets: usize,
    ) -> Self {
        debug_assert!(validate_compressed(indices, ptrs, n_nodes, n_targets).is_ok());
        Self {
            indices,
            ptrs,
            n_nodes,
            n_targets,
        }
    }

    /// Number of nodes that own an adjacency slice
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    /// Exclusive upper bound of the stored indices
    #[inline]
    pub fn n_targets(&self) -> usize {
        self.n_targets
    }

    /// Number of stored entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// The index array
    #[inline]
    pub fn indices(&self) -> &'a [I] {
        self.indices
    }

    /// The pointer array
    #[inline]
    pub fn ptrs(&self) -> &'a [I] {
        self.ptrs
    }

    /// Neighbors of node `i`
    #[inline]
    pub fn neighbors(&self, i: usize) -> &'a [I] {
        &self.indices[self.ptrs[i].index()..self.ptrs[i + 1].index()]
    }

    /// Number of stored entries of node `i`
    #[inline]
    pub fn len_of(&self, i: usize) -> usize {
        self.ptrs[i + 1].index() - self.ptrs[i].index()
    }
}

/// Check the compressed-form invariants of `(indices, ptrs)`.
///
/// - `ptrs.len() == n_nodes + 1`
/// - `ptrs[0] == 0` and `ptrs` is non-decreasing
/// - `ptrs[n_nodes] == indices.len()`
/// - every index lies in `[0, n_targets)`
pub fn validate_compressed<I: SparseIndex>(
    indices: &[I],
    ptrs: &[I],
    n_nodes: usize,
    n_targets: usize,
) -> Result<()> {
    if ptrs.len() != n_nodes + 1 {
        return Err(Error::invalid_format(format!(
            "pointer array has length {} but {} nodes require {}",
            ptrs.len(),
            n_nodes,
            n_nodes + 1
        )));
    }

    if ptrs[0] != I::zero() {
        return Err(Error::invalid_format(format!(
            "pointer array must start at 0, found {}",
            ptrs[0]
        )));
    }

    if let Some(k) = ptrs.windows(2).position(|w| w[1] < w[0]) {
        return Err(Error::invalid_format(format!(
            "pointer array decreases at position {} ({} -> {})",
            k + 1,
            ptrs[k],
            ptrs[k + 1]
        )));
    }

    let end = ptrs[n_nodes].index();
    if end != indices.len() {
        return Err(Error::invalid_format(format!(
            "last pointer is {} but index array has length {}",
            end,
            indices.len()
        )));
    }

    let bound = I::try_from_index(n_targets)?;
    if let Some(k) = indices
        .iter()
        .position(|&v| v < I::zero() || v >= bound)
    {
        return Err(Error::invalid_format(format!(
            "index {} at position {} is outside [0, {})",
            indices[k], k, n_targets
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_adjacency() {
        let ptrs = vec![0i32, 2, 3, 3];
        let indices = vec![1i32, 2, 0];
        let adj = CompressedAdjacency::square(&indices, &ptrs, 3).unwrap();

        assert_eq!(adj.n_nodes(), 3);
        assert_eq!(adj.nnz(), 3);
        assert_eq!(adj.neighbors(0), &[1, 2]);
        assert_eq!(adj.neighbors(2), &[] as &[i32]);
        assert_eq!(adj.len_of(1), 1);
    }

    #[test]
    fn test_empty_graph() {
        let ptrs = vec![0i64];
        let indices: Vec<i64> = vec![];
        assert!(CompressedAdjacency::square(&indices, &ptrs, 0).is_ok());
    }

    #[test]
    fn test_wrong_pointer_length() {
        let ptrs = vec![0i32, 1];
        let indices = vec![0i32];
        let err = validate_compressed(&indices, &ptrs, 2, 2).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { .. }));
    }

    #[test]
    fn test_nonzero_first_pointer() {
        let ptrs = vec![1i32, 1];
        let indices = vec![0i32];
        assert!(validate_compressed(&indices, &ptrs, 1, 1).is_err());
    }

    #[test]
    fn test_decreasing_pointers() {
        let ptrs = vec![0i32, 2, 1, 3];
        let indices = vec![0i32, 1, 2];
        let err = validate_compressed(&indices, &ptrs, 3, 3).unwrap_err();
        assert_eq!(
            err,
            Error::invalid_format("pointer array decreases at position 2 (2 -> 1)")
        );
    }

    #[test]
    fn test_last_pointer_mismatch() {
        let ptrs = vec![0i32, 1, 2];
        let indices = vec![0i32, 1, 1];
        assert!(validate_compressed(&indices, &ptrs, 2, 2).is_err());
    }

    #[test]
    fn test_index_out_of_range() {
        let ptrs = vec![0i32, 1, 2];
        let indices = vec![0i32, 2];
        assert!(validate_compressed(&indices, &ptrs, 2, 2).is_err());

        let negative = vec![0i32, -1];
        assert!(validate_compressed(&negative, &ptrs, 2, 2).is_err());

        // Rectangular: 2 columns over 3 rows
        assert!(validate_compressed(&indices, &ptrs, 2, 3).is_ok());
    }
}

//! Bandwidth of a sparsity pattern under a node ordering.

use crate::dtype::SparseIndex;

/// Compute the bandwidth of a square pattern under an ordering.
///
/// The bandwidth is the largest `|pos(i) - pos(j)|` over all stored entries
/// `(i, j)`, where `pos` maps a node to its position in `order`. With
/// `order = None` the identity ordering is used.
///
/// # Arguments
///
/// * `indices` - Adjacency indices (length nnz)
/// * `ptrs` - Adjacency pointers (length n + 1)
/// * `n` - Number of nodes
/// * `order` - Optional permutation; `order[k]` is the node placed at
///   position `k`. Must be a permutation of `0..n`.
pub fn bandwidth<I: SparseIndex>(indices: &[I], ptrs: &[I], n: usize, order: Option<&[I]>) -> usize {
    let position: Vec<usize> = match order {
        Some(order) => {
            let mut position = vec![0usize; n];
            for (k, &node) in order.iter().enumerate() {
                position[node.index()] = k;
            }
            position
        }
        None => (0..n).collect(),
    };

    let mut width = 0usize;
    for i in 0..n {
        let pi = position[i];
        for &j in &indices[ptrs[i].index()..ptrs[i + 1].index()] {
            width = width.max(pi.abs_diff(position[j.index()]));
        }
    }
    width
}

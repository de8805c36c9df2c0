//! Node degrees of a compressed adjacency.

use crate::dtype::SparseIndex;

/// Compute the degree of every node.
///
/// The degree of node `i` is the length of its adjacency slice, plus one if
/// the slice contains `i` itself. A diagonal entry therefore counts twice,
/// as it would in the symmetric graph `A + Aᵀ`. Duplicate diagonal entries
/// add the extra one only once.
///
/// # Arguments
///
/// * `indices` - Adjacency indices (length nnz)
/// * `ptrs` - Adjacency pointers (length n + 1)
/// * `n` - Number of nodes
pub fn degree_array<I: SparseIndex>(indices: &[I], ptrs: &[I], n: usize) -> Vec<I> {
    let mut degree = Vec::with_capacity(n);

    for i in 0..n {
        let start = ptrs[i].index();
        let end = ptrs[i + 1].index();
        let node = I::from_index(i);

        let mut d = end - start;
        if indices[start..end].contains(&node) {
            d += 1;
        }
        degree.push(I::from_index(d));
    }

    degree
}

//! Reverse Cuthill-McKee ordering.
//!
//! Computes a symmetric permutation that tends to cluster the nonzeros of a
//! sparse matrix around the diagonal (small bandwidth). RCM is a heuristic;
//! it does not search for the minimum bandwidth.
//!
//! # Algorithm Overview
//!
//! 1. Compute node degrees (diagonal entries count twice).
//! 2. Rank nodes by ascending degree, stable on node id.
//! 3. For each unplaced node in rank order, run a breadth-first search from
//!    it. Children discovered from one parent are appended in adjacency order
//!    and then insertion-sorted by ascending degree (stable).
//! 4. Reverse the resulting Cuthill-McKee order.
//!
//! Each connected component yields one BFS tree, so disconnected graphs and
//! isolated nodes are handled without special cases.
//!
//! # Complexity
//!
//! - Time: O(nnz + n log n) plus the insertion sorts, which are quadratic only
//!   in the number of children of a single node
//! - Space: O(n)
//!
//! # References
//!
//! Cuthill, E., & McKee, J. (1969). "Reducing the bandwidth of sparse
//! symmetric matrices." Proceedings of the 24th ACM National Conference.
//!
//! George, A., & Liu, J. W. H. (1981). "Computer Solution of Large Sparse
//! Positive Definite Systems." Prentice-Hall.

use crate::dtype::SparseIndex;

use super::degree::degree_array;

/// Compute the Reverse Cuthill-McKee permutation of a graph.
///
/// The adjacency should be symmetric; callers with a directed pattern
/// symmetrize it first (`A + Aᵀ`).
///
/// # Arguments
///
/// * `indices` - Adjacency indices (length nnz)
/// * `ptrs` - Adjacency pointers (length n + 1)
/// * `n` - Number of nodes
///
/// # Returns
///
/// Permutation `perm` where `perm[k]` is the original node placed at
/// position `k`. Every node appears exactly once.
pub fn reverse_cuthill_mckee_order<I: SparseIndex>(indices: &[I], ptrs: &[I], n: usize) -> Vec<I> {
    let degree = degree_array(indices, ptrs, n);

    // sort_by_key is stable: equal degrees keep ascending node id
    let mut ranked: Vec<usize> = (0..n).collect();
    ranked.sort_by_key(|&i| degree[i]);

    let mut placed = vec![false; n];
    let mut order: Vec<usize> = Vec::with_capacity(n);

    for &seed in &ranked {
        if order.len() == n {
            break;
        }
        if placed[seed] {
            continue;
        }

        placed[seed] = true;
        order.push(seed);

        // order[level_start..level_end] is the current BFS level
        let mut level_start = order.len() - 1;
        let mut level_end = order.len();

        while level_start < level_end {
            for pos in level_start..level_end {
                let node = order[pos];
                let first_child = order.len();

                for &j in &indices[ptrs[node].index()..ptrs[node + 1].index()] {
                    let j = j.index();
                    if !placed[j] {
                        placed[j] = true;
                        order.push(j);
                    }
                }

                sort_by_degree(&mut order[first_child..], &degree);
            }

            level_start = level_end;
            level_end = order.len();
        }
    }

    order.iter().rev().map(|&i| I::from_index(i)).collect()
}

/// Stable insertion sort of `nodes` by ascending degree.
fn sort_by_degree<I: SparseIndex>(nodes: &mut [usize], degree: &[I]) {
    for k in 1..nodes.len() {
        let node = nodes[k];
        let d = degree[node];
        let mut pos = k;
        while pos > 0 && d < degree[nodes[pos - 1]] {
            nodes[pos] = nodes[pos - 1];
            pos -= 1;
        }
        nodes[pos] = node;
    }
}

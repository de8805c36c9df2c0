//! Sparse Graph Algorithm Contracts
//!
//! Graph algorithms over the nonzero structure of sparse matrices. Each
//! family defines a trait (implemented by [`CpuClient`](crate::runtime::cpu::CpuClient))
//! and exposes its core functions over raw compressed arrays.
//!
//! # Algorithms
//!
//! - **Reverse Cuthill-McKee**: Bandwidth-reducing symmetric ordering
//! - **Alternating BFS matching**: Maximum bipartite matching (Duff-Kaya-Uçar)
//! - **Hopcroft-Karp**: Maximum bipartite matching for rectangular patterns
//! - **Structural rank**: Size of the maximum matching
//!
//! # Core Functions
//!
//! The core functions take `(indices, ptrs, n)` slices, are generic over the
//! index type, and never fail on well-formed input. Validation belongs to
//! [`crate::sparse`] and the client layer.

pub mod matching;
pub mod ordering;
pub mod types;

pub use types::{MatchingAlgorithm, MatchingOptions, PermType, RcmOptions};

pub use ordering::{SparseOrdering, bandwidth, degree_array, reverse_cuthill_mckee_order};

pub use matching::{
    BipartiteMatching, MatchingResult, alternating_bfs_matching, hopcroft_karp,
    maximum_bipartite_matching, maximum_transversal, structural_rank, structural_rank_rect,
};

//! Bipartite matching algorithms for sparse patterns.
//!
//! Maximum matching algorithms find row/column permutations that maximize
//! nonzeros on the diagonal. They operate on sparsity structure only.
//!
//! # Algorithms
//!
//! - **Alternating BFS** (Duff-Kaya-Uçar): one augmenting search per free
//!   column, generation-stamped visitation, square or rectangular input
//! - **Hopcroft-Karp**: O(E√V) phase-batched maximum cardinality matching
//!
//! # Use Cases
//!
//! - **Maximum transversal**: Find row permutation to maximize diagonal nonzeros
//! - **Structural rank**: Determine if matrix has full structural rank

pub mod alternating_bfs;
pub mod hopcroft_karp;
pub mod result;
pub mod structural_rank;
pub mod traits;

pub use alternating_bfs::{alternating_bfs_matching, maximum_bipartite_matching};
pub use hopcroft_karp::{hopcroft_karp, maximum_transversal};
pub use result::MatchingResult;
pub use structural_rank::{structural_rank, structural_rank_rect};
pub use traits::BipartiteMatching;

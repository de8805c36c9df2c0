//! Sparse matrix ordering algorithms.
//!
//! Symmetric orderings that cluster nonzeros near the diagonal. These are
//! graph algorithms over sparsity structure, not numerical values.
//!
//! # Algorithms
//!
//! - **RCM**: Reverse Cuthill-McKee bandwidth reduction
//!
//! # Usage
//!
//! An ordering is computed once per sparsity pattern and reused. Narrow
//! bandwidth improves cache locality of sparse kernels and limits fill in
//! banded factorizations.

pub mod bandwidth;
pub mod degree;
pub mod rcm;
pub mod traits;

pub use bandwidth::bandwidth;
pub use degree::degree_array;
pub use rcm::reverse_cuthill_mckee_order;
pub use traits::SparseOrdering;

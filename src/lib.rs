//! # csgraph
//!
//! **Graph algorithms over the sparsity structure of sparse matrices.**
//!
//! csgraph works on the nonzero pattern of a matrix, never its values. It
//! provides a bandwidth-reducing ordering and maximum bipartite matching,
//! with the same generic code for 32-bit and 64-bit indices.
//!
//! ## Features
//!
//! - **Reverse Cuthill-McKee**: symmetric permutation that narrows the band
//! - **Maximum bipartite matching**: alternating BFS (Duff-Kaya-Uçar) and
//!   Hopcroft-Karp
//! - **Structural rank**: maximum matching size, any shape
//! - **Patterns**: CSR, CSC and COO structure with validation, conversion,
//!   transpose, symmetrization and permutation
//!
//! ## Quick Start
//!
//! ```
//! use csgraph::prelude::*;
//!
//! // 0 - 2 - 1, stored as a directed pattern
//! let coo = CooPattern::<i32>::from_entries([3, 3], &[(0, 2), (2, 1)])?;
//! let pattern = coo.to_csr();
//!
//! let client = CpuClient::new();
//! let perm = client.reverse_cuthill_mckee(&pattern, &RcmOptions::default())?;
//! assert_eq!(perm.len(), 3);
//!
//! let rank = client.structural_rank(&pattern)?;
//! assert_eq!(rank, 2);
//! # Ok::<(), csgraph::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Parallel batch operations on [`runtime::cpu::CpuClient`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod algorithm;
pub mod dtype;
pub mod error;
pub mod runtime;
pub mod sparse;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::{
        BipartiteMatching, MatchingAlgorithm, MatchingOptions, PermType, RcmOptions,
        SparseOrdering,
    };
    pub use crate::dtype::{IndexDType, SparseIndex};
    pub use crate::error::{Error, Result};
    pub use crate::runtime::cpu::{ClientConfig, CpuClient};
    pub use crate::sparse::{CooPattern, SparseFormat, SparseStorage, SparsityPattern};
}

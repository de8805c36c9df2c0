//! Sparse pattern support for csgraph
//!
//! Graph algorithms only look at the nonzero *structure* of a matrix, so the
//! types here store pointer and index arrays without values.
//!
//! # Sparse Formats
//!
//! - **COO** (Coordinate): (row, col) pairs. Best for construction.
//!
//! - **CSR** (Compressed Sparse Row): row pointers + column indices. Each row's
//!   adjacency is a contiguous slice.
//!
//! - **CSC** (Compressed Sparse Column): column pointers + row indices. Each
//!   column's adjacency is a contiguous slice; this is what the matchers read.
//!
//! # Usage
//!
//! ```
//! use csgraph::sparse::{CooPattern, SparseStorage};
//!
//! let coo = CooPattern::<i32>::from_entries([3, 3], &[(0, 1), (1, 2), (2, 0)])?;
//! let csc = coo.to_csc();
//! assert_eq!(csc.nnz(), 3);
//!
//! // CSC of A reinterpreted as CSR of Aᵀ
//! let t = csc.transpose();
//! assert_eq!(t.ptrs(), csc.ptrs());
//! # Ok::<(), csgraph::error::Error>(())
//! ```

mod adjacency;
mod coo;
mod format;
mod pattern;

pub use adjacency::{CompressedAdjacency, validate_compressed};
pub use coo::CooPattern;
pub use format::{SparseFormat, SparseStorage};
pub use pattern::SparsityPattern;
pub(crate) use pattern::inverse_permutation;

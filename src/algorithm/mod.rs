//! Algorithm contracts and core implementations
//!
//! Every algorithm family is defined as a trait first, then implemented by
//! the runtime client. The core functions underneath operate on borrowed
//! compressed arrays and are usable without a client.

pub mod sparse_linalg;

pub use sparse_linalg::{
    BipartiteMatching, MatchingAlgorithm, MatchingOptions, PermType, RcmOptions, SparseOrdering,
};

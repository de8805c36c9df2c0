//! Option types for the ordering and matching operations.

/// Options for Reverse Cuthill-McKee ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RcmOptions {
    /// Set to true when the pattern is already structurally symmetric.
    ///
    /// When false (default) the pattern is symmetrized (`A + Aᵀ`) before the
    /// search, so directed patterns are handled correctly at the cost of one
    /// extra pass.
    pub symmetric_mode: bool,
}

impl RcmOptions {
    /// Options for a pattern known to be symmetric
    pub fn symmetric() -> Self {
        Self {
            symmetric_mode: true,
        }
    }
}

/// Which side of the matching to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermType {
    /// One entry per column: the row matched to it (default)
    #[default]
    Row,
    /// One entry per row: the column matched to it
    Column,
}

/// Matching algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchingAlgorithm {
    /// Alternating breadth-first search with generation stamps (square only)
    #[default]
    AlternatingBfs,
    /// Hopcroft-Karp phase matching (accepts rectangular patterns)
    HopcroftKarp,
}

/// Options for maximum bipartite matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchingOptions {
    /// Side of the matching to return
    pub perm_type: PermType,
    /// Algorithm used to compute the matching
    pub algorithm: MatchingAlgorithm,
}

impl MatchingOptions {
    /// Set the side of the matching to return
    pub fn with_perm_type(mut self, perm_type: PermType) -> Self {
        self.perm_type = perm_type;
        self
    }

    /// Set the matching algorithm
    pub fn with_algorithm(mut self, algorithm: MatchingAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

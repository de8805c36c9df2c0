//! Runtime backends for graph operations
//!
//! A client validates input, normalizes the pattern orientation, and
//! dispatches to the algorithms in [`crate::algorithm`]. Only a CPU backend
//! exists.

pub mod cpu;

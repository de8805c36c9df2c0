//! CPU runtime implementation
//!
//! [`CpuClient`] implements the ordering and matching traits. Every
//! operation runs synchronously on the calling thread; the batch operations
//! spread independent patterns over the rayon thread pool when the `rayon`
//! feature is enabled.

mod client;
mod matching;
mod ordering;

pub use client::{ClientConfig, CpuClient};

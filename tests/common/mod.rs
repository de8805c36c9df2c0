//! Common test utilities
#![allow(dead_code)]

use csgraph::dtype::SparseIndex;
use csgraph::runtime::cpu::CpuClient;
use csgraph::sparse::{CooPattern, SparsityPattern};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Install a test logger once so `RUST_LOG=debug` shows client diagnostics
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Create a CPU client for testing (logging initialised)
pub fn create_cpu_client() -> CpuClient {
    init_logging();
    CpuClient::new()
}

/// Build a CSR pattern from an adjacency list
pub fn from_adjacency<I: SparseIndex>(adj: &[&[usize]]) -> SparsityPattern<I> {
    let n = adj.len();
    let entries: Vec<(usize, usize)> = adj
        .iter()
        .enumerate()
        .flat_map(|(i, nbrs)| nbrs.iter().map(move |&j| (i, j)))
        .collect();
    CooPattern::from_entries([n, n], &entries)
        .expect("valid adjacency")
        .to_csr()
}

/// Random pattern where each entry is present with probability `density`
pub fn random_pattern<I: SparseIndex>(
    rng: &mut StdRng,
    shape: [usize; 2],
    density: f64,
) -> SparsityPattern<I> {
    let mut entries = Vec::new();
    for i in 0..shape[0] {
        for j in 0..shape[1] {
            if rng.random_bool(density) {
                entries.push((i, j));
            }
        }
    }
    CooPattern::from_entries(shape, &entries)
        .expect("entries in range")
        .to_csc()
}

/// Random symmetric pattern (both (i, j) and (j, i) stored)
pub fn random_symmetric<I: SparseIndex>(rng: &mut StdRng, n: usize, density: f64) -> SparsityPattern<I> {
    let mut entries = Vec::new();
    for i in 0..n {
        for j in i..n {
            if rng.random_bool(density) {
                entries.push((i, j));
                entries.push((j, i));
            }
        }
    }
    CooPattern::from_entries([n, n], &entries)
        .expect("entries in range")
        .to_csr()
}

/// Random permutation of `0..n`
pub fn random_permutation<I: SparseIndex>(rng: &mut StdRng, n: usize) -> Vec<I> {
    let mut perm: Vec<I> = (0..n).map(I::from_index).collect();
    perm.shuffle(rng);
    perm
}

/// Assert that `perm` is a permutation of `0..n`
pub fn assert_permutation<I: SparseIndex>(perm: &[I], n: usize, msg: &str) {
    assert_eq!(perm.len(), n, "{}: length mismatch", msg);
    let mut seen = vec![false; n];
    for &p in perm {
        let p = p.index();
        assert!(p < n, "{}: entry {} out of range", msg, p);
        assert!(!seen[p], "{}: entry {} repeated", msg, p);
        seen[p] = true;
    }
}

/// Convert a pattern to another index type, keeping its orientation
pub fn widen(pattern: &SparsityPattern<i32>) -> SparsityPattern<i64> {
    use csgraph::sparse::{SparseFormat, SparseStorage};

    let ptrs = pattern.ptrs().iter().map(|&p| p as i64).collect();
    let indices = pattern.indices().iter().map(|&i| i as i64).collect();
    match pattern.format() {
        SparseFormat::Csc => SparsityPattern::from_csc(pattern.shape(), ptrs, indices),
        _ => SparsityPattern::from_csr(pattern.shape(), ptrs, indices),
    }
    .expect("same structure")
}

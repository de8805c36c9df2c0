//! CPU implementation of the ordering operations.

use std::borrow::Cow;

use log::{Level, debug, log_enabled};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use super::CpuClient;
use crate::algorithm::sparse_linalg::RcmOptions;
use crate::algorithm::sparse_linalg::ordering::{
    SparseOrdering, bandwidth, reverse_cuthill_mckee_order,
};
use crate::dtype::SparseIndex;
use crate::error::{Error, Result};
use crate::sparse::{SparseStorage, SparsityPattern, inverse_permutation};

impl SparseOrdering for CpuClient {
    fn reverse_cuthill_mckee<I: SparseIndex>(
        &self,
        pattern: &SparsityPattern<I>,
        options: &RcmOptions,
    ) -> Result<Vec<I>> {
        if !pattern.is_square() {
            return Err(Error::not_square("reverse_cuthill_mckee", pattern.shape()));
        }
        let n = pattern.nrows();

        let graph = if options.symmetric_mode {
            Cow::Borrowed(pattern)
        } else {
            Cow::Owned(pattern.symmetrize()?)
        };

        let perm = reverse_cuthill_mckee_order(graph.indices(), graph.ptrs(), n);

        if log_enabled!(Level::Debug) {
            debug!(
                "reverse_cuthill_mckee: n={}, nnz={}, bandwidth {} -> {}",
                n,
                graph.nnz(),
                bandwidth(graph.indices(), graph.ptrs(), n, None),
                bandwidth(graph.indices(), graph.ptrs(), n, Some(perm.as_slice())),
            );
        }

        Ok(perm)
    }

    fn bandwidth<I: SparseIndex>(
        &self,
        pattern: &SparsityPattern<I>,
        order: Option<&[I]>,
    ) -> Result<usize> {
        if !pattern.is_square() {
            return Err(Error::not_square("bandwidth", pattern.shape()));
        }
        let n = pattern.nrows();
        if let Some(order) = order {
            inverse_permutation(order, n, "order")?;
        }
        Ok(bandwidth(pattern.indices(), pattern.ptrs(), n, order))
    }
}

impl CpuClient {
    /// Reverse Cuthill-McKee ordering of many independent patterns.
    ///
    /// With the `rayon` feature the patterns are processed in parallel. The
    /// output always follows input order. The first error aborts the batch.
    pub fn reverse_cuthill_mckee_batch<I: SparseIndex>(
        &self,
        patterns: &[SparsityPattern<I>],
        options: &RcmOptions,
    ) -> Result<Vec<Vec<I>>> {
        #[cfg(feature = "rayon")]
        {
            if patterns.len() > 1 {
                return patterns
                    .par_iter()
                    .with_min_len(self.rayon_min_len())
                    .map(|p| self.reverse_cuthill_mckee(p, options))
                    .collect();
            }
        }

        patterns
            .iter()
            .map(|p| self.reverse_cuthill_mckee(p, options))
            .collect()
    }
}

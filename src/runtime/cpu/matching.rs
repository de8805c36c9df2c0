//! CPU implementation of the matching operations.

use std::borrow::Cow;

use log::debug;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use super::CpuClient;
use crate::algorithm::sparse_linalg::matching::{
    BipartiteMatching, hopcroft_karp, maximum_bipartite_matching, structural_rank,
    structural_rank_rect,
};
use crate::algorithm::sparse_linalg::{MatchingAlgorithm, MatchingOptions, PermType};
use crate::dtype::SparseIndex;
use crate::error::{Error, Result};
use crate::sparse::{SparseFormat, SparseStorage, SparsityPattern};

impl BipartiteMatching for CpuClient {
    fn maximum_bipartite_matching<I: SparseIndex>(
        &self,
        pattern: &SparsityPattern<I>,
        options: &MatchingOptions,
    ) -> Result<Vec<I>> {
        const OP: &str = "maximum_bipartite_matching";

        let matched = match options.algorithm {
            MatchingAlgorithm::AlternatingBfs => {
                if !pattern.is_square() {
                    return Err(Error::not_square(OP, pattern.shape()));
                }
                // Searches are rooted at the compressed dimension
                let format = match options.perm_type {
                    PermType::Row => SparseFormat::Csc,
                    PermType::Column => SparseFormat::Csr,
                };
                let graph = self.oriented(pattern, format, OP);
                maximum_bipartite_matching(graph.indices(), graph.ptrs(), graph.nrows())
            }
            MatchingAlgorithm::HopcroftKarp => {
                let csc = self.oriented(pattern, SparseFormat::Csc, OP);
                let result = hopcroft_karp(csc.nrows(), csc.ncols(), csc.ptrs(), csc.indices())?;
                match options.perm_type {
                    PermType::Row => result.col_to_row,
                    PermType::Column => result.row_to_col,
                }
            }
        };

        debug!(
            "{}: shape={:?}, nnz={}, {:?}/{:?}, matched {} of {}",
            OP,
            pattern.shape(),
            pattern.nnz(),
            options.algorithm,
            options.perm_type,
            matched.iter().filter(|m| !m.is_nil()).count(),
            matched.len()
        );

        Ok(matched)
    }

    fn maximum_transversal<I: SparseIndex>(
        &self,
        pattern: &SparsityPattern<I>,
    ) -> Result<Vec<I>> {
        let perm = self.maximum_bipartite_matching(pattern, &MatchingOptions::default())?;
        let unmatched = perm.iter().filter(|m| m.is_nil()).count();
        if unmatched > 0 {
            return Err(Error::StructurallySingular { unmatched });
        }
        Ok(perm)
    }

    fn structural_rank<I: SparseIndex>(&self, pattern: &SparsityPattern<I>) -> Result<usize> {
        const OP: &str = "structural_rank";

        // Root the searches at the smaller dimension
        let work = if pattern.nrows() < pattern.ncols() {
            Cow::Owned(pattern.transpose())
        } else {
            Cow::Borrowed(pattern)
        };
        let csc = self.oriented(work.as_ref(), SparseFormat::Csc, OP);

        let rank = if csc.is_square() {
            structural_rank(csc.indices(), csc.ptrs(), csc.ncols())
        } else {
            structural_rank_rect(csc.nrows(), csc.ncols(), csc.ptrs(), csc.indices())
        };

        debug!(
            "{}: shape={:?}, nnz={}, rank={}",
            OP,
            pattern.shape(),
            pattern.nnz(),
            rank
        );
        Ok(rank)
    }
}

impl CpuClient {
    /// Structural rank of many independent patterns.
    ///
    /// With the `rayon` feature the patterns are processed in parallel. The
    /// output always follows input order.
    pub fn structural_rank_batch<I: SparseIndex>(
        &self,
        patterns: &[SparsityPattern<I>],
    ) -> Result<Vec<usize>> {
        #[cfg(feature = "rayon")]
        {
            if patterns.len() > 1 {
                return patterns
                    .par_iter()
                    .with_min_len(self.rayon_min_len())
                    .map(|p| self.structural_rank(p))
                    .collect();
            }
        }

        patterns.iter().map(|p| self.structural_rank(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sparse::CooPattern;

    fn pattern(shape: [usize; 2], entries: &[(usize, usize)]) -> SparsityPattern<i32> {
        CooPattern::from_entries(shape, entries).unwrap().to_csc()
    }

    #[test]
    fn test_matching_row_and_column_sides() {
        let client = CpuClient::new();
        // Row 0 -> col 1, row 1 -> cols 0 and 1, row 2 -> col 2
        let p = pattern([3, 3], &[(0, 1), (1, 0), (1, 1), (2, 2)]);

        let rows = client
            .maximum_bipartite_matching(&p, &MatchingOptions::default())
            .unwrap();
        assert_eq!(rows, vec![1, 0, 2]);

        let opts = MatchingOptions::default().with_perm_type(PermType::Column);
        let cols = client.maximum_bipartite_matching(&p, &opts).unwrap();
        assert_eq!(cols, vec![1, 0, 2]);
    }

    #[test]
    fn test_matching_rejects_rectangular_bfs() {
        let client = CpuClient::new();
        let p = pattern([2, 3], &[(0, 0), (1, 2)]);

        let err = client
            .maximum_bipartite_matching(&p, &MatchingOptions::default())
            .unwrap_err();
        assert_eq!(err, Error::not_square("maximum_bipartite_matching", [2, 3]));
    }

    #[test]
    fn test_matching_hopcroft_karp_rectangular() {
        let client = CpuClient::new();
        let p = pattern([2, 3], &[(0, 0), (1, 2), (0, 1)]);
        let opts = MatchingOptions::default().with_algorithm(MatchingAlgorithm::HopcroftKarp);

        let rows = client.maximum_bipartite_matching(&p, &opts).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.iter().filter(|&&r| r != -1).count(), 2);

        let cols = client
            .maximum_bipartite_matching(&p, &opts.with_perm_type(PermType::Column))
            .unwrap();
        assert_eq!(cols.len(), 2);
    }

    #[test]
    fn test_matching_converts_csr_input() {
        let client = CpuClient::new();
        let csc = pattern([3, 3], &[(0, 1), (1, 0), (1, 1), (2, 2)]);
        let csr = csc.to_csr();
        let opts = MatchingOptions::default();

        assert_eq!(
            client.maximum_bipartite_matching(&csr, &opts).unwrap(),
            client.maximum_bipartite_matching(&csc, &opts).unwrap()
        );
    }

    #[test]
    fn test_maximum_transversal_singular() {
        let client = CpuClient::new();
        // Column 2 is empty
        let p = pattern([3, 3], &[(0, 0), (1, 1), (2, 1)]);

        let err = client.maximum_transversal(&p).unwrap_err();
        assert_eq!(err, Error::StructurallySingular { unmatched: 1 });
    }

    #[test]
    fn test_maximum_transversal_gives_zero_free_diagonal() {
        let client = CpuClient::new();
        let p = pattern([3, 3], &[(1, 0), (2, 1), (0, 2), (0, 0)]);

        let perm = client.maximum_transversal(&p).unwrap();
        let identity: Vec<i32> = (0..3).collect();
        let permuted = p.permute(&perm, &identity).unwrap();

        let adj = permuted.adjacency();
        for j in 0..3 {
            assert!(adj.neighbors(j).contains(&(j as i32)), "zero at ({}, {})", j, j);
        }
    }

    #[test]
    fn test_structural_rank_any_shape() {
        let client = CpuClient::new();
        let wide = pattern([2, 4], &[(0, 0), (0, 3), (1, 3)]);
        let tall = wide.transpose();

        assert_eq!(client.structural_rank(&wide).unwrap(), 2);
        assert_eq!(client.structural_rank(&tall).unwrap(), 2);
    }

    #[test]
    fn test_structural_rank_batch_preserves_order() {
        let client = CpuClient::new();
        let patterns = vec![
            pattern([2, 2], &[(0, 0), (1, 1)]),
            pattern([2, 2], &[(0, 0), (1, 0)]),
            pattern([3, 1], &[(2, 0)]),
            pattern([1, 1], &[]),
        ];

        assert_eq!(client.structural_rank_batch(&patterns).unwrap(), vec![2, 1, 1, 0]);
    }
}

//! COO pattern: construction and conversion to compressed form

use crate::dtype::{IndexDType, SparseIndex};
use crate::error::{Error, Result};

use super::format::{SparseFormat, SparseStorage};
use super::pattern::SparsityPattern;

/// Coordinate-format sparsity pattern (row, col) pairs
///
/// Duplicate coordinates are allowed and merged on conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CooPattern<I: SparseIndex> {
    shape: [usize; 2],
    rows: Vec<I>,
    cols: Vec<I>,
}

impl<I: SparseIndex> CooPattern<I> {
    /// Create a COO pattern from coordinate arrays
    ///
    /// # Errors
    ///
    /// - `rows` and `cols` have different lengths
    /// - a coordinate lies outside `shape`
    /// - a dimension does not fit the index type
    pub fn new(shape: [usize; 2], rows: Vec<I>, cols: Vec<I>) -> Result<Self> {
        if rows.len() != cols.len() {
            return Err(Error::shape_mismatch(&[rows.len()], &[cols.len()]));
        }
        let [nrows, ncols] = shape;
        let row_bound = I::try_from_index(nrows)?;
        let col_bound = I::try_from_index(ncols)?;
        I::try_from_index(rows.len())?;

        for (k, (&r, &c)) in rows.iter().zip(cols.iter()).enumerate() {
            if r < I::zero() || r >= row_bound || c < I::zero() || c >= col_bound {
                return Err(Error::invalid_format(format!(
                    "entry {} at ({}, {}) is outside shape {:?}",
                    k, r, c, shape
                )));
            }
        }

        Ok(Self { shape, rows, cols })
    }

    /// Create a COO pattern from `(row, col)` pairs
    pub fn from_entries(shape: [usize; 2], entries: &[(usize, usize)]) -> Result<Self> {
        let mut rows = Vec::with_capacity(entries.len());
        let mut cols = Vec::with_capacity(entries.len());
        for &(r, c) in entries {
            rows.push(I::try_from_index(r)?);
            cols.push(I::try_from_index(c)?);
        }
        Self::new(shape, rows, cols)
    }

    pub(crate) fn from_parts(shape: [usize; 2], rows: Vec<I>, cols: Vec<I>) -> Self {
        debug_assert_eq!(rows.len(), cols.len());
        Self { shape, rows, cols }
    }

    /// Row coordinates
    pub fn rows(&self) -> &[I] {
        &self.rows
    }

    /// Column coordinates
    pub fn cols(&self) -> &[I] {
        &self.cols
    }

    /// Convert to CSR with sorted, duplicate-free column indices
    pub fn to_csr(&self) -> SparsityPattern<I> {
        let [nrows, ncols] = self.shape;
        let (ptrs, indices) = compress(nrows, &self.rows, &self.cols);
        SparsityPattern::from_parts(SparseFormat::Csr, [nrows, ncols], ptrs, indices)
    }

    /// Convert to CSC with sorted, duplicate-free row indices
    pub fn to_csc(&self) -> SparsityPattern<I> {
        let [nrows, ncols] = self.shape;
        let (ptrs, indices) = compress(ncols, &self.cols, &self.rows);
        SparsityPattern::from_parts(SparseFormat::Csc, [nrows, ncols], ptrs, indices)
    }
}

/// Group `minor` coordinates by `major` coordinate.
fn compress<I: SparseIndex>(n_major: usize, major: &[I], minor: &[I]) -> (Vec<I>, Vec<I>) {
    let mut perm: Vec<usize> = (0..major.len()).collect();
    perm.sort_unstable_by_key(|&k| (major[k], minor[k]));
    perm.dedup_by_key(|k| (major[*k], minor[*k]));

    let mut counts = vec![0usize; n_major + 1];
    let mut indices = Vec::with_capacity(perm.len());
    for &k in &perm {
        counts[major[k].index() + 1] += 1;
        indices.push(minor[k]);
    }
    for i in 1..=n_major {
        counts[i] += counts[i - 1];
    }

    let ptrs = counts.into_iter().map(I::from_index).collect();
    (ptrs, indices)
}

impl<I: SparseIndex> SparseStorage for CooPattern<I> {
    fn format(&self) -> SparseFormat {
        SparseFormat::Coo
    }

    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn nnz(&self) -> usize {
        self.rows.len()
    }

    fn index_dtype(&self) -> IndexDType {
        I::DTYPE
    }

    fn memory_usage(&self) -> usize {
        2 * self.rows.len() * I::DTYPE.size_in_bytes()
    }
}

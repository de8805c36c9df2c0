//! Compressed sparsity pattern (CSR or CSC) and its structural operations

use crate::dtype::{IndexDType, SparseIndex};
use crate::error::{Error, Result};

use super::adjacency::{CompressedAdjacency, validate_compressed};
use super::coo::CooPattern;
use super::format::{SparseFormat, SparseStorage};

/// Structure-only sparse matrix in compressed form
///
/// In CSR orientation `ptrs` has `nrows + 1` entries and `indices` hold
/// column ids; in CSC orientation `ptrs` has `ncols + 1` entries and
/// `indices` hold row ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparsityPattern<I: SparseIndex> {
    format: SparseFormat,
    shape: [usize; 2],
    ptrs: Vec<I>,
    indices: Vec<I>,
}

impl<I: SparseIndex> SparsityPattern<I> {
    /// Create a CSR pattern from row pointers and column indices
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if the arrays violate the CSR
    /// invariants, or [`Error::IndexOverflow`] if a dimension does not fit
    /// the index type.
    pub fn from_csr(shape: [usize; 2], row_ptrs: Vec<I>, col_indices: Vec<I>) -> Result<Self> {
        Self::validated(SparseFormat::Csr, shape, row_ptrs, col_indices)
    }

    /// Create a CSC pattern from column pointers and row indices
    pub fn from_csc(shape: [usize; 2], col_ptrs: Vec<I>, row_indices: Vec<I>) -> Result<Self> {
        Self::validated(SparseFormat::Csc, shape, col_ptrs, row_indices)
    }

    /// Square identity pattern in CSR orientation
    pub fn identity(n: usize) -> Result<Self> {
        I::try_from_index(n)?;
        let ptrs = (0..=n).map(I::from_index).collect();
        let indices = (0..n).map(I::from_index).collect();
        Ok(Self::from_parts(SparseFormat::Csr, [n, n], ptrs, indices))
    }

    fn validated(
        format: SparseFormat,
        shape: [usize; 2],
        ptrs: Vec<I>,
        indices: Vec<I>,
    ) -> Result<Self> {
        let [nrows, ncols] = shape;
        I::try_from_index(nrows)?;
        I::try_from_index(ncols)?;
        let (n_major, n_minor) = major_minor(format, shape);
        validate_compressed(&indices, &ptrs, n_major, n_minor)?;
        Ok(Self {
            format,
            shape,
            ptrs,
            indices,
        })
    }

    pub(crate) fn from_parts(
        format: SparseFormat,
        shape: [usize; 2],
        ptrs: Vec<I>,
        indices: Vec<I>,
    ) -> Self {
        debug_assert!(format != SparseFormat::Coo);
        Self {
            format,
            shape,
            ptrs,
            indices,
        }
    }

    /// Pointer array (row pointers for CSR, column pointers for CSC)
    #[inline]
    pub fn ptrs(&self) -> &[I] {
        &self.ptrs
    }

    /// Index array (column ids for CSR, row ids for CSC)
    #[inline]
    pub fn indices(&self) -> &[I] {
        &self.indices
    }

    /// Adjacency view over the compressed dimension
    pub fn adjacency(&self) -> CompressedAdjacency<'_, I> {
        let (n_major, n_minor) = major_minor(self.format, self.shape);
        CompressedAdjacency::from_validated(&self.indices, &self.ptrs, n_major, n_minor)
    }

    /// Transpose by reinterpretation: the CSR arrays of `A` are the CSC
    /// arrays of `Aᵀ`, so no data moves.
    pub fn transpose(&self) -> Self {
        let format = match self.format {
            SparseFormat::Csr => SparseFormat::Csc,
            _ => SparseFormat::Csr,
        };
        Self::from_parts(
            format,
            [self.shape[1], self.shape[0]],
            self.ptrs.clone(),
            self.indices.clone(),
        )
    }

    /// Convert to CSR orientation (sorted indices when a conversion happens)
    pub fn to_csr(&self) -> Self {
        match self.format {
            SparseFormat::Csr => self.clone(),
            _ => self.swap_orientation(SparseFormat::Csr),
        }
    }

    /// Convert to CSC orientation (sorted indices when a conversion happens)
    pub fn to_csc(&self) -> Self {
        match self.format {
            SparseFormat::Csc => self.clone(),
            _ => self.swap_orientation(SparseFormat::Csc),
        }
    }

    /// Convert to the requested compressed orientation
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when asked for COO; use
    /// [`SparsityPattern::to_coo`] instead.
    pub fn to_format(&self, format: SparseFormat) -> Result<Self> {
        match format {
            SparseFormat::Csr => Ok(self.to_csr()),
            SparseFormat::Csc => Ok(self.to_csc()),
            SparseFormat::Coo => Err(Error::InvalidArgument {
                arg: "format",
                reason: "SparsityPattern stores compressed formats only".to_string(),
            }),
        }
    }

    /// Expand to coordinate form
    pub fn to_coo(&self) -> CooPattern<I> {
        let mut rows = Vec::with_capacity(self.nnz());
        let mut cols = Vec::with_capacity(self.nnz());
        let adj = self.adjacency();
        for major in 0..adj.n_nodes() {
            let m = I::from_index(major);
            for &minor in adj.neighbors(major) {
                match self.format {
                    SparseFormat::Csc => {
                        rows.push(minor);
                        cols.push(m);
                    }
                    _ => {
                        rows.push(m);
                        cols.push(minor);
                    }
                }
            }
        }
        CooPattern::from_parts(self.shape, rows, cols)
    }

    /// Returns true if every adjacency slice is strictly increasing
    pub fn has_sorted_indices(&self) -> bool {
        let adj = self.adjacency();
        (0..adj.n_nodes()).all(|i| adj.neighbors(i).windows(2).all(|w| w[0] < w[1]))
    }

    /// Structure of `A + Aᵀ` in the same orientation as `self`
    ///
    /// The result has sorted, duplicate-free indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`] for rectangular patterns.
    pub fn symmetrize(&self) -> Result<Self> {
        if !self.is_square() {
            return Err(Error::not_square("symmetrize", self.shape));
        }
        let n = self.shape[0];
        let adj = self.adjacency();
        let (t_ptrs, t_indices) = transpose_arrays(n, n, &self.ptrs, &self.indices);

        let mut ptrs = Vec::with_capacity(n + 1);
        let mut indices = Vec::with_capacity(2 * self.nnz());
        let mut merged: Vec<I> = Vec::new();
        ptrs.push(I::zero());

        for i in 0..n {
            merged.clear();
            merged.extend_from_slice(adj.neighbors(i));
            merged.extend_from_slice(&t_indices[t_ptrs[i].index()..t_ptrs[i + 1].index()]);
            merged.sort_unstable();
            merged.dedup();
            indices.extend_from_slice(&merged);
            ptrs.push(I::try_from_index(indices.len())?);
        }

        Ok(Self::from_parts(self.format, self.shape, ptrs, indices))
    }

    /// Structure of `P·A·Q`: row `k` of the result is row `row_perm[k]` of
    /// `A`, column `k` is column `col_perm[k]` of `A`.
    ///
    /// The result keeps the orientation of `self` and has sorted indices.
    pub fn permute(&self, row_perm: &[I], col_perm: &[I]) -> Result<Self> {
        let [nrows, ncols] = self.shape;
        let row_pos = inverse_permutation(row_perm, nrows, "row_perm")?;
        let col_pos = inverse_permutation(col_perm, ncols, "col_perm")?;

        let coo = self.to_coo();
        let rows = coo.rows().iter().map(|&r| row_pos[r.index()]).collect();
        let cols = coo.cols().iter().map(|&c| col_pos[c.index()]).collect();
        let permuted = CooPattern::from_parts(self.shape, rows, cols);

        Ok(match self.format {
            SparseFormat::Csc => permuted.to_csc(),
            _ => permuted.to_csr(),
        })
    }

    /// Symmetric permutation `P·A·Pᵀ` (same permutation on rows and columns)
    pub fn permute_symmetric(&self, perm: &[I]) -> Result<Self> {
        if !self.is_square() {
            return Err(Error::not_square("permute_symmetric", self.shape));
        }
        self.permute(perm, perm)
    }

    fn swap_orientation(&self, target: SparseFormat) -> Self {
        let (n_major, n_minor) = major_minor(self.format, self.shape);
        let (ptrs, indices) = transpose_arrays(n_major, n_minor, &self.ptrs, &self.indices);
        Self::from_parts(target, self.shape, ptrs, indices)
    }
}

/// (compressed dimension, index dimension) for a format and shape
fn major_minor(format: SparseFormat, shape: [usize; 2]) -> (usize, usize) {
    match format {
        SparseFormat::Csc => (shape[1], shape[0]),
        _ => (shape[0], shape[1]),
    }
}

/// Counting-sort transpose of compressed arrays.
///
/// Produces `n_minor` slices whose indices are sorted ascending because the
/// majors are scanned in order.
fn transpose_arrays<I: SparseIndex>(
    n_major: usize,
    n_minor: usize,
    ptrs: &[I],
    indices: &[I],
) -> (Vec<I>, Vec<I>) {
    let mut counts = vec![0usize; n_minor + 1];
    for &m in indices {
        counts[m.index() + 1] += 1;
    }
    for i in 1..=n_minor {
        counts[i] += counts[i - 1];
    }

    let mut next = counts.clone();
    let mut out = vec![I::zero(); indices.len()];
    for major in 0..n_major {
        for &m in &indices[ptrs[major].index()..ptrs[major + 1].index()] {
            let slot = &mut next[m.index()];
            out[*slot] = I::from_index(major);
            *slot += 1;
        }
    }

    // Every count is at most indices.len(), which the source pointers already hold in I
    let out_ptrs = counts.into_iter().map(I::from_index).collect();
    (out_ptrs, out)
}

/// Validate `perm` as a permutation of `0..n` and return its inverse.
pub(crate) fn inverse_permutation<I: SparseIndex>(perm: &[I], n: usize, arg: &'static str) -> Result<Vec<I>> {
    if perm.len() != n {
        return Err(Error::shape_mismatch(&[n], &[perm.len()]));
    }
    let mut inverse = vec![I::NIL; n];
    for (k, &p) in perm.iter().enumerate() {
        if p < I::zero() || p.index() >= n || !inverse[p.index()].is_nil() {
            return Err(Error::InvalidArgument {
                arg,
                reason: format!("entry {} at position {} is not a permutation of 0..{}", p, k, n),
            });
        }
        inverse[p.index()] = I::from_index(k);
    }
    Ok(inverse)
}

impl<I: SparseIndex> SparseStorage for SparsityPattern<I> {
    fn format(&self) -> SparseFormat {
        self.format
    }

    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn nnz(&self) -> usize {
        self.indices.len()
    }

    fn index_dtype(&self) -> IndexDType {
        I::DTYPE
    }

    fn memory_usage(&self) -> usize {
        (self.ptrs.len() + self.indices.len()) * I::DTYPE.size_in_bytes()
    }
}

//! Sparse format definitions and traits

use crate::dtype::IndexDType;

/// Sparse pattern storage format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SparseFormat {
    /// Coordinate format (COO)
    ///
    /// Stores explicit (row, col) pairs.
    /// Best for: construction, format conversion
    /// Storage: O(2 * nnz)
    Coo,

    /// Compressed Sparse Row (CSR)
    ///
    /// Row pointers + column indices.
    /// Best for: row-wise traversal, column-perm matching
    /// Storage: O(nnz + nrows + 1)
    Csr,

    /// Compressed Sparse Column (CSC)
    ///
    /// Column pointers + row indices.
    /// Best for: column-wise traversal, row-perm matching
    /// Storage: O(nnz + ncols + 1)
    Csc,
}

impl SparseFormat {
    /// Returns true if format is efficient for row operations
    #[inline]
    pub fn is_row_major(&self) -> bool {
        matches!(self, SparseFormat::Csr)
    }

    /// Returns true if format is efficient for column operations
    #[inline]
    pub fn is_col_major(&self) -> bool {
        matches!(self, SparseFormat::Csc)
    }

    /// Returns the format name as a string
    pub fn name(&self) -> &'static str {
        match self {
            SparseFormat::Coo => "COO",
            SparseFormat::Csr => "CSR",
            SparseFormat::Csc => "CSC",
        }
    }
}

impl std::fmt::Display for SparseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Trait for structure-only sparse storage
///
/// Implemented by every pattern type (COO, CSR, CSC) so that diagnostics and
/// tests can inspect them uniformly.
pub trait SparseStorage: Sized {
    /// Returns the sparse format type
    fn format(&self) -> SparseFormat;

    /// Returns the shape as [nrows, ncols]
    fn shape(&self) -> [usize; 2];

    /// Returns the number of rows
    #[inline]
    fn nrows(&self) -> usize {
        self.shape()[0]
    }

    /// Returns the number of columns
    #[inline]
    fn ncols(&self) -> usize {
        self.shape()[1]
    }

    /// Returns the number of stored entries
    fn nnz(&self) -> usize;

    /// Returns the index type of the pointer/index arrays
    fn index_dtype(&self) -> IndexDType;

    /// Returns true if rows == cols
    #[inline]
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// Returns the density ratio (fraction of stored entries)
    #[inline]
    fn density(&self) -> f64 {
        let total = (self.nrows() * self.ncols()) as f64;
        if total == 0.0 {
            0.0
        } else {
            self.nnz() as f64 / total
        }
    }

    /// Returns true if the pattern stores no entries
    #[inline]
    fn is_empty(&self) -> bool {
        self.nnz() == 0
    }

    /// Returns the memory usage in bytes (approximate)
    fn memory_usage(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_format_display() {
        assert_eq!(SparseFormat::Coo.to_string(), "COO");
        assert_eq!(SparseFormat::Csr.to_string(), "CSR");
        assert_eq!(SparseFormat::Csc.to_string(), "CSC");
    }

    #[test]
    fn test_format_properties() {
        assert!(!SparseFormat::Coo.is_row_major());
        assert!(SparseFormat::Csr.is_row_major());
        assert!(!SparseFormat::Csc.is_row_major());

        assert!(!SparseFormat::Coo.is_col_major());
        assert!(!SparseFormat::Csr.is_col_major());
        assert!(SparseFormat::Csc.is_col_major());
    }
}

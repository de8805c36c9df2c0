//! Matching result shared by the matchers.

use crate::dtype::SparseIndex;

/// Result of a maximum matching computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingResult<I: SparseIndex> {
    /// For each column j, the row matched to it, or -1 if unmatched.
    pub col_to_row: Vec<I>,
    /// For each row i, the column matched to it, or -1 if unmatched.
    pub row_to_col: Vec<I>,
    /// Size of the matching (number of matched pairs).
    pub matching_size: usize,
}

impl<I: SparseIndex> MatchingResult<I> {
    /// Empty matching over `n_rows` rows and `n_cols` columns
    pub(crate) fn unmatched(n_rows: usize, n_cols: usize) -> Self {
        Self {
            col_to_row: vec![I::NIL; n_cols],
            row_to_col: vec![I::NIL; n_rows],
            matching_size: 0,
        }
    }

    /// Number of columns left unmatched
    pub fn unmatched_cols(&self) -> usize {
        self.col_to_row.len() - self.matching_size
    }

    /// Number of rows left unmatched
    pub fn unmatched_rows(&self) -> usize {
        self.row_to_col.len() - self.matching_size
    }

    /// True if every column is matched
    pub fn is_column_perfect(&self) -> bool {
        self.unmatched_cols() == 0
    }

    /// Structural rank of the pattern (the matching size)
    #[inline]
    pub fn structural_rank(&self) -> usize {
        self.matching_size
    }

    /// Check that `col_to_row` and `row_to_col` describe the same pairs.
    pub fn is_consistent(&self) -> bool {
        let mut pairs = 0usize;
        for (j, &i) in self.col_to_row.iter().enumerate() {
            if i.is_nil() {
                continue;
            }
            pairs += 1;
            match self.row_to_col.get(i.index()) {
                Some(&c) if c.index() == j && !c.is_nil() => {}
                _ => return false,
            }
        }
        let matched_rows = self.row_to_col.iter().filter(|c| !c.is_nil()).count();
        pairs == self.matching_size && matched_rows == self.matching_size
    }
}

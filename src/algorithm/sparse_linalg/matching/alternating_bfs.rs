//! Alternating breadth-first search matching (Duff, Kaya & Uçar).
//!
//! Grows a matching one free column at a time. Each search explores the
//! alternating tree rooted at the column breadth-first: from a column we step
//! to every adjacent row, and from a matched row to the column it is matched
//! with. The first free row found ends the search and the path back to the
//! root is flipped.
//!
//! # Work arrays
//!
//! All arrays are sized once and reused by every search:
//!
//! - `visited[row]` holds a generation stamp. A row is visited in the current
//!   search iff `visited[row] == generation`, so no per-search reset is
//!   needed.
//! - `previous[row]` is the column from which the row was reached.
//! - `queue` holds the columns of the alternating tree in FIFO order.
//!
//! The generation advances after each successful augmentation. A failed
//! search leaves it unchanged and instead clears the stamp of every row it
//! reached; those are exactly the rows matched to the queued non-root
//! columns. Either way the next search starts with no row carrying the
//! current stamp.
//!
//! # References
//!
//! Duff, I. S., Kaya, K., & Uçar, B. (2011). "Design, implementation, and
//! analysis of maximum transversal algorithms." ACM Transactions on
//! Mathematical Software, 38(2), 13.

use crate::dtype::SparseIndex;

use super::result::MatchingResult;

/// Compute a maximum matching of a square pattern.
///
/// The adjacency of node `j` lists the rows with a nonzero in column `j`
/// (CSC orientation).
///
/// # Returns
///
/// `match` with `match[j]` = row matched to column `j`, or `-1` if column `j`
/// is unmatched.
pub fn maximum_bipartite_matching<I: SparseIndex>(indices: &[I], ptrs: &[I], n: usize) -> Vec<I> {
    alternating_bfs_matching(n, n, ptrs, indices).col_to_row
}

/// Compute a maximum matching between `n_cols` columns and `n_rows` rows.
///
/// Free columns are processed in ascending order and adjacent rows in storage
/// order, so the result is deterministic.
///
/// # Arguments
///
/// * `n_rows` - Number of rows
/// * `n_cols` - Number of columns
/// * `col_ptrs` - Column pointers (length n_cols + 1)
/// * `row_indices` - Row indices, each in `[0, n_rows)`
pub fn alternating_bfs_matching<I: SparseIndex>(
    n_rows: usize,
    n_cols: usize,
    col_ptrs: &[I],
    row_indices: &[I],
) -> MatchingResult<I> {
    let mut search = AugmentingSearch::<I>::new(n_rows, n_cols);

    for col in 0..n_cols {
        if search.col_to_row[col].is_nil() && col_ptrs[col] != col_ptrs[col + 1] {
            search.search(col, col_ptrs, row_indices);
        }
    }

    search.into_result()
}

/// Matching state plus the work arrays shared by all searches.
struct AugmentingSearch<I: SparseIndex> {
    col_to_row: Vec<I>,
    row_to_col: Vec<I>,
    visited: Vec<usize>,
    previous: Vec<usize>,
    queue: Vec<usize>,
    generation: usize,
    matching_size: usize,
}

impl<I: SparseIndex> AugmentingSearch<I> {
    fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            col_to_row: vec![I::NIL; n_cols],
            row_to_col: vec![I::NIL; n_rows],
            // 0 is never a live generation
            visited: vec![0; n_rows],
            previous: vec![0; n_rows],
            queue: Vec::with_capacity(n_cols),
            generation: 1,
            matching_size: 0,
        }
    }

    /// Search for an augmenting path from the free column `root`.
    ///
    /// Returns true if the matching grew by one.
    fn search(&mut self, root: usize, col_ptrs: &[I], row_indices: &[I]) -> bool {
        self.queue.clear();
        self.queue.push(root);

        let mut head = 0;
        while head < self.queue.len() {
            let col = self.queue[head];
            head += 1;

            for &row in &row_indices[col_ptrs[col].index()..col_ptrs[col + 1].index()] {
                let row = row.index();
                if self.visited[row] == self.generation {
                    continue;
                }
                self.visited[row] = self.generation;
                self.previous[row] = col;

                let mate = self.row_to_col[row];
                if mate.is_nil() {
                    self.augment(row);
                    self.generation += 1;
                    self.matching_size += 1;
                    return true;
                }
                self.queue.push(mate.index());
            }
        }

        self.rollback();
        false
    }

    /// Flip the alternating path ending at the free row `row`.
    fn augment(&mut self, mut row: usize) {
        loop {
            let col = self.previous[row];
            let next = self.col_to_row[col];
            self.col_to_row[col] = I::from_index(row);
            self.row_to_col[row] = I::from_index(col);
            if next.is_nil() {
                break;
            }
            row = next.index();
        }
    }

    /// Clear the stamps left by a failed search.
    ///
    /// Every row reached by the search is matched, and its column was queued
    /// behind the root, so clearing `col_to_row[queue[k]]` for `k >= 1`
    /// clears exactly the rows the search touched.
    fn rollback(&mut self) {
        for &col in &self.queue[1..] {
            let row = self.col_to_row[col].index();
            self.visited[row] = 0;
        }
    }

    fn into_result(self) -> MatchingResult<I> {
        MatchingResult {
            col_to_row: self.col_to_row,
            row_to_col: self.row_to_col,
            matching_size: self.matching_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_empty() {
        let ptrs = vec![0i32];
        let indices: Vec<i32> = vec![];
        assert!(maximum_bipartite_matching(&indices, &ptrs, 0).is_empty());
    }

    #[test]
    fn test_matching_identity() {
        let ptrs = vec![0i32, 1, 2, 3, 4];
        let indices = vec![0i32, 1, 2, 3];
        assert_eq!(maximum_bipartite_matching(&indices, &ptrs, 4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_matching_empty_column_stays_unmatched() {
        // Column 1 has no entries
        let ptrs = vec![0i64, 2, 2];
        let indices = vec![0i64, 1];
        assert_eq!(maximum_bipartite_matching(&indices, &ptrs, 2), vec![0, -1]);
    }

    #[test]
    fn test_matching_augments_through_matched_row() {
        // [x x]
        // [. x]   stored by column: col 0 -> row 0, col 1 -> rows 0, 1
        //
        // Column 1 first reaches row 0 (matched to column 0), then row 1,
        // which is free, so it takes row 1 directly.
        let ptrs = vec![0i32, 1, 3];
        let indices = vec![0i32, 0, 1];
        assert_eq!(maximum_bipartite_matching(&indices, &ptrs, 2), vec![0, 1]);
    }

    #[test]
    fn test_matching_flips_path() {
        // col 0 -> {0, 1}, col 1 -> {0}
        // Column 0 takes row 0; column 1 must steal it and push column 0 to row 1.
        let ptrs = vec![0i32, 2, 3];
        let indices = vec![0i32, 1, 0];

        let result = alternating_bfs_matching(2, 2, &ptrs, &indices);
        assert_eq!(result.col_to_row, vec![1, 0]);
        assert_eq!(result.row_to_col, vec![1, 0]);
        assert_eq!(result.matching_size, 2);
        assert!(result.is_consistent());
    }

    #[test]
    fn test_matching_long_alternating_path() {
        // Staircase: col j -> {j, j+1}, last col -> {0}.
        // Greedy takes row j for column j; the last column forces a flip of
        // the whole chain.
        let n = 5;
        let mut ptrs = vec![0i32];
        let mut indices = Vec::new();
        for j in 0..n - 1 {
            indices.push(j as i32);
            indices.push(j as i32 + 1);
            ptrs.push(indices.len() as i32);
        }
        indices.push(0);
        ptrs.push(indices.len() as i32);

        let result = alternating_bfs_matching(n, n, &ptrs, &indices);
        assert_eq!(result.matching_size, n);
        assert_eq!(result.col_to_row, vec![1, 2, 3, 4, 0]);
        assert!(result.is_consistent());
    }

    #[test]
    fn test_matching_singular() {
        // Columns 0 and 1 both only see row 0
        let ptrs = vec![0i32, 1, 2, 3];
        let indices = vec![0i32, 0, 2];

        let matched = maximum_bipartite_matching(&indices, &ptrs, 3);
        assert_eq!(matched, vec![0, -1, 2]);
    }

    #[test]
    fn test_failed_search_clears_its_stamps() {
        // col 0 -> {0, 1}, col 1 -> {0}, col 2 -> {1}
        // After columns 0 and 1 are matched (0 -> 1, 1 -> 0), the search from
        // column 2 reaches row 1, queues column 0, reaches row 0, queues
        // column 1, and fails.
        let ptrs = vec![0i32, 2, 3, 4];
        let indices = vec![0i32, 1, 0, 1];

        let mut search = AugmentingSearch::<i32>::new(3, 3);
        assert!(search.search(0, &ptrs, &indices));
        assert!(search.search(1, &ptrs, &indices));

        let generation = search.generation;
        assert!(!search.search(2, &ptrs, &indices));

        assert_eq!(search.generation, generation);
        assert_eq!(search.queue, vec![2, 0, 1]);
        assert!(
            search.visited.iter().all(|&stamp| stamp != search.generation),
            "stale stamps after failed search: {:?}",
            search.visited
        );
        assert_eq!(search.col_to_row, vec![1, 0, -1]);
    }

    #[test]
    fn test_search_after_rollback_revisits_rows() {
        // col 0 -> {0}, col 1 -> {0}, col 2 -> {0, 1}
        // Column 1 fails after touching row 0. Column 2 must still be able to
        // stamp row 0 before reaching the free row 1.
        let ptrs = vec![0i32, 1, 2, 4];
        let indices = vec![0i32, 0, 0, 1];

        let mut search = AugmentingSearch::<i32>::new(2, 3);
        assert!(search.search(0, &ptrs, &indices));
        assert!(!search.search(1, &ptrs, &indices));
        assert!(search.search(2, &ptrs, &indices));

        assert_eq!(search.queue, vec![2, 0]);
        assert_eq!(search.previous[0], 2);
        assert_eq!(search.col_to_row, vec![0, -1, 1]);
    }

    #[test]
    fn test_matching_same_for_i32_and_i64() {
        // col 0 -> {0, 1}, col 1 -> {0}, col 2 -> {1, 2}
        let ptrs32 = vec![0i32, 2, 3, 5];
        let indices32 = vec![0i32, 1, 0, 1, 2];
        let ptrs64: Vec<i64> = ptrs32.iter().map(|&p| p as i64).collect();
        let indices64: Vec<i64> = indices32.iter().map(|&r| r as i64).collect();

        let narrow = alternating_bfs_matching(3, 3, &ptrs32, &indices32);
        let wide = alternating_bfs_matching(3, 3, &ptrs64, &indices64);

        assert_eq!(narrow.col_to_row, vec![1, 0, 2]);
        assert_eq!(wide.col_to_row, vec![1i64, 0, 2]);
        assert_eq!(narrow.matching_size, wide.matching_size);
        assert!(narrow.is_consistent());
        assert!(wide.is_consistent());
    }

    #[test]
    fn test_matching_rectangular() {
        // 3 rows, 2 columns: col 0 -> {2}, col 1 -> {2, 0}
        let ptrs = vec![0i32, 1, 3];
        let indices = vec![2i32, 2, 0];

        let result = alternating_bfs_matching(3, 2, &ptrs, &indices);
        assert_eq!(result.col_to_row, vec![2, 0]);
        assert_eq!(result.row_to_col, vec![1, -1, 0]);
        assert_eq!(result.unmatched_rows(), 1);
    }
}

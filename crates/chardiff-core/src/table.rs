//! The LCS length table.
//!
//! [`LengthTable`] stores `(m + 1) × (n + 1)` cells in one flat buffer indexed
//! `row * width + col`. Cell `(i, j)` holds the length of the longest common
//! subsequence of `old[..i]` and `new[..j]`.
//!
//! # Invariants
//!
//! - Row 0 and column 0 are all zeros.
//! - For `i, j > 0` the cell equals `get(i - 1, j - 1) + 1` when
//!   `old[i - 1] == new[j - 1]`, otherwise `max(get(i - 1, j), get(i, j - 1))`.

/// Dense LCS length table over two sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LengthTable {
    cells: Vec<usize>,
    width: usize,
    rows: usize,
}

impl LengthTable {
    /// Fill the table bottom-up for `old` (rows) against `new` (columns).
    pub fn build<T: PartialEq>(old: &[T], new: &[T]) -> Self {
        let rows = old.len() + 1;
        let width = new.len() + 1;
        let mut cells = vec![0usize; rows * width];

        for i in 1..rows {
            let row = i * width;
            let prev = row - width;
            for j in 1..width {
                cells[row + j] = if old[i - 1] == new[j - 1] {
                    cells[prev + j - 1] + 1
                } else {
                    cells[prev + j].max(cells[row + j - 1])
                };
            }
        }

        Self { cells, width, rows }
    }

    /// The value at row `i`, column `j`.
    ///
    /// Panics if `(i, j)` lies outside the table.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.width,
            "cell ({i}, {j}) outside {}x{} table",
            self.rows,
            self.width
        );
        self.cells[i * self.width + j]
    }

    /// Length of the longest common subsequence of the full inputs.
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows - 1, self.width - 1)
    }

    /// Number of rows, `len(old) + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `len(new) + 1`.
    pub fn width(&self) -> usize {
        self.width
    }
}

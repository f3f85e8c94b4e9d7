//! Bit-packed GF(2) matrices.

use crate::AlgebraError;

/// A rows×cols matrix over GF(2), one bit per cell.
///
/// Over GF(2) the two expensive steps of Gauss–Jordan degenerate:
/// normalizing a pivot row is a no-op (the only nonzero element is 1, its
/// own reciprocal) and eliminating a column from another row is a plain row
/// XOR. `Gf2Matrix` packs each row into `u64` words so that elimination
/// works 64 cells at a time, which is what makes the n²×n² toggle-adjacency
/// systems (81×81 for a 9×9 board) cheap to reduce.
///
/// Reduction is infallible here; the generic [`Matrix`](crate::Matrix) is
/// kept for other fields and as an independent cross-check.
///
/// # Examples
///
/// ```
/// use lightsout_algebra::Gf2Matrix;
///
/// let mut m = Gf2Matrix::new(2, 2);
/// m.set(0, 0, true)?;
/// m.set(0, 1, true)?;
/// m.set(1, 0, true)?;
/// m.set(1, 1, true)?;
///
/// // The rows are equal, so one of them cancels.
/// m.reduce_to_row_echelon();
/// assert_eq!(m.rank(), 1);
/// assert_eq!(m.trailing_zero_rows(), 1);
/// # Ok::<(), lightsout_algebra::AlgebraError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gf2Matrix {
    rows: usize,
    cols: usize,
    /// Words per row.
    row_words: usize,
    /// Row-major packed cells, `row_words` words per row.
    bits: Vec<u64>,
}

impl Gf2Matrix {
    /// Creates a zero matrix with the given dimensions.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        let row_words = cols.div_ceil(64);
        Self {
            rows,
            cols,
            row_words,
            bits: vec![0; rows * row_words],
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), AlgebraError> {
        if row < self.rows && col < self.cols {
            Ok(())
        } else {
            Err(AlgebraError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    #[inline]
    fn bit(&self, row: usize, col: usize) -> bool {
        self.bits[row * self.row_words + col / 64] >> (col % 64) & 1 != 0
    }

    #[inline]
    fn flip_bit(&mut self, row: usize, col: usize) {
        self.bits[row * self.row_words + col / 64] ^= 1 << (col % 64);
    }

    /// Returns the cell at the given row and column.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::OutOfBounds`] if either index is outside the
    /// matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, AlgebraError> {
        self.check_bounds(row, col)?;
        Ok(self.bit(row, col))
    }

    /// Sets the cell at the given row and column.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::OutOfBounds`] if either index is outside the
    /// matrix; the matrix is left unchanged.
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<(), AlgebraError> {
        self.check_bounds(row, col)?;
        if self.bit(row, col) != value {
            self.flip_bit(row, col);
        }
        Ok(())
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for word in 0..self.row_words {
            self.bits
                .swap(a * self.row_words + word, b * self.row_words + word);
        }
    }

    /// XORs the source row into the target row, word by word.
    fn xor_rows(&mut self, target: usize, source: usize) {
        debug_assert_ne!(target, source);
        let words = self.row_words;
        let (t, s) = (target * words, source * words);
        if target < source {
            let (head, tail) = self.bits.split_at_mut(s);
            for word in 0..words {
                head[t + word] ^= tail[word];
            }
        } else {
            let (head, tail) = self.bits.split_at_mut(t);
            for word in 0..words {
                tail[word] ^= head[s + word];
            }
        }
    }

    /// Reduces this matrix in place to reduced row-echelon form.
    ///
    /// Same pivoting scheme as the field-generic
    /// [`Matrix::reduce_to_row_echelon`](crate::Matrix::reduce_to_row_echelon),
    /// with normalization dropped and elimination done by row XOR. Columns
    /// without a pivot are left non-pivotal (free variables); zero rows end
    /// up at the bottom.
    pub fn reduce_to_row_echelon(&mut self) {
        let mut pivot_row = 0;
        for col in 0..self.cols {
            if pivot_row == self.rows {
                break;
            }
            let Some(found) = (pivot_row..self.rows).find(|&row| self.bit(row, col)) else {
                continue;
            };
            self.swap_rows(pivot_row, found);

            for row in 0..self.rows {
                if row != pivot_row && self.bit(row, col) {
                    self.xor_rows(row, pivot_row);
                }
            }
            pivot_row += 1;
        }
    }

    fn row_is_zero(&self, row: usize) -> bool {
        self.bits[row * self.row_words..(row + 1) * self.row_words]
            .iter()
            .all(|&word| word == 0)
    }

    /// Returns the number of nonzero rows.
    ///
    /// After [`reduce_to_row_echelon`](Self::reduce_to_row_echelon) this is
    /// the rank of the matrix.
    #[must_use]
    pub fn rank(&self) -> usize {
        (0..self.rows).filter(|&row| !self.row_is_zero(row)).count()
    }

    /// Returns the number of all-zero rows at the bottom of the matrix.
    ///
    /// After reduction this is the null-space dimension of a square
    /// matrix: one free variable per missing pivot.
    #[must_use]
    pub fn trailing_zero_rows(&self) -> usize {
        (0..self.rows)
            .rev()
            .take_while(|&row| self.row_is_zero(row))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{Field as _, Matrix, PrimeField};

    fn matrix_from(rows: usize, cols: usize, cells: &[u8]) -> Gf2Matrix {
        assert_eq!(cells.len(), rows * cols);
        let mut m = Gf2Matrix::new(rows, cols);
        for (i, &cell) in cells.iter().enumerate() {
            m.set(i / cols, i % cols, cell != 0).unwrap();
        }
        m
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut m = Gf2Matrix::new(2, 3);
        assert_eq!(
            m.get(2, 0),
            Err(AlgebraError::OutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            })
        );
        assert!(m.set(0, 3, true).is_err());
    }

    #[test]
    fn test_reduce_known_matrix() {
        // Rows: r0 = r1 ^ r2, so the rank is 2.
        let mut m = matrix_from(
            3,
            3,
            &[
                1, 1, 0, //
                1, 0, 1, //
                0, 1, 1,
            ],
        );
        m.reduce_to_row_echelon();
        assert_eq!(m.rank(), 2);
        assert_eq!(m.trailing_zero_rows(), 1);
        // Leading entries sit on the first two columns.
        assert!(m.get(0, 0).unwrap());
        assert!(!m.get(1, 0).unwrap());
        assert!(m.get(1, 1).unwrap());
    }

    #[test]
    fn test_reduce_identity_is_fixed_point() {
        let mut m = Gf2Matrix::new(4, 4);
        for i in 0..4 {
            m.set(i, i, true).unwrap();
        }
        let before = m.clone();
        m.reduce_to_row_echelon();
        assert_eq!(m, before);
        assert_eq!(m.trailing_zero_rows(), 0);
    }

    #[test]
    fn test_wide_matrix_crosses_word_boundary() {
        // 70 columns forces two words per row.
        let mut m = Gf2Matrix::new(2, 70);
        m.set(0, 69, true).unwrap();
        m.set(1, 69, true).unwrap();
        m.reduce_to_row_echelon();
        assert_eq!(m.rank(), 1);
        assert!(m.get(0, 69).unwrap());
        assert!(!m.get(1, 69).unwrap());
    }

    proptest! {
        /// The packed path must agree with the field-generic engine over
        /// `PrimeField(2)` on rank and on every reduced cell.
        #[test]
        fn prop_matches_generic_gf2_reduction(
            cells in prop::collection::vec(any::<bool>(), 36),
        ) {
            let mut packed = Gf2Matrix::new(6, 6);
            let field = PrimeField::new(2).unwrap();
            let mut generic = Matrix::new(6, 6, field);
            for (i, &cell) in cells.iter().enumerate() {
                packed.set(i / 6, i % 6, cell).unwrap();
                generic
                    .set(i / 6, i % 6, if cell { field.one() } else { field.zero() })
                    .unwrap();
            }

            packed.reduce_to_row_echelon();
            generic.reduce_to_row_echelon().unwrap();

            prop_assert_eq!(packed.rank(), generic.rank());
            for row in 0..6 {
                for col in 0..6 {
                    prop_assert_eq!(
                        packed.get(row, col).unwrap(),
                        generic.get(row, col).unwrap() == 1,
                        "cell ({}, {}) differs",
                        row,
                        col
                    );
                }
            }
        }
    }
}

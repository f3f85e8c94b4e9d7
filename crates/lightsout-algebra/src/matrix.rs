//! Field-generic matrices and Gauss–Jordan reduction.

use crate::{AlgebraError, Field};

/// A rows×cols matrix over a [`Field`].
///
/// All cells belong to the one field supplied at construction, and every
/// cell starts as that field's zero. The matrix is mutable in place; the
/// central operation is [`reduce_to_row_echelon`](Self::reduce_to_row_echelon).
///
/// For GF(2) specifically, prefer [`Gf2Matrix`](crate::Gf2Matrix): boards
/// produce n²×n² systems (81×81 for a 9×9 board), and the packed
/// representation reduces those with word-wide XORs instead of per-cell
/// field calls.
///
/// # Examples
///
/// ```
/// use lightsout_algebra::{Matrix, PrimeField};
///
/// let field = PrimeField::new(3)?;
/// let mut m = Matrix::new(2, 2, field);
/// m.set(0, 0, 2)?;
/// m.set(1, 1, 1)?;
/// m.reduce_to_row_echelon()?;
///
/// // The result is the identity: both rows held a pivot.
/// assert_eq!(m.get(0, 0)?, 1);
/// assert_eq!(m.get(1, 1)?, 1);
/// assert_eq!(m.rank(), 2);
/// # Ok::<(), lightsout_algebra::AlgebraError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<F: Field> {
    rows: usize,
    cols: usize,
    field: F,
    data: Vec<F::Elem>,
}

impl<F: Field> Matrix<F> {
    /// Creates a rows×cols matrix with every cell set to the field's zero.
    #[must_use]
    pub fn new(rows: usize, cols: usize, field: F) -> Self {
        let data = vec![field.zero(); rows * cols];
        Self {
            rows,
            cols,
            field,
            data,
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

    /// Returns the field the cells belong to.
    #[must_use]
    pub const fn field(&self) -> &F {
        &self.field
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<usize, AlgebraError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(AlgebraError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Returns the cell at the given row and column.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::OutOfBounds`] if either index is outside the
    /// matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<F::Elem, AlgebraError> {
        let offset = self.check_bounds(row, col)?;
        Ok(self.data[offset].clone())
    }

    /// Sets the cell at the given row and column.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::OutOfBounds`] if either index is outside the
    /// matrix; the matrix is left unchanged.
    pub fn set(&mut self, row: usize, col: usize, value: F::Elem) -> Result<(), AlgebraError> {
        let offset = self.check_bounds(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Sets every cell to the given value.
    pub fn fill(&mut self, value: &F::Elem) {
        self.data.fill(value.clone());
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for col in 0..self.cols {
            self.data.swap(a * self.cols + col, b * self.cols + col);
        }
    }

    /// Multiplies every cell of a row by `factor`.
    fn scale_row(&mut self, row: usize, factor: &F::Elem) -> Result<(), AlgebraError> {
        for col in 0..self.cols {
            let offset = row * self.cols + col;
            self.data[offset] = self.field.mul(&self.data[offset], factor)?;
        }
        Ok(())
    }

    /// Subtracts `factor` times the source row from the target row.
    fn sub_scaled_row(
        &mut self,
        target: usize,
        source: usize,
        factor: &F::Elem,
    ) -> Result<(), AlgebraError> {
        for col in 0..self.cols {
            let scaled = self.field.mul(&self.data[source * self.cols + col], factor)?;
            let offset = target * self.cols + col;
            self.data[offset] = self.field.sub(&self.data[offset], &scaled)?;
        }
        Ok(())
    }

    /// Reduces this matrix in place to reduced row-echelon form.
    ///
    /// Classic Gauss–Jordan: for each column, a nonzero entry at or below
    /// the current pivot row is swapped into place, the pivot row is
    /// normalized by the pivot's reciprocal, and the column is eliminated
    /// from every other row. Columns without a pivot are left non-pivotal;
    /// each one marks a free variable, i.e. one dimension of the null
    /// space. Zero rows accumulate at the bottom.
    ///
    /// # Errors
    ///
    /// Propagates [`AlgebraError`] from field arithmetic; in particular
    /// [`AlgebraError::NotInvertible`] when the field's modulus turns out
    /// not to be prime. A failed reduction leaves the matrix in a partially
    /// reduced state that must not be reused.
    pub fn reduce_to_row_echelon(&mut self) -> Result<(), AlgebraError> {
        let zero = self.field.zero();
        let mut pivot_row = 0;
        for col in 0..self.cols {
            if pivot_row == self.rows {
                break;
            }
            let Some(found) =
                (pivot_row..self.rows).find(|&row| self.data[row * self.cols + col] != zero)
            else {
                continue;
            };
            self.swap_rows(pivot_row, found);

            let pivot = self.data[pivot_row * self.cols + col].clone();
            let inverse = self.field.reciprocal(&pivot)?;
            self.scale_row(pivot_row, &inverse)?;

            for row in 0..self.rows {
                if row == pivot_row {
                    continue;
                }
                let factor = self.data[row * self.cols + col].clone();
                if factor != zero {
                    self.sub_scaled_row(row, pivot_row, &factor)?;
                }
            }
            pivot_row += 1;
        }
        Ok(())
    }

    /// Returns the number of nonzero rows.
    ///
    /// After [`reduce_to_row_echelon`](Self::reduce_to_row_echelon) this is
    /// the rank of the matrix.
    #[must_use]
    pub fn rank(&self) -> usize {
        let zero = self.field.zero();
        (0..self.rows)
            .filter(|&row| {
                self.data[row * self.cols..(row + 1) * self.cols]
                    .iter()
                    .any(|cell| *cell != zero)
            })
            .count()
    }
}

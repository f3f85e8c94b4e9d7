//! Quiet-pattern extraction from the toggle-adjacency matrix.

use lightsout_algebra::{AlgebraError, Field, Gf2Matrix, Matrix};
use lightsout_core::{BitGrid, BoardSize, Position};

/// The quiet-pattern basis for one board size.
///
/// A quiet pattern is a press set that toggles no light; the quiet patterns
/// of a board form a vector space over GF(2) (the null space of the
/// toggle-adjacency matrix). This type holds a basis of that space. The
/// null-space dimension is at most eight for every supported board size,
/// so downstream consumers can afford to enumerate the entire span of the
/// basis (see [`Optimizer`](crate::Optimizer)).
///
/// Extraction reduces an n²×n² matrix, so it is the expensive step of the
/// engine (an 81×81 elimination for a 9×9 board). Compute once per board
/// size and reuse for the board's lifetime.
///
/// # Examples
///
/// ```
/// use lightsout_core::BoardSize;
/// use lightsout_solver::QuietPatterns;
///
/// // 5x5 is the classic Lights Out board: a two-dimensional null space.
/// let patterns = QuietPatterns::compute(BoardSize::new(5)?);
/// assert_eq!(patterns.basis_len(), 2);
/// # Ok::<(), lightsout_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuietPatterns {
    size: BoardSize,
    basis: Vec<BitGrid>,
}

impl QuietPatterns {
    /// Computes the quiet-pattern basis for the given board size.
    ///
    /// Builds the n²×n² toggle-adjacency matrix over GF(2), reduces it,
    /// and reads one basis pattern off each free column. The all-zero
    /// pattern is implicit and not stored.
    ///
    /// This runs to completion synchronously; for the largest boards it is
    /// a latency-sensitive path that callers may want to move off any
    /// interactive thread.
    #[must_use]
    #[expect(clippy::missing_panics_doc)] // all matrix indices are in bounds by construction
    pub fn compute(size: BoardSize) -> Self {
        let cells = size.cell_count();
        log::info!("computing quiet patterns for a {size}x{size} board ({cells}x{cells} matrix)");
        if size.get() >= 9 {
            log::warn!("reducing a {cells}x{cells} toggle matrix; this can be slow");
        }

        let mut matrix = adjacency_gf2(size);
        matrix.reduce_to_row_echelon();

        // One free variable per trailing all-zero row.
        let basis_len = matrix.trailing_zero_rows();

        // Free-variable back-substitution for the homogeneous system:
        // force a 1 on the diagonal of each free column, then read the
        // column as a press grid.
        for col in cells - basis_len..cells {
            matrix.set(col, col, true).expect("diagonal within matrix");
        }

        let mut basis = Vec::with_capacity(basis_len);
        for col in cells - basis_len..cells {
            let mut pattern = BitGrid::new(size);
            for row in 0..cells {
                if matrix.get(row, col).expect("entry within matrix") {
                    let pos = Position::from_index(size, row);
                    pattern.set(pos, true).expect("position within grid");
                }
            }
            basis.push(pattern);
        }
        log::info!("null-space basis for size {size} has {basis_len} patterns");

        Self { size, basis }
    }

    /// Returns the board size these patterns belong to.
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the number of basis patterns (the null-space dimension).
    #[must_use]
    pub fn basis_len(&self) -> usize {
        self.basis.len()
    }

    /// Returns whether the basis is empty, i.e. the adjacency matrix has
    /// full rank and every board state has a unique press-parity
    /// solution.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.basis.is_empty()
    }

    /// Returns the basis patterns.
    #[must_use]
    pub fn basis(&self) -> &[BitGrid] {
        &self.basis
    }
}

/// Builds the n²×n² toggle-adjacency matrix over GF(2).
///
/// Entry `(i, j)` is 1 iff pressing cell `j` toggles cell `i`: the
/// diagonal plus orthogonal grid neighbors. Left/right neighbors exist only
/// within the same row (no wrap across row boundaries) and up/down
/// neighbors only within the grid.
#[must_use]
#[expect(clippy::missing_panics_doc)] // all indices are in bounds by construction
pub fn adjacency_gf2(size: BoardSize) -> Gf2Matrix {
    let cells = size.cell_count();
    let mut matrix = Gf2Matrix::new(cells, cells);
    for index in 0..cells {
        let pos = Position::from_index(size, index);
        matrix.set(index, index, true).expect("cell within matrix");
        for neighbor in pos.neighbors(size) {
            matrix
                .set(index, neighbor.index(size), true)
                .expect("neighbor within matrix");
        }
    }
    matrix
}

/// Builds the toggle-adjacency matrix over an arbitrary field.
///
/// The solver itself always works over GF(2) through [`adjacency_gf2`];
/// this generic form exists so the field-generic elimination engine can be
/// cross-checked independently (rank consistency, other small primes).
///
/// # Errors
///
/// Propagates [`AlgebraError`] from the field operations.
pub fn adjacency_matrix<F: Field>(size: BoardSize, field: F) -> Result<Matrix<F>, AlgebraError> {
    let cells = size.cell_count();
    let one = field.one();
    let mut matrix = Matrix::new(cells, cells, field);
    for index in 0..cells {
        let pos = Position::from_index(size, index);
        matrix.set(index, index, one.clone())?;
        for neighbor in pos.neighbors(size) {
            matrix.set(index, neighbor.index(size), one.clone())?;
        }
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use lightsout_algebra::PrimeField;

    use super::*;

    fn size(n: u8) -> BoardSize {
        BoardSize::new(n).unwrap()
    }

    /// Replays a press grid onto an all-off board and reports whether the
    /// board stayed all-off.
    fn is_quiet(presses: &BitGrid) -> bool {
        let mut lights = BitGrid::new(presses.size());
        lights.apply_presses(presses).unwrap();
        lights.is_all_off()
    }

    #[test]
    fn test_adjacency_structure() {
        let size = size(3);
        let matrix = adjacency_gf2(size);
        for i in 0..9 {
            let pos_i = Position::from_index(size, i);
            for j in 0..9 {
                let pos_j = Position::from_index(size, j);
                let adjacent = i == j || pos_i.neighbors(size).any(|n| n == pos_j);
                assert_eq!(
                    matrix.get(i, j).unwrap(),
                    adjacent,
                    "entry ({i}, {j}) wrong"
                );
            }
        }
    }

    #[test]
    fn test_adjacency_does_not_wrap_rows() {
        // Cells 2 (end of row 0) and 3 (start of row 1) are consecutive
        // indices but not neighbors.
        let matrix = adjacency_gf2(size(3));
        assert!(!matrix.get(2, 3).unwrap());
        assert!(!matrix.get(3, 2).unwrap());
    }

    #[test]
    fn test_null_space_dimensions_match_known_values() {
        // Null-space dimensions of the Lights Out adjacency matrix for
        // every supported board size.
        let expected = [
            (1, 0),
            (2, 0),
            (3, 0),
            (4, 4),
            (5, 2),
            (6, 0),
            (7, 0),
            (8, 0),
            (9, 8),
            (10, 0),
            (11, 6),
            (12, 0),
            (13, 0),
            (14, 4),
            (15, 0),
            (16, 8),
        ];
        for (n, k) in expected {
            let patterns = QuietPatterns::compute(size(n));
            assert_eq!(patterns.basis_len(), k, "basis size wrong for n={n}");
            assert_eq!(patterns.basis().len(), k);
        }
    }

    #[test]
    fn test_all_basis_patterns_are_quiet() {
        for n in 1..=16 {
            let patterns = QuietPatterns::compute(size(n));
            for (i, pattern) in patterns.basis().iter().enumerate() {
                assert!(is_quiet(pattern), "pattern {i} for n={n} toggles lights");
                assert!(!pattern.is_all_off(), "pattern {i} for n={n} is empty");
            }
        }
    }

    #[test]
    fn test_basis_dimension_matches_generic_rank() {
        for n in 1..=5 {
            let board = size(n);
            let mut generic = adjacency_matrix(board, PrimeField::new(2).unwrap()).unwrap();
            generic.reduce_to_row_echelon().unwrap();

            let patterns = QuietPatterns::compute(board);
            assert_eq!(
                patterns.basis_len(),
                board.cell_count() - generic.rank(),
                "dimension mismatch for n={n}"
            );
        }
    }

    #[test]
    fn test_exhaustive_null_space_4x4() {
        // Brute force over all 2^16 press vectors: the quiet ones must be
        // exactly the span of the extracted basis.
        let board = size(4);
        let patterns = QuietPatterns::compute(board);
        let k = patterns.basis_len();
        assert_eq!(k, 4);

        let mut span = HashSet::new();
        for mask in 0u32..(1 << k) {
            let mut combined = BitGrid::new(board);
            for (i, basis) in patterns.basis().iter().enumerate() {
                if mask >> i & 1 != 0 {
                    combined ^= basis;
                }
            }
            span.insert(combined);
        }
        assert_eq!(span.len(), 1 << k, "basis is not linearly independent");

        let mut quiet_count = 0;
        for bits in 0u32..(1 << board.cell_count()) {
            let mut presses = BitGrid::new(board);
            for index in 0..board.cell_count() {
                if bits >> index & 1 != 0 {
                    presses.set(Position::from_index(board, index), true).unwrap();
                }
            }
            if is_quiet(&presses) {
                quiet_count += 1;
                assert!(span.contains(&presses), "quiet vector {bits:#06x} not in span");
            }
        }
        assert_eq!(quiet_count, 1 << k);
    }

    #[test]
    fn test_full_rank_board_has_no_patterns() {
        let patterns = QuietPatterns::compute(size(3));
        assert!(patterns.is_empty());
        assert_eq!(patterns.basis_len(), 0);
    }
}

//! Board coordinates.

use std::fmt::{self, Display};

use crate::BoardSize;

/// A row/column coordinate pair on a square board.
///
/// A `Position` does not know which board it belongs to; it is validated
/// against a [`BoardSize`] at the point of use. Row 0 is the top row and
/// column 0 the leftmost column.
///
/// # Examples
///
/// ```
/// use lightsout_core::{BoardSize, Position};
///
/// let size = BoardSize::new(3)?;
/// let pos = Position::new(1, 2);
/// assert_eq!(pos.index(size), 5); // row-major: 1 * 3 + 2
/// assert_eq!(Position::from_index(size, 5), pos);
/// # Ok::<(), lightsout_core::GridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from row and column indices.
    #[must_use]
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major cell index of this position on a board of the
    /// given size.
    ///
    /// The caller is responsible for the position being on the board; use
    /// [`BoardSize::contains`] to check first.
    #[must_use]
    #[inline]
    pub const fn index(self, size: BoardSize) -> usize {
        self.row as usize * size.get() as usize + self.col as usize
    }

    /// Creates a position from a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below `size.cell_count()`.
    #[must_use]
    #[inline]
    pub fn from_index(size: BoardSize, index: usize) -> Self {
        assert!(index < size.cell_count());
        let n = usize::from(size.get());
        #[expect(clippy::cast_possible_truncation)]
        Self::new((index / n) as u8, (index % n) as u8)
    }

    /// Returns the orthogonal neighbors of this position that lie on a board
    /// of the given size.
    ///
    /// Interior cells have four neighbors, edge cells three, corner cells
    /// two. Neighbors never wrap across row or column boundaries.
    ///
    /// # Examples
    ///
    /// ```
    /// use lightsout_core::{BoardSize, Position};
    ///
    /// let size = BoardSize::new(3)?;
    /// let corner: Vec<_> = Position::new(0, 0).neighbors(size).collect();
    /// assert_eq!(corner, [Position::new(1, 0), Position::new(0, 1)]);
    /// # Ok::<(), lightsout_core::GridError>(())
    /// ```
    pub fn neighbors(self, size: BoardSize) -> impl Iterator<Item = Position> {
        let n = size.get();
        let Self { row, col } = self;
        let up = (row > 0).then(|| Self::new(row - 1, col));
        let down = (row + 1 < n).then(|| Self::new(row + 1, col));
        let left = (col > 0).then(|| Self::new(row, col - 1));
        let right = (col + 1 < n).then(|| Self::new(row, col + 1));
        [up, down, left, right].into_iter().flatten()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: u8) -> BoardSize {
        BoardSize::new(n).unwrap()
    }

    #[test]
    fn test_index_round_trip() {
        let size = size(5);
        for index in 0..size.cell_count() {
            let pos = Position::from_index(size, index);
            assert_eq!(pos.index(size), index);
        }
    }

    #[test]
    fn test_neighbor_counts() {
        let size = size(3);
        assert_eq!(Position::new(0, 0).neighbors(size).count(), 2);
        assert_eq!(Position::new(0, 1).neighbors(size).count(), 3);
        assert_eq!(Position::new(1, 1).neighbors(size).count(), 4);
        assert_eq!(Position::new(2, 2).neighbors(size).count(), 2);
    }

    #[test]
    fn test_neighbor_order_is_up_down_left_right() {
        let size = size(3);
        let center: Vec<_> = Position::new(1, 1).neighbors(size).collect();
        assert_eq!(
            center,
            [
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );
        // Missing directions are skipped, keeping the remaining order.
        let corner: Vec<_> = Position::new(0, 0).neighbors(size).collect();
        assert_eq!(corner, [Position::new(1, 0), Position::new(0, 1)]);
    }

    #[test]
    fn test_neighbors_do_not_wrap_rows() {
        // On a 3x3 board, cell index 2 (row 0, col 2) and cell index 3
        // (row 1, col 0) are adjacent in row-major order but not neighbors.
        let size = size(3);
        let end_of_row = Position::new(0, 2);
        assert!(
            !end_of_row
                .neighbors(size)
                .any(|pos| pos == Position::new(1, 0))
        );
    }

    #[test]
    fn test_single_cell_board_has_no_neighbors() {
        let size = size(1);
        assert_eq!(Position::new(0, 0).neighbors(size).count(), 0);
    }
}

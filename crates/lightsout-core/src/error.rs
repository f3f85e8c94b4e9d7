//! Error types for board construction and grid access.

use derive_more::{Display, Error};

use crate::BoardSize;

/// Errors produced by board construction, grid access, and grid parsing.
///
/// Out-of-range accesses never mutate the grid: every failing operation is
/// an atomic no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// The requested board side length is zero or above [`BoardSize::MAX`].
    #[display("board size must be in 1..={max}, got {size}", max = BoardSize::MAX)]
    InvalidBoardSize {
        /// The rejected side length.
        size: usize,
    },

    /// A row/column coordinate lies outside the grid.
    #[display("position {row}-{col} is outside a {size}x{size} board")]
    OutOfBounds {
        /// Row index of the rejected access.
        row: u8,
        /// Column index of the rejected access.
        col: u8,
        /// Side length of the accessed grid.
        size: u8,
    },

    /// Two grids of different sizes were combined.
    #[display("grid size mismatch: {left}x{left} vs {right}x{right}")]
    SizeMismatch {
        /// Side length of the left-hand grid.
        left: u8,
        /// Side length of the right-hand grid.
        right: u8,
    },

    /// A grid string contained a character that is neither on nor off.
    #[display("invalid grid character {ch:?}")]
    ParseGridChar {
        /// The offending character.
        ch: char,
    },

    /// A grid string did not contain a square number of cells.
    #[display("grid string has {count} cells, which is not a supported square")]
    ParseGridCellCount {
        /// The number of cell characters found.
        count: usize,
    },
}

//! Validated board side length.

use std::fmt::{self, Display};

use crate::{GridError, Position};

/// The side length of a square Lights Out board.
///
/// A `BoardSize` is always in the range `1..=`[`BoardSize::MAX`], so code
/// holding one never has to re-validate it. The associated toggle-adjacency
/// matrix has `n² × n²` entries, which is why the upper bound is kept small;
/// the interactive game exposes at most 9×9.
///
/// # Examples
///
/// ```
/// use lightsout_core::BoardSize;
///
/// let size = BoardSize::new(5)?;
/// assert_eq!(size.get(), 5);
/// assert_eq!(size.cell_count(), 25);
///
/// assert!(BoardSize::new(0).is_err());
/// # Ok::<(), lightsout_core::GridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardSize(u8);

impl BoardSize {
    /// The largest supported side length.
    pub const MAX: u8 = 16;

    /// Creates a validated board size.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidBoardSize`] if `size` is zero or greater
    /// than [`BoardSize::MAX`].
    pub fn new(size: u8) -> Result<Self, GridError> {
        if size == 0 || size > Self::MAX {
            return Err(GridError::InvalidBoardSize {
                size: usize::from(size),
            });
        }
        Ok(Self(size))
    }

    /// Returns the side length.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the number of cells on the board (`n²`).
    #[must_use]
    #[inline]
    pub const fn cell_count(self) -> usize {
        self.0 as usize * self.0 as usize
    }

    /// Returns whether the coordinate pair lies on the board.
    #[must_use]
    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row() < self.0 && pos.col() < self.0
    }

    /// Returns an iterator over all positions in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lightsout_core::{BoardSize, Position};
    ///
    /// let size = BoardSize::new(2)?;
    /// let positions: Vec<_> = size.positions().collect();
    /// assert_eq!(
    ///     positions,
    ///     [
    ///         Position::new(0, 0),
    ///         Position::new(0, 1),
    ///         Position::new(1, 0),
    ///         Position::new(1, 1),
    ///     ]
    /// );
    /// # Ok::<(), lightsout_core::GridError>(())
    /// ```
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..self.cell_count()).map(move |index| Position::from_index(self, index))
    }
}

impl Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> u8 {
        size.get()
    }
}

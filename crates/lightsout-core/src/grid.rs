//! Bit-packed boolean grid and the press rule.

use std::{
    fmt::{self, Display},
    ops::{BitXor, BitXorAssign},
    str::FromStr,
};

use crate::{BoardSize, GridError, Position};

/// An n×n boolean grid, bit-packed into 64-bit words.
///
/// `BitGrid` is the workhorse of the engine. It represents visible light
/// states, press-parity vectors, and quiet patterns alike: all three are
/// vectors over GF(2), so XOR combination and Hamming weight
/// ([`count_ones`](Self::count_ones)) are the fundamental operations.
///
/// Cells are stored in row-major order; bit `i` of the packing corresponds
/// to `Position::from_index(size, i)`. Unused high bits of the last word are
/// always zero, so the Hamming weight is a plain popcount over the words.
///
/// # Examples
///
/// ```
/// use lightsout_core::{BitGrid, BoardSize, Position};
///
/// let size = BoardSize::new(3)?;
/// let mut grid = BitGrid::new(size);
/// grid.set(Position::new(0, 1), true)?;
/// grid.set(Position::new(2, 2), true)?;
///
/// assert_eq!(grid.count_ones(), 2);
/// assert!(grid.get(Position::new(0, 1))?);
/// assert!(!grid.get(Position::new(1, 1))?);
/// # Ok::<(), lightsout_core::GridError>(())
/// ```
///
/// # Grid strings
///
/// Grids parse from and format to a compact string form where `#` is a lit
/// cell and `.` an unlit one; whitespace is ignored on parse. This is the
/// fixture format used throughout the test suites.
///
/// ```
/// use lightsout_core::BitGrid;
///
/// let grid: BitGrid = "
///     #.#
///     .#.
///     #.#
/// "
/// .parse()?;
/// assert_eq!(grid.count_ones(), 5);
/// assert_eq!(grid.to_string(), "#.#\n.#.\n#.#");
/// # Ok::<(), lightsout_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitGrid {
    size: BoardSize,
    words: Vec<u64>,
}

impl BitGrid {
    /// Creates an all-off grid of the given size.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        let word_count = size.cell_count().div_ceil(64);
        Self {
            size,
            words: vec![0; word_count],
        }
    }

    /// Returns the board size of this grid.
    #[must_use]
    #[inline]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    fn check_bounds(&self, pos: Position) -> Result<(), GridError> {
        if self.size.contains(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                row: pos.row(),
                col: pos.col(),
                size: self.size.get(),
            })
        }
    }

    #[inline]
    fn bit(&self, index: usize) -> bool {
        self.words[index / 64] >> (index % 64) & 1 != 0
    }

    #[inline]
    fn flip_bit(&mut self, index: usize) {
        self.words[index / 64] ^= 1 << (index % 64);
    }

    /// Returns the cell state at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the position is off the board.
    pub fn get(&self, pos: Position) -> Result<bool, GridError> {
        self.check_bounds(pos)?;
        Ok(self.bit(pos.index(self.size)))
    }

    /// Sets the cell state at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the position is off the board;
    /// the grid is left unchanged.
    pub fn set(&mut self, pos: Position, value: bool) -> Result<(), GridError> {
        self.check_bounds(pos)?;
        let index = pos.index(self.size);
        if self.bit(index) != value {
            self.flip_bit(index);
        }
        Ok(())
    }

    /// Toggles the cell state at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the position is off the board;
    /// the grid is left unchanged.
    pub fn toggle(&mut self, pos: Position) -> Result<(), GridError> {
        self.check_bounds(pos)?;
        self.flip_bit(pos.index(self.size));
        Ok(())
    }

    /// Sets every cell to the given state.
    pub fn fill(&mut self, value: bool) {
        if value {
            let cells = self.size.cell_count();
            for (i, word) in self.words.iter_mut().enumerate() {
                let bits_here = (cells - i * 64).min(64);
                *word = if bits_here == 64 {
                    u64::MAX
                } else {
                    (1 << bits_here) - 1
                };
            }
        } else {
            self.words.fill(0);
        }
    }

    /// Applies the press rule at the given position: toggles the cell and
    /// its orthogonal neighbors.
    ///
    /// Interior cells toggle five lights, edge cells four, corner cells
    /// three. Presses commute and are involutive, so a press sequence is
    /// fully described by the parity of presses per cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the position is off the board;
    /// the grid is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use lightsout_core::{BitGrid, BoardSize, Position};
    ///
    /// let size = BoardSize::new(2)?;
    /// let mut grid = BitGrid::new(size);
    ///
    /// // A corner press toggles the corner and its two orthogonal
    /// // neighbors; the diagonal cell is untouched.
    /// grid.apply_press(Position::new(0, 0))?;
    /// assert_eq!(grid.count_ones(), 3);
    /// # Ok::<(), lightsout_core::GridError>(())
    /// ```
    pub fn apply_press(&mut self, pos: Position) -> Result<(), GridError> {
        self.check_bounds(pos)?;
        self.flip_bit(pos.index(self.size));
        for neighbor in pos.neighbors(self.size) {
            self.flip_bit(neighbor.index(self.size));
        }
        Ok(())
    }

    /// Applies every press marked in `presses` to this grid.
    ///
    /// Because presses commute, the application order is irrelevant; this is
    /// how a quiet pattern or a press-parity vector is replayed onto a
    /// light grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SizeMismatch`] if the grids have different
    /// sizes; the grid is left unchanged.
    pub fn apply_presses(&mut self, presses: &BitGrid) -> Result<(), GridError> {
        if self.size != presses.size {
            return Err(GridError::SizeMismatch {
                left: self.size.get(),
                right: presses.size.get(),
            });
        }
        for pos in presses.lit_positions() {
            self.flip_bit(pos.index(self.size));
            for neighbor in pos.neighbors(self.size) {
                self.flip_bit(neighbor.index(self.size));
            }
        }
        Ok(())
    }

    /// Returns the number of lit cells (the Hamming weight).
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Returns whether every cell is off.
    #[must_use]
    pub fn is_all_off(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Returns an iterator over the positions of lit cells in row-major
    /// order.
    pub fn lit_positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size.cell_count())
            .filter(|&index| self.bit(index))
            .map(move |index| Position::from_index(size, index))
    }
}

impl BitXorAssign<&BitGrid> for BitGrid {
    /// XORs another grid into this one cell-wise.
    ///
    /// # Panics
    ///
    /// Panics if the grids have different sizes.
    fn bitxor_assign(&mut self, rhs: &BitGrid) {
        assert_eq!(self.size, rhs.size, "cannot XOR grids of different sizes");
        for (word, &other) in self.words.iter_mut().zip(&rhs.words) {
            *word ^= other;
        }
    }
}

impl BitXor<&BitGrid> for &BitGrid {
    type Output = BitGrid;

    fn bitxor(self, rhs: &BitGrid) -> BitGrid {
        let mut out = self.clone();
        out ^= rhs;
        out
    }
}

impl Display for BitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = usize::from(self.size.get());
        for row in 0..n {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..n {
                let lit = self.bit(row * n + col);
                f.write_str(if lit { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

impl FromStr for BitGrid {
    type Err = GridError;

    /// Parses a grid string.
    ///
    /// `#`, `*`, and `1` are lit cells; `.`, `_`, and `0` are unlit cells;
    /// whitespace is ignored. The number of cells must be `n²` for a
    /// supported board size `n`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        for ch in s.chars() {
            match ch {
                '#' | '*' | '1' => cells.push(true),
                '.' | '_' | '0' => cells.push(false),
                ch if ch.is_whitespace() => {}
                ch => return Err(GridError::ParseGridChar { ch }),
            }
        }

        let side = (1..=usize::from(BoardSize::MAX))
            .find(|n| n * n == cells.len())
            .ok_or(GridError::ParseGridCellCount { count: cells.len() })?;
        #[expect(clippy::cast_possible_truncation)]
        let size = BoardSize::new(side as u8)?;

        let mut grid = BitGrid::new(size);
        for (index, lit) in cells.into_iter().enumerate() {
            if lit {
                grid.flip_bit(index);
            }
        }
        Ok(grid)
    }
}

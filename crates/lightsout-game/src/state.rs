//! The puzzle session state machine.

use std::cell::OnceCell;

use lightsout_core::{BitGrid, BoardSize, Position};
use lightsout_solver::{Optimizer, QuietPatterns};
use rand::{Rng, RngExt as _};

use crate::{GameError, GameMode};

/// Scramble attempts before giving up on producing an unsolved board.
const MAX_SCRAMBLE_RETRIES: usize = 128;

/// A Lights Out game session.
///
/// Holds the light grid and, in [`GameMode::Standard`], the press parity
/// accumulated since the last scramble. Pressing the same cell twice
/// cancels out, so the parity grid is always a valid solution of the
/// current board; minimizing it against the board's quiet patterns yields
/// the exact minimum press count.
///
/// Presses themselves stay cheap: they only toggle bits. The minimum is
/// computed when asked for, and the quiet-pattern basis backing it is
/// extracted once per session, on the first query or scramble that needs
/// it.
///
/// # Examples
///
/// ```
/// use lightsout_core::{BoardSize, Position};
/// use lightsout_game::{GameMode, PuzzleState};
///
/// let mut game = PuzzleState::new(BoardSize::new(2)?, GameMode::Standard);
/// assert!(game.is_solved());
///
/// // A corner press toggles the corner and its two orthogonal
/// // neighbors; pressing the same corner again is the shortest way back.
/// game.press(Position::new(0, 0))?;
/// assert!(!game.is_solved());
/// assert_eq!(game.lights().count_ones(), 3);
/// assert_eq!(game.min_press_count(), Some(1));
///
/// game.press(Position::new(0, 0))?;
/// assert!(game.is_solved());
/// assert_eq!(game.moves(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    size: BoardSize,
    mode: GameMode,
    lights: BitGrid,
    /// Press parity since the last scramble; `None` in lights-only mode.
    presses: Option<BitGrid>,
    /// Quiet patterns for `size`, extracted on first need.
    patterns: OnceCell<QuietPatterns>,
    moves: usize,
}

impl PuzzleState {
    /// Creates a solved board in the given mode.
    ///
    /// Construction is cheap in both modes; in [`GameMode::Standard`] the
    /// quiet-pattern extraction is deferred until the first
    /// [`min_press_count`](Self::min_press_count) query or
    /// [`scramble`](Self::scramble).
    #[must_use]
    pub fn new(size: BoardSize, mode: GameMode) -> Self {
        let presses = match mode {
            GameMode::Standard => Some(BitGrid::new(size)),
            GameMode::LightsOnly => None,
        };
        log::debug!("new {mode} session on a {size}x{size} board");
        Self {
            size,
            mode,
            lights: BitGrid::new(size),
            presses,
            patterns: OnceCell::new(),
            moves: 0,
        }
    }

    /// Returns the board size.
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the session mode.
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the light grid.
    #[must_use]
    pub const fn lights(&self) -> &BitGrid {
        &self.lights
    }

    /// Returns whether every light is off.
    ///
    /// Polled by the caller; a solved transition is never pushed.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.lights.is_all_off()
    }

    /// Returns the minimum number of presses that solves the current
    /// board, or `None` in lights-only mode.
    ///
    /// The count is derived on demand by minimizing the press parity
    /// against the board's quiet patterns, so it is exact after any mix of
    /// presses and scrambles. The first standard-mode call pays for
    /// pattern extraction; see
    /// [`QuietPatterns::compute`](lightsout_solver::QuietPatterns::compute).
    ///
    /// Lights-only mode forbids pressing an unlit cell, which changes the
    /// reachable-state structure and invalidates the unconstrained
    /// null-space argument, so no minimum is reported there.
    #[must_use]
    #[expect(clippy::missing_panics_doc)] // parity and patterns share one board size
    pub fn min_press_count(&self) -> Option<usize> {
        let presses = self.presses.as_ref()?;
        let best = Optimizer::new(self.quiet_patterns())
            .minimize(presses)
            .expect("press parity matches pattern board size");
        Some(best.count)
    }

    /// Returns the press parity accumulated since the last scramble, or
    /// `None` in lights-only mode.
    ///
    /// Replaying every set cell of this grid solves the board. A scramble
    /// stores the parity in minimized form, so right after one the grid is
    /// also a shortest solution.
    #[must_use]
    pub const fn press_parity(&self) -> Option<&BitGrid> {
        self.presses.as_ref()
    }

    /// Returns the number of presses made since the last scramble.
    #[must_use]
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Presses the cell at `pos`, toggling it and its orthogonal
    /// neighbors.
    ///
    /// In standard mode the parity grid is toggled at `pos` as well (the
    /// press itself, not its neighbors). Nothing is recomputed here;
    /// querying the minimum is deferred to
    /// [`min_press_count`](Self::min_press_count).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Grid`] if `pos` is outside the board; the
    /// session is left unchanged.
    pub fn press(&mut self, pos: Position) -> Result<(), GameError> {
        self.lights.apply_press(pos)?;
        self.moves += 1;
        if let Some(presses) = &mut self.presses {
            // in bounds, apply_press above already checked
            presses.toggle(pos)?;
        }
        Ok(())
    }

    /// Scrambles the board using the thread-local RNG.
    ///
    /// # Errors
    ///
    /// See [`scramble_with_rng`](Self::scramble_with_rng).
    pub fn scramble(&mut self) -> Result<(), GameError> {
        self.scramble_with_rng(&mut rand::rng())
    }

    /// Scrambles the board by replaying a random press sequence.
    ///
    /// Performs between `n² − n + 1` and `n²` random presses, which keeps
    /// the result within the known worst-case solvability bound of `n²`
    /// presses. A scramble that happens to land back on the solved board
    /// is discarded and retried.
    ///
    /// Afterwards the move counter is zero and, in standard mode, the
    /// press parity holds a minimal solution of the new board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ScrambleRetriesExhausted`] if every attempt
    /// produced a solved board. With a non-degenerate RNG this only
    /// happens on the smallest boards by astronomical coincidence; the
    /// session is left unchanged.
    #[expect(clippy::missing_panics_doc)] // parity and patterns share one board size
    pub fn scramble_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let side = self.size.get();
        for attempt in 0..MAX_SCRAMBLE_RETRIES {
            let mut lights = BitGrid::new(self.size);
            let mut presses = BitGrid::new(self.size);
            let clicks = self.size.cell_count() - rng.random_range(0..usize::from(side));
            for _ in 0..clicks {
                let pos = Position::new(rng.random_range(0..side), rng.random_range(0..side));
                lights.apply_press(pos)?;
                presses.toggle(pos)?;
            }
            if lights.is_all_off() {
                log::debug!("scramble attempt {attempt} landed on a solved board; retrying");
                continue;
            }

            if self.presses.is_some() {
                let best = Optimizer::new(self.quiet_patterns())
                    .minimize(&presses)
                    .expect("press parity matches pattern board size");
                log::debug!(
                    "scrambled with {clicks} clicks; minimum solution is {} presses",
                    best.count
                );
                self.presses = Some(best.presses);
            } else {
                log::debug!("scrambled with {clicks} clicks");
            }
            self.lights = lights;
            self.moves = 0;
            return Ok(());
        }
        Err(GameError::ScrambleRetriesExhausted {
            retries: MAX_SCRAMBLE_RETRIES,
        })
    }

    fn quiet_patterns(&self) -> &QuietPatterns {
        self.patterns
            .get_or_init(|| QuietPatterns::compute(self.size))
    }
}

//! Game error types.

use derive_more::{Display, Error, From};
use lightsout_core::GridError;

/// Errors produced by puzzle-state operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// A grid operation failed, e.g. a press outside the board.
    #[display("{_0}")]
    Grid(GridError),

    /// Scrambling kept producing already-solved boards.
    #[display("scramble produced a solved board {retries} times in a row")]
    #[from(ignore)]
    ScrambleRetriesExhausted {
        /// Number of attempts made before giving up.
        retries: usize,
    },
}

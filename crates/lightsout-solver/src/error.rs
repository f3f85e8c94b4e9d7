//! Solver error types.

use derive_more::{Display, Error};

/// Errors produced by the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolverError {
    /// A press vector was minimized against patterns of a different board
    /// size.
    #[display(
        "press vector is for a {vector}x{vector} board, patterns for {patterns}x{patterns}"
    )]
    SizeMismatch {
        /// Side length of the press vector.
        vector: u8,
        /// Side length of the quiet-pattern set.
        patterns: u8,
    },
}

//! Minimum-press solving for Lights Out boards.
//!
//! A press sequence that toggles no light is a *quiet pattern*: an element
//! of the null space of the board's toggle-adjacency matrix over GF(2).
//! XORing a quiet pattern into any valid press vector yields another valid
//! press vector for the same board state, so the minimum number of presses
//! is found by searching the quiet-pattern space for the combination of
//! lowest Hamming weight.
//!
//! - [`quiet_patterns`]: Extracts the per-size quiet-pattern basis from
//!   the adjacency matrix ([`QuietPatterns`])
//! - [`optimizer`]: Rewrites a press vector into its minimum-weight
//!   equivalent ([`Optimizer`])
//!
//! Pattern extraction reduces an n²×n² matrix and is the one expensive
//! operation in the engine; compute it once per board size and keep the
//! result for the lifetime of the board.
//!
//! # Examples
//!
//! ```
//! use lightsout_core::BitGrid;
//! use lightsout_solver::{Optimizer, QuietPatterns};
//!
//! // The 4x4 board has a 4-dimensional null space.
//! let patterns = QuietPatterns::compute(lightsout_core::BoardSize::new(4)?);
//! assert_eq!(patterns.basis_len(), 4);
//!
//! // A full quiet pattern is a wasteful but valid press sequence; the
//! // optimizer reduces it to the empty one.
//! let wasteful = patterns.basis()[0].clone();
//! let best = Optimizer::new(&patterns).minimize(&wasteful)?;
//! assert_eq!(best.count, 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod optimizer;
pub mod quiet_patterns;

pub use self::{
    error::SolverError,
    optimizer::{Minimized, Optimizer},
    quiet_patterns::QuietPatterns,
};

//! Interactive Lights Out game sessions.
//!
//! A session wraps the light grid with move tracking, scrambling, and, in
//! [`GameMode::Standard`], an exact on-demand minimum-press count backed
//! by the solver.
//!
//! - [`state`]: The session state machine ([`PuzzleState`])
//! - [`mode`]: Session modes ([`GameMode`])
//! - [`error`]: Error types ([`GameError`])
//!
//! # Examples
//!
//! ```
//! use lightsout_core::BoardSize;
//! use lightsout_game::{GameMode, PuzzleState};
//! use rand::SeedableRng as _;
//!
//! let mut game = PuzzleState::new(BoardSize::new(5)?, GameMode::Standard);
//! let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(7);
//! game.scramble_with_rng(&mut rng)?;
//!
//! assert!(!game.is_solved());
//! // The stored press parity is the shortest way back to all-off.
//! let solution = game.press_parity().unwrap().clone();
//! for pos in solution.lit_positions() {
//!     game.press(pos)?;
//! }
//! assert!(game.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod mode;
pub mod state;

pub use self::{error::GameError, mode::GameMode, state::PuzzleState};

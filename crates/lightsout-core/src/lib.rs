//! Core data structures for Lights Out boards.
//!
//! This crate provides the fundamental types shared by the solver and game
//! crates: validated board sizes, board positions, and a bit-packed boolean
//! grid that owns the press/toggle rule.
//!
//! # Overview
//!
//! - [`board_size`]: Validated board side length ([`BoardSize`])
//! - [`position`]: Board coordinates in row/column form ([`Position`])
//! - [`grid`]: Bit-packed n×n boolean grid ([`BitGrid`]) with the press
//!   rule, XOR combination, and Hamming weight
//! - [`error`]: Error types shared by grid operations ([`GridError`])
//!
//! # Examples
//!
//! ```
//! use lightsout_core::{BitGrid, BoardSize, Position};
//!
//! let size = BoardSize::new(3)?;
//! let mut grid = BitGrid::new(size);
//!
//! // Pressing the center toggles it and its four neighbors.
//! grid.apply_press(Position::new(1, 1))?;
//! assert_eq!(grid.count_ones(), 5);
//!
//! // Pressing again undoes it: toggles are involutive.
//! grid.apply_press(Position::new(1, 1))?;
//! assert!(grid.is_all_off());
//! # Ok::<(), lightsout_core::GridError>(())
//! ```

pub mod board_size;
pub mod error;
pub mod grid;
pub mod position;

// Re-export commonly used types
pub use self::{board_size::BoardSize, error::GridError, grid::BitGrid, position::Position};

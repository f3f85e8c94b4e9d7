//! Finite-field arithmetic and Gauss–Jordan elimination.
//!
//! This crate provides the linear-algebra engine behind quiet-pattern
//! extraction:
//!
//! - [`field`]: The [`Field`] contract and [`PrimeField`], integers modulo a
//!   prime with extended-Euclidean inversion
//! - [`matrix`]: A field-generic [`Matrix`] with in-place Gauss–Jordan
//!   reduction to reduced row-echelon form
//! - [`gf2`]: [`Gf2Matrix`], a bit-packed GF(2) specialization where
//!   normalization and elimination degenerate to row XORs; this is the
//!   production path for the n²×n² toggle-adjacency matrices
//!
//! Matrices here are transient: they are created for one elimination and
//! discarded once the null-space basis has been read off.
//!
//! # Examples
//!
//! ```
//! use lightsout_algebra::{Field, Matrix, PrimeField};
//!
//! let field = PrimeField::new(7)?;
//! let mut m = Matrix::new(2, 3, field);
//! m.set(0, 0, 2)?;
//! m.set(0, 1, 1)?;
//! m.set(0, 2, 3)?;
//! m.set(1, 0, 4)?;
//! m.set(1, 1, 2)?;
//! m.set(1, 2, 6)?;
//!
//! // Row 1 is twice row 0, so reduction leaves a single pivot row.
//! m.reduce_to_row_echelon()?;
//! assert_eq!(m.rank(), 1);
//! # Ok::<(), lightsout_algebra::AlgebraError>(())
//! ```

pub mod error;
pub mod field;
pub mod gf2;
pub mod matrix;

pub use self::{
    error::AlgebraError,
    field::{Field, PrimeField},
    gf2::Gf2Matrix,
    matrix::Matrix,
};

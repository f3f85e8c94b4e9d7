//! Error types for field arithmetic and matrix operations.

use derive_more::{Display, Error};

/// Errors produced by field construction, field arithmetic, and matrix
/// access.
///
/// Arithmetic failures propagate out of an elimination rather than being
/// silently replaced by a default value; a failed elimination leaves no
/// usable result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum AlgebraError {
    /// A prime field was constructed with a modulus below 2.
    ///
    /// Primality itself is not validated; a composite modulus is only
    /// detected later, when an inversion fails.
    #[display("field modulus must be at least 2, got {modulus}")]
    InvalidModulus {
        /// The rejected modulus.
        modulus: u64,
    },

    /// A value outside `[0, p)` was used as an element of `PrimeField(p)`.
    #[display("{value} is not an element of the field of order {modulus}")]
    NotAnElement {
        /// The rejected value.
        value: u64,
        /// The modulus of the field it was offered to.
        modulus: u64,
    },

    /// The reciprocal of the field's zero element was requested.
    #[display("division by zero")]
    DivisionByZero,

    /// Extended-Euclidean inversion terminated with gcd ≠ 1.
    ///
    /// Every nonzero element of a prime field has a reciprocal, so this is
    /// the symptom of a composite modulus.
    #[display("element has no reciprocal: modulus {modulus} is not prime")]
    NotInvertible {
        /// The modulus of the offending field.
        modulus: u64,
    },

    /// A matrix access used a row or column index outside the matrix.
    #[display("entry ({row}, {col}) is outside a {rows}x{cols} matrix")]
    OutOfBounds {
        /// Requested row index.
        row: usize,
        /// Requested column index.
        col: usize,
        /// Number of rows in the matrix.
        rows: usize,
        /// Number of columns in the matrix.
        cols: usize,
    },
}

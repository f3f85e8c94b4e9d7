//! Exact press-vector minimization.

use lightsout_core::BitGrid;

use crate::{QuietPatterns, SolverError};

/// Result of minimizing a press vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minimized {
    /// The minimum-weight press vector equivalent to the input.
    pub presses: BitGrid,
    /// Number of pressed cells in [`presses`](Self::presses).
    pub count: usize,
}

/// Rewrites press vectors into their minimum-weight equivalents.
///
/// XORing a quiet pattern into a press vector changes which cells are
/// pressed without changing the effect on the lights, and every press
/// vector equivalent to the input differs from it by exactly one element
/// of the null space. Minimization therefore enumerates the full span of
/// the basis: the null-space dimension is at most eight for every
/// supported board size, so there are at most 256 candidates, each a
/// handful of word XORs. The result is the exact minimum, and ties keep
/// the earliest candidate, so an already-minimal input comes back
/// unchanged.
///
/// # Examples
///
/// ```
/// use lightsout_core::{BitGrid, BoardSize};
/// use lightsout_solver::{Optimizer, QuietPatterns};
///
/// let patterns = QuietPatterns::compute(BoardSize::new(5)?);
/// let optimizer = Optimizer::new(&patterns);
///
/// // Pressing every cell of a 5x5 board is wasteful: XORing in the
/// // heaviest quiet pattern (16 cells) leaves an equivalent 9-press set.
/// let everything = {
///     let mut g = BitGrid::new(BoardSize::new(5)?);
///     g.fill(true);
///     g
/// };
/// let best = optimizer.minimize(&everything)?;
/// assert_eq!(best.count, 9);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Optimizer<'a> {
    patterns: &'a QuietPatterns,
}

impl<'a> Optimizer<'a> {
    /// Creates an optimizer over the given quiet-pattern basis.
    #[must_use]
    pub const fn new(patterns: &'a QuietPatterns) -> Self {
        Self { patterns }
    }

    /// Returns the minimum-weight press vector equivalent to `presses`.
    ///
    /// The input is not modified; the returned [`Minimized`] carries the
    /// rewritten vector and its press count. With an empty basis the input
    /// is already the unique solution and is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::SizeMismatch`] if `presses` is for a
    /// different board size than the pattern set.
    pub fn minimize(&self, presses: &BitGrid) -> Result<Minimized, SolverError> {
        if presses.size() != self.patterns.size() {
            return Err(SolverError::SizeMismatch {
                vector: presses.size().get(),
                patterns: self.patterns.size().get(),
            });
        }

        let basis = self.patterns.basis();
        let mut best = presses.clone();
        let mut best_count = best.count_ones();
        for mask in 1_u32..(1 << basis.len()) {
            let mut candidate = presses.clone();
            for (i, pattern) in basis.iter().enumerate() {
                if mask >> i & 1 != 0 {
                    candidate ^= pattern;
                }
            }
            let count = candidate.count_ones();
            if count < best_count {
                best = candidate;
                best_count = count;
            }
        }
        log::trace!(
            "minimized press vector from {} to {best_count} presses",
            presses.count_ones()
        );

        Ok(Minimized {
            presses: best,
            count: best_count,
        })
    }
}

//! Session modes.

use derive_more::Display;

/// How much solver machinery a puzzle session carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum GameMode {
    /// Tracks press parity alongside the lights, so the exact minimum
    /// press count can be derived at any time.
    ///
    /// The first minimum query or scramble in this mode pays for
    /// quiet-pattern extraction; see
    /// [`QuietPatterns::compute`](lightsout_solver::QuietPatterns::compute).
    #[default]
    #[display("standard")]
    Standard,

    /// Tracks only the lights.
    ///
    /// Pressing an unlit cell is a rule violation in this play variant,
    /// which breaks the null-space argument behind the solver; the
    /// minimum press count is unknown for the whole session.
    #[display("lights-only")]
    LightsOnly,
}

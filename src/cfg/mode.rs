//! Solving strategy
#[cfg(feature = "serde")]
use serde::Deserialize;

/// Solving strategy used when enough references are gathered.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub enum SolveMode {
    /// Closed form multilateration over three ranged references.
    /// Reports without timing information are rejected at ingestion.
    #[default]
    Ranged,
    /// Like [SolveMode::Ranged], but reports without timing are
    /// still admitted (position only) and the solve degrades to the
    /// centroid of the three most recent reference positions when any
    /// of them lacks a range. Cruder, clearly tagged in the solution.
    CentroidFallback,
}

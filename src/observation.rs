//! Reference observation
use hifitime::Epoch;
use nalgebra::Vector2;

/// One reference emitter's contribution at a point in time:
/// its own plane position and the estimated range to the tracked
/// object, derived from signal time of flight.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceObservation {
    /// Stable emitter identity.
    pub id: String,
    /// Emitter plane position [km].
    pub position: Vector2<f64>,
    /// Estimated emitter to object range [km]. Always finite and non
    /// negative when present. Absent for position only contributions
    /// (centroid fallback).
    pub range: Option<f64>,
    /// Receipt time at the engine.
    pub observed_at: Epoch,
}

impl ReferenceObservation {
    /// Age of this observation as seen from `now`.
    pub fn age(&self, now: Epoch) -> hifitime::Duration {
        now - self.observed_at
    }
}

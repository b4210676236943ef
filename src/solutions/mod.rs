//! Position estimates
use hifitime::Epoch;
use nalgebra::Vector2;

#[cfg(feature = "serde")]
use serde::Serialize;

mod validator;

pub use validator::{InvalidationCause, Validator};

/// How a [PositionEstimate] was obtained. Lower fidelity modes are
/// clearly distinguished so consumers can weigh them accordingly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Provenance {
    /// Closed form multilateration over three ranged references.
    Ranged,
    /// Centroid of the reference positions: cruder estimate, formed
    /// when precise ranges were unavailable.
    Centroid,
    /// The tracked object broadcast its own position.
    DirectOverride,
}

/// Geometry quality indicator attached to ranged solutions.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum GeometryQuality {
    /// Well conditioned reference geometry.
    #[default]
    Good,
    /// The solve succeeded but the references were nearly collinear:
    /// the solution is exact yet highly sensitive to range noise.
    NearDegenerate,
}

/// The engine's belief about the tracked object location at one
/// point in time. Overwritten atomically on each accepted solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PositionEstimate {
    /// [Epoch] of acceptance.
    pub epoch: Epoch,
    /// Estimated plane position [km].
    pub position: Vector2<f64>,
    /// How this estimate was formed.
    pub provenance: Provenance,
    /// Geometry conditioning for ranged solves,
    /// [GeometryQuality::Good] otherwise.
    pub quality: GeometryQuality,
}

impl PositionEstimate {
    /// Builds a new [PositionEstimate].
    pub(crate) fn new(
        epoch: Epoch,
        position: Vector2<f64>,
        provenance: Provenance,
        quality: GeometryQuality,
    ) -> Self {
        Self {
            epoch,
            position,
            provenance,
            quality,
        }
    }
}

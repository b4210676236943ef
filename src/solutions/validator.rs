use log::debug;
use thiserror::Error;

use crate::{cfg::OperatingEnvelope, solutions::PositionEstimate};

/// Reason why a candidate estimate has been invalidated.
#[derive(Clone, Debug, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InvalidationCause {
    /// One coordinate is NaN or infinite.
    #[error("non finite solution")]
    NonFinite,
    /// The solved position lies outside the operating envelope:
    /// physically implausible for this deployment.
    #[error("({x:.3}, {y:.3}): outside operating envelope")]
    OutOfEnvelope { x: f64, y: f64 },
}

/// Candidate estimate validation. Rejected candidates never become
/// the published position: the engine clears to unknown instead.
pub struct Validator {}

impl Validator {
    /// Accepts iff both coordinates are finite and within the
    /// envelope rectangle.
    pub fn validate(
        estimate: &PositionEstimate,
        envelope: &OperatingEnvelope,
    ) -> Result<(), InvalidationCause> {
        let (x, y) = (estimate.position[0], estimate.position[1]);
        if !x.is_finite() || !y.is_finite() {
            return Err(InvalidationCause::NonFinite);
        }
        if !envelope.contains(estimate.position) {
            return Err(InvalidationCause::OutOfEnvelope { x, y });
        }
        debug!("({:.3}, {:.3}): accepted", x, y);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{InvalidationCause, Validator};
    use crate::cfg::OperatingEnvelope;
    use crate::solutions::{GeometryQuality, PositionEstimate, Provenance};
    use hifitime::Epoch;
    use nalgebra::Vector2;

    fn estimate(x: f64, y: f64) -> PositionEstimate {
        PositionEstimate::new(
            Epoch::from_gregorian_utc_at_midnight(2025, 1, 1),
            Vector2::new(x, y),
            Provenance::Ranged,
            GeometryQuality::Good,
        )
    }

    #[test]
    fn in_envelope_is_accepted() {
        let envelope = OperatingEnvelope::new(-10.0, 10.0, -10.0, 10.0);
        assert!(Validator::validate(&estimate(5.0, -5.0), &envelope).is_ok());
    }

    #[test]
    fn out_of_envelope_is_rejected() {
        let envelope = OperatingEnvelope::new(-10.0, 10.0, -10.0, 10.0);
        assert_eq!(
            Validator::validate(&estimate(10.5, 0.0), &envelope),
            Err(InvalidationCause::OutOfEnvelope { x: 10.5, y: 0.0 }),
        );
    }

    #[test]
    fn non_finite_is_rejected() {
        let envelope = OperatingEnvelope::default();
        assert_eq!(
            Validator::validate(&estimate(f64::NAN, 0.0), &envelope),
            Err(InvalidationCause::NonFinite),
        );
    }
}

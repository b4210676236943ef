//! Inbound reports and their normalization
use hifitime::Epoch;
use nalgebra::Vector2;

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::{
    cfg::{Config, SolveMode},
    observation::ReferenceObservation,
    Error,
};

/// Wire shaped report, one decoded transport message. Every field
/// except `id` is optional on the wire: validation happens here, not
/// in the transport.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct RawReport {
    /// Emitter identity, or the self report identity for a position
    /// broadcast by the tracked object itself.
    pub id: String,
    /// Plane abscissa [km].
    #[cfg_attr(feature = "serde", serde(default))]
    pub x: Option<f64>,
    /// Plane ordinate [km].
    #[cfg_attr(feature = "serde", serde(default))]
    pub y: Option<f64>,
    /// Emission timestamp [ms].
    #[cfg_attr(feature = "serde", serde(default, rename = "sentAt"))]
    pub sent_at: Option<f64>,
    /// Reception timestamp [ms].
    #[cfg_attr(feature = "serde", serde(default, rename = "receivedAt"))]
    pub received_at: Option<f64>,
}

/// Outcome of normalizing one [RawReport].
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedReport {
    /// The tracked object broadcast its own position: authoritative,
    /// bypasses the solver.
    SelfReport(Vector2<f64>),
    /// A reference emitter contribution, ready to enter the pool.
    Reference(ReferenceObservation),
}

impl RawReport {
    /// Convenience constructor for a fully ranged reference report.
    pub fn reference(id: &str, x: f64, y: f64, sent_at: f64, received_at: f64) -> Self {
        Self {
            id: id.to_string(),
            x: Some(x),
            y: Some(y),
            sent_at: Some(sent_at),
            received_at: Some(received_at),
        }
    }

    /// Convenience constructor for a position only report.
    pub fn position_only(id: &str, x: f64, y: f64) -> Self {
        Self {
            id: id.to_string(),
            x: Some(x),
            y: Some(y),
            sent_at: None,
            received_at: None,
        }
    }

    /// Validates this report and turns it into a [NormalizedReport],
    /// timestamped at receipt time `now`. No partial observation is
    /// ever produced: any missing or non finite required field fails
    /// the whole report.
    pub fn normalize(&self, now: Epoch, cfg: &Config) -> Result<NormalizedReport, Error> {
        let x = finite(self.x, "x")?;
        let y = finite(self.y, "y")?;
        let position = Vector2::new(x, y);

        if self.id == cfg.self_report_id {
            return Ok(NormalizedReport::SelfReport(position));
        }

        let range = match (self.sent_at, self.received_at) {
            (Some(_), Some(_)) => {
                let sent_at = finite(self.sent_at, "sentAt")?;
                let received_at = finite(self.received_at, "receivedAt")?;
                if received_at < sent_at {
                    return Err(Error::ReceivedPriorSent);
                }
                // time of flight [ms] to range [km]
                let range = cfg.signal_speed_km_s * (received_at - sent_at) / 1000.0;
                if !range.is_finite() || range < 0.0 {
                    return Err(Error::InvalidRange(range));
                }
                Some(range)
            },
            (None, None) if cfg.solve_mode == SolveMode::CentroidFallback => None,
            (None, _) => return Err(Error::MissingField("sentAt")),
            (_, None) => return Err(Error::MissingField("receivedAt")),
        };

        Ok(NormalizedReport::Reference(ReferenceObservation {
            id: self.id.clone(),
            position,
            range,
            observed_at: now,
        }))
    }
}

/*
 * Requires one optional wire field to be both present and finite.
 * Self reports reuse the coordinate path with their own error.
 */
fn finite(field: Option<f64>, name: &'static str) -> Result<f64, Error> {
    match field {
        Some(value) if value.is_finite() => Ok(value),
        Some(_) => Err(Error::NonFiniteField(name)),
        None if name == "x" || name == "y" => Err(Error::MissingCoordinate),
        None => Err(Error::MissingField(name)),
    }
}

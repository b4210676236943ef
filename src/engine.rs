//! Position estimation engine
use hifitime::Epoch;
use log::{debug, warn};

use crate::{
    cfg::Config,
    pool::ReferencePool,
    report::{NormalizedReport, RawReport},
    solutions::{
        GeometryQuality, InvalidationCause, PositionEstimate, Provenance, Validator,
    },
    solver::{self, RangedReference},
    Error,
};

/// Published tracking state change.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionUpdate {
    /// A new accepted estimate.
    Fix(PositionEstimate),
    /// The published position was invalidated: the object location
    /// is unknown until the next accepted estimate.
    Unknown(InvalidationCause),
}

/// Outbound position sink. Subscribers are notified whenever the
/// published position changes, never otherwise.
pub trait PositionSink {
    fn on_update(&mut self, update: &PositionUpdate);
}

/// The estimation engine: ingests one decoded report at a time to
/// completion (normalize, store, prune, solve, validate, publish).
/// Single threaded by construction, which establishes a total order
/// over state transitions. "Now" is supplied by the caller at each
/// ingestion: the engine never reads a clock and never spawns timers.
pub struct Engine {
    /// Configuration, immutable for the engine lifetime.
    cfg: Config,
    /// Bounded pool of fresh reference observations.
    pool: ReferencePool,
    /// Current belief about the object location, None while idle.
    position: Option<PositionEstimate>,
    /// Subscribed outbound sinks.
    sinks: Vec<Box<dyn PositionSink>>,
}

impl Engine {
    /// Builds a new idle [Engine] from this [Config].
    pub fn new(cfg: Config) -> Self {
        let pool = ReferencePool::new(cfg.reference_capacity);
        Self {
            cfg,
            pool,
            position: None,
            sinks: Vec::new(),
        }
    }

    /// Subscribes an outbound [PositionSink].
    pub fn subscribe(&mut self, sink: Box<dyn PositionSink>) {
        self.sinks.push(sink);
    }

    /// Latest accepted estimate, None while the position is unknown.
    pub fn position(&self) -> Option<&PositionEstimate> {
        self.position.as_ref()
    }

    /// True when a position is currently published.
    pub fn is_tracking(&self) -> bool {
        self.position.is_some()
    }

    /// Drops all state and returns to idle. Subscriptions survive.
    pub fn reset(&mut self) {
        self.pool.clear();
        self.position = None;
    }

    /// Ingests one decoded report, timestamped at receipt time `now`,
    /// and runs it to completion. Returns the published update when
    /// the tracking state changed, None otherwise. Bad input is never
    /// fatal: malformed reports are discarded with a warning and do
    /// not mutate any state.
    pub fn on_report(&mut self, report: &RawReport, now: Epoch) -> Option<PositionUpdate> {
        let candidate = match report.normalize(now, &self.cfg) {
            Ok(NormalizedReport::SelfReport(position)) => {
                debug!("\"{}\": direct position override", report.id);
                PositionEstimate::new(
                    now,
                    position,
                    Provenance::DirectOverride,
                    GeometryQuality::Good,
                )
            },
            Ok(NormalizedReport::Reference(observation)) => {
                self.pool.upsert(observation);
                self.pool.prune_stale(now, self.cfg.max_stale_time());
                match self.solve(now) {
                    Ok(estimate) => estimate,
                    Err(Error::InsufficientData { available, required }) => {
                        // normal waiting state, previous fix retained
                        debug!("waiting: {} of {} references", available, required);
                        return None;
                    },
                    Err(error) => {
                        // failed attempt: the previous fix remains valid
                        warn!("solve aborted: {}", error);
                        return None;
                    },
                }
            },
            Err(error) => {
                warn!("\"{}\": discarded: {}", report.id, error);
                return None;
            },
        };

        match Validator::validate(&candidate, &self.cfg.envelope) {
            Ok(()) => {
                if self.position.as_ref() == Some(&candidate) {
                    // published value did not change: sinks stay quiet
                    return None;
                }
                self.position = Some(candidate.clone());
                self.publish(PositionUpdate::Fix(candidate))
            },
            Err(cause) => {
                warn!("candidate rejected: {}", cause);
                if self.position.take().is_some() {
                    self.publish(PositionUpdate::Unknown(cause))
                } else {
                    // already idle: published value did not change
                    None
                }
            },
        }
    }

    /*
     * Solve attempt over the 3 most recent fresh observations.
     * All three ranged: closed form multilateration. Any range
     * missing (centroid fallback admissions): centroid estimate.
     */
    fn solve(&self, now: Epoch) -> Result<PositionEstimate, Error> {
        let snapshot = self.pool.snapshot(3);
        if snapshot.len() < 3 {
            return Err(Error::InsufficientData {
                available: snapshot.len(),
                required: 3,
            });
        }

        let ranged: Option<Vec<RangedReference>> = snapshot
            .iter()
            .map(|obs| obs.range.map(|range| (obs.position, range)))
            .collect();

        match ranged {
            Some(references) => {
                let solution = solver::trilaterate(
                    &[references[0], references[1], references[2]],
                    self.cfg.near_degenerate_threshold,
                )?;
                Ok(PositionEstimate::new(
                    now,
                    solution.position,
                    Provenance::Ranged,
                    solution.quality,
                ))
            },
            None => {
                let positions: Vec<_> = snapshot.iter().map(|obs| obs.position).collect();
                let position = solver::centroid(&positions);
                debug!("degraded centroid estimate: ({:.3}, {:.3})", position[0], position[1]);
                Ok(PositionEstimate::new(
                    now,
                    position,
                    Provenance::Centroid,
                    GeometryQuality::Good,
                ))
            },
        }
    }

    fn publish(&mut self, update: PositionUpdate) -> Option<PositionUpdate> {
        for sink in self.sinks.iter_mut() {
            sink.on_update(&update);
        }
        Some(update)
    }
}

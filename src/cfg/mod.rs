//! Engine configuration
use hifitime::Duration;

#[cfg(feature = "serde")]
use serde::Deserialize;

mod envelope;
mod mode;

pub use envelope::OperatingEnvelope;
pub use mode::SolveMode;

fn default_signal_speed() -> f64 {
    // radio propagation in air [km/s]
    300_000.0
}

fn default_max_stale_ms() -> f64 {
    1_000.0
}

fn default_capacity() -> usize {
    3
}

fn default_self_report_id() -> String {
    "object".to_string()
}

fn default_near_degenerate() -> f64 {
    1.0E-6
}

/// Engine configuration. All fields have sane defaults: a plain
/// [Config::default] tracks ranged reports at radio propagation speed,
/// with a 1 second staleness window and a pool of 3 references.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// Signal propagation speed [km/s] used to convert time of flight
    /// into range. 300 000 km/s (radio in air) is the default value.
    #[cfg_attr(feature = "serde", serde(default = "default_signal_speed"))]
    pub signal_speed_km_s: f64,

    /// Observations older than this (at ingestion time) are pruned
    /// prior to any solve attempt [ms].
    #[cfg_attr(feature = "serde", serde(default = "default_max_stale_ms"))]
    pub max_stale_ms: f64,

    /// Maximum number of reference observations retained at any time.
    /// The solve always uses the 3 most recent ones.
    #[cfg_attr(feature = "serde", serde(default = "default_capacity"))]
    pub reference_capacity: usize,

    /// Solving strategy: ranged multilateration only, or degrade to a
    /// centroid estimate when ranges are unavailable.
    #[cfg_attr(feature = "serde", serde(default))]
    pub solve_mode: SolveMode,

    /// Identity under which the tracked object broadcasts its own
    /// position. Such reports bypass the solver entirely.
    #[cfg_attr(feature = "serde", serde(default = "default_self_report_id"))]
    pub self_report_id: String,

    /// Sanity bounds for accepted solutions. Anything solved outside
    /// this rectangle clears the published position.
    #[cfg_attr(feature = "serde", serde(default))]
    pub envelope: OperatingEnvelope,

    /// Below this |denominator|, a (still exact) solution is tagged
    /// [GeometryQuality::NearDegenerate](crate::solutions::GeometryQuality).
    #[cfg_attr(feature = "serde", serde(default = "default_near_degenerate"))]
    pub near_degenerate_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            signal_speed_km_s: default_signal_speed(),
            max_stale_ms: default_max_stale_ms(),
            reference_capacity: default_capacity(),
            solve_mode: SolveMode::default(),
            self_report_id: default_self_report_id(),
            envelope: OperatingEnvelope::default(),
            near_degenerate_threshold: default_near_degenerate(),
        }
    }
}

impl Config {
    /// Preset that degrades to centroid estimates when precise ranges
    /// are not available.
    pub fn centroid_fallback() -> Self {
        Self {
            solve_mode: SolveMode::CentroidFallback,
            ..Default::default()
        }
    }

    /// Staleness window as a [Duration].
    pub fn max_stale_time(&self) -> Duration {
        Duration::from_milliseconds(self.max_stale_ms)
    }
}

#[cfg(test)]
mod test {
    use super::Config;

    #[test]
    fn default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.signal_speed_km_s, 300_000.0);
        assert_eq!(cfg.reference_capacity, 3);
        assert_eq!(cfg.max_stale_time().to_seconds(), 1.0);
        assert_eq!(cfg.self_report_id, "object");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn partial_deserialization() {
        let cfg: Config = serde_json::from_str(
            r#"{
                "max_stale_ms": 250.0,
                "envelope": { "x_min": -50.0, "x_max": 50.0, "y_min": -50.0, "y_max": 50.0 }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.max_stale_ms, 250.0);
        assert_eq!(cfg.signal_speed_km_s, 300_000.0);
        assert_eq!(cfg.envelope.x_max, 50.0);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn partial_envelope_keeps_negative_half_plane() {
        // omitted bounds must match OperatingEnvelope::default(),
        // min bounds included
        let cfg: Config = serde_json::from_str(r#"{ "envelope": { "x_max": 50.0 } }"#).unwrap();
        assert_eq!(cfg.envelope.x_max, 50.0);
        assert_eq!(cfg.envelope.x_min, -10_000.0);
        assert_eq!(cfg.envelope.y_min, -10_000.0);
        assert_eq!(cfg.envelope.y_max, 10_000.0);
    }
}

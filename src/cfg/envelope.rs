//! Operating envelope
use nalgebra::Vector2;

#[cfg(feature = "serde")]
use serde::Deserialize;

fn default_bound() -> f64 {
    10_000.0
}

fn default_min_bound() -> f64 {
    -default_bound()
}

/// Rectangular operating envelope [km]. Solutions outside of it are
/// physically implausible for the deployment and get rejected: this
/// guards against garbage roots when the reference geometry is poor.
/// Immutable for the engine lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct OperatingEnvelope {
    #[cfg_attr(feature = "serde", serde(default = "default_min_bound"))]
    pub x_min: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_bound"))]
    pub x_max: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_min_bound"))]
    pub y_min: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_bound"))]
    pub y_max: f64,
}

impl Default for OperatingEnvelope {
    /// 20 000 km square centered on the origin: wide enough for any
    /// plausible emulation zone, narrow enough to reject garbage.
    fn default() -> Self {
        Self {
            x_min: default_min_bound(),
            x_max: default_bound(),
            y_min: default_min_bound(),
            y_max: default_bound(),
        }
    }
}

impl OperatingEnvelope {
    /// Builds a new [OperatingEnvelope] from its corner bounds.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// True if this position lies within bounds. NaN coordinates
    /// compare false on every bound, hence are never contained.
    pub fn contains(&self, position: Vector2<f64>) -> bool {
        position[0] >= self.x_min
            && position[0] <= self.x_max
            && position[1] >= self.y_min
            && position[1] <= self.y_max
    }
}

#[cfg(test)]
mod test {
    use super::OperatingEnvelope;
    use nalgebra::Vector2;

    #[test]
    fn containment() {
        let env = OperatingEnvelope::new(0.0, 100.0, 0.0, 100.0);
        assert!(env.contains(Vector2::new(50.0, 50.0)));
        assert!(env.contains(Vector2::new(0.0, 100.0)));
        assert!(!env.contains(Vector2::new(-0.1, 50.0)));
        assert!(!env.contains(Vector2::new(50.0, 100.1)));
    }

    #[test]
    fn nan_is_never_contained() {
        let env = OperatingEnvelope::default();
        assert!(!env.contains(Vector2::new(f64::NAN, 0.0)));
        assert!(!env.contains(Vector2::new(0.0, f64::NAN)));
    }
}

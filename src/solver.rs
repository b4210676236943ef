//! Closed form multilateration
use log::debug;
use nalgebra::Vector2;

use crate::{
    solutions::GeometryQuality,
    Error,
};

/// One ranged reference input to the solve: emitter position [km]
/// and estimated range to the object [km].
pub type RangedReference = (Vector2<f64>, f64);

/// Outcome of a successful ranged solve.
#[derive(Debug, Clone, PartialEq)]
pub struct RangedSolution {
    /// Solved plane position [km].
    pub position: Vector2<f64>,
    /// Conditioning of the reference geometry.
    pub quality: GeometryQuality,
}

/// Solves the intersection of three circles by linearization:
/// subtracting the first circle equation from the second and the
/// second from the third yields a 2x2 linear system, solved exactly
/// by Cramer's rule. Pure and deterministic: identical inputs give
/// identical solutions on every call.
///
/// An exactly zero determinant (collinear or coincident reference
/// positions) is a genuine degeneracy: the attempt fails, nothing is
/// approximated. A small but non zero determinant (below
/// `near_degenerate_threshold`) still solves exactly but the result
/// is tagged [GeometryQuality::NearDegenerate].
pub fn trilaterate(
    references: &[RangedReference; 3],
    near_degenerate_threshold: f64,
) -> Result<RangedSolution, Error> {
    let ((p1, r1), (p2, r2), (p3, r3)) = (references[0], references[1], references[2]);
    let (x1, y1) = (p1[0], p1[1]);
    let (x2, y2) = (p2[0], p2[1]);
    let (x3, y3) = (p3[0], p3[1]);

    let a = 2.0 * (x2 - x1);
    let b = 2.0 * (y2 - y1);
    let c = r1.powi(2) - r2.powi(2) - x1.powi(2) + x2.powi(2) - y1.powi(2) + y2.powi(2);

    let d = 2.0 * (x3 - x2);
    let e = 2.0 * (y3 - y2);
    let f = r2.powi(2) - r3.powi(2) - x2.powi(2) + x3.powi(2) - y2.powi(2) + y3.powi(2);

    let denominator = a * e - d * b;
    if denominator == 0.0 {
        return Err(Error::DegenerateGeometry);
    }

    let quality = if denominator.abs() < near_degenerate_threshold {
        debug!("near degenerate geometry: denominator={:.3e}", denominator);
        GeometryQuality::NearDegenerate
    } else {
        GeometryQuality::Good
    };

    let x = (c * e - f * b) / denominator;
    let y = (a * f - d * c) / denominator;

    Ok(RangedSolution {
        position: Vector2::new(x, y),
        quality,
    })
}

/// Arithmetic mean of the given reference positions: the degraded
/// estimate used when precise ranges are unavailable. The caller
/// passes the three most recent positions; the slice must not be
/// empty.
pub fn centroid(positions: &[Vector2<f64>]) -> Vector2<f64> {
    debug_assert!(!positions.is_empty(), "centroid of no positions");
    let sum: Vector2<f64> = positions.iter().sum();
    sum / positions.len() as f64
}

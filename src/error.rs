use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Every report must carry both plane coordinates.
    #[error("report is missing a coordinate")]
    MissingCoordinate,

    /// Reference reports must carry both plane coordinates and both
    /// timestamps (centroid fallback tolerates missing timing).
    #[error("reference report is missing field \"{0}\"")]
    MissingField(&'static str),

    /// Coordinates and timestamps must be finite numbers.
    /// NaN or infinite fields invalidate the whole report.
    #[error("non finite field \"{0}\"")]
    NonFiniteField(&'static str),

    /// Reception cannot predate emission: bad clocks or corrupt
    /// timestamps wind up here.
    #[error("physical non sense: received prior sent")]
    ReceivedPriorSent,

    /// The derived range is unusable (negative or non finite).
    #[error("invalid derived range: {0}")]
    InvalidRange(f64),

    /// The three reference positions are exactly collinear or
    /// coincident: the linearized system has no unique solution.
    /// We fail the attempt, we never approximate.
    #[error("degenerate reference geometry")]
    DegenerateGeometry,

    /// Fewer fresh reference observations than the solve requires.
    /// This is a normal waiting state, not a fault.
    #[error("insufficient data: {available} of {required} references")]
    InsufficientData { available: usize, required: usize },
}

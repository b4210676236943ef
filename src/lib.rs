#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod cfg;
mod engine;
mod error;
mod observation;
mod pool;
mod report;
mod solutions;
mod solver;

// prelude
pub mod prelude {
    pub use crate::cfg::{Config, OperatingEnvelope, SolveMode};
    pub use crate::engine::{Engine, PositionSink, PositionUpdate};
    pub use crate::observation::ReferenceObservation;
    pub use crate::pool::ReferencePool;
    pub use crate::report::{NormalizedReport, RawReport};
    pub use crate::solutions::{
        GeometryQuality, InvalidationCause, PositionEstimate, Provenance, Validator,
    };
    pub use crate::solver::{centroid, trilaterate, RangedReference, RangedSolution};
    // re-export
    pub use hifitime::{Duration, Epoch, Unit};
    pub use nalgebra::Vector2;
}

// pub export
pub use error::Error;

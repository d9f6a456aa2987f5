// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Invalid coordinate (lat {lat}, lng {lng}): {reason}")]
    InvalidCoordinate { lat: f64, lng: f64, reason: String },

    #[error("Ring is not closed: first {first:?} != last {last:?}")]
    OpenRing { first: (f64, f64), last: (f64, f64) },

    #[error("Triangulation failed: {reason}")]
    TriangulationFailed { reason: String },

    #[error("Geometric calculation failed: {operation}")]
    GeometricFailure { operation: String },

    #[error("No Voronoi cells found.")]
    EmptyVoronoiCells,
}

pub type MathResult<T> = Result<T, MathError>;

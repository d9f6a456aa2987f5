// src/math/point_distribution/voronoi/error.rs

use crate::math::error::MathError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VoronoiBuildError {
    #[error("Insufficient points at step '{step}': expected at least {expected}, got {actual}")]
    InsufficientPointsContext {
        step: String,
        expected: usize,
        actual: usize,
    },
    #[error("Duplicate candidate label '{label}' (generators {first} and {second})")]
    DuplicateLabel {
        label: String,
        first: usize,
        second: usize,
    },
    #[error("Triangulation failed during step '{step}': {reason}. Points involved: {point_count}")]
    TriangulationFailedContext {
        step: String,
        reason: String,
        point_count: usize,
    },
    #[error("Geometric failure during Voronoi step '{step}': {operation}")]
    GeometricFailureContext { step: String, operation: String },
}

impl From<VoronoiBuildError> for MathError {
    fn from(error: VoronoiBuildError) -> Self {
        match &error {
            VoronoiBuildError::InsufficientPointsContext {
                expected, actual, ..
            } => MathError::InsufficientPoints {
                expected: *expected,
                actual: *actual,
            },
            VoronoiBuildError::TriangulationFailedContext { .. } => MathError::TriangulationFailed {
                reason: error.to_string(),
            },
            VoronoiBuildError::DuplicateLabel { .. }
            | VoronoiBuildError::GeometricFailureContext { .. } => MathError::GeometricFailure {
                operation: error.to_string(),
            },
        }
    }
}

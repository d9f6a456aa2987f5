// ./src/lib.rs

// Eigene Module deklarieren
pub mod game;
pub mod math;

pub use game::tentacles::{
    Adjustment, TentacleAdjuster, TentacleConfig, TentacleError, TentacleQuestion,
    add_default_tentacles, adjust_per_tentacle,
};
pub use math::geometry::polygon::{AccumulatedRegion, GeoPolygon};
pub use math::types::{CandidatePoint, Coordinate};

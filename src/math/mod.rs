pub mod error;
pub mod geometry;
pub mod point_distribution;
pub mod probability;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{MathError, MathResult},
        geometry::{
            polygon::{AccumulatedRegion, CombineRule, GeoPolygon, PolygonBoolean},
            sphere::{DistanceUnit, ToleranceDisc, geodesic_polygon, great_circle, tolerance_disc},
        },
        point_distribution::voronoi::{VoronoiBuilder, VoronoiConfig, VoronoiDiagram},
        probability::SeedResource,
        types::*,
    };
}

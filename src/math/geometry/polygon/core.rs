// src/math/geometry/polygon/core.rs

// Datentypen für Polygone und Feature-Collections
pub mod polygon;
pub mod region;

pub use self::polygon::{GeoPolygon, MIN_RING_POINTS};
pub use self::region::AccumulatedRegion;

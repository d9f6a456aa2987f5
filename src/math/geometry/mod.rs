// src/math/geometry/mod.rs

// Deklaration der Haupt-Geometriemodule
pub mod polygon;
pub mod sphere;

// Re-Exporte für einen schnellen Zugriff auf die Kern-Geometrietypen,
// falls man nicht das gesamte `math::prelude` importieren möchte.

// Polygon-Exporte
pub use self::polygon::{
    AccumulatedRegion, BooleanOperation, CombineRule, GeoPolygon, PolygonBoolean, PolygonClipper,
    PolygonValidator, ValidationError, ValidationReport,
};

// Sphere-Exporte
pub use self::sphere::{
    DEFAULT_ARC_STEPS, DEFAULT_CIRCLE_STEPS, DistanceUnit, LongitudeFrame, ToleranceDisc, destination,
    distance_rad, geodesic_polygon, great_circle, tolerance_disc,
};

// src/math/geometry/polygon/mod.rs

// Deklaration der Untermodule für Polygon-spezifische Funktionalität
pub mod core; // GeoPolygon und AccumulatedRegion
pub mod operations; // Boolean-Operationen und Clipping
pub mod validation; // Enthält den PolygonValidator und verwandte Typen

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Polygon-Elemente
pub use self::core::{AccumulatedRegion, GeoPolygon, MIN_RING_POINTS};
pub use self::operations::{BooleanOperation, CombineRule, PolygonBoolean, PolygonClipper};
pub use self::validation::{PolygonValidator, ValidationError, ValidationReport};

// src/math/types/mod.rs
pub mod bounds;
pub mod coordinate;

pub use bounds::*;
pub use coordinate::*;

// Re-export häufig verwendete externe Typen
pub use geo::Coord;
pub use spade::Point2;

// Einheitliche Typen für das gesamte Modul.
// Planare Punkte liegen immer im (lng, lat)-Raum: x = Längengrad, y = Breitengrad.
pub type Point2D = Coord<f64>;
pub type SpadePoint = Point2<f64>;

/// Konvertiert planare Punkte in Spade-Punkte für die Triangulation.
pub fn to_spade_point(point: Point2D) -> SpadePoint {
    SpadePoint::new(point.x, point.y)
}

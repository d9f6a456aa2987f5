// src/math/geometry/sphere/mod.rs

// Deklaration der Untermodule für Kugel-spezifische Funktionalität
pub mod circle;
pub mod frame;
pub mod geodesic;
pub mod units;

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Kugel-Elemente
pub use self::circle::{DEFAULT_CIRCLE_STEPS, ToleranceDisc, tolerance_disc};
pub use self::frame::LongitudeFrame;
pub use self::geodesic::{
    DEFAULT_ARC_STEPS, destination, distance_rad, geodesic_polygon, great_circle,
};
pub use self::units::DistanceUnit;

// src/math/point_distribution/mod.rs

// Deklaration der verschiedenen Punktverteilungs-Methoden/Module
pub mod voronoi;

// Re-Exporte der wichtigsten Elemente aus den Untermodulen
pub use self::voronoi::{
    VoronoiBuildError, VoronoiBuilder, VoronoiCell, VoronoiConfig, VoronoiDiagram,
};

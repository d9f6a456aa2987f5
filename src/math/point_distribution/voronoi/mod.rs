// src/math/point_distribution/voronoi/mod.rs

// Deklaration der Untermodule für Voronoi-spezifische Funktionalität
pub mod builder;
pub mod config;
pub mod error;
pub mod voronoi_diagram; // Enthält VoronoiCell, VoronoiDiagram, VoronoiExtractor

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Voronoi-Elemente
pub use self::builder::VoronoiBuilder;
pub use self::config::VoronoiConfig;
pub use self::error::VoronoiBuildError;
pub use self::voronoi_diagram::{VoronoiCell, VoronoiDiagram, VoronoiExtractor, VoronoiSite};

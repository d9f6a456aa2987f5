// src/math/point_distribution/voronoi/builder.rs

use crate::math::{
    error::{MathError, MathResult},
    point_distribution::voronoi::{
        config::VoronoiConfig,
        error::VoronoiBuildError,
        voronoi_diagram::{VoronoiDiagram, VoronoiExtractor, VoronoiSite},
    },
    types::{Bounds2D, CandidatePoint, Point2D, SpadePoint, to_spade_point},
};
use log::debug;
use spade::{DelaunayTriangulation, Triangulation};
use std::collections::HashMap;

/// Zerlegt eine Menge beschrifteter Kandidatenpunkte in Voronoi-Zellen.
/// Orchestriert die Schritte: Label-Prüfung, Boundary-Bestimmung,
/// Delaunay-Triangulation und Zellextraktion.
pub struct VoronoiBuilder {
    config: VoronoiConfig,
}

impl VoronoiBuilder {
    pub fn new(config: VoronoiConfig) -> MathResult<Self> {
        config.validate()?; // Validiert die übergebene Konfiguration
        Ok(Self { config })
    }

    pub fn config(&self) -> &VoronoiConfig {
        &self.config
    }

    pub fn build(&self, candidates: &[CandidatePoint]) -> MathResult<VoronoiDiagram> {
        self.build_with_extent(candidates, &[])
    }

    /// Wie [`Self::build`], die abgeleitete Boundary umfasst aber zusätzlich `extent`
    /// (z.B. die Eckpunkte der Bounding Box eines Toleranzkreises).
    pub fn build_with_extent(
        &self,
        candidates: &[CandidatePoint],
        extent: &[Point2D],
    ) -> MathResult<VoronoiDiagram> {
        let step_description =
            |step_name: &str| format!("VoronoiBuilder::build - Step: {}", step_name);

        // 1. Labels prüfen
        let step_name = "LabelCheck";
        if candidates.is_empty() {
            return Err(VoronoiBuildError::InsufficientPointsContext {
                step: step_description(step_name),
                expected: 1,
                actual: 0,
            }
            .into());
        }
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(candidates.len());
        for (index, candidate) in candidates.iter().enumerate() {
            if let Some(&first) = seen.get(candidate.label.as_str()) {
                return Err(VoronoiBuildError::DuplicateLabel {
                    label: candidate.label.clone(),
                    first,
                    second: index,
                }
                .into());
            }
            seen.insert(candidate.label.as_str(), index);
        }

        // 2. Boundary bestimmen
        let step_name = "BoundsDetermination";
        let bounds = self.resolve_bounds(candidates, extent).ok_or_else(|| {
            MathError::from(VoronoiBuildError::GeometricFailureContext {
                step: step_description(step_name),
                operation: "fitted bounds do not overlap the globe".to_string(),
            })
        })?;
        debug!("{}: bounds {}", step_description(step_name), bounds);

        // 3. Delaunay-Triangulation in Einfügereihenfolge
        let step_name = "Triangulation";
        let mut triangulation: DelaunayTriangulation<SpadePoint> = DelaunayTriangulation::new();
        let mut sites = Vec::with_capacity(candidates.len());
        for (id, candidate) in candidates.iter().enumerate() {
            let point = to_spade_point(candidate.coordinate.to_point());
            let handle = triangulation.insert(point).map_err(|e| {
                MathError::from(VoronoiBuildError::TriangulationFailedContext {
                    step: step_description(step_name),
                    reason: format!("{:?} while inserting '{}'", e, candidate.label),
                    point_count: candidates.len(),
                })
            })?;
            sites.push(VoronoiSite {
                id,
                label: candidate.label.clone(),
                generator: candidate.coordinate,
                handle,
            });
        }
        debug!(
            "{}: {} generators, {} distinct vertices",
            step_description(step_name),
            candidates.len(),
            triangulation.num_vertices()
        );

        // 4. Zellen extrahieren
        let step_name = "CellExtraction";
        let cells = VoronoiExtractor::extract_cells(&triangulation, &sites, &bounds)?;
        if cells.is_empty() {
            return Err(MathError::EmptyVoronoiCells);
        }
        debug!("{}: {} cells", step_description(step_name), cells.len());

        Ok(VoronoiDiagram::new(cells, bounds))
    }

    fn resolve_bounds(&self, candidates: &[CandidatePoint], extent: &[Point2D]) -> Option<Bounds2D> {
        let fitted = Bounds2D::from_points_iter(
            candidates
                .iter()
                .map(|candidate| candidate.coordinate.to_point())
                .chain(extent.iter().copied()),
        )?;
        self.config.resolve_bounds(fitted)
    }
}

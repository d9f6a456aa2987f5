// src/math/point_distribution/voronoi/voronoi_diagram.rs

use crate::math::{
    error::MathResult,
    geometry::polygon::{GeoPolygon, PolygonClipper},
    types::{Bounds2D, Coordinate, Point2D, SpadePoint},
    utils::comparison,
};
use log::debug;
use spade::{DelaunayTriangulation, Triangulation, handles::FixedVertexHandle};
use std::collections::HashMap;

/// Repräsentiert eine einzelne Zelle in einem Voronoi-Diagramm.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiCell {
    /// Index des Generators in der Eingabeliste
    pub id: usize,
    /// Label des Kandidatenpunkts, der diese Zelle erzeugt
    pub label: String,
    /// Der Generatorpunkt (Site), der diese Zelle definiert.
    pub generator: Coordinate,
    /// Geschlossenes Zellpolygon, gegen den Uhrzeigersinn
    pub polygon: GeoPolygon,
    /// Gibt an, ob diese Zelle durch die Boundary beschnitten wurde.
    pub is_boundary_cell: bool,
    /// IDs der benachbarten Zellen
    pub neighbor_ids: Vec<usize>,
}

impl VoronoiCell {
    /// Fläche in Quadratgrad
    pub fn area(&self) -> f64 {
        self.polygon.area()
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.polygon.contains(coordinate)
    }
}

/// Alle Zellen einer Kandidatenmenge, in Einfügereihenfolge der Generatoren.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiDiagram {
    cells: Vec<VoronoiCell>,
    bounds: Bounds2D,
}

impl VoronoiDiagram {
    pub fn new(cells: Vec<VoronoiCell>, bounds: Bounds2D) -> Self {
        Self { cells, bounds }
    }

    /// Zelle zum Label; `None`, wenn kein Generator dieses Label trägt
    /// oder sein Generator keine eigene Zelle hat.
    pub fn cell(&self, label: &str) -> Option<&VoronoiCell> {
        self.cells.iter().find(|cell| cell.label == label)
    }

    /// Zelle, deren (abgeschlossene) Fläche die Koordinate enthält.
    /// Auf gemeinsamen Kanten gewinnt der zuerst eingefügte Generator.
    pub fn cell_containing(&self, coordinate: Coordinate) -> Option<&VoronoiCell> {
        self.cells.iter().find(|cell| cell.contains(coordinate))
    }

    pub fn cells(&self) -> &[VoronoiCell] {
        &self.cells
    }

    pub fn bounds(&self) -> Bounds2D {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Ein Generator, wie er in die Triangulation eingefügt wurde
#[derive(Debug, Clone)]
pub struct VoronoiSite {
    pub id: usize,
    pub label: String,
    pub generator: Coordinate,
    pub handle: FixedVertexHandle,
}

/// Extrahiert Zellpolygone aus einer Delaunay-Triangulation.
///
/// Jede Zelle ist das Boundary-Rechteck, beschnitten durch die Mittelsenkrechten
/// zu allen Delaunay-Nachbarn. Damit sind auch Zellen am konvexen Rand endlich.
pub struct VoronoiExtractor;

impl VoronoiExtractor {
    pub fn extract_cells(
        triangulation: &DelaunayTriangulation<SpadePoint>,
        sites: &[VoronoiSite],
        bounds: &Bounds2D,
    ) -> MathResult<Vec<VoronoiCell>> {
        let clipper = PolygonClipper::new();

        // Bei identischen Positionen gehört der Vertex dem zuerst eingefügten Generator
        let mut owner_by_handle: HashMap<FixedVertexHandle, usize> = HashMap::new();
        for site in sites {
            owner_by_handle.entry(site.handle).or_insert(site.id);
        }

        let mut cells = Vec::with_capacity(sites.len());
        for site in sites {
            if owner_by_handle.get(&site.handle) != Some(&site.id) {
                debug!(
                    "VoronoiExtractor: generator {} ('{}') shares its position with an earlier generator, no cell",
                    site.id, site.label
                );
                continue;
            }

            let vertex = triangulation.vertex(site.handle);
            let own = site.generator.to_point();
            let mut polygon = bounds.corners().to_vec();
            let mut neighbor_ids = Vec::new();

            for edge in vertex.out_edges() {
                let neighbor = edge.to();
                let position = neighbor.position();
                let other = Point2D {
                    x: position.x,
                    y: position.y,
                };
                polygon = clipper.clip_to_bisector(&polygon, own, other);
                if let Some(&neighbor_id) = owner_by_handle.get(&neighbor.fix()) {
                    neighbor_ids.push(neighbor_id);
                }
                if polygon.is_empty() {
                    break;
                }
            }

            if polygon.len() < 3 {
                debug!(
                    "VoronoiExtractor: generator {} ('{}') lies outside {}, no cell",
                    site.id, site.label, bounds
                );
                continue;
            }

            neighbor_ids.sort_unstable();
            let is_boundary_cell = polygon.iter().any(|p| on_bounds(*p, bounds));
            // Rundungsfehler der Schnittpunkte dürfen die Boundary nicht verlassen
            let vertices = polygon
                .into_iter()
                .map(|p| {
                    Coordinate::from_point(Point2D {
                        x: p.x.clamp(bounds.min.x, bounds.max.x),
                        y: p.y.clamp(bounds.min.y, bounds.max.y),
                    })
                })
                .collect::<MathResult<Vec<_>>>()?;

            cells.push(VoronoiCell {
                id: site.id,
                label: site.label.clone(),
                generator: site.generator,
                polygon: GeoPolygon::closed(vertices)?,
                is_boundary_cell,
                neighbor_ids,
            });
        }

        Ok(cells)
    }
}

fn on_bounds(point: Point2D, bounds: &Bounds2D) -> bool {
    comparison::nearly_equal(point.x, bounds.min.x)
        || comparison::nearly_equal(point.x, bounds.max.x)
        || comparison::nearly_equal(point.y, bounds.min.y)
        || comparison::nearly_equal(point.y, bounds.max.y)
}

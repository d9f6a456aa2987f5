// src/math/geometry/polygon/validation.rs

use crate::math::error::{MathError, MathResult};
use crate::math::geometry::polygon::core::{GeoPolygon, polygon::ring_signed_area};
use crate::math::types::{Coordinate, Point2D};
use crate::math::utils::constants;
use thiserror::Error;

/// Mögliche Fehler, die ein Polygon für Boolean-Operationen unbrauchbar machen.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("ring {ring} has only {count} distinct vertices")]
    InsufficientVertices { ring: usize, count: usize },
    #[error("ring {ring} encloses no area")]
    ZeroArea { ring: usize },
    #[error("ring {ring} intersects itself between edges {edge_a} and {edge_b}")]
    SelfIntersection {
        ring: usize,
        edge_a: usize,
        edge_b: usize,
    },
}

/// Ergebnis einer Polygon-Validierung.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Wandelt den Report in ein `MathResult` für die genannte Operation
    pub fn into_result(self, operation: &str) -> MathResult<()> {
        match self.errors.first() {
            None => Ok(()),
            Some(first) => Err(MathError::GeometricFailure {
                operation: format!(
                    "{}: invalid input polygon ({} problem(s), first: {})",
                    operation,
                    self.errors.len(),
                    first
                ),
            }),
        }
    }
}

/// Prüft Polygone auf Degenerierung und Selbstüberschneidungen.
/// Ring 0 ist der Außenring, Löcher folgen ab 1.
#[derive(Debug, Clone, Copy)]
pub struct PolygonValidator {
    tolerance: f64,
}

impl PolygonValidator {
    pub fn new() -> Self {
        Self {
            tolerance: constants::EPSILON_SQUARED,
        }
    }

    /// Flächen unterhalb dieser Toleranz (Quadratgrad) gelten als degeneriert
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn validate(&self, polygon: &GeoPolygon) -> ValidationReport {
        let mut report = ValidationReport::default();
        let rings = std::iter::once(polygon.exterior()).chain(polygon.holes().iter().map(Vec::as_slice));
        for (ring_index, ring) in rings.enumerate() {
            self.validate_ring(ring_index, ring, &mut report);
        }
        report
    }

    fn validate_ring(&self, ring_index: usize, ring: &[Coordinate], report: &mut ValidationReport) {
        let vertices = distinct_ring(ring);
        // Geschlossener Ring: letzter Punkt == erster Punkt
        let distinct = vertices.len().saturating_sub(1);
        if distinct < 3 {
            report.errors.push(ValidationError::InsufficientVertices {
                ring: ring_index,
                count: distinct,
            });
            return;
        }

        if ring_signed_area(ring).abs() <= self.tolerance {
            report.errors.push(ValidationError::ZeroArea { ring: ring_index });
        }

        if let Some((edge_a, edge_b)) = first_self_intersection(&vertices) {
            report.errors.push(ValidationError::SelfIntersection {
                ring: ring_index,
                edge_a,
                edge_b,
            });
        }
    }
}

impl Default for PolygonValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Ring ohne aufeinanderfolgende Duplikate, weiterhin geschlossen
fn distinct_ring(ring: &[Coordinate]) -> Vec<Point2D> {
    let mut points: Vec<Point2D> = ring.iter().map(Coordinate::to_point).collect();
    points.dedup();
    points
}

/// Sucht das erste Paar nicht benachbarter Kanten, die sich schneiden.
/// `vertices` muss geschlossen sein.
///
/// Berührungen in einem gemeinsamen Eckpunkt sind erlaubt (eingeschnürte Ringe,
/// wie sie `geo`-Unions liefern). Die Teilschleifen an so einem Punkt müssen aber
/// denselben Umlaufsinn haben wie der ganze Ring, sonst ist es eine Acht.
fn first_self_intersection(vertices: &[Point2D]) -> Option<(usize, usize)> {
    let num_edges = vertices.len().saturating_sub(1);
    if num_edges < 3 {
        return None;
    }
    for i in 0..num_edges {
        let (p1, p2) = (vertices[i], vertices[i + 1]);
        // Erste und letzte Kante teilen sich den Schlusspunkt
        let j_end = if i == 0 { num_edges - 1 } else { num_edges };
        for j in (i + 2)..j_end {
            let (p3, p4) = (vertices[j], vertices[j + 1]);
            if segment_contact(p1, p2, p3, p4) == Contact::Cross {
                return Some((i, j));
            }
        }
    }
    first_inverted_loop(vertices)
}

/// Prüft an jedem mehrfach besuchten Eckpunkt, ob eine der beiden Teilschleifen
/// gegen den Umlaufsinn des Rings läuft.
fn first_inverted_loop(vertices: &[Point2D]) -> Option<(usize, usize)> {
    let num_edges = vertices.len().saturating_sub(1);
    let total = shoelace(vertices);
    for i in 0..num_edges {
        for j in (i + 1)..num_edges {
            if vertices[i] != vertices[j] {
                continue;
            }
            let inner = shoelace(&vertices[i..=j]);
            let outer = total - inner;
            if inner * total < 0.0 || outer * total < 0.0 {
                return Some((i, j));
            }
        }
    }
    None
}

fn shoelace(closed: &[Point2D]) -> f64 {
    closed
        .windows(2)
        .map(|edge| edge[0].x * edge[1].y - edge[1].x * edge[0].y)
        .sum::<f64>()
        * 0.5
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Contact {
    Disjoint,
    /// Genau ein gemeinsamer Eckpunkt
    Touch,
    /// Echter Schnitt, kollineare Überlappung oder Eckpunkt auf Kanteninnerem
    Cross,
}

fn orientation(a: Point2D, b: Point2D, c: Point2D) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

fn on_segment(a: Point2D, b: Point2D, p: Point2D) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

fn segment_contact(p1: Point2D, p2: Point2D, p3: Point2D, p4: Point2D) -> Contact {
    let d1 = orientation(p3, p4, p1);
    let d2 = orientation(p3, p4, p2);
    let d3 = orientation(p1, p2, p3);
    let d4 = orientation(p1, p2, p4);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return Contact::Cross;
    }

    if d1 == 0.0 && d2 == 0.0 && collinear_overlap(p1, p2, p3, p4) > 0.0 {
        return Contact::Cross;
    }

    let touches = (d1 == 0.0 && on_segment(p3, p4, p1))
        || (d2 == 0.0 && on_segment(p3, p4, p2))
        || (d3 == 0.0 && on_segment(p1, p2, p3))
        || (d4 == 0.0 && on_segment(p1, p2, p4));
    if !touches {
        return Contact::Disjoint;
    }

    let shares_vertex = p1 == p3 || p1 == p4 || p2 == p3 || p2 == p4;
    if shares_vertex {
        Contact::Touch
    } else {
        Contact::Cross
    }
}

/// Länge der gemeinsamen Projektion zweier kollinearer Strecken (negativ: disjunkt)
fn collinear_overlap(p1: Point2D, p2: Point2D, p3: Point2D, p4: Point2D) -> f64 {
    let use_x = (p2.x - p1.x).abs() >= (p2.y - p1.y).abs();
    let (a1, a2, b1, b2) = if use_x {
        (p1.x, p2.x, p3.x, p4.x)
    } else {
        (p1.y, p2.y, p3.y, p4.y)
    };
    a1.max(a2).min(b1.max(b2)) - a1.min(a2).max(b1.min(b2))
}

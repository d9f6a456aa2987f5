// src/math/geometry/polygon/operations/clipping.rs

use crate::math::{types::*, utils::*};

/// Clipping-Engine für konvexe Zellen (Sutherland-Hodgman gegen Halbebenen).
///
/// Arbeitet auf offenen Punktlisten im (lng, lat)-Raum; der Schlusspunkt wird
/// erst beim Erzeugen des Polygons angehängt.
#[derive(Debug, Clone, Copy)]
pub struct PolygonClipper {
    tolerance: f64,
}

impl PolygonClipper {
    /// Erstellt einen neuen Clipper
    pub fn new() -> Self {
        Self {
            tolerance: constants::EPSILON,
        }
    }

    /// Setzt die Toleranz
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Clippt ein Rechteck auf die Bounds. Ergebnis gegen den Uhrzeigersinn.
    pub fn rectangle(bounds: &Bounds2D) -> Vec<Point2D> {
        bounds.corners().to_vec()
    }

    /// Behält den Teil der Punktliste, für den `(p - anchor) · normal <= 0` gilt.
    pub fn clip_half_plane(
        &self,
        points: &[Point2D],
        anchor: Point2D,
        normal: Point2D,
    ) -> Vec<Point2D> {
        let Some(&last) = points.last() else {
            return Vec::new();
        };

        let side = |p: Point2D| (p.x - anchor.x) * normal.x + (p.y - anchor.y) * normal.y;

        let mut output = Vec::with_capacity(points.len() + 1);
        let mut s = last;
        let mut s_side = side(s);

        for &e in points {
            let e_side = side(e);
            let e_inside = e_side <= self.tolerance;
            let s_inside = s_side <= self.tolerance;

            if e_inside {
                if !s_inside {
                    // Entering
                    output.push(edge_crossing(s, e, s_side, e_side));
                }
                output.push(e);
            } else if s_inside {
                // Leaving
                output.push(edge_crossing(s, e, s_side, e_side));
            }
            s = e;
            s_side = e_side;
        }

        output.dedup_by(|a, b| nearly_same(*a, *b));
        if output.len() > 1 && nearly_same(output[0], output[output.len() - 1]) {
            output.pop();
        }
        output
    }

    /// Schneidet die Zelle von `own` auf die Seite der Mittelsenkrechten zu `other`,
    /// die `own` enthält.
    pub fn clip_to_bisector(&self, points: &[Point2D], own: Point2D, other: Point2D) -> Vec<Point2D> {
        let anchor = Point2D {
            x: (own.x + other.x) * 0.5,
            y: (own.y + other.y) * 0.5,
        };
        let normal = Point2D {
            x: other.x - own.x,
            y: other.y - own.y,
        };
        self.clip_half_plane(points, anchor, normal)
    }
}

impl Default for PolygonClipper {
    fn default() -> Self {
        Self::new()
    }
}

fn edge_crossing(s: Point2D, e: Point2D, s_side: f64, e_side: f64) -> Point2D {
    let denominator = s_side - e_side;
    if denominator.abs() < constants::EPSILON_SQUARED {
        return e;
    }
    let t = s_side / denominator;
    Point2D {
        x: s.x + (e.x - s.x) * t,
        y: s.y + (e.y - s.y) * t,
    }
}

fn nearly_same(a: Point2D, b: Point2D) -> bool {
    comparison::nearly_equal(a.x, b.x) && comparison::nearly_equal(a.y, b.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    fn square() -> Vec<Point2D> {
        vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]
    }

    fn shoelace(points: &[Point2D]) -> f64 {
        let n = points.len();
        0.5 * (0..n)
            .map(|i| {
                let (a, b) = (points[i], points[(i + 1) % n]);
                a.x * b.y - b.x * a.y
            })
            .sum::<f64>()
    }

    #[test]
    fn test_half_plane_cuts_square() {
        let clipper = PolygonClipper::new();
        // Behalte x <= 1
        let clipped = clipper.clip_half_plane(&square(), p(1.0, 0.0), p(1.0, 0.0));
        assert_eq!(clipped.len(), 4);
        assert_relative_eq!(shoelace(&clipped), 2.0, epsilon = 1e-12);
        assert!(clipped.iter().all(|v| v.x <= 1.0 + 1e-12));
    }

    #[test]
    fn test_half_plane_keeps_or_drops_everything() {
        let clipper = PolygonClipper::new();
        let all = clipper.clip_half_plane(&square(), p(5.0, 0.0), p(1.0, 0.0));
        assert_eq!(all, square());
        let none = clipper.clip_half_plane(&square(), p(-1.0, 0.0), p(1.0, 0.0));
        assert!(none.is_empty());
    }

    #[test]
    fn test_bisector_clip() {
        let clipper = PolygonClipper::new();
        let bounds = Bounds2D::from_points(p(-10.0, -10.0), p(10.0, 10.0));
        let cell = clipper.clip_to_bisector(&PolygonClipper::rectangle(&bounds), p(-2.0, 0.0), p(2.0, 0.0));
        assert_relative_eq!(shoelace(&cell), 200.0, epsilon = 1e-9);
        assert!(cell.iter().all(|v| v.x <= 1e-12));
        // Orientierung bleibt erhalten
        assert!(shoelace(&cell) > 0.0);
    }

    #[test]
    fn test_vertex_on_line_is_not_duplicated() {
        let clipper = PolygonClipper::new();
        // Diagonale durch zwei Ecken
        let clipped = clipper.clip_half_plane(&square(), p(0.0, 0.0), p(1.0, -1.0));
        assert_eq!(clipped.len(), 3);
        assert_relative_eq!(shoelace(&clipped), 2.0, epsilon = 1e-12);
    }
}

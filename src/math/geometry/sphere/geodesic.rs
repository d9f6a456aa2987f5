// src/math/geometry/sphere/geodesic.rs

use crate::math::{error::*, geometry::polygon::GeoPolygon, types::Coordinate, utils::constants};
use geo::{Destination, Distance, HaversineMeasure, InterpolatePoint, Point};

/// Standardanzahl der Stützpunkte pro Polygonkante
pub const DEFAULT_ARC_STEPS: usize = 20;

/// Einheitskugel: Distanzen sind Zentriwinkel in Radiant
const UNIT_SPHERE: HaversineMeasure = HaversineMeasure::new(1.0);

/// Interpoliert `steps` Punkte entlang des Großkreises von `start` nach `end`
/// (beide Endpunkte eingeschlossen, exakt übernommen).
///
/// Identische Endpunkte liefern `steps` Kopien des Punktes. Antipodale Endpunkte
/// haben keinen eindeutigen Großkreis und ergeben einen Fehler.
pub fn great_circle(start: Coordinate, end: Coordinate, steps: usize) -> MathResult<Vec<Coordinate>> {
    if steps < 2 {
        return Err(MathError::InvalidConfiguration {
            message: format!("great_circle needs at least 2 steps, got {}", steps),
        });
    }

    let omega = distance_rad(start, end);
    if omega < constants::EPSILON {
        return Ok(vec![start; steps]);
    }
    if std::f64::consts::PI - omega < 1e-9 {
        return Err(MathError::GeometricFailure {
            operation: format!("great_circle: endpoints {} and {} are antipodal", start, end),
        });
    }

    // Kanten entlang eines Meridians bleiben exakt auf diesem Längengrad,
    // sonst springt ±180 durch Rundung auf die andere Kartenseite.
    let same_meridian = start.lng() == end.lng();
    let antimeridian_sign = if start.lng().abs() >= end.lng().abs() {
        start.lng().signum()
    } else {
        end.lng().signum()
    };

    let (from, to) = (Point::from(start), Point::from(end));
    let last = steps - 1;
    let mut points = Vec::with_capacity(steps);
    points.push(start);
    for i in 1..last {
        let ratio = i as f64 / last as f64;
        let interpolated = UNIT_SPHERE.point_at_ratio_between(from, to, ratio);

        let lng = if same_meridian {
            start.lng()
        } else if (interpolated.x().abs() - 180.0).abs() < constants::DEGREE_EPSILON {
            180.0 * antimeridian_sign
        } else {
            interpolated.x()
        };
        points.push(Coordinate::wrapped(interpolated.y(), lng)?);
    }
    points.push(end);

    Ok(points)
}

/// Ersetzt jede Kante eines planaren Polygons durch ihren Großkreisbogen.
///
/// Die Bögen aller Kanten werden aneinandergehängt, der Ring wird durch
/// Wiederholen des ersten Punktes geschlossen. Löcher werden genauso behandelt.
pub fn geodesic_polygon(polygon: &GeoPolygon, steps: usize) -> MathResult<GeoPolygon> {
    let exterior = geodesic_ring(polygon.exterior(), steps)?;
    let holes = polygon
        .holes()
        .iter()
        .map(|hole| geodesic_ring(hole, steps))
        .collect::<MathResult<Vec<_>>>()?;
    GeoPolygon::new(exterior, holes)
}

fn geodesic_ring(ring: &[Coordinate], steps: usize) -> MathResult<Vec<Coordinate>> {
    let mut lines = Vec::with_capacity(ring.len().saturating_sub(1) * steps + 1);
    for edge in ring.windows(2) {
        lines.extend(great_circle(edge[0], edge[1], steps)?);
    }
    if let Some(first) = lines.first().copied() {
        lines.push(first);
    }
    Ok(lines)
}

/// Zielpunkt nach `distance_rad` (Zentriwinkel) in Richtung `bearing_deg`
/// (Grad, im Uhrzeigersinn ab Norden). Der Längengrad wird auf [-180, 180) gefaltet.
pub fn destination(origin: Coordinate, distance_rad: f64, bearing_deg: f64) -> MathResult<Coordinate> {
    let target = UNIT_SPHERE.destination(Point::from(origin), bearing_deg, distance_rad);
    Coordinate::wrapped(target.y(), target.x())
}

/// Großkreisdistanz als Zentriwinkel in Radiant
pub fn distance_rad(a: Coordinate, b: Coordinate) -> f64 {
    UNIT_SPHERE.distance(Point::from(a), Point::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::sphere::units::DistanceUnit;
    use approx::assert_relative_eq;

    fn c(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[test]
    fn test_great_circle_endpoints_and_count() {
        let start = c(10.0, 20.0);
        let end = c(-5.0, 40.0);
        let arc = great_circle(start, end, DEFAULT_ARC_STEPS).unwrap();
        assert_eq!(arc.len(), DEFAULT_ARC_STEPS);
        assert_eq!(arc[0], start);
        assert_eq!(arc[DEFAULT_ARC_STEPS - 1], end);
    }

    #[test]
    fn test_great_circle_equator_midpoint() {
        let arc = great_circle(c(0.0, 0.0), c(0.0, 90.0), 3).unwrap();
        assert_relative_eq!(arc[1].lat(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(arc[1].lng(), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn test_great_circle_bulges_poleward() {
        // Auf der Nordhalbkugel liegt der Großkreis nördlich der Breitenkreis-Linie
        let arc = great_circle(c(50.0, 0.0), c(50.0, 40.0), 5).unwrap();
        assert!(arc[2].lat() > 50.0);
        assert_relative_eq!(arc[2].lng(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_great_circle_is_evenly_spaced() {
        let arc = great_circle(c(-20.0, -30.0), c(35.0, 60.0), 10).unwrap();
        let first_gap = distance_rad(arc[0], arc[1]);
        for pair in arc.windows(2) {
            assert_relative_eq!(distance_rad(pair[0], pair[1]), first_gap, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_great_circle_meridian_keeps_longitude() {
        let arc = great_circle(c(-60.0, 180.0), c(60.0, 180.0), 7).unwrap();
        assert!(arc.iter().all(|p| p.lng() == 180.0));
        let arc = great_circle(c(-60.0, -180.0), c(60.0, -180.0), 7).unwrap();
        assert!(arc.iter().all(|p| p.lng() == -180.0));
    }

    #[test]
    fn test_great_circle_degenerate_inputs() {
        let p = c(12.0, 34.0);
        let arc = great_circle(p, p, 4).unwrap();
        assert_eq!(arc, vec![p; 4]);

        assert!(matches!(
            great_circle(c(0.0, 0.0), c(1.0, 1.0), 1),
            Err(MathError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            great_circle(c(0.0, 0.0), c(0.0, 180.0), 5),
            Err(MathError::GeometricFailure { .. })
        ));
    }

    #[test]
    fn test_geodesic_polygon_ring_layout() {
        let square = GeoPolygon::closed(vec![c(0.0, 0.0), c(0.0, 5.0), c(5.0, 5.0), c(5.0, 0.0)])
            .unwrap();
        let refined = geodesic_polygon(&square, 20).unwrap();
        // 4 Kanten * 20 Punkte + Schlusspunkt
        assert_eq!(refined.exterior().len(), 4 * 20 + 1);
        assert_eq!(refined.exterior().first(), refined.exterior().last());
    }

    #[test]
    fn test_geodesic_polygon_keeps_interior_point() {
        let cell = GeoPolygon::closed(vec![
            c(-10.0, -10.0),
            c(-10.0, 5.0),
            c(5.0, 5.0),
            c(5.0, -10.0),
        ])
        .unwrap();
        let refined = geodesic_polygon(&cell, DEFAULT_ARC_STEPS).unwrap();
        assert!(refined.contains(c(0.0, 0.0)));
        assert!(!refined.contains(c(20.0, 20.0)));
    }

    #[test]
    fn test_destination_distance() {
        let origin = c(40.0, -74.0);
        let radius = DistanceUnit::Miles.to_radians(15.0);
        for bearing in [0.0, 45.0, 90.0, 200.0, 315.0] {
            let target = destination(origin, radius, bearing).unwrap();
            assert_relative_eq!(distance_rad(origin, target), radius, epsilon = 1e-12);
        }
        let north = destination(origin, radius, 0.0).unwrap();
        assert!(north.lat() > origin.lat());
        assert_relative_eq!(north.lng(), origin.lng(), epsilon = 1e-9);
    }

    #[test]
    fn test_destination_wraps_antimeridian() {
        let east = destination(c(0.0, 179.0), 2f64.to_radians(), 90.0).unwrap();
        assert_relative_eq!(east.lng(), -179.0, epsilon = 1e-9);
    }
}

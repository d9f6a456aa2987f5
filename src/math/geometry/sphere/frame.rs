// src/math/geometry/sphere/frame.rs

use crate::math::{
    error::*,
    geometry::polygon::AccumulatedRegion,
    types::{CandidatePoint, Coordinate},
    utils::constants,
};
use geo::{Area, BooleanOps, Coord, MapCoords, MultiPolygon, Rect};
use log::debug;

/// Längengrad-Bezugssystem, dessen Nullmeridian durch einen Mittelpunkt läuft.
///
/// Rechnet man Kreis, Kandidaten und Zelle im lokalen System, liegt die Datumsgrenze
/// auf der gegenüberliegenden Seite der Kugel und kein Ring wird an ±180 gefaltet.
/// Ergebnisse werden beim Zurückrechnen an der Datumsgrenze in Teilflächen zerlegt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongitudeFrame {
    offset: f64,
}

impl LongitudeFrame {
    pub fn centered_on(center: Coordinate) -> Self {
        Self {
            offset: center.lng(),
        }
    }

    /// Längengrad des Mittelpunkts im globalen System
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn to_local(&self, coordinate: Coordinate) -> MathResult<Coordinate> {
        Coordinate::wrapped(coordinate.lat(), coordinate.lng() - self.offset)
    }

    pub fn candidates_to_local(&self, candidates: &[CandidatePoint]) -> MathResult<Vec<CandidatePoint>> {
        candidates
            .iter()
            .map(|candidate| {
                Ok(CandidatePoint::new(
                    self.to_local(candidate.coordinate)?,
                    candidate.label.clone(),
                ))
            })
            .collect()
    }

    /// Verschiebt eine lokal berechnete Fläche zurück ins globale System.
    /// Teile jenseits von ±180 werden abgeschnitten und auf die andere Kartenseite gelegt.
    pub fn region_to_global(&self, region: &AccumulatedRegion) -> MathResult<AccumulatedRegion> {
        if self.offset == 0.0 {
            return Ok(region.clone());
        }

        let offset = self.offset;
        let mut parts = Vec::with_capacity(region.len());
        for feature in region.features() {
            let bounds = feature.bounds();
            let shifted = feature
                .to_geo()
                .map_coords(move |c| Coord { x: c.x + offset, y: c.y });

            if bounds.min.x + offset >= -180.0 && bounds.max.x + offset <= 180.0 {
                parts.push(shifted);
                continue;
            }

            debug!(
                "LongitudeFrame::region_to_global: splitting feature at the antimeridian (offset {})",
                offset
            );
            for wrap in [-360.0, 0.0, 360.0] {
                let window = Rect::new(
                    Coord { x: -180.0 - wrap, y: -90.0 },
                    Coord { x: 180.0 - wrap, y: 90.0 },
                )
                .to_polygon();
                for piece in shifted.intersection(&window) {
                    // Splitter, die nur durch Rundung an ±180 entstehen
                    if piece.unsigned_area() <= constants::EPSILON {
                        continue;
                    }
                    // Rundung der Boolean-Operation darf den Kartenrand nicht verlassen
                    parts.push(piece.map_coords(move |c| Coord {
                        x: (c.x + wrap).clamp(-180.0, 180.0),
                        y: c.y.clamp(-90.0, 90.0),
                    }));
                }
            }
        }

        AccumulatedRegion::from_multi_polygon(&MultiPolygon::new(parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::polygon::GeoPolygon;
    use approx::assert_relative_eq;

    fn c(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    fn square(lat: f64, lng: f64, size: f64) -> GeoPolygon {
        GeoPolygon::closed(vec![
            c(lat, lng),
            c(lat, lng + size),
            c(lat + size, lng + size),
            c(lat + size, lng),
        ])
        .unwrap()
    }

    fn polygon_to_global(frame: &LongitudeFrame, polygon: &GeoPolygon) -> AccumulatedRegion {
        frame
            .region_to_global(&AccumulatedRegion::from(polygon.clone()))
            .unwrap()
    }

    #[test]
    fn test_local_coordinates_wrap_around_center() {
        let frame = LongitudeFrame::centered_on(c(10.0, 179.5));
        assert_eq!(frame.to_local(c(10.0, 179.5)).unwrap(), c(10.0, 0.0));
        let across = frame.to_local(c(-3.0, -179.5)).unwrap();
        assert_relative_eq!(across.lng(), 1.0, epsilon = 1e-9);
        assert_eq!(across.lat(), -3.0);

        let candidates = vec![CandidatePoint::at(1.0, 170.0, "west").unwrap()];
        let local = frame.candidates_to_local(&candidates).unwrap();
        assert_eq!(local[0].label, "west");
        assert_relative_eq!(local[0].coordinate.lng(), -9.5, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_offset_is_identity() {
        let frame = LongitudeFrame::centered_on(c(45.0, 0.0));
        let region = AccumulatedRegion::from(square(0.0, -1.0, 2.0));
        assert_eq!(frame.region_to_global(&region).unwrap(), region);
    }

    #[test]
    fn test_region_inside_map_is_only_shifted() {
        let frame = LongitudeFrame::centered_on(c(0.0, 100.0));
        let global = polygon_to_global(&frame, &square(0.0, -1.0, 2.0));
        assert_eq!(global.len(), 1);
        let bounds = global.features()[0].bounds();
        assert_relative_eq!(bounds.min.x, 99.0, epsilon = 1e-9);
        assert_relative_eq!(bounds.max.x, 101.0, epsilon = 1e-9);
    }

    #[test]
    fn test_region_across_antimeridian_is_split() {
        let frame = LongitudeFrame::centered_on(c(0.0, 179.0));
        // Lokal [-1, 3] → global [178, 182] → [178, 180] und [-180, -178]
        let global = polygon_to_global(&frame, &square(0.0, -1.0, 4.0));
        assert_eq!(global.len(), 2);
        assert_relative_eq!(global.area(), 16.0, epsilon = 1e-6);
        assert!(global.contains(c(2.0, 179.0)));
        assert!(global.contains(c(2.0, -179.0)));
        assert!(!global.contains(c(2.0, 177.0)));
        assert!(!global.contains(c(2.0, -177.0)));
        for feature in global.features() {
            let bounds = feature.bounds();
            assert!(bounds.min.x >= -180.0 && bounds.max.x <= 180.0);
        }
    }

    #[test]
    fn test_negative_offset_splits_westwards() {
        let frame = LongitudeFrame::centered_on(c(0.0, -179.0));
        let global = polygon_to_global(&frame, &square(0.0, -3.0, 4.0));
        assert_eq!(global.len(), 2);
        assert!(global.contains(c(1.0, 179.0)));
        assert!(global.contains(c(1.0, -178.5)));
    }
}

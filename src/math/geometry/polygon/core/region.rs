// src/math/geometry/polygon/core/region.rs

use super::polygon::GeoPolygon;
use crate::math::{error::*, types::Coordinate};
use geo::{Area, MultiPolygon};
use log::debug;
use serde::Serialize;
use serde_json::{Value, json};

/// Die bisher als richtig akzeptierte Fläche über alle Runden hinweg
/// (eine Feature-Collection aus Polygonen). Zu Spielbeginn leer.
///
/// Wird nie an Ort und Stelle verändert: jede Runde erzeugt einen neuen Wert.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AccumulatedRegion {
    features: Vec<GeoPolygon>,
}

impl AccumulatedRegion {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_polygons(features: Vec<GeoPolygon>) -> Self {
        Self { features }
    }

    /// Übernimmt das Ergebnis einer `geo`-Boolean-Operation.
    /// Flächenlose Splitter werden verworfen.
    pub fn from_multi_polygon(multi: &MultiPolygon<f64>) -> MathResult<Self> {
        let mut features = Vec::with_capacity(multi.0.len());
        for polygon in &multi.0 {
            if polygon.exterior().0.len() < 4 || polygon.unsigned_area() == 0.0 {
                debug!(
                    "AccumulatedRegion::from_multi_polygon: dropping degenerate part with {} points",
                    polygon.exterior().0.len()
                );
                continue;
            }
            features.push(GeoPolygon::from_geo(polygon)?);
        }
        Ok(Self { features })
    }

    pub fn to_multi_polygon(&self) -> MultiPolygon<f64> {
        MultiPolygon::new(self.features.iter().map(GeoPolygon::to_geo).collect())
    }

    pub fn features(&self) -> &[GeoPolygon] {
        &self.features
    }

    pub fn into_features(self) -> Vec<GeoPolygon> {
        self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Klick-Test: liegt die Koordinate in (oder auf dem Rand) einer der Flächen?
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.features.iter().any(|feature| feature.contains(coordinate))
    }

    /// Summe der Einzelflächen in Quadratgrad
    pub fn area(&self) -> f64 {
        self.features.iter().map(GeoPolygon::area).sum()
    }

    /// GeoJSON-`FeatureCollection` mit einem `Polygon`-Feature pro Fläche
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self
            .features
            .iter()
            .map(|polygon| {
                json!({
                    "type": "Feature",
                    "properties": {},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": polygon.to_geojson_coordinates(),
                    },
                })
            })
            .collect();
        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }
}

impl From<GeoPolygon> for AccumulatedRegion {
    fn from(polygon: GeoPolygon) -> Self {
        Self {
            features: vec![polygon],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(lat: f64, lng: f64, size: f64) -> GeoPolygon {
        GeoPolygon::closed(vec![
            Coordinate::new(lat, lng).unwrap(),
            Coordinate::new(lat, lng + size).unwrap(),
            Coordinate::new(lat + size, lng + size).unwrap(),
            Coordinate::new(lat + size, lng).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_region() {
        let region = AccumulatedRegion::empty();
        assert!(region.is_empty());
        assert!(!region.contains(Coordinate::new(0.0, 0.0).unwrap()));
        assert_eq!(region.area(), 0.0);
    }

    #[test]
    fn test_contains_any_feature() {
        let region = AccumulatedRegion::from_polygons(vec![square(0.0, 0.0, 1.0), square(5.0, 5.0, 1.0)]);
        assert_eq!(region.len(), 2);
        assert!(region.contains(Coordinate::new(5.5, 5.5).unwrap()));
        assert!(region.contains(Coordinate::new(0.5, 0.5).unwrap()));
        assert!(!region.contains(Coordinate::new(3.0, 3.0).unwrap()));
    }

    #[test]
    fn test_multi_polygon_roundtrip_drops_slivers() {
        let region = AccumulatedRegion::from(square(10.0, 20.0, 2.0));
        let mut multi = region.to_multi_polygon();
        multi.0.push(geo::Polygon::new(
            geo::LineString::from(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 0.0)]),
            vec![],
        ));
        let back = AccumulatedRegion::from_multi_polygon(&multi).unwrap();
        assert_eq!(back.len(), 1);
        assert!((back.area() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_geojson_export() {
        let region = AccumulatedRegion::from(square(1.0, 2.0, 1.0));
        let json = region.to_geojson();
        assert_eq!(json["type"], "FeatureCollection");
        let feature = &json["features"][0];
        assert_eq!(feature["geometry"]["type"], "Polygon");
        let ring = feature["geometry"]["coordinates"][0].as_array().unwrap();
        assert_eq!(ring.len(), 5);
        // [lng, lat]
        assert_eq!(ring[0], json!([2.0, 1.0]));
        assert_eq!(ring.first(), ring.last());
    }
}

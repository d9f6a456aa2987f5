// src/math/types/coordinate.rs

use crate::math::{error::*, types::Point2D, utils::angles::normalize_longitude};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geografische Koordinate in Grad.
///
/// Invariante: `lat` ∈ [-90, 90], `lng` ∈ [-180, 180], beide endlich.
/// Wird beim Erzeugen geprüft, nicht erst bei der Verwendung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "RawCoordinate")]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

#[derive(Serialize, Deserialize)]
struct RawCoordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> MathResult<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(MathError::InvalidCoordinate {
                lat,
                lng,
                reason: "not finite".to_string(),
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(MathError::InvalidCoordinate {
                lat,
                lng,
                reason: "latitude outside [-90, 90]".to_string(),
            });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(MathError::InvalidCoordinate {
                lat,
                lng,
                reason: "longitude outside [-180, 180]".to_string(),
            });
        }
        Ok(Self { lat, lng })
    }

    /// Wie `new`, aber der Längengrad wird vorher auf [-180, 180] gefaltet.
    /// Für berechnete Punkte (Kreisränder, Großkreise), deren Längengrad über die Datumsgrenze läuft.
    pub fn wrapped(lat: f64, lng: f64) -> MathResult<Self> {
        Self::new(lat, normalize_longitude(lng))
    }

    /// Erzeugt eine Koordinate aus einem planaren (lng, lat)-Punkt.
    pub fn from_point(point: Point2D) -> MathResult<Self> {
        Self::new(point.y, point.x)
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Planarer Punkt im (lng, lat)-Raum
    pub fn to_point(&self) -> Point2D {
        Point2D {
            x: self.lng,
            y: self.lat,
        }
    }

    /// GeoJSON-Position `[lng, lat]`
    pub fn to_position(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = MathError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lng)
    }
}

impl From<Coordinate> for RawCoordinate {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            lat: coordinate.lat,
            lng: coordinate.lng,
        }
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        geo::Point::new(coordinate.lng, coordinate.lat)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

/// Ein Kandidatenpunkt: Koordinate plus opakes Label (z.B. Name des POI).
/// Labels sind innerhalb einer Kandidatenmenge eindeutig.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidatePoint {
    pub coordinate: Coordinate,
    pub label: String,
}

impl CandidatePoint {
    pub fn new(coordinate: Coordinate, label: impl Into<String>) -> Self {
        Self {
            coordinate,
            label: label.into(),
        }
    }

    /// Kurzform für Tests und statische Daten
    pub fn at(lat: f64, lng: f64, label: impl Into<String>) -> MathResult<Self> {
        Ok(Self::new(Coordinate::new(lat, lng)?, label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_range_validation() {
        assert!(Coordinate::new(0.0, 0.0).is_ok());
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(matches!(
            Coordinate::new(90.5, 0.0),
            Err(MathError::InvalidCoordinate { .. })
        ));
        assert!(Coordinate::new(0.0, 180.1).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_wrapped_longitude() {
        let c = Coordinate::wrapped(10.0, 200.0).unwrap();
        assert!((c.lng() - (-160.0)).abs() < 1e-9);
        assert_eq!(c.lat(), 10.0);
    }

    #[test]
    fn test_point_axis_order() {
        let c = Coordinate::new(52.5, 13.4).unwrap();
        let p = c.to_point();
        assert_eq!(p.x, 13.4);
        assert_eq!(p.y, 52.5);
        assert_eq!(c.to_position(), [13.4, 52.5]);
        assert_eq!(Coordinate::from_point(p).unwrap(), c);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let ok: Result<Coordinate, _> = serde_json::from_str(r#"{"lat": 1.0, "lng": 2.0}"#);
        assert_eq!(ok.unwrap(), Coordinate::new(1.0, 2.0).unwrap());
        let bad: Result<Coordinate, _> = serde_json::from_str(r#"{"lat": 100.0, "lng": 2.0}"#);
        assert!(bad.is_err());
    }
}

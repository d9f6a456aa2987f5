// src/math/geometry/polygon/core/polygon.rs

use crate::math::{error::*, types::*};
use geo::{Area, Intersects, LineString};
use serde::Serialize;
use std::fmt;

/// Mindestanzahl Punkte eines geschlossenen Rings (3 verschiedene + Schlusspunkt)
pub const MIN_RING_POINTS: usize = 4;

/// Geografisches Polygon: geschlossener Außenring plus optionale Löcher.
///
/// Invarianten (beim Erzeugen geprüft): jeder Ring ist geschlossen (erster == letzter Punkt)
/// und hat mindestens [`MIN_RING_POINTS`] Punkte.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPolygon {
    exterior: Vec<Coordinate>,
    holes: Vec<Vec<Coordinate>>,
}

impl GeoPolygon {
    /// Erstellt ein Polygon aus bereits geschlossenen Ringen
    pub fn new(exterior: Vec<Coordinate>, holes: Vec<Vec<Coordinate>>) -> MathResult<Self> {
        validate_ring(&exterior)?;
        for hole in &holes {
            validate_ring(hole)?;
        }
        Ok(Self { exterior, holes })
    }

    /// Erstellt ein Polygon ohne Löcher und schließt den Ring automatisch
    pub fn closed(mut vertices: Vec<Coordinate>) -> MathResult<Self> {
        if let (Some(first), Some(last)) = (vertices.first().copied(), vertices.last()) {
            if first != *last {
                vertices.push(first);
            }
        }
        Self::new(vertices, Vec::new())
    }

    /// Übernimmt ein `geo::Polygon` (x = lng, y = lat)
    pub fn from_geo(polygon: &geo::Polygon<f64>) -> MathResult<Self> {
        let exterior = ring_from_line_string(polygon.exterior())?;
        let holes = polygon
            .interiors()
            .iter()
            .map(ring_from_line_string)
            .collect::<MathResult<Vec<_>>>()?;
        Self::new(exterior, holes)
    }

    /// Konvertiert nach `geo`. Aufeinanderfolgende Duplikate (z.B. an den Stößen
    /// zusammengesetzter Großkreisbögen) werden dabei entfernt.
    pub fn to_geo(&self) -> geo::Polygon<f64> {
        geo::Polygon::new(
            line_string_from_ring(&self.exterior),
            self.holes.iter().map(|hole| line_string_from_ring(hole)).collect(),
        )
    }

    pub fn exterior(&self) -> &[Coordinate] {
        &self.exterior
    }

    pub fn holes(&self) -> &[Vec<Coordinate>] {
        &self.holes
    }

    /// Anzahl der Punkte des Außenrings (inkl. Schlusspunkt)
    pub fn len(&self) -> usize {
        self.exterior.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    /// Bounding Box im (lng, lat)-Raum
    pub fn bounds(&self) -> Bounds2D {
        // Ein gültiger Ring hat immer Punkte
        Bounds2D::from_points_iter(self.exterior.iter().map(Coordinate::to_point))
            .unwrap_or(Bounds2D::from_points(
                Point2D { x: 0.0, y: 0.0 },
                Point2D { x: 0.0, y: 0.0 },
            ))
    }

    /// Fläche in Quadratgrad (planar, nur für Vergleiche gedacht)
    pub fn area(&self) -> f64 {
        self.to_geo().unsigned_area()
    }

    /// Vorzeichenbehaftete Fläche des Außenrings; positiv gegen den Uhrzeigersinn
    pub fn signed_area(&self) -> f64 {
        ring_signed_area(&self.exterior)
    }

    /// Punkt-in-Polygon-Test; der Rand zählt als innen
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.to_geo().intersects(&geo::Point::from(coordinate))
    }

    /// GeoJSON-Koordinaten: Ringe aus `[lng, lat]`-Positionen
    pub fn to_geojson_coordinates(&self) -> Vec<Vec<[f64; 2]>> {
        std::iter::once(&self.exterior)
            .chain(self.holes.iter())
            .map(|ring| ring.iter().map(Coordinate::to_position).collect())
            .collect()
    }
}

fn validate_ring(ring: &[Coordinate]) -> MathResult<()> {
    if ring.len() < MIN_RING_POINTS {
        return Err(MathError::InsufficientPoints {
            expected: MIN_RING_POINTS,
            actual: ring.len(),
        });
    }
    let first = ring[0];
    let last = ring[ring.len() - 1];
    if first != last {
        return Err(MathError::OpenRing {
            first: (first.lat(), first.lng()),
            last: (last.lat(), last.lng()),
        });
    }
    Ok(())
}

fn ring_from_line_string(line: &LineString<f64>) -> MathResult<Vec<Coordinate>> {
    line.coords()
        .map(|coord| Coordinate::from_point(*coord))
        .collect()
}

fn line_string_from_ring(ring: &[Coordinate]) -> LineString<f64> {
    let mut coords: Vec<Point2D> = ring.iter().map(Coordinate::to_point).collect();
    coords.dedup();
    LineString::from(coords)
}

/// Shoelace-Formel über einen geschlossenen Ring
pub(crate) fn ring_signed_area(ring: &[Coordinate]) -> f64 {
    0.5 * ring
        .windows(2)
        .map(|edge| {
            let (a, b) = (edge[0].to_point(), edge[1].to_point());
            a.x * b.y - b.x * a.y
        })
        .sum::<f64>()
}

/// Display-Implementierung für Debugging
impl fmt::Display for GeoPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoPolygon({} vertices", self.exterior.len())?;
        if !self.holes.is_empty() {
            write!(f, ", {} holes", self.holes.len())?;
        }
        write!(f, ")")
    }
}

impl TryFrom<Vec<Coordinate>> for GeoPolygon {
    type Error = MathError;

    fn try_from(vertices: Vec<Coordinate>) -> Result<Self, Self::Error> {
        Self::closed(vertices)
    }
}

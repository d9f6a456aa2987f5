// src/math/geometry/sphere/circle.rs

use super::{geodesic::destination, units::DistanceUnit};
use crate::math::{error::*, geometry::polygon::GeoPolygon, types::Coordinate};

/// Standardanzahl der Randpunkte eines Toleranzkreises
pub const DEFAULT_CIRCLE_STEPS: usize = 64;

/// Erzeugt Polygone, die einen geodätischen Kreis um einen Mittelpunkt annähern.
#[derive(Debug, Clone, Copy)]
pub struct ToleranceDisc {
    steps: usize,
}

impl ToleranceDisc {
    pub fn new(steps: usize) -> MathResult<Self> {
        if steps < 3 {
            return Err(MathError::InvalidConfiguration {
                message: format!("A disc needs at least 3 boundary points, got {}", steps),
            });
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Kreis mit `radius` in `unit` (Standard: Meilen) um `center`.
    ///
    /// Der Ring läuft gegen den Uhrzeigersinn (abnehmende Peilung), erster Punkt liegt
    /// genau nördlich des Mittelpunkts. Ergebnis hat `steps + 1` Punkte.
    pub fn build(
        &self,
        center: Coordinate,
        radius: f64,
        unit: Option<DistanceUnit>,
    ) -> MathResult<GeoPolygon> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!("Disc radius must be positive and finite, got {}", radius),
            });
        }
        let radius_rad = unit.unwrap_or_default().to_radians(radius);
        if radius_rad >= std::f64::consts::PI {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Disc radius {} {} covers the whole sphere",
                    radius,
                    unit.unwrap_or_default()
                ),
            });
        }

        let ring = (0..self.steps)
            .map(|i| {
                let bearing = (i as f64 * -360.0) / self.steps as f64;
                destination(center, radius_rad, bearing)
            })
            .collect::<MathResult<Vec<_>>>()?;

        GeoPolygon::closed(ring)
    }
}

impl Default for ToleranceDisc {
    fn default() -> Self {
        Self {
            steps: DEFAULT_CIRCLE_STEPS,
        }
    }
}

/// Kurzform mit Standard-Auflösung
pub fn tolerance_disc(
    center: Coordinate,
    radius: f64,
    unit: Option<DistanceUnit>,
) -> MathResult<GeoPolygon> {
    ToleranceDisc::default().build(center, radius, unit)
}

// src/math/point_distribution/voronoi/config.rs

use crate::math::{
    error::{MathError, MathResult},
    types::Bounds2D,
};
use serde::{Deserialize, Serialize};

/// Konfiguration für die Voronoi-Zerlegung der Kandidatenpunkte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoronoiConfig {
    /// Feste Boundary für die Zellen. `None`: aus den Generatoren (und der
    /// zusätzlichen Ausdehnung) ableiten, auffüllen und auf die Kugel begrenzen.
    pub calculation_bounds: Option<Bounds2D>,
    /// Auffüllung der abgeleiteten Boundary relativ zur größten Kantenlänge
    /// (z.B. 0.5 für 50% größere Berechnungs-Boundary).
    pub boundary_padding_factor: f64,
    /// Mindest-Auffüllung in Grad
    pub min_padding_deg: f64,
}

impl Default for VoronoiConfig {
    fn default() -> Self {
        Self {
            calculation_bounds: None,
            boundary_padding_factor: 0.5,
            min_padding_deg: 1.0,
        }
    }
}

impl VoronoiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, bounds: Bounds2D) -> Self {
        self.calculation_bounds = Some(bounds);
        self
    }

    pub fn with_padding(mut self, factor: f64, min_deg: f64) -> Self {
        self.boundary_padding_factor = factor;
        self.min_padding_deg = min_deg;
        self
    }

    /// Boundary für eine konkrete Punktmenge
    pub fn resolve_bounds(&self, fitted: Bounds2D) -> Option<Bounds2D> {
        if let Some(bounds) = self.calculation_bounds {
            return Some(bounds);
        }
        let padding = (fitted.max_extent() * self.boundary_padding_factor).max(self.min_padding_deg);
        fitted.expand(padding).intersection(&Bounds2D::GLOBE)
    }

    pub fn validate(&self) -> MathResult<()> {
        if let Some(bounds) = &self.calculation_bounds {
            if !bounds.is_valid() || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
                return Err(MathError::InvalidConfiguration {
                    message: format!("Voronoi calculation bounds must have positive area, got {}", bounds),
                });
            }
        }
        if !self.boundary_padding_factor.is_finite() || self.boundary_padding_factor < 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: "Voronoi boundary padding factor must be finite and >= 0.".to_string(),
            });
        }
        if !self.min_padding_deg.is_finite() || self.min_padding_deg <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: "Voronoi minimum padding must be finite and > 0.".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::types::Point2D;

    #[test]
    fn test_default_is_valid() {
        assert!(VoronoiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(VoronoiConfig::new().with_padding(-1.0, 1.0).validate().is_err());
        assert!(VoronoiConfig::new().with_padding(0.5, 0.0).validate().is_err());
        let flat = Bounds2D::from_points(Point2D { x: 0.0, y: 0.0 }, Point2D { x: 10.0, y: 0.0 });
        assert!(VoronoiConfig::new().with_bounds(flat).validate().is_err());
    }

    #[test]
    fn test_resolve_bounds_pads_and_clamps() {
        let config = VoronoiConfig::default();
        let fitted = Bounds2D::from_points(Point2D { x: 0.0, y: 0.0 }, Point2D { x: 10.0, y: 10.0 });
        let bounds = config.resolve_bounds(fitted).unwrap();
        assert_eq!(bounds.min, Point2D { x: -5.0, y: -5.0 });
        assert_eq!(bounds.max, Point2D { x: 15.0, y: 15.0 });

        let polar = Bounds2D::from_points(Point2D { x: 0.0, y: 80.0 }, Point2D { x: 10.0, y: 89.0 });
        assert_eq!(config.resolve_bounds(polar).unwrap().max.y, 90.0);

        let fixed = config.clone().with_bounds(Bounds2D::WEB_MAP);
        assert_eq!(fixed.resolve_bounds(fitted), Some(Bounds2D::WEB_MAP));
    }

    #[test]
    fn test_serde_defaults() {
        let config: VoronoiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, VoronoiConfig::default());
    }
}

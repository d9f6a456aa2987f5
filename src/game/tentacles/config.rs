// src/game/tentacles/config.rs

use crate::game::tentacles::question::TentacleLocation;
use crate::math::{
    error::{MathError, MathResult},
    geometry::{
        polygon::CombineRule,
        sphere::{DEFAULT_ARC_STEPS, DEFAULT_CIRCLE_STEPS},
    },
    point_distribution::VoronoiConfig,
};
use serde::{Deserialize, Serialize};

/// Standard-Toleranzradius neuer Runden (in der aktuellen Standardeinheit)
pub const DEFAULT_RADIUS: f64 = 15.0;

/// Konfiguration der Tentakel-Berechnung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TentacleConfig {
    /// Punkte pro Großkreisbogen bei der geodätischen Verfeinerung der Zelle
    pub arc_steps: usize,
    /// Randpunkte des Toleranzkreises
    pub circle_steps: usize,
    pub voronoi: VoronoiConfig,
    pub combine_rule: CombineRule,
    pub default_radius: f64,
    pub default_location_type: TentacleLocation,
}

impl Default for TentacleConfig {
    fn default() -> Self {
        Self {
            arc_steps: DEFAULT_ARC_STEPS,
            circle_steps: DEFAULT_CIRCLE_STEPS,
            voronoi: VoronoiConfig::default(),
            combine_rule: CombineRule::Accumulate,
            default_radius: DEFAULT_RADIUS,
            default_location_type: TentacleLocation::ThemePark,
        }
    }
}

impl TentacleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_arc_steps(mut self, steps: usize) -> Self {
        self.arc_steps = steps;
        self
    }

    pub fn with_circle_steps(mut self, steps: usize) -> Self {
        self.circle_steps = steps;
        self
    }

    pub fn with_voronoi(mut self, voronoi: VoronoiConfig) -> Self {
        self.voronoi = voronoi;
        self
    }

    pub fn with_combine_rule(mut self, rule: CombineRule) -> Self {
        self.combine_rule = rule;
        self
    }

    pub fn with_default_radius(mut self, radius: f64) -> Self {
        self.default_radius = radius;
        self
    }

    /// Liest eine Konfiguration aus JSON; fehlende Felder behalten ihren Standardwert
    pub fn from_json(json: &str) -> MathResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| MathError::InvalidConfiguration {
            message: format!("Tentacle config is not valid JSON: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MathResult<()> {
        if self.arc_steps < 2 {
            return Err(MathError::InvalidConfiguration {
                message: format!("Great-circle arcs need at least 2 steps, got {}", self.arc_steps),
            });
        }
        if self.circle_steps < 3 {
            return Err(MathError::InvalidConfiguration {
                message: format!("A disc needs at least 3 boundary points, got {}", self.circle_steps),
            });
        }
        if !self.default_radius.is_finite() || self.default_radius <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!("Default radius must be positive, got {}", self.default_radius),
            });
        }
        self.voronoi.validate()
    }
}

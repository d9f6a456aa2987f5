// src/game/context.rs

use crate::game::tentacles::{
    config::TentacleConfig,
    question::StoredQuestion,
};
use crate::math::{geometry::sphere::DistanceUnit, probability::SeedResource, types::Coordinate};
use log::debug;
use std::sync::{Mutex, OnceLock};

/// Ziel für neu angelegte Fragen. Wird nur beschrieben, nie durchsucht.
pub trait QuestionStore {
    fn push_question(&mut self, question: StoredQuestion);
    /// Aktuelle Standardeinheit für neue Fragen
    fn default_unit(&self) -> DistanceUnit;
}

/// Prozessweiter Spielzustand: aktive Fragen, Standardeinheit und Seed.
#[derive(Debug, Clone)]
pub struct GameContext {
    questions: Vec<StoredQuestion>,
    default_unit: DistanceUnit,
    seed: SeedResource,
}

impl Default for GameContext {
    fn default() -> Self {
        Self::with_seed(SeedResource::default())
    }
}

impl GameContext {
    pub fn with_seed(seed: SeedResource) -> Self {
        Self {
            questions: Vec::new(),
            default_unit: DistanceUnit::default(),
            seed,
        }
    }

    /// Gemeinsame Instanz für den ganzen Prozess
    pub fn global() -> &'static Mutex<GameContext> {
        static CONTEXT: OnceLock<Mutex<GameContext>> = OnceLock::new();
        CONTEXT.get_or_init(|| Mutex::new(GameContext::default()))
    }

    /// Neues Spiel: Fragen leeren, Standardeinheit zurücksetzen, Zufallsfolge neu starten
    pub fn reset(&mut self) {
        debug!("GameContext::reset: dropping {} questions", self.questions.len());
        self.questions.clear();
        self.default_unit = DistanceUnit::default();
        self.seed.reset();
    }

    pub fn questions(&self) -> &[StoredQuestion] {
        &self.questions
    }

    pub fn set_default_unit(&mut self, unit: DistanceUnit) {
        self.default_unit = unit;
    }

    pub fn seed(&self) -> &SeedResource {
        &self.seed
    }

    /// Legt eine Standard-Tentakelfrage an, gewürfelt mit dem eigenen Seed
    pub fn add_default_tentacles(&mut self, center: Coordinate, config: &TentacleConfig) {
        let question = StoredQuestion::default_tentacles(
            center,
            self.default_unit,
            config.default_radius,
            config.default_location_type,
            self.seed.rng_mut(),
        );
        self.push_question(question);
    }
}

impl QuestionStore for GameContext {
    fn push_question(&mut self, question: StoredQuestion) {
        self.questions.push(question);
    }

    fn default_unit(&self) -> DistanceUnit {
        self.default_unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tentacles::question::TentacleLocation;

    #[test]
    fn test_seeded_context_is_reproducible() {
        let center = Coordinate::new(40.0, -74.0).unwrap();
        let config = TentacleConfig::default();
        let mut a = GameContext::with_seed(SeedResource::from_seed(11));
        let mut b = GameContext::with_seed(SeedResource::from_seed(11));
        a.add_default_tentacles(center, &config);
        b.add_default_tentacles(center, &config);
        assert_eq!(a.questions(), b.questions());
        assert_eq!(a.questions()[0].data.location_type, TentacleLocation::ThemePark);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut context = GameContext::with_seed(SeedResource::from_seed(5));
        context.set_default_unit(DistanceUnit::Kilometers);
        context.add_default_tentacles(Coordinate::new(0.0, 0.0).unwrap(), &TentacleConfig::default());
        let first = context.questions()[0].clone();
        assert_eq!(first.data.unit, Some(DistanceUnit::Kilometers));

        context.reset();
        assert!(context.questions().is_empty());
        assert_eq!(QuestionStore::default_unit(&context), DistanceUnit::Miles);

        // Nach dem Reset beginnt die Zufallsfolge von vorn
        context.set_default_unit(DistanceUnit::Kilometers);
        context.add_default_tentacles(Coordinate::new(0.0, 0.0).unwrap(), &TentacleConfig::default());
        assert_eq!(context.questions()[0], first);
    }
}

// src/game/tentacles/question.rs

use crate::game::state::RoundState;
use crate::math::{
    error::{MathError, MathResult},
    geometry::sphere::DistanceUnit,
    types::{CandidatePoint, Coordinate},
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kategorie der Orte, unter denen der nächstgelegene gesucht wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TentacleLocation {
    Aquarium,
    Zoo,
    #[default]
    ThemePark,
    Museum,
    Hospital,
    Cinema,
    Library,
}

impl TentacleLocation {
    pub const ALL: [TentacleLocation; 7] = [
        TentacleLocation::Aquarium,
        TentacleLocation::Zoo,
        TentacleLocation::ThemePark,
        TentacleLocation::Museum,
        TentacleLocation::Hospital,
        TentacleLocation::Cinema,
        TentacleLocation::Library,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TentacleLocation::Aquarium => "aquarium",
            TentacleLocation::Zoo => "zoo",
            TentacleLocation::ThemePark => "theme_park",
            TentacleLocation::Museum => "museum",
            TentacleLocation::Hospital => "hospital",
            TentacleLocation::Cinema => "cinema",
            TentacleLocation::Library => "library",
        }
    }
}

impl fmt::Display for TentacleLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Markerfarben für Fragen auf der Karte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconColor {
    Black,
    Blue,
    Gold,
    Green,
    Grey,
    Orange,
    Red,
    Violet,
    Yellow,
}

impl IconColor {
    pub const ALL: [IconColor; 9] = [
        IconColor::Black,
        IconColor::Blue,
        IconColor::Gold,
        IconColor::Green,
        IconColor::Grey,
        IconColor::Orange,
        IconColor::Red,
        IconColor::Violet,
        IconColor::Yellow,
    ];

    /// Gleichverteilte Farbe aus der Palette
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Der vom Spieler gesuchte Ort einer Runde.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TentacleTarget {
    /// Noch nicht gewählt
    #[default]
    Unresolved,
    Resolved(CandidatePoint),
}

/// Parameter einer Tentakel-Runde.
///
/// Nach dem Erzeugen ändert sich nur noch `location`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TentacleQuestion {
    /// Toleranzradius in `unit`
    pub radius: f64,
    /// `None`: Meilen
    pub unit: Option<DistanceUnit>,
    pub lat: f64,
    pub lng: f64,
    pub color: Option<IconColor>,
    pub drag: bool,
    pub location: TentacleTarget,
    pub location_type: TentacleLocation,
}

impl TentacleQuestion {
    /// Mittelpunkt des Toleranzkreises
    pub fn center(&self) -> MathResult<Coordinate> {
        Coordinate::new(self.lat, self.lng)
    }

    pub fn unit_or_default(&self) -> DistanceUnit {
        self.unit.unwrap_or_default()
    }

    pub fn state(&self) -> RoundState {
        RoundState::of(self)
    }

    /// Gewählter Kandidat, falls vorhanden
    pub fn target(&self) -> Option<&CandidatePoint> {
        match &self.location {
            TentacleTarget::Resolved(candidate) => Some(candidate),
            TentacleTarget::Unresolved => None,
        }
    }

    /// Übergang `Unresolved → Resolved`
    pub fn resolve(&mut self, candidate: CandidatePoint) {
        self.location = TentacleTarget::Resolved(candidate);
    }

    pub fn validate(&self) -> MathResult<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!("Question radius must be positive and finite, got {}", self.radius),
            });
        }
        self.center().map(|_| ())
    }
}

/// Fragetyp im Fragen-Store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Tentacles,
}

/// Eintrag im Fragen-Store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredQuestion {
    pub id: QuestionKind,
    /// Zufälliger Schlüssel zur Unterscheidung gleichartiger Fragen
    pub key: u64,
    pub data: TentacleQuestion,
}

impl StoredQuestion {
    /// Neue Tentakel-Frage mit Standardwerten und zufälliger Farbe
    pub fn default_tentacles<R: Rng + ?Sized>(
        center: Coordinate,
        unit: DistanceUnit,
        radius: f64,
        location_type: TentacleLocation,
        rng: &mut R,
    ) -> Self {
        Self {
            id: QuestionKind::Tentacles,
            key: rng.random_range(0..1_000_000_000),
            data: TentacleQuestion {
                radius,
                unit: Some(unit),
                lat: center.lat(),
                lng: center.lng(),
                color: Some(IconColor::random(rng)),
                drag: true,
                location: TentacleTarget::Unresolved,
                location_type,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn question() -> TentacleQuestion {
        TentacleQuestion {
            radius: 15.0,
            unit: None,
            lat: 10.0,
            lng: 20.0,
            color: None,
            drag: true,
            location: TentacleTarget::Unresolved,
            location_type: TentacleLocation::Zoo,
        }
    }

    #[test]
    fn test_resolve_transitions_state() {
        let mut q = question();
        assert_eq!(q.state(), RoundState::Unresolved);
        assert!(q.target().is_none());
        q.resolve(CandidatePoint::at(1.0, 2.0, "Zoo Zürich").unwrap());
        assert_eq!(q.state(), RoundState::Resolved);
        assert_eq!(q.target().unwrap().label, "Zoo Zürich");
    }

    #[test]
    fn test_defaults_and_validation() {
        let q = question();
        assert_eq!(q.unit_or_default(), DistanceUnit::Miles);
        assert_eq!(q.center().unwrap(), Coordinate::new(10.0, 20.0).unwrap());
        assert!(q.validate().is_ok());
        assert!(TentacleQuestion { radius: 0.0, ..question() }.validate().is_err());
        assert!(TentacleQuestion { lat: 95.0, ..question() }.validate().is_err());
    }

    #[test]
    fn test_serde_names() {
        let q = question();
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["location_type"], "zoo");
        assert_eq!(json["location"], "unresolved");
        let back: TentacleQuestion = serde_json::from_value(json).unwrap();
        assert_eq!(back, q);

        let stored = StoredQuestion {
            id: QuestionKind::Tentacles,
            key: 7,
            data: q,
        };
        assert_eq!(serde_json::to_value(&stored).unwrap()["id"], "tentacles");
        assert_eq!(TentacleLocation::ThemePark.to_string(), "theme_park");
    }

    #[test]
    fn test_default_question_is_reproducible() {
        let center = Coordinate::new(51.5, -0.12).unwrap();
        let make = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            StoredQuestion::default_tentacles(
                center,
                DistanceUnit::Kilometers,
                15.0,
                TentacleLocation::ThemePark,
                &mut rng,
            )
        };
        let a = make(3);
        assert_eq!(a, make(3));
        assert!(a.key < 1_000_000_000);
        assert!(a.data.color.is_some());
        assert!(a.data.drag);
        assert_eq!(a.data.location, TentacleTarget::Unresolved);
        assert_eq!(a.data.unit, Some(DistanceUnit::Kilometers));
    }
}

// src/game/tentacles/lookup.rs

use crate::game::tentacles::question::{TentacleLocation, TentacleQuestion};
use crate::math::types::CandidatePoint;
use std::collections::HashMap;
use thiserror::Error;

/// Fehler der externen Ortssuche. Wird unverändert an den Aufrufer weitergegeben.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("Location lookup unavailable: {reason}")]
    Unavailable { reason: String },
    #[error("Location lookup returned an invalid response: {reason}")]
    InvalidResponse { reason: String },
}

/// Liefert die Kandidatenpunkte einer Runde (z.B. alle Freizeitparks in der Nähe).
///
/// Der einzige Aufruf, bei dem die Berechnung wartet.
#[allow(async_fn_in_trait)]
pub trait LocationLookup {
    async fn fetch_candidates(
        &self,
        question: &TentacleQuestion,
    ) -> Result<Vec<CandidatePoint>, LookupError>;
}

/// Feste Kandidaten pro Kategorie, z.B. für Tests oder vorab geladene Daten.
#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
    candidates: HashMap<TentacleLocation, Vec<CandidatePoint>>,
}

impl StaticLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candidates(mut self, location: TentacleLocation, candidates: Vec<CandidatePoint>) -> Self {
        self.candidates.insert(location, candidates);
        self
    }
}

impl LocationLookup for StaticLookup {
    async fn fetch_candidates(
        &self,
        question: &TentacleQuestion,
    ) -> Result<Vec<CandidatePoint>, LookupError> {
        Ok(self
            .candidates
            .get(&question.location_type)
            .cloned()
            .unwrap_or_default())
    }
}

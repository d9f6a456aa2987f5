// src/game/tentacles/controller.rs

use crate::game::context::{GameContext, QuestionStore};
use crate::game::tentacles::{
    config::TentacleConfig,
    lookup::{LocationLookup, LookupError},
    question::{StoredQuestion, TentacleQuestion, TentacleTarget},
};
use crate::math::{
    error::{MathError, MathResult},
    geometry::{
        polygon::{AccumulatedRegion, PolygonBoolean},
        sphere::{LongitudeFrame, ToleranceDisc, geodesic_polygon},
    },
    point_distribution::VoronoiBuilder,
    types::Coordinate,
};
use log::debug;
use rand::Rng;
use std::sync::PoisonError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TentacleError {
    /// Berechnung bei maskierter Runde oder ohne gewählten Ort
    #[error("Invalid round state: {reason}")]
    InvalidState { reason: String },
    #[error("Geometry failure: {0}")]
    GeometryFailure(#[from] MathError),
    #[error("Candidate fetch failed: {0}")]
    FetchFailure(#[from] LookupError),
}

/// Ergebnis einer Rundenberechnung
#[derive(Debug, Clone, PartialEq)]
pub enum Adjustment {
    /// Noch keine Kartendaten vorhanden, nichts berechnet
    Skipped,
    /// Keine passende Zelle oder kein Beitrag; bisherige Fläche unverändert
    Unchanged(AccumulatedRegion),
    Updated(AccumulatedRegion),
}

impl Adjustment {
    pub fn into_region(self) -> Option<AccumulatedRegion> {
        match self {
            Adjustment::Skipped => None,
            Adjustment::Unchanged(region) | Adjustment::Updated(region) => Some(region),
        }
    }

    pub fn is_updated(&self) -> bool {
        matches!(self, Adjustment::Updated(_))
    }
}

/// Berechnet die gültige Antwortfläche einer Tentakel-Runde.
///
/// Ablauf: Kandidaten holen, Voronoi-Zelle des gewählten Ortes bestimmen,
/// Zelle geodätisch verfeinern, mit dem Toleranzkreis schneiden und mit der
/// bisherigen Fläche verrechnen.
#[derive(Debug, Clone)]
pub struct TentacleAdjuster {
    config: TentacleConfig,
    disc: ToleranceDisc,
    boolean: PolygonBoolean,
}

impl TentacleAdjuster {
    pub fn new(config: TentacleConfig) -> MathResult<Self> {
        config.validate()?;
        Ok(Self {
            disc: ToleranceDisc::new(config.circle_steps)?,
            boolean: PolygonBoolean::new(config.combine_rule),
            config,
        })
    }

    pub fn config(&self) -> &TentacleConfig {
        &self.config
    }

    /// `prior == None` steht für "noch keine Kartendaten" und überspringt die Berechnung.
    pub async fn adjust_per_tentacle<L>(
        &self,
        question: &TentacleQuestion,
        prior: Option<&AccumulatedRegion>,
        masked: bool,
        lookup: &L,
    ) -> Result<Adjustment, TentacleError>
    where
        L: LocationLookup,
    {
        if masked {
            return Err(TentacleError::InvalidState {
                reason: "cannot adjust tentacles while masked".to_string(),
            });
        }
        let target = match &question.location {
            TentacleTarget::Resolved(candidate) => candidate,
            TentacleTarget::Unresolved => {
                return Err(TentacleError::InvalidState {
                    reason: "tentacle location is not resolved".to_string(),
                });
            }
        };
        let Some(prior) = prior else {
            debug!("adjust_per_tentacle: no map data yet, skipping");
            return Ok(Adjustment::Skipped);
        };

        let candidates = lookup.fetch_candidates(question).await?;
        debug!(
            "adjust_per_tentacle: {} candidates for {}",
            candidates.len(),
            question.location_type
        );
        if candidates.is_empty() {
            return Ok(Adjustment::Unchanged(prior.clone()));
        }

        // Alles Weitere im um den Kreismittelpunkt zentrierten System, damit
        // Kreis und Zelle nicht an der Datumsgrenze gefaltet werden
        let center = question.center()?;
        let frame = LongitudeFrame::centered_on(center);
        let local_candidates = frame.candidates_to_local(&candidates)?;
        let disc = self.disc.build(frame.to_local(center)?, question.radius, question.unit)?;
        let extent = disc.bounds().corners();
        let diagram = VoronoiBuilder::new(self.config.voronoi.clone())?
            .build_with_extent(&local_candidates, &extent)?;

        let Some(cell) = diagram.cell(&target.label) else {
            debug!(
                "adjust_per_tentacle: no cell labelled '{}', keeping prior region",
                target.label
            );
            return Ok(Adjustment::Unchanged(prior.clone()));
        };

        let refined = geodesic_polygon(&cell.polygon, self.config.arc_steps)?;
        let contribution = frame.region_to_global(&self.boolean.contribution(&refined, &disc)?)?;
        debug!(
            "adjust_per_tentacle: contribution of {} feature(s) around lng {}",
            contribution.len(),
            frame.offset()
        );
        if contribution.is_empty() {
            debug!("adjust_per_tentacle: cell and disc do not overlap, keeping prior region");
            return Ok(Adjustment::Unchanged(prior.clone()));
        }

        let region = self.boolean.merge(&contribution, prior)?;
        debug!(
            "adjust_per_tentacle: region now has {} features ({:?})",
            region.len(),
            self.boolean.rule()
        );
        Ok(Adjustment::Updated(region))
    }

    /// Legt eine neue Runde mit Standardwerten im Store an.
    pub fn add_default_tentacles<S, R>(&self, center: Coordinate, store: &mut S, rng: &mut R)
    where
        S: QuestionStore + ?Sized,
        R: Rng + ?Sized,
    {
        let question = StoredQuestion::default_tentacles(
            center,
            store.default_unit(),
            self.config.default_radius,
            self.config.default_location_type,
            rng,
        );
        store.push_question(question);
    }
}

impl Default for TentacleAdjuster {
    fn default() -> Self {
        let config = TentacleConfig::default();
        Self {
            disc: ToleranceDisc::default(),
            boolean: PolygonBoolean::new(config.combine_rule),
            config,
        }
    }
}

/// [`TentacleAdjuster::adjust_per_tentacle`] mit Standardkonfiguration
pub async fn adjust_per_tentacle<L>(
    question: &TentacleQuestion,
    prior: Option<&AccumulatedRegion>,
    masked: bool,
    lookup: &L,
) -> Result<Adjustment, TentacleError>
where
    L: LocationLookup,
{
    TentacleAdjuster::default()
        .adjust_per_tentacle(question, prior, masked, lookup)
        .await
}

/// Neue Standardrunde im prozessweiten [`GameContext`]
pub fn add_default_tentacles(center: Coordinate) {
    let mut context = GameContext::global()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    context.add_default_tentacles(center, &TentacleConfig::default());
}

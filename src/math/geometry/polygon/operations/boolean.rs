// src/math/geometry/polygon/operations/boolean.rs

use crate::math::error::*;
use crate::math::geometry::polygon::core::{AccumulatedRegion, GeoPolygon};
use crate::math::geometry::polygon::validation::PolygonValidator;
use geo::{BooleanOps, MultiPolygon};
use log::debug;
use serde::{Deserialize, Serialize};

/// Boolean-Operationstypen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOperation {
    /// Union (A ∪ B)
    Union,
    /// Intersection (A ∩ B)
    Intersection,
}

impl BooleanOperation {
    fn name(&self) -> &'static str {
        match self {
            BooleanOperation::Union => "union",
            BooleanOperation::Intersection => "intersection",
        }
    }
}

/// Wie ein neuer Rundenbeitrag mit der bisherigen Fläche verrechnet wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombineRule {
    /// Beitrag ∪ bisherige Fläche; die Fläche wächst mit jeder Runde
    #[default]
    Accumulate,
    /// Beitrag ∩ bisherige Fläche; jede Runde schränkt weiter ein.
    /// Eine leere bisherige Fläche schränkt nicht ein.
    Narrow,
}

/// Boolean-Engine für Feature-Collections auf Basis von `geo::BooleanOps`.
///
/// Eingaben werden vor jeder Operation mit dem [`PolygonValidator`] geprüft;
/// selbstüberschneidende oder flächenlose Polygone führen zu
/// `MathError::GeometricFailure` statt zu einem stillschweigend leeren Ergebnis.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonBoolean {
    rule: CombineRule,
    validator: PolygonValidator,
}

impl PolygonBoolean {
    /// Erstellt eine neue Boolean-Engine
    pub fn new(rule: CombineRule) -> Self {
        Self {
            rule,
            validator: PolygonValidator::new(),
        }
    }

    /// Setzt den Validator (z.B. mit anderer Flächentoleranz)
    pub fn with_validator(mut self, validator: PolygonValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn rule(&self) -> CombineRule {
        self.rule
    }

    /// Vereinigt alle Features zu einer (Multi-)Fläche.
    /// Weniger als zwei Features werden unverändert zurückgegeben.
    pub fn union(&self, region: &AccumulatedRegion) -> MathResult<AccumulatedRegion> {
        if region.len() < 2 {
            return Ok(region.clone());
        }
        self.validate_all(region.features(), BooleanOperation::Union)?;

        let mut features = region.features().iter();
        let mut merged = match features.next() {
            Some(first) => MultiPolygon::new(vec![first.to_geo()]),
            None => return Ok(region.clone()),
        };
        for feature in features {
            merged = merged.union(&MultiPolygon::new(vec![feature.to_geo()]));
        }

        let result = AccumulatedRegion::from_multi_polygon(&merged)?;
        debug!(
            "PolygonBoolean::union: {} features -> {}",
            region.len(),
            result.len()
        );
        Ok(result)
    }

    /// Schnittmenge zweier Polygone als Feature-Collection (leer bei Disjunktheit)
    pub fn intersection(&self, a: &GeoPolygon, b: &GeoPolygon) -> MathResult<AccumulatedRegion> {
        self.execute(
            &AccumulatedRegion::from(a.clone()),
            &AccumulatedRegion::from(b.clone()),
            BooleanOperation::Intersection,
        )
    }

    /// Führt eine Boolean-Operation zwischen zwei Feature-Collections durch
    pub fn execute(
        &self,
        a: &AccumulatedRegion,
        b: &AccumulatedRegion,
        operation: BooleanOperation,
    ) -> MathResult<AccumulatedRegion> {
        self.validate_all(a.features(), operation)?;
        self.validate_all(b.features(), operation)?;

        let (geo_a, geo_b) = (a.to_multi_polygon(), b.to_multi_polygon());
        let result = match operation {
            BooleanOperation::Union => geo_a.union(&geo_b),
            BooleanOperation::Intersection => geo_a.intersection(&geo_b),
        };
        AccumulatedRegion::from_multi_polygon(&result)
    }

    /// Beitrag einer Runde: Voronoi-Zelle ∩ Toleranzkreis
    pub fn contribution(
        &self,
        cell: &GeoPolygon,
        disc: &GeoPolygon,
    ) -> MathResult<AccumulatedRegion> {
        self.intersection(cell, disc)
    }

    /// Verrechnet einen Beitrag mit der bisherigen Fläche gemäß der Regel.
    /// Ein leerer Beitrag lässt die bisherige Fläche unverändert.
    pub fn merge(
        &self,
        contribution: &AccumulatedRegion,
        prior: &AccumulatedRegion,
    ) -> MathResult<AccumulatedRegion> {
        if contribution.is_empty() {
            return Ok(prior.clone());
        }
        if prior.is_empty() {
            return Ok(contribution.clone());
        }

        // Fragmentierte Vorgänger erst zusammenfassen, damit kein Feature verloren geht
        let prior = self.union(prior)?;
        match self.rule {
            CombineRule::Accumulate => {
                self.execute(contribution, &prior, BooleanOperation::Union)
            }
            CombineRule::Narrow => {
                self.execute(contribution, &prior, BooleanOperation::Intersection)
            }
        }
    }

    /// `(cell ∩ disc)` verrechnet mit `prior`
    pub fn combine(
        &self,
        cell: &GeoPolygon,
        disc: &GeoPolygon,
        prior: &AccumulatedRegion,
    ) -> MathResult<AccumulatedRegion> {
        let contribution = self.contribution(cell, disc)?;
        if contribution.is_empty() {
            debug!("PolygonBoolean::combine: cell and disc do not overlap, keeping prior region");
        }
        self.merge(&contribution, prior)
    }

    fn validate_all(&self, polygons: &[GeoPolygon], operation: BooleanOperation) -> MathResult<()> {
        for polygon in polygons {
            self.validator.validate(polygon).into_result(operation.name())?;
        }
        Ok(())
    }
}

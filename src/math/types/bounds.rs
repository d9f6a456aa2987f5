// src/math/types/bounds.rs

use crate::math::{error::*, types::*};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D Bounding Box (Axis-Aligned Bounding Box) im (lng, lat)-Raum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Ausdehnung einer Web-Karte: `[-180, -85, 180, 85]`
    pub const WEB_MAP: Bounds2D = Bounds2D {
        min: Point2D { x: -180.0, y: -85.0 },
        max: Point2D { x: 180.0, y: 85.0 },
    };

    /// Die gesamte Kugel in Grad
    pub const GLOBE: Bounds2D = Bounds2D {
        min: Point2D { x: -180.0, y: -90.0 },
        max: Point2D { x: 180.0, y: 90.0 },
    };

    /// Erstellt eine neue Bounding Box
    pub fn new(min: Point2D, max: Point2D) -> MathResult<Self> {
        if min.x > max.x || min.y > max.y {
            return Err(MathError::InvalidConfiguration {
                message: format!("Invalid bounds: min {:?} > max {:?}", min, max),
            });
        }

        Ok(Self { min, max })
    }

    /// Erstellt eine Bounding Box aus zwei beliebigen Punkten
    pub fn from_points(p1: Point2D, p2: Point2D) -> Self {
        Self {
            min: Point2D {
                x: p1.x.min(p2.x),
                y: p1.y.min(p2.y),
            },
            max: Point2D {
                x: p1.x.max(p2.x),
                y: p1.y.max(p2.y),
            },
        }
    }

    /// Kleinste Box, die alle Punkte enthält. `None` bei leerer Eingabe.
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::from_points(first, first);
        for point in iter {
            bounds.expand_to_include_point(point);
        }
        Some(bounds)
    }

    /// Prüft ob die Bounds gültig sind (endlich, min <= max)
    pub fn is_valid(&self) -> bool {
        self.min.x.is_finite()
            && self.min.y.is_finite()
            && self.max.x.is_finite()
            && self.max.y.is_finite()
            && self.min.x <= self.max.x
            && self.min.y <= self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Größere der beiden Kantenlängen
    pub fn max_extent(&self) -> f64 {
        self.width().max(self.height())
    }

    /// Punkt-Test (Rand zählt als innen)
    pub fn contains_point(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn expand_to_include_point(&mut self, point: Point2D) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Vergrößert die Box in alle Richtungen um `margin`
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            min: Point2D {
                x: self.min.x - margin,
                y: self.min.y - margin,
            },
            max: Point2D {
                x: self.max.x + margin,
                y: self.max.y + margin,
            },
        }
    }

    /// Schnittmenge mit `other`; `None`, wenn sie sich nicht überlappen
    pub fn intersection(&self, other: &Bounds2D) -> Option<Self> {
        let clipped = Self {
            min: Point2D {
                x: self.min.x.max(other.min.x),
                y: self.min.y.max(other.min.y),
            },
            max: Point2D {
                x: self.max.x.min(other.max.x),
                y: self.max.y.min(other.max.y),
            },
        };
        clipped.is_valid().then_some(clipped)
    }

    /// Ecken gegen den Uhrzeigersinn, beginnend links unten
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.min,
            Point2D {
                x: self.max.x,
                y: self.min.y,
            },
            self.max,
            Point2D {
                x: self.min.x,
                y: self.max.y,
            },
        ]
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bounds2D([{:.4}, {:.4}] - [{:.4}, {:.4}])",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    #[test]
    fn test_from_points_iter() {
        let bounds = Bounds2D::from_points_iter([p(1.0, 5.0), p(-2.0, 3.0), p(4.0, -1.0)]).unwrap();
        assert_eq!(bounds.min, p(-2.0, -1.0));
        assert_eq!(bounds.max, p(4.0, 5.0));
        assert!(Bounds2D::from_points_iter(Vec::new()).is_none());
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(Bounds2D::new(p(1.0, 1.0), p(0.0, 2.0)).is_err());
        assert!(Bounds2D::new(p(0.0, 0.0), p(0.0, 0.0)).is_ok());
    }

    #[test]
    fn test_expand_and_intersection() {
        let bounds = Bounds2D::from_points(p(170.0, 80.0), p(175.0, 84.0)).expand(10.0);
        let clamped = bounds.intersection(&Bounds2D::GLOBE).unwrap();
        assert_eq!(clamped.max, p(180.0, 90.0));
        assert_eq!(clamped.min, p(160.0, 70.0));

        let far = Bounds2D::from_points(p(0.0, 0.0), p(1.0, 1.0));
        let other = Bounds2D::from_points(p(5.0, 5.0), p(6.0, 6.0));
        assert!(far.intersection(&other).is_none());
    }

    #[test]
    fn test_corners_counter_clockwise() {
        let corners = Bounds2D::from_points(p(0.0, 0.0), p(2.0, 1.0)).corners();
        let mut signed_area = 0.0;
        for i in 0..4 {
            let a = corners[i];
            let b = corners[(i + 1) % 4];
            signed_area += a.x * b.y - b.x * a.y;
        }
        assert!(signed_area > 0.0);
    }
}

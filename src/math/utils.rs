// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f64 = 1e-10;
    pub const EPSILON_SQUARED: f64 = EPSILON * EPSILON;
    /// Toleranz für Vergleiche in Grad (ca. 1 cm am Äquator)
    pub const DEGREE_EPSILON: f64 = 1e-7;
    /// Mittlerer Erdradius in Metern (GRS80-Mittel, derselbe Wert wie `geo::Haversine`)
    pub const EARTH_RADIUS_M: f64 = geo::HaversineMeasure::GRS80_MEAN_RADIUS.radius();
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }
}

/// Winkel-Hilfsfunktionen
pub mod angles {
    /// Normalisiert einen Längengrad auf [-180, 180].
    /// Exakt ±180 bleibt erhalten, damit Kartenränder nicht springen.
    pub fn normalize_longitude(lng: f64) -> f64 {
        if (-180.0..=180.0).contains(&lng) {
            return lng;
        }
        let wrapped = (lng + 180.0).rem_euclid(360.0) - 180.0;
        if wrapped == -180.0 && lng > 0.0 {
            180.0
        } else {
            wrapped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::angles::normalize_longitude;

    #[test]
    fn test_normalize_longitude() {
        assert_eq!(normalize_longitude(10.0), 10.0);
        assert_eq!(normalize_longitude(180.0), 180.0);
        assert_eq!(normalize_longitude(-180.0), -180.0);
        assert!((normalize_longitude(190.0) - (-170.0)).abs() < 1e-12);
        assert!((normalize_longitude(-190.0) - 170.0).abs() < 1e-12);
        assert_eq!(normalize_longitude(540.0), 180.0);
    }
}

//! Test utilities for orbit and engine tests.
//!
//! Provides fixtures for orbital element records and assertions for comparing
//! world positions.

/// Fixtures for creating test records.
pub mod fixtures {
    use crate::elements::OrbitalElements;

    /// e = 0.2, q = 1 AU, one-year period, no tilt.
    pub fn reference_elements() -> OrbitalElements {
        OrbitalElements::new("Reference", 0.2, 1.0).with_period(1.0)
    }

    /// Circular orbit at `radius_au` with the given period.
    pub fn circular(name: &str, radius_au: f64, period_years: f64) -> OrbitalElements {
        OrbitalElements::new(name, 0.0, radius_au).with_period(period_years)
    }
}

/// Assertion helpers for vector comparisons.
pub mod assertions {
    use bevy::math::DVec3;

    /// Assert two positions are within `tolerance` of each other.
    pub fn assert_near(actual: DVec3, expected: DVec3, tolerance: f64) {
        let diff = (actual - expected).length();
        assert!(
            diff <= tolerance,
            "position {actual:?} differs from {expected:?} by {diff} (tolerance {tolerance})"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::DVec3;

    #[test]
    fn test_fixtures_are_valid() {
        assert!(fixtures::reference_elements().validate().is_ok());
        assert!(fixtures::circular("C", 2.0, 3.0).validate().is_ok());
    }

    #[test]
    fn test_assert_near_accepts_small_difference() {
        assertions::assert_near(DVec3::ONE, DVec3::new(1.0, 1.0, 1.0 + 1e-12), 1e-9);
    }
}

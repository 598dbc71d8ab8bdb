//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec3;
use orrery::config::OrreryConfig;
use orrery::elements::OrbitalElements;

/// Configuration matching the reference scenario: scale 10, 100 samples, unit time scale.
pub fn reference_config() -> OrreryConfig {
    OrreryConfig {
        scale_factor: 10.0,
        point_count: 100,
        time_scale: 1.0,
        ..Default::default()
    }
}

/// e = 0.2, q = 1 AU, flat orbit.
pub fn reference_elements(name: &str, period_years: f64) -> OrbitalElements {
    OrbitalElements::new(name, 0.2, 1.0).with_period(period_years)
}

/// Assert two positions are within `tolerance` of each other.
pub fn assert_near(actual: DVec3, expected: DVec3, tolerance: f64) {
    let diff = (actual - expected).length();
    assert!(
        diff <= tolerance,
        "position {actual:?} differs from {expected:?} by {diff} (tolerance {tolerance})"
    );
}

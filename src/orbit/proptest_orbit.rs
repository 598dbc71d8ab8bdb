//! Property-based tests for orbit sampling and animation using proptest.
//!
//! These tests verify that path sampling and cursor advance maintain their
//! invariants across a wide range of orbital elements.

use bevy::math::DVec2;
use proptest::prelude::*;

use super::animation::{AnimationState, advance};
use super::orientation::orient;
use super::path::sample_path;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every valid orbit yields a closed path of N + 1 points.
    #[test]
    fn prop_path_is_closed(
        eccentricity in 0.0f64..0.99,
        perihelion in 0.01f64..50.0,
        scale in 0.1f64..500.0,
        point_count in 1usize..2000,
    ) {
        let path = sample_path(eccentricity, perihelion, scale, point_count).unwrap();
        prop_assert_eq!(path.points().len(), point_count + 1);
        prop_assert_eq!(path.points()[0], path.points()[point_count]);
    }

    /// Accepted paths never contain infinities or NaN, even at extreme magnitudes.
    #[test]
    fn prop_accepted_paths_are_finite(
        eccentricity in 0.0f64..1.0,
        perihelion_exp in -300i32..300,
        scale_exp in -10i32..10,
        point_count in 1usize..64,
    ) {
        let perihelion = 10f64.powi(perihelion_exp);
        let scale = 10f64.powi(scale_exp);
        if let Ok(path) = sample_path(eccentricity, perihelion, scale, point_count) {
            prop_assert!(path.semi_major_axis().is_finite());
            prop_assert!(path.semi_minor_axis().is_finite());
            for p in path.points() {
                prop_assert!(p.is_finite(), "non-finite sample {:?}", p);
            }
        }
    }

    /// Samples lie on the ellipse (x/a)² + (y/b)² = 1.
    #[test]
    fn prop_samples_on_ellipse(
        eccentricity in 0.0f64..0.95,
        perihelion in 0.1f64..30.0,
    ) {
        let path = sample_path(eccentricity, perihelion, 10.0, 360).unwrap();
        let a = path.semi_major_axis();
        let b = path.semi_minor_axis();
        for p in path.points() {
            let residual = (p.x / a).powi(2) + (p.y / b).powi(2) - 1.0;
            prop_assert!(residual.abs() < 1e-9, "point {:?} off ellipse: {}", p, residual);
        }
    }

    /// Eccentricity at or above 1 is always rejected.
    #[test]
    fn prop_open_orbits_rejected(
        eccentricity in 1.0f64..10.0,
        perihelion in 0.1f64..10.0,
    ) {
        prop_assert!(sample_path(eccentricity, perihelion, 1.0, 100).is_err());
    }

    /// Zero dt never moves the cursor.
    #[test]
    fn prop_zero_dt_idempotent(
        cursor in 0.0f64..100.0,
        angular_speed in 0.0f64..50.0,
    ) {
        let state = AnimationState { cursor, angular_speed };
        let next = state.advanced(0.0, 100);
        prop_assert_eq!(next.cursor, cursor);
    }

    /// One full revolution returns the cursor to its start.
    #[test]
    fn prop_full_revolution_wraps(
        cursor in 0.0f64..100.0,
        period in 0.1f64..200.0,
        time_scale in 0.01f64..1.0,
    ) {
        let state = AnimationState { cursor, ..AnimationState::from_period(Some(period), time_scale) };
        let next = state.advanced(state.ticks_per_revolution(100), 100);
        let diff = (next.cursor - cursor).abs();
        // Landing just below the wrap point is also a match
        let wrapped = diff.min(100.0 - diff);
        prop_assert!(wrapped < 1e-6, "cursor {} -> {}", cursor, next.cursor);
    }

    /// Interpolated positions stay inside the bounding box of the orbit.
    #[test]
    fn prop_interpolated_position_bounded(
        eccentricity in 0.0f64..0.9,
        cursor in 0.0f64..64.0,
        dt in 0.0f64..1000.0,
    ) {
        let orbit = orient(sample_path(eccentricity, 1.0, 10.0, 64).unwrap(), None, None);
        let a = orbit.path().semi_major_axis();
        let b = orbit.path().semi_minor_axis();
        let state = AnimationState { cursor, angular_speed: 0.37 };
        let (next, pos) = advance(state, dt, &orbit);

        prop_assert!((0.0..64.0).contains(&next.cursor));
        prop_assert!(pos.x.abs() <= a + 1e-9);
        prop_assert!(pos.y.abs() <= b + 1e-9);
        prop_assert!(pos.z.abs() < 1e-12);
    }

    /// Orientation is a pure rotation and preserves distance from the Sun.
    #[test]
    fn prop_orientation_preserves_length(
        inclination in -180.0f64..180.0,
        node in 0.0f64..360.0,
        x in -100.0f64..100.0,
        y in -100.0f64..100.0,
    ) {
        let orbit = orient(sample_path(0.0, 1.0, 1.0, 4).unwrap(), Some(inclination), Some(node));
        let planar = DVec2::new(x, y);
        let rotated = orbit.orientation().apply(planar);
        prop_assert!((rotated.length() - planar.length()).abs() < 1e-9);
    }
}

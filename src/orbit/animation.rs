//! Per-body animation cursor.
//!
//! The cursor is a fractional index into the body's path. Each tick moves it
//! by `angular_speed * dt` and wraps it into `[0, N)`.

use bevy::math::DVec3;
use std::f64::consts::TAU;

use super::orientation::OrientedPath;

/// Animation progress of one body.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    /// Fractional index into the path, in `[0, N)`
    pub cursor: f64,
    /// Path indices advanced per unit of `dt`
    pub angular_speed: f64,
}

impl AnimationState {
    /// Derive the speed from an orbital period: `(2π / |p|) * time_scale`.
    ///
    /// A missing, zero or non-finite period gives a stationary body.
    pub fn from_period(period: Option<f64>, time_scale: f64) -> Self {
        let angular_speed = match period {
            Some(p) if p != 0.0 && p.is_finite() => (TAU / p.abs()) * time_scale,
            _ => 0.0,
        };
        Self {
            cursor: 0.0,
            angular_speed,
        }
    }

    /// State after advancing by `dt` on a path with `point_count` segments.
    ///
    /// Non-finite `dt` leaves the cursor where it is.
    pub fn advanced(self, dt: f64, point_count: usize) -> Self {
        let step = self.angular_speed * dt;
        if !step.is_finite() || point_count == 0 {
            return self;
        }
        let mut cursor = (self.cursor + step).rem_euclid(point_count as f64);
        // rem_euclid can round up to the modulus for tiny negative inputs
        if cursor >= point_count as f64 {
            cursor = 0.0;
        }
        Self { cursor, ..self }
    }

    /// `dt` needed for one full revolution; infinite for a stationary body.
    pub fn ticks_per_revolution(&self, point_count: usize) -> f64 {
        if self.angular_speed == 0.0 {
            f64::INFINITY
        } else {
            point_count as f64 / self.angular_speed.abs()
        }
    }
}

/// Advance `state` by `dt` and return the new state with its world position.
pub fn advance(state: AnimationState, dt: f64, orbit: &OrientedPath) -> (AnimationState, DVec3) {
    let next = state.advanced(dt, orbit.path().point_count());
    (next, orbit.world_position(next.cursor))
}

//! Circular moon orbits anchored to a parent body.
//!
//! The moon has no sampled path. Its angle is derived from the parent's
//! animation cursor, and the offset lies flat in the reference XY plane
//! regardless of the parent's inclination.

use bevy::math::DVec3;

/// Moon orbiting a parent body on a circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SatelliteLink {
    /// Orbit radius in render units
    pub radius: f64,
    /// Radians per unit of parent cursor
    pub speed: f64,
    /// Angle at cursor zero, in radians
    pub phase: f64,
}

impl SatelliteLink {
    pub fn new(radius: f64, speed: f64) -> Self {
        Self {
            radius,
            speed,
            phase: 0.0,
        }
    }

    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Moon position for a parent at `parent` with animation cursor `cursor`.
    pub fn position(&self, parent: DVec3, cursor: f64) -> DVec3 {
        parent + circular_offset(self.radius, cursor * self.speed + self.phase)
    }
}

/// Moon position: `parent + (r cos(cursor·speed), r sin(cursor·speed), 0)`.
pub fn moon_position(parent: DVec3, cursor: f64, radius: f64, speed: f64) -> DVec3 {
    SatelliteLink::new(radius, speed).position(parent, cursor)
}

fn circular_offset(radius: f64, angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    DVec3::new(radius * cos, radius * sin, 0.0)
}

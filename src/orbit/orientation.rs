//! Orientation of a sampled orbit in 3D.
//!
//! The ascending-node rotation about +Z is applied first, then the inclination
//! tilt about +X: `R = R_x(i) · R_z(Ω)`.

use bevy::math::{DQuat, DVec2, DVec3};

use super::path::OrbitPath;
use crate::types::optional_deg_to_rad;

/// Fixed rotation from the orbital plane into the reference frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    /// Inclination in radians
    pub inclination: f64,
    /// Longitude of the ascending node in radians
    pub ascending_node: f64,
    rotation: DQuat,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::from_radians(0.0, 0.0)
    }
}

impl Orientation {
    pub fn from_radians(inclination: f64, ascending_node: f64) -> Self {
        let rotation = DQuat::from_rotation_x(inclination) * DQuat::from_rotation_z(ascending_node);
        Self {
            inclination,
            ascending_node,
            rotation,
        }
    }

    /// Build from optional angles in degrees; missing angles mean no rotation.
    pub fn from_degrees(inclination_deg: Option<f64>, ascending_node_deg: Option<f64>) -> Self {
        Self::from_radians(
            optional_deg_to_rad(inclination_deg),
            optional_deg_to_rad(ascending_node_deg),
        )
    }

    pub fn rotation(&self) -> DQuat {
        self.rotation
    }

    /// Rotate a point of the orbital plane into the reference frame.
    pub fn apply(&self, planar: DVec2) -> DVec3 {
        self.rotation * planar.extend(0.0)
    }
}

/// A sampled path together with the rotation that places it in 3D.
///
/// The points stay planar; the rotation is applied per query.
#[derive(Clone, Debug, PartialEq)]
pub struct OrientedPath {
    path: OrbitPath,
    orientation: Orientation,
}

impl OrientedPath {
    pub fn path(&self) -> &OrbitPath {
        &self.path
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// Replace the rotation; the samples are reused untouched.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// World position at a fractional path index.
    pub fn world_position(&self, cursor: f64) -> DVec3 {
        self.orientation.apply(self.path.interpolate(cursor))
    }

    /// Oriented polyline, suitable for drawing the orbit line.
    pub fn world_points(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.path.points().iter().map(|&p| self.orientation.apply(p))
    }
}

/// Attach an orientation to a sampled path.
pub fn orient(
    path: OrbitPath,
    inclination_deg: Option<f64>,
    ascending_node_deg: Option<f64>,
) -> OrientedPath {
    OrientedPath {
        path,
        orientation: Orientation::from_degrees(inclination_deg, ascending_node_deg),
    }
}

//! Engine configuration.

use bevy::prelude::*;

use crate::orbit::{PathSampler, SatelliteLink};

/// Settings shared by every body registered with the engine.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct OrreryConfig {
    /// Render units per AU.
    pub scale_factor: f64,
    /// Number of path segments per revolution (higher = smoother, more memory).
    pub point_count: usize,
    /// Multiplier applied to every body's angular speed.
    pub time_scale: f64,
    /// Radius of automatically attached moons, in render units.
    pub satellite_orbit_radius: f64,
    /// Angular speed of automatically attached moons per unit of parent cursor.
    pub satellite_speed: f64,
    /// Bodies whose name contains one of these fragments get a moon.
    pub satellite_hosts: Vec<String>,
    /// Maximum number of records accepted by a batch load (`None` = no cap).
    pub max_bodies: Option<usize>,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            scale_factor: 175.0,
            point_count: 1000,
            time_scale: 0.05,
            satellite_orbit_radius: 30.0,
            satellite_speed: 0.25,
            satellite_hosts: vec!["Earth".to_string()],
            max_bodies: Some(13),
        }
    }
}

impl OrreryConfig {
    pub fn sampler(&self) -> PathSampler {
        PathSampler::new(self.scale_factor, self.point_count)
    }

    /// Moon link to attach to `name`, if it is one of the configured hosts.
    pub fn satellite_for(&self, name: &str) -> Option<SatelliteLink> {
        self.satellite_hosts
            .iter()
            .any(|host| name.contains(host.as_str()))
            .then(|| SatelliteLink::new(self.satellite_orbit_radius, self.satellite_speed))
    }
}

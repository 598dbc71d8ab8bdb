//! Orbit geometry and animation primitives.
//!
//! Pipeline for one body:
//! - [`path::PathSampler`] samples the orbit ellipse in its own plane,
//! - [`orientation::orient`] attaches the inclination / ascending-node rotation,
//! - [`animation::advance`] moves the cursor along the path and interpolates,
//! - [`satellite::moon_position`] offsets a moon from the resulting position.
//!
//! Coordinate frame: Sun at origin, reference plane is XY, +Z is "up".

pub mod animation;
pub mod orientation;
pub mod path;
pub mod satellite;

#[cfg(test)]
mod proptest_orbit;

pub use animation::{AnimationState, advance};
pub use orientation::{OrientedPath, Orientation, orient};
pub use path::{OrbitPath, PathSampler, sample_path};
pub use satellite::{SatelliteLink, moon_position};

/// Errors raised while building orbit geometry.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OrbitError {
    #[error(
        "invalid orbit: eccentricity {eccentricity} with perihelion distance {perihelion} is not a closed orbit"
    )]
    InvalidOrbit { eccentricity: f64, perihelion: f64 },

    #[error("invalid point count: {0} (must be at least 1)")]
    InvalidPointCount(usize),

    #[error("invalid scale factor: {0} (must be positive and finite)")]
    InvalidScaleFactor(f64),

    #[error("orbital element {field} is not finite ({value})")]
    NonFiniteElement { field: &'static str, value: f64 },
}

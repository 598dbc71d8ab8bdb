//! Planar orbit sampling.
//!
//! Uses the parametric ellipse `x = a cos θ, y = b sin θ` centred on the origin.
//! The polar conic form `r = a (1 - e cos θ)` is not supported.

use bevy::math::DVec2;
use std::f64::consts::TAU;

use super::OrbitError;
use crate::elements::check_shape;

/// Closed sequence of planar points for one revolution.
///
/// Holds `point_count + 1` points; the last one equals the first.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitPath {
    points: Vec<DVec2>,
    semi_major_axis: f64,
    semi_minor_axis: f64,
}

impl OrbitPath {
    /// All samples, including the closing duplicate.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Number of segments N (one less than the number of stored points).
    pub fn point_count(&self) -> usize {
        self.points.len() - 1
    }

    pub fn point(&self, index: usize) -> Option<DVec2> {
        self.points.get(index).copied()
    }

    /// Semi-major axis in render units (already scaled).
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    /// Semi-minor axis in render units (already scaled).
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_minor_axis
    }

    /// Linearly interpolate along the path at a fractional index.
    ///
    /// `cursor` is wrapped into `[0, N)` first; a non-finite cursor maps to 0.
    /// An integer cursor returns the stored sample exactly.
    pub fn interpolate(&self, cursor: f64) -> DVec2 {
        let n = self.point_count();
        let cursor = wrap_cursor(cursor, n);
        let lower = (cursor.floor() as usize).min(n);
        let upper = (cursor.ceil() as usize) % n;
        let t = cursor.rem_euclid(1.0);

        let p1 = self.points[lower];
        if t == 0.0 {
            return p1;
        }
        p1.lerp(self.points[upper], t)
    }
}

/// Wrap a fractional index into `[0, n)`.
fn wrap_cursor(cursor: f64, n: usize) -> f64 {
    if !cursor.is_finite() {
        return 0.0;
    }
    let wrapped = cursor.rem_euclid(n as f64);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= n as f64 { 0.0 } else { wrapped }
}

/// Orbit sampler with a fixed scale and resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSampler {
    /// Render units per AU
    pub scale_factor: f64,
    /// Number of segments per revolution
    pub point_count: usize,
}

impl PathSampler {
    pub fn new(scale_factor: f64, point_count: usize) -> Self {
        Self {
            scale_factor,
            point_count,
        }
    }

    /// Sample the orbit with eccentricity `e` and perihelion distance `q`.
    pub fn sample(&self, eccentricity: f64, perihelion: f64) -> Result<OrbitPath, OrbitError> {
        sample_path(eccentricity, perihelion, self.scale_factor, self.point_count)
    }
}

/// Sample `point_count + 1` points of the ellipse for θ uniformly over [0, 2π].
pub fn sample_path(
    eccentricity: f64,
    perihelion: f64,
    scale_factor: f64,
    point_count: usize,
) -> Result<OrbitPath, OrbitError> {
    check_shape(eccentricity, perihelion)?;
    if point_count == 0 {
        return Err(OrbitError::InvalidPointCount(point_count));
    }
    if !scale_factor.is_finite() || scale_factor <= 0.0 {
        return Err(OrbitError::InvalidScaleFactor(scale_factor));
    }

    let a = (perihelion / (1.0 - eccentricity)) * scale_factor;
    let b = a * (1.0 - eccentricity * eccentricity).sqrt();
    // Each element can be finite while the scaled axis overflows (or underflows to 0)
    if !(a.is_finite() && b.is_finite() && a > 0.0) {
        return Err(OrbitError::InvalidOrbit {
            eccentricity,
            perihelion,
        });
    }

    let mut points = Vec::with_capacity(point_count + 1);
    for i in 0..point_count {
        let theta = (i as f64 / point_count as f64) * TAU;
        points.push(DVec2::new(a * theta.cos(), b * theta.sin()));
    }
    // cos/sin of 2π are not bit-exact, so close the loop explicitly.
    points.push(points[0]);

    Ok(OrbitPath {
        points,
        semi_major_axis: a,
        semi_minor_axis: b,
    })
}

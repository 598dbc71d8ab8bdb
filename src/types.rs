//! Shared constants and unit conversions for the orrery.

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Frame rate at which one frame equals one unit of engine `dt`.
pub const REFERENCE_FRAME_RATE: f64 = 60.0;

/// Base marker radius in render units before the body's size factor is applied.
pub const BASE_MARKER_RADIUS: f32 = 5.0;

/// Convert an optional angle in degrees to radians, treating a missing angle as zero.
pub fn optional_deg_to_rad(degrees: Option<f64>) -> f64 {
    degrees.unwrap_or(0.0) * DEG_TO_RAD
}

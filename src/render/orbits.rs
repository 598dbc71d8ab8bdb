//! Orbit path rendering using Bevy Gizmos.
//!
//! Draws each body's oriented path as a closed line strip. The path samples
//! are the same ones the engine interpolates between, so bodies always sit on
//! their drawn orbit.

use bevy::prelude::*;

use crate::engine::Orrery;
use crate::orbit::OrientedPath;

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>();
        // Drawing is added by RenderPlugin after position sync
    }
}

/// Settings for orbit path rendering.
#[derive(Resource)]
pub struct OrbitPathSettings {
    /// Whether to show orbit paths.
    pub visible: bool,
    /// Upper bound on segments drawn per orbit; longer paths are decimated.
    pub max_segments: usize,
    /// Alpha value for orbit path color.
    pub alpha: f32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            max_segments: 500,
            alpha: 0.5,
        }
    }
}

/// Oriented orbit polyline in render coordinates, keeping at most
/// `max_segments` segments. Always ends on the closing point.
pub fn orbit_polyline(orbit: &OrientedPath, max_segments: usize) -> Vec<Vec3> {
    let n = orbit.path().point_count();
    let stride = n.div_ceil(max_segments.max(1)).max(1);

    let mut points: Vec<Vec3> = orbit
        .world_points()
        .step_by(stride)
        .map(|p| p.as_vec3())
        .collect();
    if n % stride != 0 {
        points.push(orbit.orientation().apply(orbit.path().points()[n]).as_vec3());
    }
    points
}

/// Draw every registered orbit.
pub fn draw_orbit_paths(mut gizmos: Gizmos, settings: Res<OrbitPathSettings>, orrery: Res<Orrery>) {
    if !settings.visible {
        return;
    }

    let color = Color::srgba(0.53, 0.53, 0.53, settings.alpha);
    for body in orrery.bodies() {
        gizmos.linestrip(orbit_polyline(&body.orbit, settings.max_segments), color);
    }
}

//! Rendering systems for the orrery.
//!
//! Spawns a marker per body, keeps markers in sync with the engine snapshot
//! and draws the orbit paths.

pub mod bodies;
pub mod orbits;
pub mod sync;

use bevy::prelude::*;

use self::bodies::BodyScenePlugin;
use self::orbits::{OrbitPathPlugin, draw_orbit_paths};
use self::sync::SyncPositionsSet;

pub use self::orbits::OrbitPathSettings;
pub use self::sync::{BodyMarker, MoonMarker};

/// Plugin aggregating the visual side of the orrery.
///
/// Requires [`crate::plugin::OrreryPlugin`] for the tick and position sync.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BodyScenePlugin, OrbitPathPlugin))
            .add_systems(Update, draw_orbit_paths.after(SyncPositionsSet));
    }
}

//! Orrery - interactive view of the solar system's orbits.

use bevy::prelude::*;

use orrery::engine::Orrery;
use orrery::plugin::OrreryPlugin;
use orrery::presets;
use orrery::render::RenderPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins((OrreryPlugin, RenderPlugin))
        // Bodies must be registered before the scene is spawned at Startup
        .add_systems(PreStartup, load_presets)
        .run();
}

fn load_presets(mut orrery: ResMut<Orrery>) {
    let report = orrery.load(presets::solar_system());
    if !report.rejected.is_empty() {
        warn!("{} preset records were rejected", report.rejected.len());
    }
}

//! Bevy integration of the engine: tick source plus snapshot sync.

use bevy::prelude::*;

use crate::config::OrreryConfig;
use crate::engine::Orrery;
use crate::render::sync::{SyncPositionsSet, sync_body_positions};
use crate::time::{TickOrrerySet, TimePlugin};

/// Core plugin: ticks the [`Orrery`] once per frame and syncs marker transforms.
///
/// Inserts a default engine built from [`OrreryConfig`] unless one is already present.
pub struct OrreryPlugin;

impl Plugin for OrreryPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<Orrery>() {
            let config = app
                .world()
                .get_resource::<OrreryConfig>()
                .cloned()
                .unwrap_or_default();
            app.insert_resource(Orrery::new(config));
        }

        app.add_plugins(TimePlugin)
            .configure_sets(Update, SyncPositionsSet.after(TickOrrerySet))
            .add_systems(Update, sync_body_positions.in_set(SyncPositionsSet));
    }
}

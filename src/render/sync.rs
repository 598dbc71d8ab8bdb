//! Position synchronization between the engine and rendering.
//!
//! Copies the engine's position snapshot into the `Transform` of every
//! entity tagged with a body or moon marker.

use bevy::prelude::*;

use crate::engine::{BodyId, Orrery};

/// Marks an entity that follows a registered body.
#[derive(Component, Clone, Copy, Debug)]
pub struct BodyMarker {
    pub id: BodyId,
}

/// Marks an entity that follows the moon of a registered body.
#[derive(Component, Clone, Copy, Debug)]
pub struct MoonMarker {
    pub parent: BodyId,
}

/// System set label for position sync (runs after the engine tick).
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyncPositionsSet;

/// Sync render positions from the latest engine snapshot.
///
/// Entities whose body is unknown (e.g. after [`Orrery::clear`]) are left in place.
pub fn sync_body_positions(
    orrery: Res<Orrery>,
    mut bodies: Query<(&mut Transform, &BodyMarker), Without<MoonMarker>>,
    mut moons: Query<(&mut Transform, &MoonMarker), Without<BodyMarker>>,
) {
    let snapshot = orrery.snapshot();

    for (mut transform, marker) in bodies.iter_mut() {
        if let Some(entry) = snapshot.get(marker.id) {
            transform.translation = entry.position.as_vec3();
        }
    }

    for (mut transform, marker) in moons.iter_mut() {
        if let Some(moon) = snapshot.get(marker.parent).and_then(|entry| entry.satellite) {
            transform.translation = moon.as_vec3();
        }
    }
}

//! Tick source for the orrery.
//!
//! Decides how much `dt` each rendered frame feeds into [`Orrery::tick`].

use bevy::prelude::*;

use crate::engine::Orrery;
use crate::types::REFERENCE_FRAME_RATE;

/// How a frame is converted into engine `dt`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickMode {
    /// Fixed `dt` per frame regardless of frame duration.
    PerFrame(f64),
    /// Frame duration in seconds times `reference_rate`, so one reference frame is `dt = 1`.
    Elapsed { reference_rate: f64 },
}

impl Default for TickMode {
    fn default() -> Self {
        TickMode::Elapsed {
            reference_rate: REFERENCE_FRAME_RATE,
        }
    }
}

/// Animation clock resource.
#[derive(Resource, Clone, Debug)]
pub struct AnimationClock {
    /// Speed multiplier (1.0 = normal)
    pub speed: f64,
    /// Whether animation is paused
    pub paused: bool,
    pub mode: TickMode,
    /// Number of ticks sent to the engine
    pub ticks: u64,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self {
            speed: 1.0,
            paused: false,
            mode: TickMode::default(),
            ticks: 0,
        }
    }
}

impl AnimationClock {
    /// Clock stepping a fixed `dt` per frame.
    pub fn per_frame(step: f64) -> Self {
        Self {
            mode: TickMode::PerFrame(step),
            ..default()
        }
    }

    /// Engine `dt` for a frame that lasted `frame_seconds`. Ignores `paused`.
    pub fn dt_for_frame(&self, frame_seconds: f64) -> f64 {
        let base = match self.mode {
            TickMode::PerFrame(step) => step,
            TickMode::Elapsed { reference_rate } => frame_seconds * reference_rate,
        };
        base * self.speed
    }
}

/// Plugin driving the engine once per frame.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationClock>()
            .add_systems(Update, advance_orrery.in_set(TickOrrerySet));
    }
}

/// System set label for the engine tick (runs before position sync).
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TickOrrerySet;

/// Advance the engine by the frame's `dt`. Paused clocks skip the tick entirely.
fn advance_orrery(mut clock: ResMut<AnimationClock>, mut orrery: ResMut<Orrery>, time: Res<Time>) {
    if clock.paused {
        return;
    }
    let dt = clock.dt_for_frame(time.delta_secs_f64());
    orrery.tick(dt);
    clock.ticks += 1;
}

//! Orrery - Orbit Geometry & Animation Engine
//!
//! Samples each body's orbit once, orients it in 3D and advances every body
//! along its path once per tick. Rendering collaborators consume the
//! per-tick position snapshot.

pub mod config;
pub mod elements;
pub mod engine;
pub mod orbit;
pub mod plugin;
pub mod presets;
pub mod render;
pub mod time;
pub mod types;

#[cfg(test)]
pub mod test_utils;

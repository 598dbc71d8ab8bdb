//! Orrery engine: owns every registered body and advances them each tick.
//!
//! All validation happens at registration, so [`Orrery::tick`] cannot fail.
//! The position snapshot is written in place and reused between ticks.

use bevy::math::DVec3;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::config::OrreryConfig;
use crate::elements::OrbitalElements;
use crate::orbit::{
    AnimationState, OrbitError, OrientedPath, Orientation, SatelliteLink, advance, orient,
};

/// Handle of a registered body. Dense index in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors raised when registering or addressing bodies.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RegistrationError {
    #[error("body {name:?} rejected: {source}")]
    Rejected {
        name: String,
        #[source]
        source: OrbitError,
    },

    #[error("a body named {0:?} is already registered")]
    DuplicateBody(String),

    #[error("no body registered with id {0}")]
    UnknownBody(BodyId),
}

/// A registered body and its animation state.
#[derive(Clone, Debug)]
pub struct OrbitingBody {
    pub id: BodyId,
    pub elements: OrbitalElements,
    pub orbit: OrientedPath,
    pub state: AnimationState,
    pub satellite: Option<SatelliteLink>,
}

impl OrbitingBody {
    pub fn name(&self) -> &str {
        &self.elements.name
    }

    /// Marker size relative to Earth, defaulting to 1.
    pub fn size_factor(&self) -> f64 {
        self.elements.size_factor.unwrap_or(1.0)
    }

    /// Current world position without advancing.
    pub fn position(&self) -> DVec3 {
        self.orbit.world_position(self.state.cursor)
    }

    pub fn satellite_position(&self, parent: DVec3) -> Option<DVec3> {
        self.satellite.map(|link| link.position(parent, self.state.cursor))
    }
}

/// World position of one body (and its moon) after a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyPosition {
    pub id: BodyId,
    pub position: DVec3,
    pub satellite: Option<DVec3>,
}

/// Positions of every body, indexed by [`BodyId`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionSnapshot {
    positions: Vec<BodyPosition>,
}

impl PositionSnapshot {
    pub fn get(&self, id: BodyId) -> Option<&BodyPosition> {
        self.positions.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyPosition> {
        self.positions.iter()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Outcome of a batch registration.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub registered: Vec<BodyId>,
    pub rejected: Vec<RegistrationError>,
    /// Records dropped because the configured cap was reached.
    pub skipped: usize,
}

/// The orbit animation engine.
#[derive(Resource, Debug)]
pub struct Orrery {
    config: OrreryConfig,
    bodies: Vec<OrbitingBody>,
    by_name: HashMap<String, BodyId>,
    snapshot: PositionSnapshot,
    /// Sum of every `dt` applied so far
    elapsed: f64,
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new(OrreryConfig::default())
    }
}

impl Orrery {
    pub fn new(config: OrreryConfig) -> Self {
        Self {
            config,
            bodies: Vec::new(),
            by_name: HashMap::new(),
            snapshot: PositionSnapshot::default(),
            elapsed: 0.0,
        }
    }

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    /// Register a body: sample and orient its path, and build its animation state.
    ///
    /// On error nothing is added and the engine is unchanged.
    pub fn add_body(&mut self, elements: OrbitalElements) -> Result<BodyId, RegistrationError> {
        if self.by_name.contains_key(&elements.name) {
            return Err(RegistrationError::DuplicateBody(elements.name));
        }

        let rejected = |source: OrbitError| RegistrationError::Rejected {
            name: elements.name.clone(),
            source,
        };
        elements.validate().map_err(rejected)?;
        let path = self
            .config
            .sampler()
            .sample(elements.eccentricity, elements.perihelion_distance)
            .map_err(rejected)?;

        let orbit = orient(path, elements.inclination_deg, elements.ascending_node_deg);
        let state = AnimationState::from_period(elements.period_years, self.config.time_scale);
        let satellite = self.config.satellite_for(&elements.name);

        let id = BodyId(self.bodies.len());
        let body = OrbitingBody {
            id,
            elements,
            orbit,
            state,
            satellite,
        };

        debug!(
            "Registered {} {}: a={:.3} speed={:.5}{}",
            id,
            body.name(),
            body.orbit.path().semi_major_axis(),
            body.state.angular_speed,
            if body.satellite.is_some() { " (with moon)" } else { "" }
        );

        let position = body.position();
        self.snapshot.positions.push(BodyPosition {
            id,
            position,
            satellite: body.satellite_position(position),
        });
        self.by_name.insert(body.elements.name.clone(), id);
        self.bodies.push(body);
        Ok(id)
    }

    /// Register a batch of records, skipping malformed ones.
    ///
    /// Stops accepting once `config.max_bodies` bodies are registered.
    pub fn load(&mut self, records: impl IntoIterator<Item = OrbitalElements>) -> LoadReport {
        let mut report = LoadReport::default();
        let cap = self.config.max_bodies.unwrap_or(usize::MAX);

        for elements in records {
            if self.bodies.len() >= cap {
                report.skipped += 1;
                continue;
            }
            match self.add_body(elements) {
                Ok(id) => report.registered.push(id),
                Err(err) => {
                    warn!("Skipping orbital record: {err}");
                    report.rejected.push(err);
                }
            }
        }

        info!(
            "Loaded {} bodies ({} rejected, {} over cap)",
            report.registered.len(),
            report.rejected.len(),
            report.skipped
        );
        report
    }

    /// Attach (or replace) a moon on an existing body.
    pub fn attach_satellite(
        &mut self,
        id: BodyId,
        link: SatelliteLink,
    ) -> Result<(), RegistrationError> {
        let body = self
            .bodies
            .get_mut(id.0)
            .ok_or(RegistrationError::UnknownBody(id))?;
        body.satellite = Some(link);
        let entry = &mut self.snapshot.positions[id.0];
        entry.satellite = body.satellite_position(entry.position);
        Ok(())
    }

    /// Replace a body's orientation. Affects all later positions without resampling.
    pub fn reorient(
        &mut self,
        id: BodyId,
        inclination_deg: Option<f64>,
        ascending_node_deg: Option<f64>,
    ) -> Result<(), RegistrationError> {
        let body = self
            .bodies
            .get_mut(id.0)
            .ok_or(RegistrationError::UnknownBody(id))?;
        body.orbit
            .set_orientation(Orientation::from_degrees(inclination_deg, ascending_node_deg));
        let position = body.position();
        self.snapshot.positions[id.0] = BodyPosition {
            id,
            position,
            satellite: body.satellite_position(position),
        };
        Ok(())
    }

    /// Advance every body by `dt` and return the updated positions.
    pub fn tick(&mut self, dt: f64) -> &PositionSnapshot {
        if dt.is_finite() {
            self.elapsed += dt;
        }
        for (body, entry) in self.bodies.iter_mut().zip(self.snapshot.positions.iter_mut()) {
            let (state, position) = advance(body.state, dt, &body.orbit);
            body.state = state;
            entry.position = position;
            entry.satellite = body.satellite_position(position);
        }
        &self.snapshot
    }

    pub fn snapshot(&self) -> &PositionSnapshot {
        &self.snapshot
    }

    pub fn position(&self, id: BodyId) -> Option<DVec3> {
        self.snapshot.get(id).map(|p| p.position)
    }

    pub fn body(&self, id: BodyId) -> Option<&OrbitingBody> {
        self.bodies.get(id.0)
    }

    pub fn body_by_name(&self, name: &str) -> Option<&OrbitingBody> {
        self.by_name.get(name).and_then(|id| self.body(*id))
    }

    pub fn bodies(&self) -> &[OrbitingBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Release every body at once.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.by_name.clear();
        self.snapshot.positions.clear();
        self.elapsed = 0.0;
    }
}

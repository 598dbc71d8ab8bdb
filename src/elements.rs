//! Orbital element records supplied by the data-loading collaborator.
//!
//! Distances are in AU, angles in degrees, periods in years. Only `eccentricity`
//! and `perihelion_distance` are mandatory; missing angles default to zero and a
//! missing period makes the body stationary.

use crate::orbit::OrbitError;

/// Keplerian elements describing one body, as delivered by the input data.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Display name, unique within an engine
    pub name: String,
    /// Eccentricity (dimensionless, 0 ≤ e < 1)
    pub eccentricity: f64,
    /// Perihelion distance in AU
    pub perihelion_distance: f64,
    /// Inclination in degrees
    pub inclination_deg: Option<f64>,
    /// Longitude of the ascending node in degrees
    pub ascending_node_deg: Option<f64>,
    /// Orbital period in years
    pub period_years: Option<f64>,
    /// Relative marker size (Earth = 1)
    pub size_factor: Option<f64>,
    /// Comet / unknown-type flag. Display only.
    pub is_comet: bool,
}

impl OrbitalElements {
    /// Create a record with only the shape elements set.
    pub fn new(name: impl Into<String>, eccentricity: f64, perihelion_distance: f64) -> Self {
        Self {
            name: name.into(),
            eccentricity,
            perihelion_distance,
            inclination_deg: None,
            ascending_node_deg: None,
            period_years: None,
            size_factor: None,
            is_comet: false,
        }
    }

    pub fn with_inclination(mut self, degrees: f64) -> Self {
        self.inclination_deg = Some(degrees);
        self
    }

    pub fn with_ascending_node(mut self, degrees: f64) -> Self {
        self.ascending_node_deg = Some(degrees);
        self
    }

    pub fn with_period(mut self, years: f64) -> Self {
        self.period_years = Some(years);
        self
    }

    pub fn with_size_factor(mut self, factor: f64) -> Self {
        self.size_factor = Some(factor);
        self
    }

    pub fn comet(mut self) -> Self {
        self.is_comet = true;
        self
    }

    /// Check that the record describes a closed, finite orbit.
    ///
    /// Optional fields that are present must be finite. A zero period is
    /// accepted and treated like a missing one.
    pub fn validate(&self) -> Result<(), OrbitError> {
        let optional = [
            ("inclination", self.inclination_deg),
            ("ascending_node", self.ascending_node_deg),
            ("period", self.period_years),
            ("size_factor", self.size_factor),
        ];
        for (field, value) in optional {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(OrbitError::NonFiniteElement { field, value });
                }
            }
        }
        check_shape(self.eccentricity, self.perihelion_distance)
    }
}

/// Validate the (e, q) pair shared by every closed-orbit computation.
pub(crate) fn check_shape(eccentricity: f64, perihelion: f64) -> Result<(), OrbitError> {
    let closed = eccentricity.is_finite()
        && perihelion.is_finite()
        && (0.0..1.0).contains(&eccentricity)
        && perihelion > 0.0;
    if closed {
        Ok(())
    } else {
        Err(OrbitError::InvalidOrbit {
            eccentricity,
            perihelion,
        })
    }
}

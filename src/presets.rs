//! Built-in orbital elements for the planets and a couple of comets.
//!
//! Values are J2000 mean elements (perihelion distance derived as a(1 - e)),
//! rounded for display purposes.

use crate::elements::OrbitalElements;

/// Relative marker sizes (Earth = 1). Gas giants are compressed for display.
const SIZE_FACTORS: &[(&str, f64)] = &[
    ("Mercury", 0.38),
    ("Venus", 0.95),
    ("Earth", 1.0),
    ("Mars", 0.53),
    ("Jupiter", 11.21),
    ("Saturn", 9.45),
    ("Uranus", 4.01),
    ("Neptune", 3.88),
    ("Moon", 0.27),
];

/// Size factor for a body name, matched by fragment (`"planet_Earth"` → Earth).
pub fn size_factor(name: &str) -> Option<f64> {
    SIZE_FACTORS
        .iter()
        .find(|(fragment, _)| name.contains(fragment))
        .map(|&(_, factor)| factor)
}

/// Marker size of an automatically attached moon.
pub fn moon_size_factor() -> f64 {
    size_factor("Moon").unwrap_or(1.0)
}

fn planet(name: &str, e: f64, q: f64, i: f64, node: f64, period: f64) -> OrbitalElements {
    let elements = OrbitalElements::new(name, e, q)
        .with_inclination(i)
        .with_ascending_node(node)
        .with_period(period);
    match size_factor(name) {
        Some(factor) => elements.with_size_factor(factor),
        None => elements,
    }
}

/// Planets in order from the Sun, followed by comets 2P/Encke and 1P/Halley.
pub fn solar_system() -> Vec<OrbitalElements> {
    vec![
        planet("Mercury", 0.205630, 0.307499, 7.005, 48.331, 0.240846),
        planet("Venus", 0.006772, 0.718434, 3.39458, 76.680, 0.615198),
        planet("Earth", 0.016709, 0.983292, 0.00005, -11.26064, 1.000017),
        planet("Mars", 0.093400, 1.381497, 1.850, 49.558, 1.88085),
        planet("Jupiter", 0.048900, 4.950909, 1.303, 100.464, 11.862),
        planet("Saturn", 0.056500, 9.041183, 2.485, 113.665, 29.4571),
        planet("Uranus", 0.047170, 18.286016, 0.773, 74.006, 84.0205),
        planet("Neptune", 0.008678, 29.809049, 1.770, 131.783, 164.8),
        planet("2P/Encke", 0.848300, 0.330200, 11.78, 334.57, 3.30).comet(),
        planet("1P/Halley", 0.967140, 0.585700, 162.26, 58.42, 75.32).comet(),
    ]
}

//! Scene setup: body markers, the Sun, camera and light.
//!
//! Spawns plain spheres for every body registered with the engine at startup.

use bevy::prelude::*;

use crate::engine::Orrery;
use crate::presets::moon_size_factor;
use crate::render::sync::{BodyMarker, MoonMarker};
use crate::types::BASE_MARKER_RADIUS;

/// Radius of the Sun marker in render units.
const SUN_RADIUS: f32 = 50.0;

/// Plugin spawning the scene for the registered bodies.
pub struct BodyScenePlugin;

impl Plugin for BodyScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_camera_and_light, spawn_bodies));
    }
}

/// Approximate marker color for a body, matched by name fragment.
fn body_color(name: &str, is_comet: bool) -> Color {
    const PALETTE: &[(&str, (f32, f32, f32))] = &[
        ("Mercury", (0.6, 0.6, 0.6)),
        ("Venus", (0.9, 0.85, 0.7)),
        ("Earth", (0.2, 0.5, 0.8)),
        ("Mars", (0.8, 0.4, 0.2)),
        ("Jupiter", (0.8, 0.7, 0.6)),
        ("Saturn", (0.9, 0.85, 0.6)),
        ("Uranus", (0.6, 0.8, 0.9)),
        ("Neptune", (0.3, 0.5, 0.9)),
    ];
    if is_comet {
        return Color::srgb(0.75, 0.85, 1.0);
    }
    PALETTE
        .iter()
        .find(|(fragment, _)| name.contains(fragment))
        .map(|&(_, (r, g, b))| Color::srgb(r, g, b))
        .unwrap_or(Color::srgb(0.7, 0.7, 0.7))
}

fn spawn_camera_and_light(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 75.0_f32.to_radians(),
            near: 0.1,
            far: 10_000.0,
            ..default()
        }),
        Transform::from_xyz(0.0, -400.0, 100.0).looking_at(Vec3::ZERO, Vec3::Z),
    ));

    // The Sun is the light source
    commands.spawn((
        PointLight {
            intensity: 1.0e9,
            range: 2000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 2000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Spawn the Sun and one marker per registered body (plus its moon).
fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    orrery: Res<Orrery>,
) {
    let sun_color = Color::srgb(1.0, 0.95, 0.4);
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: sun_color,
            emissive: sun_color.to_linear() * 2.0,
            ..default()
        })),
        Transform::from_translation(Vec3::ZERO),
    ));

    let moon_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.7, 0.7, 0.7),
        perceptual_roughness: 0.7,
        ..default()
    });
    let moon_mesh = meshes.add(Sphere::new(BASE_MARKER_RADIUS * moon_size_factor() as f32));

    let snapshot = orrery.snapshot();
    for body in orrery.bodies() {
        let radius = BASE_MARKER_RADIUS * body.size_factor() as f32;
        let material = materials.add(StandardMaterial {
            base_color: body_color(body.name(), body.elements.is_comet),
            metallic: 0.5,
            perceptual_roughness: 0.3,
            ..default()
        });

        let position = snapshot.get(body.id).map(|p| p.position.as_vec3()).unwrap_or_default();
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(radius))),
            MeshMaterial3d(material),
            Transform::from_translation(position),
            BodyMarker { id: body.id },
            Name::new(body.name().to_string()),
        ));

        if let Some(moon) = snapshot.get(body.id).and_then(|p| p.satellite) {
            commands.spawn((
                Mesh3d(moon_mesh.clone()),
                MeshMaterial3d(moon_material.clone()),
                Transform::from_translation(moon.as_vec3()),
                MoonMarker { parent: body.id },
            ));
        }
    }

    info!("Spawned {} body markers", orrery.len());
}

//! The solar-system scene: planets, rings, highlight sync, and starfield.
//!
//! Planets are spawned once at startup from the way-point catalog and never
//! despawned; mission progress only changes their highlight. Each planet
//! gets its own material instance so visited/target/hazard tints can be
//! written per entity.

use crate::catalog::{WaypointCatalog, WaypointId};
use crate::config::GameConfig;
use crate::constants::{
    PLANET_SPIN_PER_FRAME, STARFIELD_RADIUS_MAX, STARFIELD_RADIUS_MIN, TARGET_PULSE_AMPLITUDE,
    TARGET_PULSE_RATE,
};
use crate::mission::MissionState;
use bevy::prelude::*;
use rand::Rng;

// ── Components ────────────────────────────────────────────────────────────────

/// Links a planet entity back to its catalog entry.
#[derive(Component)]
pub struct PlanetMarker {
    pub id: WaypointId,
}

/// Marker for a background star.
#[derive(Component)]
pub struct Star;

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WaypointCatalog>()
            .add_systems(
                Startup,
                (
                    setup_planets,
                    // Star count is tunable, so wait for the config file.
                    setup_starfield.after(crate::config::load_game_config),
                ),
            )
            .add_systems(Update, planet_highlight_system);
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

/// Spawn one sphere per catalog way-point, with a flat translucent ring for
/// the gas giants.
pub fn setup_planets(
    mut commands: Commands,
    catalog: Res<WaypointCatalog>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for waypoint in catalog.iter() {
        let material = materials.add(StandardMaterial {
            base_color: waypoint.color,
            perceptual_roughness: 0.9,
            ..default()
        });

        commands
            .spawn((
                PlanetMarker { id: waypoint.id },
                Mesh3d(meshes.add(Sphere::new(waypoint.size))),
                MeshMaterial3d(material),
                Transform::from_translation(waypoint.position),
                Visibility::default(),
            ))
            .with_children(|planet| {
                if waypoint.ringed {
                    planet.spawn((
                        Mesh3d(meshes.add(Torus {
                            minor_radius: 0.25,
                            major_radius: waypoint.size + 0.55,
                        })),
                        MeshMaterial3d(materials.add(StandardMaterial {
                            base_color: waypoint.color.with_alpha(0.6),
                            alpha_mode: AlphaMode::Blend,
                            perceptual_roughness: 0.9,
                            ..default()
                        })),
                        Transform::default(),
                    ));
                }
            });
    }
}

/// Scatter small emissive stars on a spherical shell around the scene.
/// One shared mesh and material for the whole field.
pub fn setup_starfield(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(0.08));
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: Color::WHITE.to_linear() * 2.0,
        unlit: true,
        ..default()
    });

    let mut rng = rand::thread_rng();
    for _ in 0..config.starfield_count {
        // Cylindrical-equal-area sampling of the unit sphere.
        let theta: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
        let z: f32 = rng.gen_range(-1.0..1.0);
        let planar = (1.0 - z * z).sqrt();
        let direction = Vec3::new(planar * theta.cos(), z, planar * theta.sin());
        let radius = rng.gen_range(STARFIELD_RADIUS_MIN..STARFIELD_RADIUS_MAX);

        commands.spawn((
            Star,
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(direction * radius),
        ));
    }
}

// ── Highlight sync ────────────────────────────────────────────────────────────

/// Tint and pulse planets to reflect mission progress.
///
/// Priority per planet: visited (green) over current target (yellow, with a
/// scale pulse) over hazardous (faint red) over plain. Runs every frame; it
/// also applies the slow cosmetic spin.
pub fn planet_highlight_system(
    time: Res<Time>,
    state: Res<MissionState>,
    catalog: Res<WaypointCatalog>,
    mut planets: Query<(
        &PlanetMarker,
        &MeshMaterial3d<StandardMaterial>,
        &mut Transform,
    )>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let target = catalog.next_unvisited(&state.visited).map(|w| w.id);
    let pulse = 1.0 + (time.elapsed_secs() * TARGET_PULSE_RATE).sin() * TARGET_PULSE_AMPLITUDE;

    for (marker, material_handle, mut transform) in planets.iter_mut() {
        transform.rotate_y(PLANET_SPIN_PER_FRAME);

        let Some(waypoint) = catalog.get(marker.id) else {
            continue;
        };
        let visited = state.visited.contains(&marker.id);
        let is_target = target == Some(marker.id);

        transform.scale = if is_target && !visited {
            Vec3::splat(pulse)
        } else {
            Vec3::ONE
        };

        let Some(material) = materials.get_mut(&material_handle.0) else {
            continue;
        };
        material.emissive = if visited {
            Color::srgb(0.0, 1.0, 0.0).to_linear() * 0.3
        } else if is_target {
            Color::srgb(1.0, 1.0, 0.0).to_linear() * 0.2
        } else if waypoint.hazardous {
            Color::srgb(1.0, 0.0, 0.0).to_linear() * 0.1
        } else {
            LinearRgba::BLACK
        };
    }
}

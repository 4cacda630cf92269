//! The obstacle field: drifting clickable asteroids.
//!
//! Obstacles are ephemeral presentation-side entities; the mission record
//! never stores them. Their one contract with the mission core is the
//! [`ObstacleHit`] message raised when the player clicks a live asteroid.
//! Clicks that land outside `Playing` never reach the click system (it is
//! state-gated), and the reducer's mode guard drops any that slip through
//! on a transition frame.

use crate::config::GameConfig;
use crate::constants::{
    OBSTACLE_PICK_RADIUS, OBSTACLE_RADIUS, OBSTACLE_RESET_Z, OBSTACLE_SPAWN_DEPTH,
    OBSTACLE_SPREAD_X, OBSTACLE_SPREAD_Y, OBSTACLE_TUMBLE_X_PER_FRAME,
    OBSTACLE_TUMBLE_Y_PER_FRAME,
};
use crate::mission::{MissionMode, ObstacleHit};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::Rng;

// ── Components & resources ────────────────────────────────────────────────────

/// Marker for one asteroid in the field.
#[derive(Component)]
pub struct Obstacle;

/// Attached to an asteroid for the red flash after a hit. While present the
/// asteroid neither drifts nor accepts clicks.
#[derive(Component)]
pub struct HitFlash {
    pub timer: Timer,
}

/// Shared mesh and material handles for the whole field.
#[derive(Resource)]
pub struct ObstacleAssets {
    mesh: Handle<Mesh>,
    base_material: Handle<StandardMaterial>,
    hit_material: Handle<StandardMaterial>,
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct ObstaclePlugin;

impl Plugin for ObstaclePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_obstacle_assets)
            .add_systems(
                OnTransition {
                    exited: MissionMode::Menu,
                    entered: MissionMode::Playing,
                },
                spawn_obstacle_field,
            )
            .add_systems(
                OnTransition {
                    exited: MissionMode::LevelComplete,
                    entered: MissionMode::Playing,
                },
                respawn_obstacle_field,
            )
            .add_systems(
                Update,
                (
                    obstacle_drift_system.run_if(in_state(MissionMode::Playing)),
                    obstacle_click_system.run_if(in_state(MissionMode::Playing)),
                    hit_flash_recovery_system,
                ),
            );
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

/// Create the shared asteroid mesh and its normal / hit materials once.
pub fn setup_obstacle_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let rock = Color::srgb_u8(139, 115, 85);
    commands.insert_resource(ObstacleAssets {
        mesh: meshes.add(Sphere::new(OBSTACLE_RADIUS)),
        base_material: materials.add(StandardMaterial {
            base_color: rock,
            perceptual_roughness: 1.0,
            ..default()
        }),
        hit_material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.0, 0.0),
            emissive: Color::srgb(1.0, 0.0, 0.0).to_linear() * 0.5,
            ..default()
        }),
    });
}

fn random_field_position(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-0.5..0.5) * OBSTACLE_SPREAD_X,
        rng.gen_range(-0.5..0.5) * OBSTACLE_SPREAD_Y,
        -rng.gen_range(0.0..OBSTACLE_SPAWN_DEPTH),
    )
}

/// Spawn a fresh field of asteroids scattered through the approach lane.
pub fn spawn_obstacle_field(
    mut commands: Commands,
    assets: Res<ObstacleAssets>,
    config: Res<GameConfig>,
) {
    let mut rng = rand::thread_rng();
    for _ in 0..config.obstacle_count {
        commands.spawn((
            Obstacle,
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(assets.base_material.clone()),
            Transform::from_translation(random_field_position(&mut rng)),
            Visibility::default(),
        ));
    }
}

/// Replace the field for a new level.
pub fn respawn_obstacle_field(
    mut commands: Commands,
    existing: Query<Entity, With<Obstacle>>,
    assets: Res<ObstacleAssets>,
    config: Res<GameConfig>,
) {
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
    spawn_obstacle_field(commands, assets, config);
}

// ── Per-frame behaviour ───────────────────────────────────────────────────────

/// Tumble and drift each live asteroid toward the camera; recycle any that
/// drift past the viewer to the back of the lane with a fresh lateral
/// position.
pub fn obstacle_drift_system(
    config: Res<GameConfig>,
    mut obstacles: Query<&mut Transform, (With<Obstacle>, Without<HitFlash>)>,
) {
    let mut rng = rand::thread_rng();
    for mut transform in obstacles.iter_mut() {
        transform.rotate_x(OBSTACLE_TUMBLE_X_PER_FRAME);
        transform.rotate_y(OBSTACLE_TUMBLE_Y_PER_FRAME);
        transform.translation.z += config.obstacle_drift_per_frame;

        if transform.translation.z > OBSTACLE_RESET_Z {
            transform.translation = Vec3::new(
                rng.gen_range(-0.5..0.5) * OBSTACLE_SPREAD_X,
                rng.gen_range(-0.5..0.5) * OBSTACLE_SPREAD_Y,
                -OBSTACLE_SPAWN_DEPTH,
            );
        }
    }
}

/// Nearest intersection of a ray with a sphere, as a distance along the
/// ray. `None` when the ray misses or the sphere is behind the origin.
pub fn ray_sphere_intersection(
    origin: Vec3,
    direction: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let to_center = center - origin;
    let projected = to_center.dot(direction);
    let closest_sq = to_center.length_squared() - projected * projected;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }
    let half_chord = (radius_sq - closest_sq).sqrt();
    let near = projected - half_chord;
    let far = projected + half_chord;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        // Origin is inside the sphere.
        Some(far)
    } else {
        None
    }
}

/// Turn a left click on a live asteroid into an [`ObstacleHit`].
///
/// Casts the cursor ray from the 3-D camera and picks the closest
/// intersected asteroid, which then flashes red for a moment and is
/// excluded from drift and further clicks until it recovers.
pub fn obstacle_click_system(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    obstacles: Query<(Entity, &GlobalTransform), (With<Obstacle>, Without<HitFlash>)>,
    assets: Res<ObstacleAssets>,
    config: Res<GameConfig>,
    mut commands: Commands,
    mut hits: MessageWriter<ObstacleHit>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    let mut closest: Option<(Entity, f32)> = None;
    for (entity, transform) in obstacles.iter() {
        if let Some(distance) = ray_sphere_intersection(
            ray.origin,
            *ray.direction,
            transform.translation(),
            OBSTACLE_PICK_RADIUS,
        ) {
            if closest.map_or(true, |(_, best)| distance < best) {
                closest = Some((entity, distance));
            }
        }
    }

    if let Some((entity, _)) = closest {
        commands.entity(entity).insert((
            HitFlash {
                timer: Timer::from_seconds(config.obstacle_hit_flash_secs, TimerMode::Once),
            },
            MeshMaterial3d(assets.hit_material.clone()),
        ));
        hits.write(ObstacleHit);
    }
}

/// Return flashed asteroids to normal once the flash runs out.
pub fn hit_flash_recovery_system(
    time: Res<Time>,
    mut flashed: Query<(Entity, &mut HitFlash)>,
    assets: Res<ObstacleAssets>,
    mut commands: Commands,
) {
    for (entity, mut flash) in flashed.iter_mut() {
        flash.timer.tick(time.delta());
        if flash.timer.finished() {
            commands
                .entity(entity)
                .remove::<HitFlash>()
                .insert(MeshMaterial3d(assets.base_material.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_hits_a_sphere_dead_ahead() {
        let hit = ray_sphere_intersection(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 10.0), 1.0);
        assert_eq!(hit, Some(9.0));
    }

    #[test]
    fn ray_misses_an_offset_sphere() {
        let hit = ray_sphere_intersection(Vec3::ZERO, Vec3::Z, Vec3::new(5.0, 0.0, 10.0), 1.0);
        assert_eq!(hit, None);
    }

    #[test]
    fn grazing_ray_still_hits() {
        let hit = ray_sphere_intersection(Vec3::ZERO, Vec3::Z, Vec3::new(0.99, 0.0, 10.0), 1.0);
        assert!(hit.is_some());
    }

    #[test]
    fn sphere_behind_the_origin_is_ignored() {
        let hit = ray_sphere_intersection(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -10.0), 1.0);
        assert_eq!(hit, None);
    }

    #[test]
    fn origin_inside_the_sphere_reports_the_exit() {
        let hit = ray_sphere_intersection(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 0.5), 1.0);
        assert_eq!(hit, Some(1.5));
    }
}

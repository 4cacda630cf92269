//! The player craft: entity hierarchy and the per-frame steering rule.
//!
//! Steering is deliberately simple: head straight for the first unvisited
//! way-point in catalog order, one fixed-length step per rendered frame.
//! There is no obstacle avoidance and no memory beyond the current
//! position. The step is not delta-time scaled; trajectories and arrival
//! timing are deterministic in frame counts, and the step length (set by
//! difficulty) is far smaller than any arrival radius, so overshoot can
//! never skip a target.

use crate::catalog::WaypointCatalog;
use crate::config::GameConfig;
use crate::constants::{
    CRAFT_BOB_AMPLITUDE, CRAFT_BOB_FREQUENCY, CRAFT_START_X, CRAFT_START_Y, CRAFT_START_Z,
    CRAFT_YAW_PER_FRAME,
};
use crate::mission::{MissionMode, MissionState, WaypointArrival};
use bevy::prelude::*;

// ── Components ────────────────────────────────────────────────────────────────

/// Marker for the craft's root entity.
#[derive(Component)]
pub struct Spacecraft;

/// Marker for the thruster flame cones; visible only while steering.
#[derive(Component)]
pub struct ThrusterFlame;

/// Marker for the translucent shield shell; visible while shield > 0.
#[derive(Component)]
pub struct ShieldShell;

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct SpacecraftPlugin;

impl Plugin for SpacecraftPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnTransition {
                exited: MissionMode::Menu,
                entered: MissionMode::Playing,
            },
            spawn_spacecraft,
        )
        .add_systems(
            OnTransition {
                exited: MissionMode::LevelComplete,
                entered: MissionMode::Playing,
            },
            reset_spacecraft,
        )
        .add_systems(
            Update,
            (
                steering_system.run_if(in_state(MissionMode::Playing)),
                shield_shell_sync_system,
            ),
        );
    }
}

// ── Spawn / reset ─────────────────────────────────────────────────────────────

/// Craft spawn position.
pub fn craft_start() -> Vec3 {
    Vec3::new(CRAFT_START_X, CRAFT_START_Y, CRAFT_START_Z)
}

/// Spawn the craft hierarchy: cone body, wing slabs, thruster flames
/// (hidden until steering), and the shield shell (hidden until a shield
/// power-up is collected).
pub fn spawn_spacecraft(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let body_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: Color::srgb(0.31, 0.27, 0.90).to_linear() * 0.2,
        ..default()
    });
    let wing_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.8, 0.8, 0.8),
        metallic: 0.8,
        ..default()
    });
    let flame_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.27, 0.0),
        emissive: Color::srgb(1.0, 0.27, 0.0).to_linear() * 0.8,
        ..default()
    });
    let shield_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.0, 1.0, 1.0, 0.3),
        emissive: Color::srgb(0.0, 1.0, 1.0).to_linear() * 0.2,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    let flame_flip = Quat::from_rotation_z(std::f32::consts::PI);

    commands
        .spawn((
            Spacecraft,
            Mesh3d(meshes.add(Cone {
                radius: 0.3,
                height: 1.0,
            })),
            MeshMaterial3d(body_material),
            Transform::from_translation(craft_start()),
            Visibility::default(),
        ))
        .with_children(|craft| {
            // Wings
            let wing_mesh = meshes.add(Cuboid::new(0.8, 0.1, 0.3));
            craft.spawn((
                Mesh3d(wing_mesh.clone()),
                MeshMaterial3d(wing_material.clone()),
                Transform::from_xyz(0.4, 0.0, 0.0),
            ));
            craft.spawn((
                Mesh3d(wing_mesh),
                MeshMaterial3d(wing_material),
                Transform::from_xyz(-0.4, 0.0, 0.0),
            ));

            // Thruster flames, hidden until the craft is under way.
            craft.spawn((
                ThrusterFlame,
                Mesh3d(meshes.add(Cone {
                    radius: 0.1,
                    height: 0.5,
                })),
                MeshMaterial3d(flame_material.clone()),
                Transform::from_xyz(0.0, -0.8, 0.0).with_rotation(flame_flip),
                Visibility::Hidden,
            ));
            let side_flame = meshes.add(Cone {
                radius: 0.05,
                height: 0.3,
            });
            craft.spawn((
                ThrusterFlame,
                Mesh3d(side_flame.clone()),
                MeshMaterial3d(flame_material.clone()),
                Transform::from_xyz(0.3, -0.6, 0.0).with_rotation(flame_flip),
                Visibility::Hidden,
            ));
            craft.spawn((
                ThrusterFlame,
                Mesh3d(side_flame),
                MeshMaterial3d(flame_material),
                Transform::from_xyz(-0.3, -0.6, 0.0).with_rotation(flame_flip),
                Visibility::Hidden,
            ));

            // Shield shell
            craft.spawn((
                ShieldShell,
                Mesh3d(meshes.add(Sphere::new(1.0))),
                MeshMaterial3d(shield_material),
                Transform::default(),
                Visibility::Hidden,
            ));
        });
}

/// Put the craft back on the start line for the next level.
pub fn reset_spacecraft(mut crafts: Query<&mut Transform, With<Spacecraft>>) {
    for mut transform in crafts.iter_mut() {
        transform.translation = craft_start();
        transform.rotation = Quat::IDENTITY;
    }
}

// ── Steering ──────────────────────────────────────────────────────────────────

/// One fixed-length step from `from` toward `to`.
pub fn step_toward(from: Vec3, to: Vec3, step: f32) -> Vec3 {
    from + (to - from).normalize_or_zero() * step
}

/// Whether `position` is within arrival range of a way-point of radius
/// `size`.
pub fn within_arrival_range(position: Vec3, target: Vec3, size: f32, slack: f32) -> bool {
    position.distance(target) < size + slack
}

/// Advance the craft toward the first unvisited way-point and report
/// arrival.
///
/// Also applies the cosmetic per-frame yaw and vertical bob, and toggles the
/// thruster flames. Duplicate arrival reports across consecutive frames are
/// absorbed by the reducer.
pub fn steering_system(
    time: Res<Time>,
    state: Res<MissionState>,
    catalog: Res<WaypointCatalog>,
    config: Res<GameConfig>,
    mut crafts: Query<&mut Transform, With<Spacecraft>>,
    mut flames: Query<&mut Visibility, With<ThrusterFlame>>,
    mut arrivals: MessageWriter<WaypointArrival>,
) {
    let Ok(mut transform) = crafts.single_mut() else {
        return;
    };

    transform.rotate_y(CRAFT_YAW_PER_FRAME);

    let mut thrusting = false;
    if let Some(target) = catalog.next_unvisited(&state.visited) {
        let step = config.advance_step(state.difficulty);
        transform.translation = step_toward(transform.translation, target.position, step);
        thrusting = true;

        if within_arrival_range(
            transform.translation,
            target.position,
            target.size,
            config.arrival_slack,
        ) {
            arrivals.write(WaypointArrival { id: target.id });
        }
    }

    // Gentle bob so the craft never sits perfectly still.
    transform.translation.y +=
        (time.elapsed_secs() * CRAFT_BOB_FREQUENCY).sin() * CRAFT_BOB_AMPLITUDE;

    for mut visibility in flames.iter_mut() {
        *visibility = if thrusting {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

/// Keep the shield shell visible exactly while any shield remains.
pub fn shield_shell_sync_system(
    state: Res<MissionState>,
    mut shells: Query<&mut Visibility, With<ShieldShell>>,
) {
    if !state.is_changed() {
        return;
    }
    let shielded = state.shield > 0.0;
    for mut visibility in shells.iter_mut() {
        *visibility = if shielded {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WaypointId;
    use std::collections::HashSet;

    #[test]
    fn step_toward_moves_exactly_one_step() {
        let from = Vec3::new(-10.0, 0.0, 0.0);
        let to = Vec3::new(-8.0, 0.0, 0.0);
        let next = step_toward(from, to, 0.02);
        assert!((next - Vec3::new(-9.98, 0.0, 0.0)).length() < 1e-6);
        assert!(((next - from).length() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn step_toward_is_stationary_at_the_target() {
        let at = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(step_toward(at, at, 0.04), at);
    }

    #[test]
    fn arrival_range_is_size_plus_slack() {
        let target = Vec3::ZERO;
        // Mercury-sized target: radius 0.8, slack 0.5 => threshold 1.3.
        assert!(within_arrival_range(Vec3::new(1.29, 0.0, 0.0), target, 0.8, 0.5));
        assert!(!within_arrival_range(Vec3::new(1.3, 0.0, 0.0), target, 0.8, 0.5));
        assert!(!within_arrival_range(Vec3::new(2.0, 0.0, 0.0), target, 0.8, 0.5));
    }

    #[test]
    fn fixed_steps_reach_the_first_waypoint_in_bounded_frames() {
        let catalog = WaypointCatalog::default();
        let visited = HashSet::<WaypointId>::new();
        let target = catalog.next_unvisited(&visited).unwrap();

        let mut position = craft_start();
        let mut frames = 0u32;
        while !within_arrival_range(position, target.position, target.size, 0.5) {
            position = step_toward(position, target.position, 0.02);
            frames += 1;
            assert!(frames < 100_000, "craft never arrived");
        }
        // Start (-10,0,0) to Mercury (-8,0,0): 2.0 units, arrival radius
        // 1.3, so 0.7 units of travel at 0.02 per frame. The exact frame
        // the threshold trips depends on f32 rounding right at 1.3.
        assert!((34..=38).contains(&frames), "arrived after {frames} frames");
    }
}

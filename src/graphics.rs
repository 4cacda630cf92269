//! Camera and lighting setup.

use crate::constants::{CAMERA_FOV_DEGREES, CAMERA_X, CAMERA_Y, CAMERA_Z};
use bevy::prelude::*;

/// Spawn the 3-D camera looking down the solar plane at the origin.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_xyz(CAMERA_X, CAMERA_Y, CAMERA_Z).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Key light, a warm "sun" glow at the origin, and a dim ambient fill.
pub fn setup_lighting(mut commands: Commands) {
    commands.spawn((
        PointLight {
            intensity: 1_500_000.0,
            range: 200.0,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0),
    ));

    commands.spawn((
        PointLight {
            intensity: 800_000.0,
            color: Color::srgb(1.0, 0.67, 0.0),
            range: 120.0,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 80.0,
        affects_lightmapped_meshes: true,
    });
}

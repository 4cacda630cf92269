use crate::obstacle::Obstacle;
use crate::spacecraft::Spacecraft;
use bevy::prelude::*;

/// Despawn all per-session entities so the scene is clean when the player
/// returns to the menu.
///
/// Runs on `OnEnter(Menu)`, which covers abort from any mode as well as the
/// initial startup entry (where both queries are empty). Planets and the
/// starfield are permanent and never despawned; their highlights reset on
/// their own because the menu-mode record has an empty visited set.
pub fn cleanup_game_world(
    mut commands: Commands,
    crafts: Query<Entity, With<Spacecraft>>,
    obstacles: Query<Entity, With<Obstacle>>,
) {
    for entity in crafts.iter() {
        commands.entity(entity).despawn();
    }
    for entity in obstacles.iter() {
        commands.entity(entity).despawn();
    }
}

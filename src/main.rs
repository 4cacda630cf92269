use bevy::prelude::*;
use bevy::window::WindowResolution;

use starlane::config;
use starlane::graphics;
use starlane::hud::HudPlugin;
use starlane::menu::MenuPlugin;
use starlane::mission::MissionPlugin;
use starlane::obstacle::ObstaclePlugin;
use starlane::scene::ScenePlugin;
use starlane::spacecraft::SpacecraftPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Starlane".into(),
                resolution: WindowResolution::new(1280, 720),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Insert GameConfig with compiled defaults; load_game_config will
        // overwrite it from assets/game.toml (if present) in the Startup
        // schedule.
        .insert_resource(config::GameConfig::default())
        // MissionPlugin registers the mode state machine and must come
        // before every plugin that gates on in_state(..).
        .add_plugins(MissionPlugin)
        .add_plugins((
            ScenePlugin,
            SpacecraftPlugin,
            ObstaclePlugin,
            HudPlugin,
            MenuPlugin,
        ))
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the
                // final values.
                config::load_game_config,
                graphics::setup_camera.after(config::load_game_config),
                graphics::setup_lighting.after(config::load_game_config),
            ),
        )
        .run();
}

//! Overlay screens for every non-gameplay mode.
//!
//! Each overlay is spawned on `OnEnter` of its mode and despawned on
//! `OnExit`, exactly mirroring the mode state machine. Buttons never change
//! mission state directly: they write [`crate::mission::MissionCommand`]
//! messages and let the reducer decide.
//!
//! ## Systems (registered by `MenuPlugin`)
//!
//! | Overlay | Spawned | Removed | Buttons |
//! |---------|---------|---------|---------|
//! | Main menu | `OnEnter(Menu)` | `OnExit(Menu)` | Easy / Medium / Hard / Quit |
//! | Pause | `OnEnter(Paused)` | `OnExit(Paused)` | Resume / Abort |
//! | Level complete | `OnEnter(LevelComplete)` | `OnExit(LevelComplete)` | Next level / Main menu |
//! | Game over | `OnEnter(GameOver)` | `OnExit(GameOver)` | Try again / Quit |

mod cleanup;
mod common;
mod game_over;
mod level_complete;
mod main_menu;
mod pause;
mod types;

pub use types::*;

use crate::mission::MissionMode;
use bevy::prelude::*;

pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(MissionMode::Menu),
            (cleanup::cleanup_game_world, main_menu::setup_main_menu),
        )
        .add_systems(OnExit(MissionMode::Menu), main_menu::cleanup_main_menu)
        .add_systems(
            Update,
            main_menu::menu_button_system.run_if(in_state(MissionMode::Menu)),
        )
        .add_systems(OnEnter(MissionMode::Paused), pause::setup_pause_overlay)
        .add_systems(OnExit(MissionMode::Paused), pause::cleanup_pause_overlay)
        .add_systems(
            Update,
            (
                pause::pause_input_system.run_if(in_state(MissionMode::Playing)),
                pause::resume_input_system.run_if(in_state(MissionMode::Paused)),
                pause::pause_button_system.run_if(in_state(MissionMode::Paused)),
            ),
        )
        .add_systems(
            OnEnter(MissionMode::LevelComplete),
            level_complete::setup_level_complete,
        )
        .add_systems(
            OnExit(MissionMode::LevelComplete),
            level_complete::cleanup_level_complete,
        )
        .add_systems(
            Update,
            level_complete::level_complete_button_system
                .run_if(in_state(MissionMode::LevelComplete)),
        )
        .add_systems(OnEnter(MissionMode::GameOver), game_over::setup_game_over)
        .add_systems(OnExit(MissionMode::GameOver), game_over::cleanup_game_over)
        .add_systems(
            Update,
            game_over::game_over_button_system.run_if(in_state(MissionMode::GameOver)),
        );
    }
}

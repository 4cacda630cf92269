use crate::mission::Difficulty;
use bevy::prelude::*;

/// Root node of the main-menu overlay; entire tree is despawned on
/// `OnExit(Menu)`.
#[derive(Component)]
pub struct MainMenuRoot;

/// Tags a difficulty button with the difficulty it starts.
#[derive(Component, Clone, Copy)]
pub struct DifficultyButton(pub Difficulty);

/// Tags the "Quit" button on the main menu and game-over overlays.
#[derive(Component)]
pub struct MenuQuitButton;

/// Root node of the pause overlay; despawned on `OnExit(Paused)`.
#[derive(Component)]
pub struct PauseOverlayRoot;

/// Tags the "Resume" button in the pause overlay.
#[derive(Component)]
pub struct PauseResumeButton;

/// Tags the "Abort" button in the pause overlay.
#[derive(Component)]
pub struct PauseAbortButton;

/// Root node of the level-complete overlay; despawned on
/// `OnExit(LevelComplete)`.
#[derive(Component)]
pub struct LevelCompleteRoot;

/// Tags the "Next Level" button.
#[derive(Component)]
pub struct NextLevelButton;

/// Tags the "Main Menu" button in the level-complete overlay.
#[derive(Component)]
pub struct LevelCompleteMenuButton;

/// Root node of the game-over overlay; despawned on `OnExit(GameOver)`.
#[derive(Component)]
pub struct GameOverRoot;

/// Tags the "Try Again" button in the game-over overlay.
#[derive(Component)]
pub struct GameOverRetryButton;

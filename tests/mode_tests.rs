//! Headless unit tests for the [`MissionMode`] state machine.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering — so they
//! run fast and deterministically in CI.
//!
//! Covered scenarios:
//! 1. Default initial mode is `Menu`.
//! 2. A `NextState` request transitions from `Menu` → `Playing`.
//! 3. `Playing` persists across frames with no new transition request.
//! 4. `insert_state` can force-start directly in `Playing`.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use starlane::mission::MissionMode;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a minimal headless app with just the mode registered via
/// `init_state`.
///
/// `MinimalPlugins` provides the required scheduling infrastructure.
/// `StatesPlugin` adds the `StateTransition` schedule needed by
/// `init_state`. No window or rendering is created.
fn app_with_default_mode() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<MissionMode>();
    app
}

/// Build a minimal headless app with the mode forced into `Playing` from
/// the start.
fn app_with_playing_mode() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_state(MissionMode::Playing);
    app
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// The default variant of `MissionMode` is `Menu`.
#[test]
fn default_mode_is_menu() {
    let mut app = app_with_default_mode();
    app.update(); // run one frame so StateTransition fires
    let mode = app.world().resource::<State<MissionMode>>();
    assert_eq!(*mode.get(), MissionMode::Menu, "initial mode must be Menu");
}

/// Requesting `Playing` via `NextState` transitions the mode on the next
/// `StateTransition` pass (which Bevy runs before each `Update`).
#[test]
fn transition_menu_to_playing() {
    let mut app = app_with_default_mode();
    app.update(); // settle into Menu

    app.world_mut()
        .resource_mut::<NextState<MissionMode>>()
        .set(MissionMode::Playing);

    app.update(); // StateTransition fires; mode becomes Playing

    let mode = app.world().resource::<State<MissionMode>>();
    assert_eq!(
        *mode.get(),
        MissionMode::Playing,
        "mode must be Playing after explicit transition"
    );
}

/// `Playing` persists across additional frames — no accidental reversion.
#[test]
fn playing_mode_persists_across_frames() {
    let mut app = app_with_default_mode();
    app.update();

    app.world_mut()
        .resource_mut::<NextState<MissionMode>>()
        .set(MissionMode::Playing);
    app.update();

    // Run several more frames without another transition request.
    for _ in 0..5 {
        app.update();
    }

    let mode = app.world().resource::<State<MissionMode>>();
    assert_eq!(
        *mode.get(),
        MissionMode::Playing,
        "Playing must remain stable without a new transition"
    );
}

/// `insert_state` can force the initial mode to `Playing` directly.
#[test]
fn insert_state_starts_in_playing() {
    let mut app = app_with_playing_mode();
    app.update();

    let mode = app.world().resource::<State<MissionMode>>();
    assert_eq!(
        *mode.get(),
        MissionMode::Playing,
        "insert_state(Playing) must start directly in Playing"
    );
}

/// Requesting `Playing` when already in `Playing` is a no-op — mode stays.
#[test]
fn redundant_transition_to_playing_is_stable() {
    let mut app = app_with_playing_mode();
    app.update();

    // Request Playing again while already in Playing.
    app.world_mut()
        .resource_mut::<NextState<MissionMode>>()
        .set(MissionMode::Playing);
    app.update();

    let mode = app.world().resource::<State<MissionMode>>();
    assert_eq!(
        *mode.get(),
        MissionMode::Playing,
        "redundant Playing → Playing transition must leave mode unchanged"
    );
}

/// The full overlay cycle is reachable: Menu → Playing → Paused → Playing
/// → GameOver → Menu.
#[test]
fn overlay_cycle_is_reachable() {
    let mut app = app_with_default_mode();
    app.update();

    for mode in [
        MissionMode::Playing,
        MissionMode::Paused,
        MissionMode::Playing,
        MissionMode::GameOver,
        MissionMode::Menu,
    ] {
        app.world_mut()
            .resource_mut::<NextState<MissionMode>>()
            .set(mode);
        app.update();
        let current = app.world().resource::<State<MissionMode>>();
        assert_eq!(*current.get(), mode);
    }
}

//! Message-driven tests of the whole mission loop, headless.
//!
//! Built on [`MinimalPlugins`] plus [`MissionPlugin`]: no window, no
//! rendering, no real timers. Commands, arrivals, and obstacle hits are
//! written straight into the message streams, exactly as the UI and
//! steering systems would write them, and the reducer systems drain them on
//! the next `update()`.

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use starlane::catalog::WaypointId;
use starlane::mission::{
    Difficulty, LastMissionSummary, MissionCommand, MissionMode, MissionPlugin, MissionState,
    ObstacleHit, WaypointArrival,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn mission_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, MissionPlugin));
    app.update(); // settle into Menu
    app
}

fn send_command(app: &mut App, command: MissionCommand) {
    app.world_mut()
        .resource_mut::<Messages<MissionCommand>>()
        .write(command);
    app.update();
}

fn state(app: &App) -> &MissionState {
    app.world().resource::<MissionState>()
}

fn bevy_mode(app: &App) -> MissionMode {
    *app.world().resource::<State<MissionMode>>().get()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn start_command_enters_playing_with_the_difficulty_budget() {
    let mut app = mission_app();
    send_command(&mut app, MissionCommand::Start(Difficulty::Medium));

    let record = state(&app);
    assert_eq!(record.mode, MissionMode::Playing);
    assert_eq!(record.difficulty, Difficulty::Medium);
    assert_eq!(record.time_remaining, 240);
    assert_eq!(record.fuel, 100.0);

    // The Bevy state mirror follows on the next StateTransition pass.
    app.update();
    assert_eq!(bevy_mode(&app), MissionMode::Playing);
}

#[test]
fn pause_and_resume_round_trip() {
    let mut app = mission_app();
    send_command(&mut app, MissionCommand::Start(Difficulty::Easy));
    send_command(&mut app, MissionCommand::Pause);
    assert_eq!(state(&app).mode, MissionMode::Paused);

    app.update();
    assert_eq!(bevy_mode(&app), MissionMode::Paused);

    send_command(&mut app, MissionCommand::Resume);
    assert_eq!(state(&app).mode, MissionMode::Playing);
    assert_eq!(state(&app).time_remaining, 300);
}

#[test]
fn illegal_commands_leave_the_record_untouched() {
    let mut app = mission_app();

    // Resume and NextLevel are meaningless on the menu.
    send_command(&mut app, MissionCommand::Resume);
    assert_eq!(*state(&app), MissionState::default());
    send_command(&mut app, MissionCommand::NextLevel);
    assert_eq!(*state(&app), MissionState::default());

    // NextLevel is also a no-op while playing.
    send_command(&mut app, MissionCommand::Start(Difficulty::Easy));
    let playing = state(&app).clone();
    send_command(&mut app, MissionCommand::NextLevel);
    assert_eq!(*state(&app), playing);
}

#[test]
fn six_arrivals_complete_the_level_and_next_level_restarts_it() {
    let mut app = mission_app();
    send_command(&mut app, MissionCommand::Start(Difficulty::Easy));

    {
        let mut arrivals = app
            .world_mut()
            .resource_mut::<Messages<WaypointArrival>>();
        for id in 0..6 {
            arrivals.write(WaypointArrival { id: WaypointId(id) });
        }
    }
    app.update();

    let record = state(&app);
    assert_eq!(record.mode, MissionMode::LevelComplete);
    assert_eq!(record.level, 2);
    assert_eq!(record.score, 2950);

    app.update();
    assert_eq!(bevy_mode(&app), MissionMode::LevelComplete);

    send_command(&mut app, MissionCommand::NextLevel);
    let next = state(&app);
    assert_eq!(next.mode, MissionMode::Playing);
    assert_eq!(next.level, 2);
    assert!(next.visited.is_empty());
    assert_eq!(next.time_remaining, 300);
}

#[test]
fn duplicate_arrival_messages_are_absorbed() {
    let mut app = mission_app();
    send_command(&mut app, MissionCommand::Start(Difficulty::Easy));

    {
        let mut arrivals = app
            .world_mut()
            .resource_mut::<Messages<WaypointArrival>>();
        // The steering system reports arrival on consecutive frames until
        // the visited set catches up; all repeats must collapse to one.
        for _ in 0..4 {
            arrivals.write(WaypointArrival { id: WaypointId(0) });
        }
    }
    app.update();

    let record = state(&app);
    assert_eq!(record.score, 100);
    assert_eq!(record.visited.len(), 1);
}

#[test]
fn obstacle_hits_accumulate_score_and_counter() {
    let mut app = mission_app();
    send_command(&mut app, MissionCommand::Start(Difficulty::Hard));

    {
        let mut hits = app.world_mut().resource_mut::<Messages<ObstacleHit>>();
        hits.write(ObstacleHit);
        hits.write(ObstacleHit);
        hits.write(ObstacleHit);
    }
    app.update();

    let record = state(&app);
    assert_eq!(record.score, 150);
    assert_eq!(record.obstacles_destroyed, 3);
    // Fuel was already full; the bonus clamps.
    assert_eq!(record.fuel, 100.0);
}

#[test]
fn abort_returns_to_menu_and_keeps_a_transient_summary() {
    let mut app = mission_app();
    send_command(&mut app, MissionCommand::Start(Difficulty::Medium));

    {
        let mut hits = app.world_mut().resource_mut::<Messages<ObstacleHit>>();
        hits.write(ObstacleHit);
    }
    app.update();
    assert_eq!(state(&app).score, 50);

    send_command(&mut app, MissionCommand::Abort);
    assert_eq!(*state(&app), MissionState::default());

    let summary = app.world().resource::<LastMissionSummary>();
    let last = summary.0.expect("abort must capture the discarded session");
    assert_eq!(last.score, 50);
    assert_eq!(last.level, 1);
    assert_eq!(last.difficulty, Difficulty::Medium);

    app.update();
    assert_eq!(bevy_mode(&app), MissionMode::Menu);
}

#[test]
fn stale_messages_for_a_dead_session_are_dropped() {
    let mut app = mission_app();
    send_command(&mut app, MissionCommand::Start(Difficulty::Easy));
    send_command(&mut app, MissionCommand::Abort);

    // A click and an arrival that raced the abort land on the menu record.
    {
        let mut hits = app.world_mut().resource_mut::<Messages<ObstacleHit>>();
        hits.write(ObstacleHit);
    }
    {
        let mut arrivals = app
            .world_mut()
            .resource_mut::<Messages<WaypointArrival>>();
        arrivals.write(WaypointArrival { id: WaypointId(2) });
    }
    app.update();

    assert_eq!(*state(&app), MissionState::default());
}

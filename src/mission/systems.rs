//! Bevy plumbing around the mission reducer.
//!
//! Three message streams feed the reducer: [`MissionCommand`] from menu
//! buttons and keyboard shortcuts, [`WaypointArrival`] from the steering
//! system, and [`ObstacleHit`] from the click handler. Each reducer system
//! drains its stream, computes the successor record with
//! [`MissionState::apply`], and assigns it over the resource in one step.
//!
//! [`sync_mission_mode_system`] then mirrors `MissionState.mode` into
//! `NextState<MissionMode>`, so overlays and `run_if` gates follow the
//! record rather than the other way around. The systems are chained, which
//! keeps mode changes visible to the Bevy state machine on the same frame
//! they happen.
//!
//! A stale timer tick or click that lands after the session it belonged to
//! has ended is harmless: the reducer's mode guards drop it.

use crate::catalog::{WaypointCatalog, WaypointId};
use crate::config::GameConfig;
use crate::constants::TICK_INTERVAL_SECS;
use bevy::prelude::*;

use super::state::{Difficulty, MissionEvent, MissionMode, MissionState};

// ── Messages ──────────────────────────────────────────────────────────────────

/// Operator-initiated mission transitions, written by UI and input systems.
#[derive(Message, Debug, Clone, Copy)]
pub enum MissionCommand {
    Start(Difficulty),
    Pause,
    Resume,
    Abort,
    NextLevel,
}

/// The craft came within arrival range of a way-point.
///
/// The steering system may report the same way-point on several consecutive
/// frames; the reducer's idempotence guard absorbs the duplicates.
#[derive(Message, Debug, Clone, Copy)]
pub struct WaypointArrival {
    pub id: WaypointId,
}

/// The player clicked a live obstacle.
#[derive(Message, Debug, Clone, Copy)]
pub struct ObstacleHit;

// ── Resources ─────────────────────────────────────────────────────────────────

/// Fixed-rate mission clock. Ticked only while `Playing`, so pausing
/// freezes the countdown exactly where it stood.
#[derive(Resource)]
pub struct TickTimer(pub Timer);

impl Default for TickTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(TICK_INTERVAL_SECS, TimerMode::Repeating))
    }
}

/// Snapshot of the session that just ended, shown transiently on the menu.
///
/// Captured by [`mission_command_system`] right before an abort discards the
/// live record. Presentation-only: never read by the reducer, never carried
/// into the next session.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct LastMissionSummary(pub Option<MissionSummary>);

#[derive(Debug, Clone, Copy)]
pub struct MissionSummary {
    pub score: u32,
    pub level: u32,
    pub difficulty: Difficulty,
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Drain operator commands into the reducer.
pub fn mission_command_system(
    mut commands: MessageReader<MissionCommand>,
    mut state: ResMut<MissionState>,
    mut summary: ResMut<LastMissionSummary>,
    mut tick: ResMut<TickTimer>,
    catalog: Res<WaypointCatalog>,
    config: Res<GameConfig>,
) {
    for command in commands.read() {
        let event = match *command {
            MissionCommand::Start(difficulty) => MissionEvent::Start(difficulty),
            MissionCommand::Pause => MissionEvent::Pause,
            MissionCommand::Resume => MissionEvent::Resume,
            MissionCommand::Abort => MissionEvent::Abort,
            MissionCommand::NextLevel => MissionEvent::NextLevel,
        };

        if matches!(event, MissionEvent::Abort) && state.mode != MissionMode::Menu {
            summary.0 = Some(MissionSummary {
                score: state.score,
                level: state.level,
                difficulty: state.difficulty,
            });
        }

        // A fresh mission or level starts with a full first second.
        if matches!(event, MissionEvent::Start(_) | MissionEvent::NextLevel) {
            tick.0.reset();
        }

        let next = state.apply(&event, &catalog, &config);
        *state = next;
    }
}

/// Advance the 1 Hz mission clock. Gated on `Playing` by the plugin.
pub fn mission_tick_system(
    time: Res<Time>,
    mut timer: ResMut<TickTimer>,
    mut state: ResMut<MissionState>,
    catalog: Res<WaypointCatalog>,
    config: Res<GameConfig>,
) {
    timer.0.tick(time.delta());
    // A long frame hitch can owe more than one tick.
    for _ in 0..timer.0.times_finished_this_tick() {
        let next = state.apply(&MissionEvent::Tick, &catalog, &config);
        *state = next;
    }
}

/// Drain way-point arrivals into the reducer.
pub fn waypoint_arrival_system(
    mut arrivals: MessageReader<WaypointArrival>,
    mut state: ResMut<MissionState>,
    catalog: Res<WaypointCatalog>,
    config: Res<GameConfig>,
) {
    for arrival in arrivals.read() {
        let next = state.apply(&MissionEvent::WaypointReached(arrival.id), &catalog, &config);
        *state = next;
    }
}

/// Drain obstacle hits into the reducer.
pub fn obstacle_hit_system(
    mut hits: MessageReader<ObstacleHit>,
    mut state: ResMut<MissionState>,
    catalog: Res<WaypointCatalog>,
    config: Res<GameConfig>,
) {
    for _ in hits.read() {
        let next = state.apply(&MissionEvent::ObstacleDestroyed, &catalog, &config);
        *state = next;
    }
}

/// Mirror the record's mode into the Bevy state machine.
pub fn sync_mission_mode_system(
    state: Res<MissionState>,
    mode: Res<State<MissionMode>>,
    mut next_mode: ResMut<NextState<MissionMode>>,
) {
    if *mode.get() != state.mode {
        next_mode.set(state.mode);
    }
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers the mission record, the mode state machine, the message
/// streams, and the reducer systems.
///
/// Must be added before any plugin that calls
/// `.run_if(in_state(MissionMode::Playing))`, so the state is always
/// registered first.
pub struct MissionPlugin;

impl Plugin for MissionPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<MissionMode>()
            .init_resource::<MissionState>()
            .init_resource::<WaypointCatalog>()
            .init_resource::<GameConfig>()
            .init_resource::<TickTimer>()
            .init_resource::<LastMissionSummary>()
            .add_message::<MissionCommand>()
            .add_message::<WaypointArrival>()
            .add_message::<ObstacleHit>()
            .add_systems(
                Update,
                (
                    mission_command_system,
                    mission_tick_system.run_if(in_state(MissionMode::Playing)),
                    waypoint_arrival_system,
                    obstacle_hit_system,
                    sync_mission_mode_system,
                )
                    .chain(),
            );
    }
}

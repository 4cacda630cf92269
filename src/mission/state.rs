//! Mission state record and the event reducer that owns every transition.
//!
//! [`MissionState`] is the single mutable record of a play session. It is
//! never edited field-by-field in place by callers: every change goes
//! through [`MissionState::apply`], which computes a complete replacement
//! record. Systems assign that record over the Bevy resource in one step,
//! so HUD and render systems always read a consistent snapshot.
//!
//! Events that are illegal for the current mode return the state unchanged;
//! there are no error values anywhere in this module. The only terminal
//! outcome is [`MissionMode::GameOver`], which is a normal mode, not a
//! failure.

use crate::catalog::{PowerUpKind, WaypointCatalog, WaypointId};
use crate::config::GameConfig;
use crate::constants::GAUGE_MAX;
use bevy::prelude::*;
use std::collections::HashSet;

// ── Enums ─────────────────────────────────────────────────────────────────────

/// Top-level mission mode.
///
/// Registered as the Bevy `States` type so overlays spawn on
/// `OnEnter`/`OnExit` and gameplay systems gate on
/// `run_if(in_state(MissionMode::Playing))`. The authoritative copy lives in
/// [`MissionState::mode`]; a sync system mirrors it into `NextState`.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MissionMode {
    /// Difficulty-select splash; shown on startup and after abort.
    #[default]
    Menu,
    /// Mission running: clock ticking, craft steering, obstacles live.
    Playing,
    /// Mission frozen; pause overlay visible.
    Paused,
    /// A gauge or the clock hit zero; terminal until the player returns to
    /// the menu.
    GameOver,
    /// Every way-point visited; waiting for the next-level hand-off.
    LevelComplete,
}

/// Mission difficulty, fixed for the session once chosen at start.
///
/// Selects the time budget, the fuel decay rate, and the craft's per-frame
/// advance step (see [`GameConfig`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Display label for menus and the HUD.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Why the mission ended.
///
/// All three end conditions are evaluated on every tick; when several are
/// true at once the recorded cause is the first true one in the fixed order
/// fuel, health, time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    FuelExhausted,
    ShipDestroyed,
    TimeExpired,
}

// ── Events ────────────────────────────────────────────────────────────────────

/// The only legal ways to change a [`MissionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionEvent {
    /// Begin a fresh mission at the given difficulty. Legal from any mode.
    Start(Difficulty),
    /// Freeze the mission. Legal only from `Playing`.
    Pause,
    /// Unfreeze the mission. Legal only from `Paused`.
    Resume,
    /// Discard the session and return to the menu. Legal from any mode.
    Abort,
    /// Begin the next level after completing one. Legal only from
    /// `LevelComplete`.
    NextLevel,
    /// The craft arrived at a way-point. Idempotent per id per level.
    WaypointReached(WaypointId),
    /// The player destroyed an obstacle.
    ObstacleDestroyed,
    /// One second of mission time elapsed.
    Tick,
}

// ── State ─────────────────────────────────────────────────────────────────────

/// Complete state of one play session.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MissionState {
    pub mode: MissionMode,
    /// 1-based level counter; incremented when a level completes.
    pub level: u32,
    pub score: u32,
    /// Gauges, always within `[0, GAUGE_MAX]`.
    pub fuel: f32,
    pub health: f32,
    pub shield: f32,
    /// Way-points visited this level. Grows monotonically within a level;
    /// cleared at level start.
    pub visited: HashSet<WaypointId>,
    /// Power-ups collected this level, in collection order.
    pub power_ups: Vec<PowerUpKind>,
    /// Seconds left on the mission clock.
    pub time_remaining: u32,
    pub difficulty: Difficulty,
    pub obstacles_destroyed: u32,
    /// Set exactly when `mode` becomes `GameOver`.
    pub game_over_cause: Option<GameOverCause>,
}

impl Default for MissionState {
    fn default() -> Self {
        Self {
            mode: MissionMode::Menu,
            level: 1,
            score: 0,
            fuel: GAUGE_MAX,
            health: GAUGE_MAX,
            shield: 0.0,
            visited: HashSet::new(),
            power_ups: Vec::new(),
            time_remaining: crate::constants::EASY_TIME_BUDGET_SECS,
            difficulty: Difficulty::Easy,
            obstacles_destroyed: 0,
            game_over_cause: None,
        }
    }
}

/// Clamp a gauge write into `[0, GAUGE_MAX]`.
fn clamp_gauge(value: f32) -> f32 {
    value.clamp(0.0, GAUGE_MAX)
}

impl MissionState {
    /// Compute the successor state for `event`.
    ///
    /// Total over all inputs: events illegal for the current mode, unknown
    /// way-point ids, and repeat arrivals all return the state unchanged.
    pub fn apply(
        &self,
        event: &MissionEvent,
        catalog: &WaypointCatalog,
        config: &GameConfig,
    ) -> MissionState {
        match *event {
            MissionEvent::Start(difficulty) => MissionState {
                mode: MissionMode::Playing,
                time_remaining: config.time_budget(difficulty),
                difficulty,
                ..MissionState::default()
            },

            MissionEvent::Pause => {
                if self.mode != MissionMode::Playing {
                    return self.clone();
                }
                MissionState {
                    mode: MissionMode::Paused,
                    ..self.clone()
                }
            }

            MissionEvent::Resume => {
                if self.mode != MissionMode::Paused {
                    return self.clone();
                }
                MissionState {
                    mode: MissionMode::Playing,
                    ..self.clone()
                }
            }

            MissionEvent::Abort => MissionState::default(),

            MissionEvent::NextLevel => {
                if self.mode != MissionMode::LevelComplete {
                    return self.clone();
                }
                let mut next = self.clone();
                next.mode = MissionMode::Playing;
                next.visited.clear();
                next.power_ups.clear();
                next.time_remaining = config.time_budget(next.difficulty);
                next.fuel = clamp_gauge(next.fuel + config.next_level_fuel_refill);
                next.health = clamp_gauge(next.health + config.next_level_health_refill);
                // Shield is not refilled between levels.
                next
            }

            MissionEvent::WaypointReached(id) => {
                if self.mode != MissionMode::Playing || self.visited.contains(&id) {
                    return self.clone();
                }
                let Some(waypoint) = catalog.get(id) else {
                    return self.clone();
                };

                let mut next = self.clone();
                next.visited.insert(id);
                next.score += waypoint.points;

                if let Some(reward) = waypoint.fuel_reward {
                    next.fuel = clamp_gauge(next.fuel + reward);
                }

                if let Some(kind) = waypoint.power_up {
                    match kind {
                        PowerUpKind::Shield => next.shield = GAUGE_MAX,
                        PowerUpKind::Fuel => next.fuel = GAUGE_MAX,
                        PowerUpKind::Health => {
                            next.health =
                                clamp_gauge(next.health + config.power_up_health_refill);
                        }
                    }
                    next.power_ups.push(kind);
                }

                // Hazard check uses the shield level from before this
                // arrival; any positive shield negates the hit entirely and
                // is not consumed by it.
                if waypoint.hazardous && self.shield == 0.0 {
                    next.health = (next.health - config.hazard_health_damage).max(0.0);
                }

                if catalog.all_visited(&next.visited) {
                    next.mode = MissionMode::LevelComplete;
                    next.level += 1;
                    next.score += config.level_completion_bonus;
                }
                next
            }

            MissionEvent::ObstacleDestroyed => {
                if self.mode != MissionMode::Playing {
                    return self.clone();
                }
                let mut next = self.clone();
                next.score += config.obstacle_score;
                next.fuel = clamp_gauge(next.fuel + config.obstacle_fuel_bonus);
                next.obstacles_destroyed += 1;
                next
            }

            MissionEvent::Tick => {
                if self.mode != MissionMode::Playing {
                    return self.clone();
                }
                let mut next = self.clone();
                next.fuel = (next.fuel - config.fuel_decay(next.difficulty)).max(0.0);
                if next.shield > 0.0 {
                    next.shield = (next.shield - config.shield_decay_per_sec).max(0.0);
                }
                next.time_remaining = next.time_remaining.saturating_sub(1);

                // All three conditions are evaluated, not short-circuited;
                // any combination can be true on the same tick.
                let fuel_out = next.fuel <= 0.0;
                let ship_lost = next.health <= 0.0;
                let time_out = next.time_remaining == 0;
                if fuel_out || ship_lost || time_out {
                    next.mode = MissionMode::GameOver;
                    next.game_over_cause = Some(if fuel_out {
                        GameOverCause::FuelExhausted
                    } else if ship_lost {
                        GameOverCause::ShipDestroyed
                    } else {
                        GameOverCause::TimeExpired
                    });
                }
                next
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (WaypointCatalog, GameConfig) {
        (WaypointCatalog::default(), GameConfig::default())
    }

    fn playing(difficulty: Difficulty) -> MissionState {
        let (catalog, config) = fixtures();
        MissionState::default().apply(&MissionEvent::Start(difficulty), &catalog, &config)
    }

    fn gauges_in_range(state: &MissionState) -> bool {
        (0.0..=GAUGE_MAX).contains(&state.fuel)
            && (0.0..=GAUGE_MAX).contains(&state.health)
            && (0.0..=GAUGE_MAX).contains(&state.shield)
    }

    #[test]
    fn start_on_easy_yields_full_gauges_and_five_minutes() {
        let state = playing(Difficulty::Easy);
        assert_eq!(state.mode, MissionMode::Playing);
        assert_eq!(state.time_remaining, 300);
        assert_eq!(state.fuel, 100.0);
        assert_eq!(state.health, 100.0);
        assert_eq!(state.shield, 0.0);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert!(state.visited.is_empty());
        assert!(state.power_ups.is_empty());
    }

    #[test]
    fn start_time_budget_tracks_difficulty() {
        assert_eq!(playing(Difficulty::Medium).time_remaining, 240);
        assert_eq!(playing(Difficulty::Hard).time_remaining, 180);
    }

    #[test]
    fn fuel_reward_is_clamped_not_overfilled() {
        let (catalog, config) = fixtures();
        let mut state = playing(Difficulty::Easy);
        state.fuel = 90.0;

        // Earth: 200 points, +20 fuel.
        let next = state.apply(&MissionEvent::WaypointReached(WaypointId(2)), &catalog, &config);
        assert_eq!(next.score, 200);
        assert_eq!(next.fuel, 100.0);
    }

    #[test]
    fn hazard_damages_health_only_without_shield() {
        let (catalog, config) = fixtures();
        let mut state = playing(Difficulty::Easy);
        state.health = 60.0;

        // Jupiter is hazardous; no shield means a 25-point hit.
        let hit = state.apply(&MissionEvent::WaypointReached(WaypointId(4)), &catalog, &config);
        assert_eq!(hit.health, 35.0);

        // Any positive shield negates the hit entirely and is not consumed.
        state.shield = 40.0;
        let negated =
            state.apply(&MissionEvent::WaypointReached(WaypointId(4)), &catalog, &config);
        assert_eq!(negated.health, 60.0);
        assert_eq!(negated.shield, 40.0);
    }

    #[test]
    fn hard_fuel_runs_out_on_the_eighth_tick() {
        let (catalog, config) = fixtures();
        let mut state = playing(Difficulty::Hard);
        state.fuel = 15.0;

        for tick in 1..=10u32 {
            state = state.apply(&MissionEvent::Tick, &catalog, &config);
            if tick < 8 {
                assert_eq!(state.mode, MissionMode::Playing, "tick {tick}");
                assert!(state.fuel > 0.0, "tick {tick}");
            } else {
                // 15 - 8 * 2 clamps at zero and ends the mission; further
                // ticks are no-ops outside Playing.
                assert_eq!(state.fuel, 0.0, "tick {tick}");
                assert_eq!(state.mode, MissionMode::GameOver, "tick {tick}");
                assert_eq!(state.game_over_cause, Some(GameOverCause::FuelExhausted));
            }
        }
        assert_eq!(state.time_remaining, 180 - 8);
    }

    #[test]
    fn final_arrival_completes_the_level_in_one_transition() {
        let (catalog, config) = fixtures();
        let mut state = playing(Difficulty::Easy);
        for id in 0..5 {
            state = state.apply(
                &MissionEvent::WaypointReached(WaypointId(id)),
                &catalog,
                &config,
            );
            assert_eq!(state.mode, MissionMode::Playing);
        }

        let complete = state.apply(
            &MissionEvent::WaypointReached(WaypointId(5)),
            &catalog,
            &config,
        );
        assert_eq!(complete.mode, MissionMode::LevelComplete);
        assert_eq!(complete.level, 2);
        // 100 + 150 + 200 + 250 + 500 + 750 points plus the 1000 bonus.
        assert_eq!(complete.score, 2950);
        assert_eq!(complete.visited.len(), 6);
    }

    #[test]
    fn repeat_arrival_is_a_no_op() {
        let (catalog, config) = fixtures();
        let state = playing(Difficulty::Easy);
        let once = state.apply(&MissionEvent::WaypointReached(WaypointId(0)), &catalog, &config);
        let twice = once.apply(&MissionEvent::WaypointReached(WaypointId(0)), &catalog, &config);
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_waypoint_id_is_dropped() {
        let (catalog, config) = fixtures();
        let state = playing(Difficulty::Easy);
        let next = state.apply(&MissionEvent::WaypointReached(WaypointId(99)), &catalog, &config);
        assert_eq!(state, next);
    }

    #[test]
    fn power_ups_apply_and_record_in_collection_order() {
        let (catalog, config) = fixtures();
        let mut state = playing(Difficulty::Easy);
        state.fuel = 40.0;
        state.health = 50.0;

        // Venus grants a full shield.
        state = state.apply(&MissionEvent::WaypointReached(WaypointId(1)), &catalog, &config);
        assert_eq!(state.shield, 100.0);

        // Mars refills fuel outright, not by the numeric reward path.
        state = state.apply(&MissionEvent::WaypointReached(WaypointId(3)), &catalog, &config);
        assert_eq!(state.fuel, 100.0);

        // Saturn restores 25 health.
        state = state.apply(&MissionEvent::WaypointReached(WaypointId(5)), &catalog, &config);
        assert_eq!(state.health, 75.0);

        assert_eq!(
            state.power_ups,
            vec![PowerUpKind::Shield, PowerUpKind::Fuel, PowerUpKind::Health]
        );
    }

    #[test]
    fn obstacle_destruction_scores_and_refuels() {
        let (catalog, config) = fixtures();
        let mut state = playing(Difficulty::Easy);
        state.fuel = 98.0;

        let next = state.apply(&MissionEvent::ObstacleDestroyed, &catalog, &config);
        assert_eq!(next.score, 50);
        assert_eq!(next.fuel, 100.0);
        assert_eq!(next.obstacles_destroyed, 1);

        // Outside Playing the event is dropped.
        let paused = next.apply(&MissionEvent::Pause, &catalog, &config);
        let dropped = paused.apply(&MissionEvent::ObstacleDestroyed, &catalog, &config);
        assert_eq!(paused, dropped);
    }

    #[test]
    fn shield_decays_two_per_tick_and_stops_at_zero() {
        let (catalog, config) = fixtures();
        let mut state = playing(Difficulty::Easy);
        state.shield = 3.0;

        state = state.apply(&MissionEvent::Tick, &catalog, &config);
        assert_eq!(state.shield, 1.0);
        state = state.apply(&MissionEvent::Tick, &catalog, &config);
        assert_eq!(state.shield, 0.0);
        state = state.apply(&MissionEvent::Tick, &catalog, &config);
        assert_eq!(state.shield, 0.0);
    }

    #[test]
    fn simultaneous_end_conditions_report_fuel_first() {
        let (catalog, config) = fixtures();
        let mut state = playing(Difficulty::Easy);
        state.fuel = 1.0;
        state.time_remaining = 1;

        let over = state.apply(&MissionEvent::Tick, &catalog, &config);
        assert_eq!(over.mode, MissionMode::GameOver);
        assert_eq!(over.game_over_cause, Some(GameOverCause::FuelExhausted));
        assert_eq!(over.time_remaining, 0);
    }

    #[test]
    fn time_expiry_is_reported_when_gauges_hold() {
        let (catalog, config) = fixtures();
        let mut state = playing(Difficulty::Easy);
        state.time_remaining = 1;

        let over = state.apply(&MissionEvent::Tick, &catalog, &config);
        assert_eq!(over.mode, MissionMode::GameOver);
        assert_eq!(over.game_over_cause, Some(GameOverCause::TimeExpired));
    }

    #[test]
    fn pause_and_resume_are_mode_gated() {
        let (catalog, config) = fixtures();
        let menu = MissionState::default();
        assert_eq!(menu, menu.apply(&MissionEvent::Pause, &catalog, &config));
        assert_eq!(menu, menu.apply(&MissionEvent::Resume, &catalog, &config));

        let state = playing(Difficulty::Medium);
        let paused = state.apply(&MissionEvent::Pause, &catalog, &config);
        assert_eq!(paused.mode, MissionMode::Paused);
        // Ticks are frozen while paused.
        assert_eq!(paused, paused.apply(&MissionEvent::Tick, &catalog, &config));

        let resumed = paused.apply(&MissionEvent::Resume, &catalog, &config);
        assert_eq!(resumed.mode, MissionMode::Playing);
        assert_eq!(resumed.time_remaining, state.time_remaining);
    }

    #[test]
    fn next_level_is_only_reachable_from_level_complete() {
        let (catalog, config) = fixtures();
        let state = playing(Difficulty::Easy);
        assert_eq!(state, state.apply(&MissionEvent::NextLevel, &catalog, &config));
    }

    #[test]
    fn next_level_grants_partial_refill_but_no_shield() {
        let (catalog, config) = fixtures();
        let mut state = playing(Difficulty::Hard);
        state.fuel = 30.0;
        state.health = 60.0;
        for id in 0..6 {
            state = state.apply(
                &MissionEvent::WaypointReached(WaypointId(id)),
                &catalog,
                &config,
            );
        }
        assert_eq!(state.mode, MissionMode::LevelComplete);
        // During the run: Venus set shield to 100 (which then negated the
        // Jupiter hazard) and Saturn's power-up lifted health to 85.
        assert_eq!(state.health, 85.0);
        let shield_before = state.shield;
        let score_before = state.score;

        let next = state.apply(&MissionEvent::NextLevel, &catalog, &config);
        assert_eq!(next.mode, MissionMode::Playing);
        assert_eq!(next.level, 2);
        assert_eq!(next.score, score_before);
        assert_eq!(next.time_remaining, 180);
        assert!(next.visited.is_empty());
        assert!(next.power_ups.is_empty());
        // Mars refilled fuel to 100 during the run; +50 stays clamped.
        assert_eq!(next.fuel, 100.0);
        // 85 + 25 clamps at the gauge maximum.
        assert_eq!(next.health, 100.0);
        assert_eq!(next.shield, shield_before);
    }

    #[test]
    fn abort_then_start_matches_a_fresh_session() {
        let (catalog, config) = fixtures();
        let mut state = playing(Difficulty::Hard);
        for id in 0..4 {
            state = state.apply(
                &MissionEvent::WaypointReached(WaypointId(id)),
                &catalog,
                &config,
            );
        }
        state = state.apply(&MissionEvent::Tick, &catalog, &config);
        state = state.apply(&MissionEvent::ObstacleDestroyed, &catalog, &config);

        let aborted = state.apply(&MissionEvent::Abort, &catalog, &config);
        assert_eq!(aborted, MissionState::default());

        let restarted = aborted.apply(&MissionEvent::Start(Difficulty::Medium), &catalog, &config);
        let fresh =
            MissionState::default().apply(&MissionEvent::Start(Difficulty::Medium), &catalog, &config);
        assert_eq!(restarted, fresh);
    }

    #[test]
    fn gauges_stay_in_range_across_an_arbitrary_session() {
        let (catalog, config) = fixtures();
        let script = [
            MissionEvent::Start(Difficulty::Hard),
            MissionEvent::WaypointReached(WaypointId(0)),
            MissionEvent::Tick,
            MissionEvent::WaypointReached(WaypointId(1)),
            MissionEvent::ObstacleDestroyed,
            MissionEvent::Tick,
            MissionEvent::Pause,
            MissionEvent::Tick,
            MissionEvent::Resume,
            MissionEvent::WaypointReached(WaypointId(4)),
            MissionEvent::WaypointReached(WaypointId(4)),
            MissionEvent::Tick,
            MissionEvent::ObstacleDestroyed,
            MissionEvent::Abort,
            MissionEvent::Start(Difficulty::Easy),
            MissionEvent::Tick,
        ];

        let mut state = MissionState::default();
        for event in &script {
            state = state.apply(event, &catalog, &config);
            assert!(gauges_in_range(&state), "after {event:?}");
            assert!(state.visited.len() <= catalog.len());
        }
    }
}

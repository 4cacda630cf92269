//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors the gameplay constants
//! in [`crate::constants`]. At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file. Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the values you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<GameConfig>` to any system parameter list and read values
//! with `config.fuel_decay(difficulty)`, `config.arrival_slack`, etc.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`.

use crate::constants::*;
use crate::error;
use crate::mission::Difficulty;
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable mission configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`. Override any subset by setting the value in
/// `assets/game.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Difficulty Table ─────────────────────────────────────────────────────
    pub easy_time_budget_secs: u32,
    pub medium_time_budget_secs: u32,
    pub hard_time_budget_secs: u32,
    pub easy_fuel_decay_per_sec: f32,
    pub medium_fuel_decay_per_sec: f32,
    pub hard_fuel_decay_per_sec: f32,
    pub easy_advance_step: f32,
    pub medium_advance_step: f32,
    pub hard_advance_step: f32,

    // ── Gauges ───────────────────────────────────────────────────────────────
    pub shield_decay_per_sec: f32,
    pub hazard_health_damage: f32,
    pub power_up_health_refill: f32,

    // ── Scoring ──────────────────────────────────────────────────────────────
    pub level_completion_bonus: u32,
    pub obstacle_score: u32,
    pub obstacle_fuel_bonus: f32,

    // ── Level Hand-off ───────────────────────────────────────────────────────
    pub next_level_fuel_refill: f32,
    pub next_level_health_refill: f32,

    // ── Steering ─────────────────────────────────────────────────────────────
    pub arrival_slack: f32,

    // ── Obstacle Field ───────────────────────────────────────────────────────
    pub obstacle_count: u32,
    pub obstacle_drift_per_frame: f32,
    pub obstacle_hit_flash_secs: f32,

    // ── Presentation ─────────────────────────────────────────────────────────
    pub starfield_count: u32,
    pub low_fuel_warning: f32,
    pub low_time_warning_secs: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Difficulty Table
            easy_time_budget_secs: EASY_TIME_BUDGET_SECS,
            medium_time_budget_secs: MEDIUM_TIME_BUDGET_SECS,
            hard_time_budget_secs: HARD_TIME_BUDGET_SECS,
            easy_fuel_decay_per_sec: EASY_FUEL_DECAY_PER_SEC,
            medium_fuel_decay_per_sec: MEDIUM_FUEL_DECAY_PER_SEC,
            hard_fuel_decay_per_sec: HARD_FUEL_DECAY_PER_SEC,
            easy_advance_step: EASY_ADVANCE_STEP,
            medium_advance_step: MEDIUM_ADVANCE_STEP,
            hard_advance_step: HARD_ADVANCE_STEP,
            // Gauges
            shield_decay_per_sec: SHIELD_DECAY_PER_SEC,
            hazard_health_damage: HAZARD_HEALTH_DAMAGE,
            power_up_health_refill: POWER_UP_HEALTH_REFILL,
            // Scoring
            level_completion_bonus: LEVEL_COMPLETION_BONUS,
            obstacle_score: OBSTACLE_SCORE,
            obstacle_fuel_bonus: OBSTACLE_FUEL_BONUS,
            // Level Hand-off
            next_level_fuel_refill: NEXT_LEVEL_FUEL_REFILL,
            next_level_health_refill: NEXT_LEVEL_HEALTH_REFILL,
            // Steering
            arrival_slack: ARRIVAL_SLACK,
            // Obstacle Field
            obstacle_count: OBSTACLE_COUNT,
            obstacle_drift_per_frame: OBSTACLE_DRIFT_PER_FRAME,
            obstacle_hit_flash_secs: OBSTACLE_HIT_FLASH_SECS,
            // Presentation
            starfield_count: STARFIELD_COUNT,
            low_fuel_warning: LOW_FUEL_WARNING,
            low_time_warning_secs: LOW_TIME_WARNING_SECS,
        }
    }
}

impl GameConfig {
    /// Mission time budget (seconds) for the given difficulty.
    pub fn time_budget(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy_time_budget_secs,
            Difficulty::Medium => self.medium_time_budget_secs,
            Difficulty::Hard => self.hard_time_budget_secs,
        }
    }

    /// Fuel drained per clock tick for the given difficulty.
    pub fn fuel_decay(&self, difficulty: Difficulty) -> f32 {
        match difficulty {
            Difficulty::Easy => self.easy_fuel_decay_per_sec,
            Difficulty::Medium => self.medium_fuel_decay_per_sec,
            Difficulty::Hard => self.hard_fuel_decay_per_sec,
        }
    }

    /// Craft advance step per rendered frame for the given difficulty.
    pub fn advance_step(&self, difficulty: Difficulty) -> f32 {
        match difficulty {
            Difficulty::Easy => self.easy_advance_step,
            Difficulty::Medium => self.medium_advance_step,
            Difficulty::Hard => self.hard_advance_step,
        }
    }

    /// Check every tunable against its safe range.
    pub fn validate(&self) -> error::ConfigResult<()> {
        error::validate_time_budget("easy_time_budget_secs", self.easy_time_budget_secs)?;
        error::validate_time_budget("medium_time_budget_secs", self.medium_time_budget_secs)?;
        error::validate_time_budget("hard_time_budget_secs", self.hard_time_budget_secs)?;
        error::validate_advance_step("easy_advance_step", self.easy_advance_step)?;
        error::validate_advance_step("medium_advance_step", self.medium_advance_step)?;
        error::validate_advance_step("hard_advance_step", self.hard_advance_step)?;
        error::validate_decay_rate("easy_fuel_decay_per_sec", self.easy_fuel_decay_per_sec)?;
        error::validate_decay_rate("medium_fuel_decay_per_sec", self.medium_fuel_decay_per_sec)?;
        error::validate_decay_rate("hard_fuel_decay_per_sec", self.hard_fuel_decay_per_sec)?;
        error::validate_decay_rate("shield_decay_per_sec", self.shield_decay_per_sec)?;
        Ok(())
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults. TOML parse errors and
/// out-of-range values are logged but do not abort the game; the compiled
/// defaults stay in place.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    let path = "assets/game.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<GameConfig>(&contents) {
            Ok(loaded) => match loaded.validate() {
                Ok(()) => {
                    *config = loaded;
                    info!("Loaded game config from {path}");
                }
                Err(e) => {
                    warn!("Rejected {path}: {e}; using defaults");
                }
            },
            Err(e) => {
                warn!("Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present; defaults are already in place, not an error.
            info!("No {path} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_table_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.time_budget(Difficulty::Easy), 300);
        assert_eq!(config.time_budget(Difficulty::Medium), 240);
        assert_eq!(config.time_budget(Difficulty::Hard), 180);
        assert_eq!(config.fuel_decay(Difficulty::Easy), 1.0);
        assert_eq!(config.fuel_decay(Difficulty::Medium), 1.5);
        assert_eq!(config.fuel_decay(Difficulty::Hard), 2.0);
        assert_eq!(config.advance_step(Difficulty::Easy), 0.02);
        assert_eq!(config.advance_step(Difficulty::Medium), 0.03);
        assert_eq!(config.advance_step(Difficulty::Hard), 0.04);
    }

    #[test]
    fn defaults_pass_validation() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let loaded: GameConfig = toml::from_str("hard_time_budget_secs = 90").unwrap();
        assert_eq!(loaded.hard_time_budget_secs, 90);
        assert_eq!(loaded.easy_time_budget_secs, EASY_TIME_BUDGET_SECS);
        assert_eq!(loaded.obstacle_count, OBSTACLE_COUNT);
    }

    #[test]
    fn zero_budget_fails_validation() {
        let loaded: GameConfig = toml::from_str("medium_time_budget_secs = 0").unwrap();
        assert!(loaded.validate().is_err());
    }
}

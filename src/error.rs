//! Configuration error types.
//!
//! The mission core itself has no failure modes: every event is a total
//! function over well-formed input, and the worst outcome is the normal
//! `GameOver` terminal mode. What can go wrong is operator input, i.e. a
//! nonsensical `assets/game.toml`. Validation helpers here reject such
//! values at load time so a bad override falls back to compiled defaults
//! instead of producing an unwinnable or never-ending mission.

use std::fmt;

/// Error produced when a configuration value is outside its safe range.
#[derive(Debug)]
pub enum ConfigError {
    /// A tunable was set to a value the game cannot meaningfully run with.
    UnsafeValue {
        /// Name of the field (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f64,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnsafeValue {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "config value '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Convenience alias: a `Result` using `ConfigError` as the error type.
pub type ConfigResult<T> = Result<T, ConfigError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error if a time budget is zero; a zero budget would end every
/// mission on the first clock tick.
pub fn validate_time_budget(name: &'static str, value: u32) -> ConfigResult<()> {
    if value == 0 {
        Err(ConfigError::UnsafeValue {
            name,
            value: value as f64,
            safe_range: "[1, ∞)",
        })
    } else {
        Ok(())
    }
}

/// Returns an error if a per-frame advance step is not strictly positive;
/// a non-positive step would strand the craft short of its first way-point.
pub fn validate_advance_step(name: &'static str, value: f32) -> ConfigResult<()> {
    if value <= 0.0 {
        Err(ConfigError::UnsafeValue {
            name,
            value: value as f64,
            safe_range: "(0.0, ∞)",
        })
    } else {
        Ok(())
    }
}

/// Returns an error if a decay rate is negative; negative decay would turn
/// the drain into an unbounded refill.
pub fn validate_decay_rate(name: &'static str, value: f32) -> ConfigResult<()> {
    if value < 0.0 {
        Err(ConfigError::UnsafeValue {
            name,
            value: value as f64,
            safe_range: "[0.0, ∞)",
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_time_budget_is_rejected() {
        assert!(validate_time_budget("easy_time_budget_secs", 0).is_err());
        assert!(validate_time_budget("easy_time_budget_secs", 300).is_ok());
    }

    #[test]
    fn non_positive_advance_step_is_rejected() {
        assert!(validate_advance_step("easy_advance_step", 0.0).is_err());
        assert!(validate_advance_step("easy_advance_step", -0.02).is_err());
        assert!(validate_advance_step("easy_advance_step", 0.02).is_ok());
    }

    #[test]
    fn negative_decay_rate_is_rejected() {
        assert!(validate_decay_rate("shield_decay_per_sec", -1.0).is_err());
        assert!(validate_decay_rate("shield_decay_per_sec", 0.0).is_ok());
    }
}

//! Centralised gameplay and presentation constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::GameConfig`] mirrors the gameplay subset of these values
//! and can override them at startup from `assets/game.toml`.

// ── Mission Clock ─────────────────────────────────────────────────────────────

/// Interval between mission clock ticks (seconds).
///
/// One tick drains fuel/shield and decrements the countdown by one second.
/// Changing this changes the effective pace of every decay rate below.
pub const TICK_INTERVAL_SECS: f32 = 1.0;

// ── Difficulty Table ──────────────────────────────────────────────────────────

/// Mission time budget on Easy (seconds). 5 minutes.
pub const EASY_TIME_BUDGET_SECS: u32 = 300;

/// Mission time budget on Medium (seconds). 4 minutes.
pub const MEDIUM_TIME_BUDGET_SECS: u32 = 240;

/// Mission time budget on Hard (seconds). 3 minutes.
pub const HARD_TIME_BUDGET_SECS: u32 = 180;

/// Fuel drained per clock tick on Easy.
pub const EASY_FUEL_DECAY_PER_SEC: f32 = 1.0;

/// Fuel drained per clock tick on Medium.
pub const MEDIUM_FUEL_DECAY_PER_SEC: f32 = 1.5;

/// Fuel drained per clock tick on Hard.
pub const HARD_FUEL_DECAY_PER_SEC: f32 = 2.0;

/// Craft advance step per rendered frame on Easy (world units).
///
/// The step is applied once per frame, not scaled by delta time, so the
/// craft's trajectory is deterministic in frame counts.
pub const EASY_ADVANCE_STEP: f32 = 0.02;

/// Craft advance step per rendered frame on Medium (world units).
pub const MEDIUM_ADVANCE_STEP: f32 = 0.03;

/// Craft advance step per rendered frame on Hard (world units).
pub const HARD_ADVANCE_STEP: f32 = 0.04;

// ── Gauges ────────────────────────────────────────────────────────────────────

/// Upper bound for the fuel, health, and shield gauges.
pub const GAUGE_MAX: f32 = 100.0;

/// Shield drained per clock tick while any shield remains.
pub const SHIELD_DECAY_PER_SEC: f32 = 2.0;

/// Health lost when arriving at a hazardous way-point with no shield.
pub const HAZARD_HEALTH_DAMAGE: f32 = 25.0;

/// Health restored by a health power-up (clamped at `GAUGE_MAX`).
pub const POWER_UP_HEALTH_REFILL: f32 = 25.0;

// ── Scoring ───────────────────────────────────────────────────────────────────

/// Bonus score granted when every way-point in the catalog has been visited.
pub const LEVEL_COMPLETION_BONUS: u32 = 1000;

/// Score granted per destroyed obstacle.
pub const OBSTACLE_SCORE: u32 = 50;

/// Fuel granted per destroyed obstacle (clamped at `GAUGE_MAX`).
pub const OBSTACLE_FUEL_BONUS: f32 = 5.0;

// ── Level Hand-off ────────────────────────────────────────────────────────────

/// Fuel restored when advancing to the next level (clamped at `GAUGE_MAX`).
pub const NEXT_LEVEL_FUEL_REFILL: f32 = 50.0;

/// Health restored when advancing to the next level (clamped at `GAUGE_MAX`).
///
/// Shield deliberately carries over untouched; it is only ever refilled by
/// the shield power-up.
pub const NEXT_LEVEL_HEALTH_REFILL: f32 = 25.0;

// ── Steering ──────────────────────────────────────────────────────────────────

/// Extra distance beyond a way-point's radius at which arrival registers.
///
/// Larger values make arrivals feel snappier but visually early; smaller
/// values risk orbiting a target the bob motion keeps nudging away from.
pub const ARRIVAL_SLACK: f32 = 0.5;

/// Craft spawn / reset position.
pub const CRAFT_START_X: f32 = -10.0;
pub const CRAFT_START_Y: f32 = 0.0;
pub const CRAFT_START_Z: f32 = 0.0;

/// Cosmetic yaw applied to the craft every frame (radians).
pub const CRAFT_YAW_PER_FRAME: f32 = 0.02;

/// Amplitude of the craft's vertical bob (world units).
pub const CRAFT_BOB_AMPLITUDE: f32 = 0.01;

/// Frequency multiplier of the craft's vertical bob.
pub const CRAFT_BOB_FREQUENCY: f32 = 2.0;

// ── Obstacle Field ────────────────────────────────────────────────────────────

/// Number of obstacles alive in the field at any time.
pub const OBSTACLE_COUNT: u32 = 15;

/// Visual radius of an obstacle (world units).
pub const OBSTACLE_RADIUS: f32 = 0.3;

/// Pick radius used for click tests; slightly larger than the visual radius
/// so clicks on the silhouette edge still register.
pub const OBSTACLE_PICK_RADIUS: f32 = 0.45;

/// Horizontal spread of obstacle spawn positions (± half of this).
pub const OBSTACLE_SPREAD_X: f32 = 30.0;

/// Vertical spread of obstacle spawn positions (± half of this).
pub const OBSTACLE_SPREAD_Y: f32 = 20.0;

/// Obstacles spawn with z in `[-OBSTACLE_SPAWN_DEPTH, 0)`.
pub const OBSTACLE_SPAWN_DEPTH: f32 = 50.0;

/// Forward drift applied to each live obstacle every frame (world units).
pub const OBSTACLE_DRIFT_PER_FRAME: f32 = 0.02;

/// Obstacles drifting past this z are recycled to the back of the field.
pub const OBSTACLE_RESET_Z: f32 = 20.0;

/// Cosmetic tumble applied to each live obstacle every frame (radians).
pub const OBSTACLE_TUMBLE_X_PER_FRAME: f32 = 0.02;
pub const OBSTACLE_TUMBLE_Y_PER_FRAME: f32 = 0.01;

/// How long a destroyed obstacle stays in its red flash state (seconds).
/// While flashing it neither drifts nor accepts further clicks.
pub const OBSTACLE_HIT_FLASH_SECS: f32 = 1.0;

// ── Camera & Scene ────────────────────────────────────────────────────────────

/// Camera rig position; looks at the world origin.
pub const CAMERA_X: f32 = 0.0;
pub const CAMERA_Y: f32 = 5.0;
pub const CAMERA_Z: f32 = 15.0;

/// Vertical field of view (degrees).
pub const CAMERA_FOV_DEGREES: f32 = 75.0;

/// Number of background stars.
pub const STARFIELD_COUNT: u32 = 320;

/// Stars are scattered on a spherical shell between these radii.
pub const STARFIELD_RADIUS_MIN: f32 = 60.0;
pub const STARFIELD_RADIUS_MAX: f32 = 140.0;

/// Cosmetic spin applied to each planet every frame (radians).
pub const PLANET_SPIN_PER_FRAME: f32 = 0.01;

/// Scale pulse applied to the current target planet.
pub const TARGET_PULSE_RATE: f32 = 5.0;
pub const TARGET_PULSE_AMPLITUDE: f32 = 0.1;

// ── HUD ───────────────────────────────────────────────────────────────────────

/// Fuel values below this are tinted red in the HUD.
pub const LOW_FUEL_WARNING: f32 = 25.0;

/// Remaining seconds below this are tinted red in the HUD.
pub const LOW_TIME_WARNING_SECS: u32 = 60;

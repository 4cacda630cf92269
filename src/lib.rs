//! Starlane — a solar-system exploration arcade game.
//!
//! A spacecraft autopilots between planets in a fixed catalog order while a
//! 1 Hz mission clock drains fuel and shield and counts down the time
//! budget. Clicking drifting asteroids earns bonus score and fuel. Visiting
//! every planet completes the level; exhausting fuel, health, or time ends
//! the mission.
//!
//! ## Module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`mission`] | The session record, its pure event reducer, and the Bevy plumbing |
//! | [`catalog`] | The immutable way-point catalog |
//! | [`spacecraft`] | Craft entity and the per-frame steering rule |
//! | [`obstacle`] | Drifting clickable asteroid field |
//! | [`scene`] | Planets, highlight sync, starfield |
//! | [`graphics`] | Camera and lighting |
//! | [`hud`] | Gauges, score readout, way-point status panel |
//! | [`menu`] | Menu / pause / level-complete / game-over overlays |
//! | [`config`] | Runtime tuning loaded from `assets/game.toml` |
//! | [`constants`] | Authoritative compile-time defaults |
//! | [`error`] | Config validation errors |

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod hud;
pub mod menu;
pub mod mission;
pub mod obstacle;
pub mod scene;
pub mod spacecraft;

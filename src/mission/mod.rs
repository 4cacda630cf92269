//! Mission module: the session record, its reducer, and the Bevy plumbing.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | `MissionState`, `MissionEvent`, and the pure `apply` reducer |
//! | [`systems`] | Message streams, the 1 Hz clock, reducer systems, mode sync |
//!
//! All public items are re-exported at this level so the rest of the crate
//! can use flat `crate::mission::*` imports without knowing the sub-module
//! layout.

pub mod state;
pub mod systems;

pub use state::{Difficulty, GameOverCause, MissionEvent, MissionMode, MissionState};
pub use systems::{
    LastMissionSummary, MissionCommand, MissionPlugin, MissionSummary, ObstacleHit, TickTimer,
    WaypointArrival,
};

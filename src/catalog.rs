//! Static way-point catalog: the planets the craft must visit.
//!
//! The catalog is immutable for the whole session; "visited" status lives
//! only in [`crate::mission::MissionState`]. Targeting always picks the
//! first unvisited entry in catalog order, never the nearest by distance,
//! so flight paths are identical from run to run.

use bevy::prelude::*;
use std::collections::HashSet;

/// Identifier of a catalog entry. Stable for the session; doubles as the
/// entry's index into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaypointId(pub u32);

/// One-shot bonus granted by visiting specific way-points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Raises the shield gauge to full.
    Shield,
    /// Raises the fuel gauge to full (distinct from the numeric fuel reward).
    Fuel,
    /// Restores a fixed amount of health.
    Health,
}

impl PowerUpKind {
    /// Short label shown in the HUD badge row and status panel.
    pub fn label(self) -> &'static str {
        match self {
            PowerUpKind::Shield => "shield",
            PowerUpKind::Fuel => "fuel",
            PowerUpKind::Health => "health",
        }
    }
}

/// A fixed target location in the solar system.
#[derive(Debug, Clone)]
pub struct Waypoint {
    pub id: WaypointId,
    pub name: &'static str,
    pub position: Vec3,
    /// Visual and arrival radius (world units).
    pub size: f32,
    /// Base colour used by the renderer and the status panel.
    pub color: Color,
    /// Score granted on first arrival.
    pub points: u32,
    /// Arriving here with no shield costs health.
    pub hazardous: bool,
    /// Fuel granted on first arrival, clamped at the gauge maximum.
    pub fuel_reward: Option<f32>,
    /// Power-up granted on first arrival.
    pub power_up: Option<PowerUpKind>,
    /// Rendered with a flat ring (the gas giants).
    pub ringed: bool,
}

/// The session's way-point catalog.
#[derive(Resource, Debug, Clone)]
pub struct WaypointCatalog {
    waypoints: Vec<Waypoint>,
}

impl Default for WaypointCatalog {
    fn default() -> Self {
        Self {
            waypoints: vec![
                Waypoint {
                    id: WaypointId(0),
                    name: "Mercury",
                    position: Vec3::new(-8.0, 0.0, 0.0),
                    size: 0.8,
                    color: Color::srgb_u8(140, 120, 83),
                    points: 100,
                    hazardous: false,
                    fuel_reward: Some(10.0),
                    power_up: None,
                    ringed: false,
                },
                Waypoint {
                    id: WaypointId(1),
                    name: "Venus",
                    position: Vec3::new(-4.0, 2.0, 0.0),
                    size: 1.0,
                    color: Color::srgb_u8(255, 198, 73),
                    points: 150,
                    hazardous: false,
                    fuel_reward: None,
                    power_up: Some(PowerUpKind::Shield),
                    ringed: false,
                },
                Waypoint {
                    id: WaypointId(2),
                    name: "Earth",
                    position: Vec3::new(0.0, 0.0, 0.0),
                    size: 1.2,
                    color: Color::srgb_u8(107, 147, 214),
                    points: 200,
                    hazardous: false,
                    fuel_reward: Some(20.0),
                    power_up: None,
                    ringed: false,
                },
                Waypoint {
                    id: WaypointId(3),
                    name: "Mars",
                    position: Vec3::new(4.0, -1.0, 0.0),
                    size: 0.9,
                    color: Color::srgb_u8(205, 92, 92),
                    points: 250,
                    hazardous: false,
                    fuel_reward: None,
                    power_up: Some(PowerUpKind::Fuel),
                    ringed: false,
                },
                Waypoint {
                    id: WaypointId(4),
                    name: "Jupiter",
                    position: Vec3::new(8.0, 3.0, 0.0),
                    size: 2.0,
                    color: Color::srgb_u8(216, 202, 157),
                    points: 500,
                    hazardous: true,
                    fuel_reward: None,
                    power_up: None,
                    ringed: true,
                },
                Waypoint {
                    id: WaypointId(5),
                    name: "Saturn",
                    position: Vec3::new(12.0, -2.0, 0.0),
                    size: 1.8,
                    color: Color::srgb_u8(250, 178, 123),
                    points: 750,
                    hazardous: false,
                    fuel_reward: None,
                    power_up: Some(PowerUpKind::Health),
                    ringed: true,
                },
            ],
        }
    }
}

impl WaypointCatalog {
    /// Number of way-points in the catalog.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Look up an entry by id.
    pub fn get(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| w.id == id)
    }

    /// Iterate entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter()
    }

    /// First unvisited entry in catalog order.
    ///
    /// This is the steering target rule: a fixed, deterministic tie-break.
    pub fn next_unvisited(&self, visited: &HashSet<WaypointId>) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| !visited.contains(&w.id))
    }

    /// Whether every entry has been visited.
    pub fn all_visited(&self, visited: &HashSet<WaypointId>) -> bool {
        self.waypoints.iter().all(|w| visited.contains(&w.id))
    }
}

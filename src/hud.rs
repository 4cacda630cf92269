//! Mission HUD: gauges, score readout, and the way-point status panel.
//!
//! The whole overlay is spawned once at startup and kept hidden while the
//! menu is up. Every readout is refreshed from the latest `MissionState`
//! snapshot; no HUD system ever writes mission state.

use crate::catalog::WaypointCatalog;
use crate::config::GameConfig;
use crate::mission::{MissionMode, MissionState};
use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

// ── Component markers ─────────────────────────────────────────────────────────

/// Root of the top-left mission panel.
#[derive(Component)]
pub struct HudRoot;

/// Root of the right-hand way-point status panel.
#[derive(Component)]
pub struct StatusPanelRoot;

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct LevelText;

#[derive(Component)]
pub struct ClockText;

#[derive(Component)]
pub struct VisitedText;

#[derive(Component)]
pub struct FuelBarFill;

#[derive(Component)]
pub struct FuelValueText;

#[derive(Component)]
pub struct HealthBarFill;

#[derive(Component)]
pub struct HealthValueText;

/// Container for the shield gauge; hidden while shield is zero.
#[derive(Component)]
pub struct ShieldRow;

#[derive(Component)]
pub struct ShieldBarFill;

#[derive(Component)]
pub struct ShieldValueText;

/// Container for the power-up list; hidden until one is collected.
#[derive(Component)]
pub struct PowerUpRow;

#[derive(Component)]
pub struct PowerUpText;

/// Per-way-point visited badge in the status panel.
#[derive(Component)]
pub struct WaypointBadge(pub crate::catalog::WaypointId);

#[derive(Component)]
pub struct DestroyedText;

// ── Colour helpers ────────────────────────────────────────────────────────────

fn panel_bg() -> Color {
    Color::srgba(0.0, 0.0, 0.0, 0.8)
}
fn panel_border() -> Color {
    Color::srgb(0.35, 0.35, 0.45)
}
fn label_color() -> Color {
    Color::srgb(0.7, 0.7, 0.8)
}
fn value_color() -> Color {
    Color::WHITE
}
fn warning_color() -> Color {
    Color::srgb(1.0, 0.3, 0.3)
}
fn bar_track_color() -> Color {
    Color::srgb(0.13, 0.13, 0.2)
}
fn fuel_bar_color() -> Color {
    Color::srgb(0.25, 0.55, 1.0)
}
fn health_bar_color() -> Color {
    Color::srgb(1.0, 0.35, 0.35)
}
fn shield_bar_color() -> Color {
    Color::srgb(0.0, 1.0, 1.0)
}
fn visited_badge_color() -> Color {
    Color::srgb(0.3, 1.0, 0.4)
}
fn unexplored_badge_color() -> Color {
    Color::srgb(0.55, 0.55, 0.65)
}

/// Format remaining seconds as `m:ss`.
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_mission_panel, setup_status_panel))
            .add_systems(
                Update,
                (
                    hud_visibility_system,
                    hud_stats_system,
                    hud_gauge_system,
                    hud_power_up_system,
                    hud_status_panel_system,
                ),
            );
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn hud_line(parent: &mut ChildSpawnerCommands<'_>, label: &str, marker: impl Component) {
    parent.spawn((
        Text::new(label),
        TextFont {
            font_size: 15.0,
            ..default()
        },
        TextColor(value_color()),
        marker,
    ));
}

/// Spawn one labelled gauge bar: caption row with a numeric readout, then a
/// track with a coloured fill whose width tracks the gauge percentage.
fn gauge_bar(
    parent: &mut ChildSpawnerCommands<'_>,
    label: &str,
    color: Color,
    value_marker: impl Component,
    fill_marker: impl Component,
) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            width: Val::Percent(100.0),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new(label),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(label_color()),
            ));
            row.spawn((
                Text::new("100%"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(value_color()),
                value_marker,
            ));
        });

    parent
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Px(8.0),
                ..default()
            },
            BackgroundColor(bar_track_color()),
        ))
        .with_children(|track| {
            track.spawn((
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(color),
                fill_marker,
            ));
        });
}

/// Spawn the top-left mission panel (hidden until a mission starts).
pub fn setup_mission_panel(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(16.0),
                top: Val::Px(16.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                padding: UiRect::all(Val::Px(14.0)),
                border: UiRect::all(Val::Px(1.0)),
                min_width: Val::Px(280.0),
                ..default()
            },
            BackgroundColor(panel_bg()),
            BorderColor::all(panel_border()),
            ZIndex(50),
            Visibility::Hidden,
            HudRoot,
        ))
        .with_children(|panel| {
            hud_line(panel, "Score: 0", ScoreText);
            hud_line(panel, "Level: 1", LevelText);
            hud_line(panel, "Time: 5:00", ClockText);
            hud_line(panel, "Visited: 0/6", VisitedText);

            gauge_bar(panel, "Fuel", fuel_bar_color(), FuelValueText, FuelBarFill);
            gauge_bar(
                panel,
                "Health",
                health_bar_color(),
                HealthValueText,
                HealthBarFill,
            );

            panel
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(6.0),
                        width: Val::Percent(100.0),
                        ..default()
                    },
                    Visibility::Hidden,
                    ShieldRow,
                ))
                .with_children(|row| {
                    gauge_bar(
                        row,
                        "Shield",
                        shield_bar_color(),
                        ShieldValueText,
                        ShieldBarFill,
                    );
                });

            panel
                .spawn((
                    Node {
                        width: Val::Percent(100.0),
                        ..default()
                    },
                    Visibility::Hidden,
                    PowerUpRow,
                ))
                .with_children(|row| {
                    row.spawn((
                        Text::new("Power-ups:"),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(shield_bar_color()),
                        PowerUpText,
                    ));
                });
        });
}

/// Spawn the right-hand status panel listing every way-point (hidden until
/// a mission starts).
pub fn setup_status_panel(mut commands: Commands, catalog: Res<WaypointCatalog>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(16.0),
                top: Val::Px(16.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                padding: UiRect::all(Val::Px(14.0)),
                border: UiRect::all(Val::Px(1.0)),
                min_width: Val::Px(230.0),
                ..default()
            },
            BackgroundColor(panel_bg()),
            BorderColor::all(panel_border()),
            ZIndex(50),
            Visibility::Hidden,
            StatusPanelRoot,
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new("MISSION STATUS"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(label_color()),
            ));

            for waypoint in catalog.iter() {
                panel
                    .spawn(Node {
                        flex_direction: FlexDirection::Row,
                        justify_content: JustifyContent::SpaceBetween,
                        align_items: AlignItems::Center,
                        column_gap: Val::Px(10.0),
                        width: Val::Percent(100.0),
                        ..default()
                    })
                    .with_children(|row| {
                        row.spawn(Node {
                            flex_direction: FlexDirection::Row,
                            align_items: AlignItems::Center,
                            column_gap: Val::Px(6.0),
                            ..default()
                        })
                        .with_children(|name_cell| {
                            name_cell.spawn((
                                Node {
                                    width: Val::Px(10.0),
                                    height: Val::Px(10.0),
                                    ..default()
                                },
                                BackgroundColor(waypoint.color),
                            ));
                            let hazard_tag = if waypoint.hazardous { " !" } else { "" };
                            let power_tag = match waypoint.power_up {
                                Some(kind) => format!(" · {}", kind.label()),
                                None => String::new(),
                            };
                            name_cell.spawn((
                                Text::new(format!(
                                    "{} ({} pts{hazard_tag}{power_tag})",
                                    waypoint.name, waypoint.points
                                )),
                                TextFont {
                                    font_size: 12.0,
                                    ..default()
                                },
                                TextColor(value_color()),
                            ));
                        });

                        row.spawn((
                            Text::new("UNEXPLORED"),
                            TextFont {
                                font_size: 11.0,
                                ..default()
                            },
                            TextColor(unexplored_badge_color()),
                            WaypointBadge(waypoint.id),
                        ));
                    });
            }

            panel.spawn((
                Text::new("Asteroids destroyed: 0"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(label_color()),
                DestroyedText,
            ));
        });
}

// ── Update systems ────────────────────────────────────────────────────────────

/// Show the HUD whenever a session exists, hide it on the menu.
pub fn hud_visibility_system(
    mode: Res<State<MissionMode>>,
    mut roots: Query<&mut Visibility, Or<(With<HudRoot>, With<StatusPanelRoot>)>>,
) {
    if !mode.is_changed() {
        return;
    }
    let shown = *mode.get() != MissionMode::Menu;
    for mut visibility in roots.iter_mut() {
        *visibility = if shown {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

/// Refresh score, level, clock, and visited counters.
#[allow(clippy::type_complexity)]
pub fn hud_stats_system(
    state: Res<MissionState>,
    catalog: Res<WaypointCatalog>,
    config: Res<GameConfig>,
    mut scores: Query<&mut Text, (With<ScoreText>, Without<LevelText>, Without<ClockText>, Without<VisitedText>)>,
    mut levels: Query<&mut Text, (With<LevelText>, Without<ClockText>, Without<VisitedText>)>,
    mut clocks: Query<(&mut Text, &mut TextColor), (With<ClockText>, Without<VisitedText>)>,
    mut visiteds: Query<&mut Text, With<VisitedText>>,
) {
    if !state.is_changed() {
        return;
    }
    for mut text in scores.iter_mut() {
        *text = Text::new(format!("Score: {}", state.score));
    }
    for mut text in levels.iter_mut() {
        *text = Text::new(format!("Level: {}", state.level));
    }
    for (mut text, mut color) in clocks.iter_mut() {
        *text = Text::new(format!("Time: {}", format_clock(state.time_remaining)));
        *color = TextColor(if state.time_remaining < config.low_time_warning_secs {
            warning_color()
        } else {
            value_color()
        });
    }
    for mut text in visiteds.iter_mut() {
        *text = Text::new(format!("Visited: {}/{}", state.visited.len(), catalog.len()));
    }
}

/// Refresh the three gauge bars and their numeric readouts.
#[allow(clippy::type_complexity)]
pub fn hud_gauge_system(
    state: Res<MissionState>,
    config: Res<GameConfig>,
    mut fuel_fills: Query<&mut Node, (With<FuelBarFill>, Without<HealthBarFill>, Without<ShieldBarFill>)>,
    mut health_fills: Query<&mut Node, (With<HealthBarFill>, Without<ShieldBarFill>)>,
    mut shield_fills: Query<&mut Node, With<ShieldBarFill>>,
    mut fuel_values: Query<(&mut Text, &mut TextColor), (With<FuelValueText>, Without<HealthValueText>, Without<ShieldValueText>)>,
    mut health_values: Query<&mut Text, (With<HealthValueText>, Without<ShieldValueText>)>,
    mut shield_values: Query<&mut Text, With<ShieldValueText>>,
    mut shield_rows: Query<&mut Visibility, With<ShieldRow>>,
) {
    if !state.is_changed() {
        return;
    }

    for mut node in fuel_fills.iter_mut() {
        node.width = Val::Percent(state.fuel);
    }
    for mut node in health_fills.iter_mut() {
        node.width = Val::Percent(state.health);
    }
    for mut node in shield_fills.iter_mut() {
        node.width = Val::Percent(state.shield);
    }

    for (mut text, mut color) in fuel_values.iter_mut() {
        *text = Text::new(format!("{:.0}%", state.fuel));
        *color = TextColor(if state.fuel < config.low_fuel_warning {
            warning_color()
        } else {
            value_color()
        });
    }
    for mut text in health_values.iter_mut() {
        *text = Text::new(format!("{:.0}%", state.health));
    }
    for mut text in shield_values.iter_mut() {
        *text = Text::new(format!("{:.0}%", state.shield));
    }

    let shielded = state.shield > 0.0;
    for mut visibility in shield_rows.iter_mut() {
        *visibility = if shielded {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

/// Refresh the collected power-up list.
pub fn hud_power_up_system(
    state: Res<MissionState>,
    mut rows: Query<&mut Visibility, With<PowerUpRow>>,
    mut texts: Query<&mut Text, With<PowerUpText>>,
) {
    if !state.is_changed() {
        return;
    }
    let any = !state.power_ups.is_empty();
    for mut visibility in rows.iter_mut() {
        *visibility = if any {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
    if any {
        let labels: Vec<&str> = state.power_ups.iter().map(|p| p.label()).collect();
        for mut text in texts.iter_mut() {
            *text = Text::new(format!("Power-ups: {}", labels.join(" · ")));
        }
    }
}

/// Refresh visited badges and the destroyed-asteroid counter.
pub fn hud_status_panel_system(
    state: Res<MissionState>,
    mut badges: Query<(&WaypointBadge, &mut Text, &mut TextColor), Without<DestroyedText>>,
    mut destroyed: Query<&mut Text, With<DestroyedText>>,
) {
    if !state.is_changed() {
        return;
    }
    for (badge, mut text, mut color) in badges.iter_mut() {
        if state.visited.contains(&badge.0) {
            *text = Text::new("VISITED");
            *color = TextColor(visited_badge_color());
        } else {
            *text = Text::new("UNEXPLORED");
            *color = TextColor(unexplored_badge_color());
        }
    }
    for mut text in destroyed.iter_mut() {
        *text = Text::new(format!("Asteroids destroyed: {}", state.obstacles_destroyed));
    }
}

#[cfg(test)]
mod tests {
    use super::format_clock;

    #[test]
    fn clock_formats_minutes_and_padded_seconds() {
        assert_eq!(format_clock(300), "5:00");
        assert_eq!(format_clock(240), "4:00");
        assert_eq!(format_clock(61), "1:01");
        assert_eq!(format_clock(59), "0:59");
        assert_eq!(format_clock(0), "0:00");
    }
}

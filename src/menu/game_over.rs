use super::common::*;
use super::types::*;
use crate::catalog::WaypointCatalog;
use crate::mission::{GameOverCause, MissionCommand, MissionState};
use bevy::prelude::*;

fn cause_copy(cause: Option<GameOverCause>) -> &'static str {
    match cause {
        Some(GameOverCause::FuelExhausted) => "Your craft ran out of fuel",
        Some(GameOverCause::ShipDestroyed) => "Your craft was destroyed",
        Some(GameOverCause::TimeExpired) => "Time ran out",
        None => "Mission ended",
    }
}

/// Spawn the game-over overlay with cause-specific copy and final stats.
pub fn setup_game_over(
    mut commands: Commands,
    state: Res<MissionState>,
    catalog: Res<WaypointCatalog>,
) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.82)),
            ZIndex(300),
            GameOverRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(40.0)),
                        row_gap: Val::Px(12.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(340.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.06, 0.02, 0.02)),
                    BorderColor::all(Color::srgb(0.55, 0.10, 0.10)),
                ))
                .with_children(|card| {
                    card.spawn((
                        Text::new("MISSION FAILED"),
                        TextFont {
                            font_size: 42.0,
                            ..default()
                        },
                        TextColor(failure_color()),
                    ));
                    card.spawn((
                        Text::new(cause_copy(state.game_over_cause)),
                        TextFont {
                            font_size: 15.0,
                            ..default()
                        },
                        TextColor(subtitle_color()),
                    ));

                    spacer(card, 4.0);

                    card.spawn((
                        Text::new(format!("Final score: {}", state.score)),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(stat_color()),
                    ));
                    card.spawn((
                        Text::new(format!(
                            "Level {}  ·  Visited {}/{}  ·  Asteroids destroyed {}",
                            state.level,
                            state.visited.len(),
                            catalog.len(),
                            state.obstacles_destroyed
                        )),
                        TextFont {
                            font_size: 13.0,
                            ..default()
                        },
                        TextColor(subtitle_color()),
                    ));

                    spacer(card, 8.0);

                    card.spawn((
                        Button,
                        button_node(220.0),
                        BackgroundColor(resume_bg()),
                        BorderColor::all(resume_border()),
                        GameOverRetryButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("TRY AGAIN"),
                            TextFont {
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(resume_text()),
                        ));
                    });

                    card.spawn((
                        Button,
                        button_node(220.0),
                        BackgroundColor(quit_bg()),
                        BorderColor::all(quit_border()),
                        MenuQuitButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("QUIT"),
                            TextFont {
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(quit_text()),
                        ));
                    });

                    spacer(card, 4.0);

                    card.spawn((
                        Text::new("Press Enter to return to the menu"),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(hint_color()),
                    ));
                });
        });
}

/// Recursively despawn all game-over overlay entities.
pub fn cleanup_game_over(mut commands: Commands, query: Query<Entity, With<GameOverRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle Try Again / Quit in the game-over overlay.
///
/// Try Again (or Enter) discards the session and returns to the menu,
/// where the discarded score shows as the previous-mission card.
#[allow(clippy::type_complexity)]
pub fn game_over_button_system(
    retry_query: Query<
        (&Interaction, &Children),
        (Changed<Interaction>, With<GameOverRetryButton>),
    >,
    quit_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<MenuQuitButton>)>,
    mut btn_text: Query<&mut TextColor>,
    keys: Res<ButtonInput<KeyCode>>,
    mut mission_commands: MessageWriter<MissionCommand>,
    mut exit: MessageWriter<bevy::app::AppExit>,
) {
    let wants_retry = keys.just_pressed(KeyCode::Enter)
        || retry_query.iter().any(|(i, _)| *i == Interaction::Pressed);
    if wants_retry {
        mission_commands.write(MissionCommand::Abort);
        return;
    }

    for (interaction, children) in retry_query.iter() {
        match interaction {
            Interaction::Hovered => {
                tint_button_text(children, &mut btn_text, Color::WHITE);
            }
            Interaction::None => {
                tint_button_text(children, &mut btn_text, resume_text());
            }
            Interaction::Pressed => {}
        }
    }

    for (interaction, children) in quit_query.iter() {
        match interaction {
            Interaction::Pressed => {
                exit.write(bevy::app::AppExit::Success);
            }
            Interaction::Hovered => {
                tint_button_text(children, &mut btn_text, Color::WHITE);
            }
            Interaction::None => {
                tint_button_text(children, &mut btn_text, quit_text());
            }
        }
    }
}

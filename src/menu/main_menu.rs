use super::common::*;
use super::types::*;
use crate::config::GameConfig;
use crate::mission::{Difficulty, LastMissionSummary, MissionCommand};
use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

fn difficulty_colors(difficulty: Difficulty) -> (Color, Color, Color) {
    match difficulty {
        Difficulty::Easy => (easy_bg(), easy_border(), easy_text()),
        Difficulty::Medium => (medium_bg(), medium_border(), medium_text()),
        Difficulty::Hard => (hard_bg(), hard_border(), hard_text()),
    }
}

fn difficulty_button(
    parent: &mut ChildSpawnerCommands<'_>,
    config: &GameConfig,
    difficulty: Difficulty,
) {
    let (bg, border, text) = difficulty_colors(difficulty);
    let minutes = config.time_budget(difficulty) / 60;
    parent
        .spawn((
            Button,
            button_node(120.0),
            BackgroundColor(bg),
            BorderColor::all(border),
            DifficultyButton(difficulty),
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(difficulty.label().to_uppercase()),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(text),
            ));
            btn.spawn((
                Text::new(format!("{minutes} min")),
                TextFont {
                    font_size: 11.0,
                    ..default()
                },
                TextColor(text),
            ));
        });
}

/// Spawn the full-screen main-menu overlay.
///
/// Layout:
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │              STARLANE                       │
/// │   Pilot your craft across the solar system  │
/// │        (mission briefing lines)             │
/// │      [ EASY ]  [ MEDIUM ]  [ HARD ]         │
/// │     previous mission card (if any)          │
/// │               [ QUIT ]                      │
/// └─────────────────────────────────────────────┘
/// ```
pub fn setup_main_menu(
    mut commands: Commands,
    summary: Res<LastMissionSummary>,
    config: Res<GameConfig>,
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
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            ZIndex(100),
            MainMenuRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(36.0)),
                        row_gap: Val::Px(10.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(420.0),
                        ..default()
                    },
                    BackgroundColor(card_bg()),
                    BorderColor::all(card_border()),
                ))
                .with_children(|card| {
                    card.spawn((
                        Text::new("STARLANE"),
                        TextFont {
                            font_size: 48.0,
                            ..default()
                        },
                        TextColor(title_color()),
                    ));
                    card.spawn((
                        Text::new("Pilot your craft across the solar system"),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(subtitle_color()),
                    ));

                    spacer(card, 8.0);

                    for line in [
                        "Visit every planet to complete the mission",
                        "Fuel drains every second; manage it carefully",
                        "Hazardous planets hurt without a shield",
                        "Power-ups grant shields, fuel, and repairs",
                        "Click asteroids for bonus score and fuel",
                        "Beat the clock before it runs out",
                    ] {
                        card.spawn((
                            Text::new(line),
                            TextFont {
                                font_size: 13.0,
                                ..default()
                            },
                            TextColor(stat_color()),
                        ));
                    }

                    spacer(card, 12.0);

                    card.spawn(Node {
                        flex_direction: FlexDirection::Row,
                        column_gap: Val::Px(10.0),
                        ..default()
                    })
                    .with_children(|row| {
                        difficulty_button(row, &config, Difficulty::Easy);
                        difficulty_button(row, &config, Difficulty::Medium);
                        difficulty_button(row, &config, Difficulty::Hard);
                    });

                    if let Some(last) = summary.0 {
                        spacer(card, 8.0);
                        card.spawn((
                            Text::new(format!(
                                "Previous mission: {} points · level {} ({})",
                                last.score,
                                last.level,
                                last.difficulty.label()
                            )),
                            TextFont {
                                font_size: 13.0,
                                ..default()
                            },
                            TextColor(subtitle_color()),
                        ));
                    }

                    spacer(card, 12.0);

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
                        Text::new("Pick a difficulty to launch"),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(hint_color()),
                    ));
                });
        });
}

/// Recursively despawn all main-menu entities.
pub fn cleanup_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle difficulty selection and Quit on the main menu.
#[allow(clippy::type_complexity)]
pub fn menu_button_system(
    difficulty_query: Query<
        (&Interaction, &DifficultyButton, &Children),
        Changed<Interaction>,
    >,
    quit_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<MenuQuitButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut mission_commands: MessageWriter<MissionCommand>,
    mut exit: MessageWriter<bevy::app::AppExit>,
) {
    for (interaction, button, children) in difficulty_query.iter() {
        match interaction {
            Interaction::Pressed => {
                mission_commands.write(MissionCommand::Start(button.0));
            }
            Interaction::Hovered => {
                tint_button_text(children, &mut btn_text, Color::WHITE);
            }
            Interaction::None => {
                let (_, _, text) = difficulty_colors(button.0);
                tint_button_text(children, &mut btn_text, text);
            }
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

use super::common::*;
use super::types::*;
use crate::mission::{MissionCommand, MissionState};
use bevy::prelude::*;

/// Spawn the level-complete overlay.
///
/// `MissionState.level` was already advanced in the completing transition,
/// so the headline shows the level that just finished.
pub fn setup_level_complete(mut commands: Commands, state: Res<MissionState>) {
    let finished_level = state.level.saturating_sub(1);
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
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.70)),
            ZIndex(200),
            LevelCompleteRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(36.0)),
                        row_gap: Val::Px(12.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(320.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.02, 0.06, 0.03)),
                    BorderColor::all(Color::srgb(0.10, 0.55, 0.20)),
                ))
                .with_children(|card| {
                    card.spawn((
                        Text::new(format!("LEVEL {finished_level} COMPLETE")),
                        TextFont {
                            font_size: 36.0,
                            ..default()
                        },
                        TextColor(success_color()),
                    ));
                    card.spawn((
                        Text::new("Every planet in the sector explored"),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(subtitle_color()),
                    ));

                    spacer(card, 4.0);

                    card.spawn((
                        Text::new(format!("Score: {}", state.score)),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(stat_color()),
                    ));
                    card.spawn((
                        Text::new(format!(
                            "Fuel {:.0}%  ·  Health {:.0}%  ·  Asteroids destroyed {}",
                            state.fuel, state.health, state.obstacles_destroyed
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
                        NextLevelButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("NEXT LEVEL"),
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
                        LevelCompleteMenuButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("MAIN MENU"),
                            TextFont {
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(quit_text()),
                        ));
                    });
                });
        });
}

/// Recursively despawn all level-complete overlay entities.
pub fn cleanup_level_complete(
    mut commands: Commands,
    query: Query<Entity, With<LevelCompleteRoot>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle Next Level and Main Menu presses.
#[allow(clippy::type_complexity)]
pub fn level_complete_button_system(
    next_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<NextLevelButton>)>,
    menu_query: Query<
        (&Interaction, &Children),
        (Changed<Interaction>, With<LevelCompleteMenuButton>),
    >,
    mut btn_text: Query<&mut TextColor>,
    mut mission_commands: MessageWriter<MissionCommand>,
) {
    for (interaction, children) in next_query.iter() {
        match interaction {
            Interaction::Pressed => {
                mission_commands.write(MissionCommand::NextLevel);
            }
            Interaction::Hovered => {
                tint_button_text(children, &mut btn_text, Color::WHITE);
            }
            Interaction::None => {
                tint_button_text(children, &mut btn_text, resume_text());
            }
        }
    }

    for (interaction, children) in menu_query.iter() {
        match interaction {
            Interaction::Pressed => {
                mission_commands.write(MissionCommand::Abort);
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

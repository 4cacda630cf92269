use super::common::*;
use super::types::*;
use crate::catalog::WaypointCatalog;
use crate::mission::{MissionCommand, MissionState};
use bevy::prelude::*;

/// ESC while in `Playing` requests a pause.
pub fn pause_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut mission_commands: MessageWriter<MissionCommand>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        mission_commands.write(MissionCommand::Pause);
    }
}

/// ESC while in `Paused` requests a resume.
pub fn resume_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut mission_commands: MessageWriter<MissionCommand>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        mission_commands.write(MissionCommand::Resume);
    }
}

/// Spawn the pause overlay centred over the frozen scene.
pub fn setup_pause_overlay(
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
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.70)),
            ZIndex(200),
            PauseOverlayRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(36.0)),
                        row_gap: Val::Px(14.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(300.0),
                        ..default()
                    },
                    BackgroundColor(card_bg()),
                    BorderColor::all(card_border()),
                ))
                .with_children(|card| {
                    card.spawn((
                        Text::new("MISSION PAUSED"),
                        TextFont {
                            font_size: 34.0,
                            ..default()
                        },
                        TextColor(title_color()),
                    ));
                    card.spawn((
                        Text::new("Your craft is in standby"),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(subtitle_color()),
                    ));

                    spacer(card, 4.0);

                    card.spawn((
                        Text::new(format!(
                            "Score {}  ·  Level {}  ·  Visited {}/{}",
                            state.score,
                            state.level,
                            state.visited.len(),
                            catalog.len()
                        )),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(stat_color()),
                    ));

                    spacer(card, 6.0);

                    card.spawn((
                        Button,
                        button_node(220.0),
                        BackgroundColor(resume_bg()),
                        BorderColor::all(resume_border()),
                        PauseResumeButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("RESUME"),
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
                        BackgroundColor(hard_bg()),
                        BorderColor::all(hard_border()),
                        PauseAbortButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("ABORT MISSION"),
                            TextFont {
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(hard_text()),
                        ));
                    });

                    spacer(card, 4.0);

                    card.spawn((
                        Text::new("ESC to resume"),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(hint_color()),
                    ));
                });
        });
}

/// Recursively despawn all pause-overlay entities.
pub fn cleanup_pause_overlay(
    mut commands: Commands,
    query: Query<Entity, With<PauseOverlayRoot>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle Resume and Abort presses in the pause overlay.
#[allow(clippy::type_complexity)]
pub fn pause_button_system(
    resume_query: Query<
        (&Interaction, &Children),
        (Changed<Interaction>, With<PauseResumeButton>),
    >,
    abort_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<PauseAbortButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut mission_commands: MessageWriter<MissionCommand>,
) {
    for (interaction, children) in resume_query.iter() {
        match interaction {
            Interaction::Pressed => {
                mission_commands.write(MissionCommand::Resume);
            }
            Interaction::Hovered => {
                tint_button_text(children, &mut btn_text, Color::WHITE);
            }
            Interaction::None => {
                tint_button_text(children, &mut btn_text, resume_text());
            }
        }
    }

    for (interaction, children) in abort_query.iter() {
        match interaction {
            Interaction::Pressed => {
                mission_commands.write(MissionCommand::Abort);
            }
            Interaction::Hovered => {
                tint_button_text(children, &mut btn_text, Color::WHITE);
            }
            Interaction::None => {
                tint_button_text(children, &mut btn_text, hard_text());
            }
        }
    }
}

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

pub(super) fn easy_bg() -> Color {
    Color::srgb(0.08, 0.36, 0.14)
}
pub(super) fn easy_border() -> Color {
    Color::srgb(0.18, 0.72, 0.28)
}
pub(super) fn easy_text() -> Color {
    Color::srgb(0.75, 1.0, 0.80)
}
pub(super) fn medium_bg() -> Color {
    Color::srgb(0.38, 0.30, 0.06)
}
pub(super) fn medium_border() -> Color {
    Color::srgb(0.78, 0.62, 0.14)
}
pub(super) fn medium_text() -> Color {
    Color::srgb(1.0, 0.90, 0.60)
}
pub(super) fn hard_bg() -> Color {
    Color::srgb(0.28, 0.06, 0.06)
}
pub(super) fn hard_border() -> Color {
    Color::srgb(0.60, 0.12, 0.12)
}
pub(super) fn hard_text() -> Color {
    Color::srgb(1.0, 0.65, 0.65)
}
pub(super) fn quit_bg() -> Color {
    Color::srgb(0.12, 0.12, 0.18)
}
pub(super) fn quit_border() -> Color {
    Color::srgb(0.30, 0.30, 0.46)
}
pub(super) fn quit_text() -> Color {
    Color::srgb(0.65, 0.65, 0.80)
}
pub(super) fn resume_bg() -> Color {
    Color::srgb(0.08, 0.36, 0.14)
}
pub(super) fn resume_border() -> Color {
    Color::srgb(0.18, 0.72, 0.28)
}
pub(super) fn resume_text() -> Color {
    Color::srgb(0.75, 1.0, 0.80)
}
pub(super) fn title_color() -> Color {
    Color::srgb(0.95, 0.88, 0.45)
}
pub(super) fn subtitle_color() -> Color {
    Color::srgb(0.55, 0.55, 0.65)
}
pub(super) fn hint_color() -> Color {
    Color::srgb(0.28, 0.28, 0.35)
}
pub(super) fn card_bg() -> Color {
    Color::srgb(0.04, 0.04, 0.07)
}
pub(super) fn card_border() -> Color {
    Color::srgb(0.30, 0.30, 0.46)
}
pub(super) fn success_color() -> Color {
    Color::srgb(0.35, 1.0, 0.45)
}
pub(super) fn failure_color() -> Color {
    Color::srgb(1.0, 0.22, 0.22)
}
pub(super) fn stat_color() -> Color {
    Color::srgb(0.80, 0.82, 0.92)
}

/// Spawn a fixed-height invisible spacer node.
pub(super) fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}

/// Standard button node shape shared by every overlay.
pub(super) fn button_node(width: f32) -> Node {
    Node {
        width: Val::Px(width),
        height: Val::Px(48.0),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        flex_direction: FlexDirection::Column,
        border: UiRect::all(Val::Px(2.0)),
        ..default()
    }
}

/// Tint every text child of a hovered/unhovered button.
pub(super) fn tint_button_text(
    children: &Children,
    text_colors: &mut Query<&mut TextColor>,
    color: Color,
) {
    for child in children.iter() {
        if let Ok(mut text_color) = text_colors.get_mut(child) {
            *text_color = TextColor(color);
        }
    }
}

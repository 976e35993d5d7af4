//! Presentation domain: start, win and game-over screens.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::gameplay::{Overlay, SimEffect};

/// Marker for a full-screen overlay
#[derive(Component, Debug)]
pub struct OverlayUI(pub Overlay);

pub(super) fn overlay_text(overlay: Overlay) -> (&'static str, &'static str) {
    match overlay {
        Overlay::Start => ("Super Mario QBros!", "Press [Space] to start"),
        Overlay::Win => ("You won!", "Press [Space] to restart"),
        Overlay::GameOver => ("You lost!", "Press [Space] to restart"),
    }
}

fn title_color(overlay: Overlay) -> Color {
    match overlay {
        Overlay::GameOver => Color::srgb(0.9, 0.2, 0.15),
        _ => Color::srgb(1.0, 0.8, 0.0),
    }
}

fn spawn_overlay(commands: &mut Commands, overlay: Overlay) {
    let (title, prompt) = overlay_text(overlay);
    commands
        .spawn((
            OverlayUI(overlay),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 60.0,
                    ..default()
                },
                TextColor(title_color(overlay)),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(prompt),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));

            if overlay == Overlay::Start {
                parent.spawn((
                    Text::new("A/D move   Space jump   Enter ground pound   S enter pipe   +/-/0 zoom"),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.55, 0.55, 0.6)),
                    Node {
                        margin: UiRect::top(Val::Px(32.0)),
                        ..default()
                    },
                ));
            }
        });
}

pub(crate) fn show_start_overlay(mut commands: Commands) {
    spawn_overlay(&mut commands, Overlay::Start);
}

pub(crate) fn clear_overlays(mut commands: Commands, overlays: Query<Entity, With<OverlayUI>>) {
    for entity in &overlays {
        commands.entity(entity).despawn();
    }
}

/// Spawn the win or game-over screen when the simulation asks for it.
pub(crate) fn show_requested_overlays(
    mut commands: Commands,
    mut effects: MessageReader<SimEffect>,
    shown: Query<&OverlayUI>,
) {
    for effect in effects.read() {
        let SimEffect::ShowOverlay(overlay) = effect else {
            continue;
        };
        if shown.iter().any(|ui| ui.0 == *overlay) {
            continue;
        }
        spawn_overlay(&mut commands, *overlay);
    }
}

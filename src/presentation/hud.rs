//! Presentation domain: coin counter HUD element.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::gameplay::SimEffect;

const HUD_PADDING: f32 = 16.0;

/// Marker for the coin display UI container
#[derive(Component)]
pub struct CoinDisplayUI;

/// Marker for the coin amount text
#[derive(Component)]
pub struct CoinAmountText;

pub(crate) fn spawn_coin_display(mut commands: Commands) {
    commands
        .spawn((
            CoinDisplayUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            // Coin icon (gold square)
            parent.spawn((
                Node {
                    width: Val::Px(20.0),
                    height: Val::Px(20.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.9, 0.75, 0.2)),
            ));

            parent.spawn((
                CoinAmountText,
                Text::new("0"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 1.0)),
            ));
        });
}

pub(crate) fn reset_coin_display(mut query: Query<&mut Text, With<CoinAmountText>>) {
    for mut text in &mut query {
        **text = "0".to_string();
    }
}

pub(crate) fn update_coin_display(
    mut effects: MessageReader<SimEffect>,
    mut query: Query<&mut Text, With<CoinAmountText>>,
) {
    let Some(coins) = effects
        .read()
        .filter_map(|effect| match effect {
            SimEffect::CoinsChanged(coins) => Some(*coins),
            _ => None,
        })
        .last()
    else {
        return;
    };
    for mut text in &mut query {
        **text = format!("{}", coins);
    }
}

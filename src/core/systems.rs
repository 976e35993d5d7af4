//! Core domain: level flow transitions driven by input and simulation effects.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::state::GameState;
use crate::gameplay::{Overlay, SimEffect};

/// Title → Playing on Space.
pub(crate) fn start_on_space(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        info!("Starting level");
        game_state.set(GameState::Playing);
    }
}

/// Playing → Finished once a win or game-over overlay is requested.
pub(crate) fn finish_on_end_overlay(
    mut effects: MessageReader<SimEffect>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    for effect in effects.read() {
        if let SimEffect::ShowOverlay(overlay @ (Overlay::Win | Overlay::GameOver)) = effect {
            info!("Run finished: {:?}", overlay);
            game_state.set(GameState::Finished);
        }
    }
}

/// Finished → Title on Space. Entering Title rebuilds the level.
pub(crate) fn restart_on_space(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        info!("Restarting level");
        game_state.set(GameState::Title);
    }
}

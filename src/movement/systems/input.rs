//! Movement domain: keyboard sampling into logical actions.

use bevy::prelude::*;

use crate::movement::PlayerInput;

/// Movement actions are held states, resampled every frame.
pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    input.left = keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft);
    input.right = keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);
    input.jump = keyboard.pressed(KeyCode::Space);
    input.down = keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown);
    input.ground_pound =
        keyboard.pressed(KeyCode::Enter) || keyboard.pressed(KeyCode::NumpadEnter);

    // Zoom steps are edges, read by the camera in the same frame.
    input.zoom_in =
        keyboard.just_pressed(KeyCode::Equal) || keyboard.just_pressed(KeyCode::NumpadAdd);
    input.zoom_out =
        keyboard.just_pressed(KeyCode::Minus) || keyboard.just_pressed(KeyCode::NumpadSubtract);
    input.zoom_reset = keyboard.just_pressed(KeyCode::Digit0);
}


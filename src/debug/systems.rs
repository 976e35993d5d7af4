//! Debug domain: hotkeys, collision gizmos and state dumps.

use bevy::prelude::*;

use super::state::DebugState;
use crate::gameplay::Simulation;
use crate::level::classify;

const BOUNDS_COLOR: Color = Color::srgb(0.2, 0.9, 0.3);
const ITEM_BOUNDS_COLOR: Color = Color::srgb(1.0, 0.85, 0.1);
const PLAYER_BOUNDS_COLOR: Color = Color::srgb(1.0, 0.2, 0.2);

/// Toggle collision box drawing with F3
pub(crate) fn toggle_bounds(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_bounds = !debug_state.show_bounds;
        info!(
            "[DEBUG] Collision bounds {}",
            if debug_state.show_bounds { "ON" } else { "OFF" }
        );
    }
}

pub(crate) fn bounds_visible(debug_state: Res<DebugState>) -> bool {
    debug_state.show_bounds
}

pub(crate) fn draw_bounds(simulation: Res<Simulation>, mut gizmos: Gizmos) {
    for entry in simulation.registry().iter() {
        let color = if classify(&entry.name).is_item() {
            ITEM_BOUNDS_COLOR
        } else {
            BOUNDS_COLOR
        };
        gizmos.cube(
            Transform::from_translation(entry.bounds.center()).with_scale(entry.bounds.size()),
            color,
        );
    }

    let player = simulation.player().body.bounds();
    gizmos.cube(
        Transform::from_translation(player.center()).with_scale(player.size()),
        PLAYER_BOUNDS_COLOR,
    );
}

/// F4 logs the registry, F5 logs the player.
pub(crate) fn dump_state(keyboard: Res<ButtonInput<KeyCode>>, simulation: Option<Res<Simulation>>) {
    let Some(simulation) = simulation else {
        return;
    };

    if keyboard.just_pressed(KeyCode::F4) {
        info!("[DEBUG] Registry: {} volumes", simulation.registry().len());
        for entry in simulation.registry().iter() {
            info!(
                "[DEBUG]   {} min {:?} max {:?}",
                entry.name, entry.bounds.min, entry.bounds.max
            );
        }
    }

    if keyboard.just_pressed(KeyCode::F5) {
        let player = simulation.player();
        info!(
            "[DEBUG] Player at {:?} vel {:?} power {:?} coins {} scripted {} {:?}",
            player.body.position(),
            player.body.velocity,
            simulation.power(),
            simulation.coins(),
            simulation.is_scripted(),
            simulation.abilities()
        );
    }
}

//! Presentation domain: everything the player sees and hears.
//!
//! Reads the simulation's poses and effects; never writes game state.

mod audio;
mod camera;
mod hud;
mod overlay;
mod scene;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::core::GameState;
use crate::gameplay::Simulation;

pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                scene::setup_scene,
                camera::spawn_camera,
                hud::spawn_coin_display,
            ),
        )
        .add_systems(
            OnEnter(GameState::Title),
            (
                scene::build_level,
                audio::stop_all_cues,
                hud::reset_coin_display,
                (overlay::clear_overlays, overlay::show_start_overlay).chain(),
            ),
        )
        .add_systems(OnExit(GameState::Title), overlay::clear_overlays)
        .add_systems(OnEnter(GameState::Playing), audio::start_main_theme)
        .add_systems(
            Update,
            (
                scene::apply_scene_effects,
                audio::play_sound_effects,
                overlay::show_requested_overlays,
                hud::update_coin_display,
                camera::zoom_camera,
            ),
        )
        .add_systems(
            Update,
            (scene::sync_poses, camera::follow_player)
                .chain()
                .after(camera::zoom_camera)
                .run_if(resource_exists::<Simulation>),
        );
    }
}

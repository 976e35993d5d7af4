//! Core domain: game flow states and the transitions between them.

mod state;
mod systems;

pub use state::GameState;

use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>().add_systems(
            Update,
            (
                systems::start_on_space.run_if(in_state(GameState::Title)),
                systems::finish_on_end_overlay.run_if(in_state(GameState::Playing)),
                systems::restart_on_space.run_if(in_state(GameState::Finished)),
            ),
        );
    }
}

//! Debug domain: dev-only collision gizmos and state dumps.
//!
//! - F3 toggles collision boxes
//! - F4 logs every registered volume
//! - F5 logs the player's state

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::gameplay::Simulation;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                systems::toggle_bounds,
                systems::dump_state,
                systems::draw_bounds
                    .run_if(systems::bounds_visible.and(resource_exists::<Simulation>)),
            ),
        );
    }
}

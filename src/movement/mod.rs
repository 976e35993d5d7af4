//! Movement domain: kinematic bodies, player abilities, enemy patrols and input.

mod body;
mod enemy;
mod player;
mod resources;
pub(crate) mod systems;


pub use body::KinematicBody;
pub use enemy::{Enemy, EnemyMotion, oscillation_x};
pub use player::{Abilities, PlayerAvatar};
pub use resources::{MovementTuning, PlayerInput};

use bevy::prelude::*;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .add_systems(PreUpdate, systems::read_input.after(bevy::input::InputSystems));
    }
}

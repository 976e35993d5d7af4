//! Gameplay domain: power states, contact reactions, scripted sequences and the frame driver.

mod effects;
mod power;
mod response;
mod rules;
mod sequences;
mod simulation;
mod systems;


pub use effects::{ItemKind, Overlay, SimEffect, Skin, SoundCue};
pub use power::{DamageCooldown, DamageOutcome, Latches, PowerState};
pub use rules::GameRules;
pub use simulation::{PLAYER_NAME, Pose, Simulation};

use bevy::prelude::*;

use crate::core::GameState;

pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SimEffect>()
            .add_systems(OnEnter(GameState::Title), systems::reset_simulation)
            .add_systems(
                FixedUpdate,
                systems::step_simulation.run_if(systems::simulation_running),
            );
    }
}

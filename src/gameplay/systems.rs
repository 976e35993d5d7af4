//! Gameplay domain: Bevy systems that own and advance the simulation.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::effects::SimEffect;
use super::simulation::Simulation;
use crate::core::GameState;
use crate::level::{LevelDef, Tuning};
use crate::movement::PlayerInput;

/// Build a fresh run from the loaded level. Runs on every entry to Title.
pub(crate) fn reset_simulation(mut commands: Commands, level: Res<LevelDef>, tuning: Res<Tuning>) {
    info!("Simulation reset from level data");
    commands.insert_resource(Simulation::new(&level, &tuning));
}

/// Advance one fixed tick and publish the effects it produced.
pub(crate) fn step_simulation(
    time: Res<Time>,
    input: Res<PlayerInput>,
    mut simulation: ResMut<Simulation>,
    mut effects: MessageWriter<SimEffect>,
) {
    let now_ms = time.elapsed_secs_f64() * 1000.0;
    simulation.step(&input, now_ms);
    for effect in simulation.drain_effects() {
        effects.write(effect);
    }
}

/// The simulation only advances while playing or finishing a run.
pub(crate) fn simulation_running(
    state: Res<State<GameState>>,
    simulation: Option<Res<Simulation>>,
) -> bool {
    state.get().is_simulating() && simulation.is_some()
}

//! Level domain: level data, object naming and startup loading.

mod data;
mod loader;
mod naming;

#[cfg(test)]
mod tests;

pub use data::{EnemyDef, LevelDef, PieceDef, TeleportPathDef, Tuning, WinPathDef};
pub use loader::{LevelLoadError, LevelValidationError, load_level_data, parse_ron, validate_level};
pub use naming::{ObjectKind, TELEPORT_PIPE, classify};

use bevy::prelude::*;
use std::path::Path;

use crate::core::GameState;

/// Directory holding `level.ron` and `tuning.ron`.
pub const DATA_DIR: &str = "assets/data";

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_level);
    }
}

/// Load level and tuning data. The game only leaves `Loading` when both
/// files parse and validate.
fn load_level(mut commands: Commands, mut next_state: ResMut<NextState<GameState>>) {
    match load_level_data(Path::new(DATA_DIR)) {
        Ok((level, tuning)) => {
            info!(
                "Level loaded: {} pieces, {} enemies, tick rate {} Hz",
                level.pieces.len(),
                level.enemies.len(),
                tuning.movement.tick_hz
            );
            commands.insert_resource(Time::<Fixed>::from_hz(tuning.movement.tick_hz));
            commands.insert_resource(level);
            commands.insert_resource(tuning);
            next_state.set(GameState::Title);
        }
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            error!(
                "Level data failed to load ({} errors), simulation will not start",
                errors.len()
            );
        }
    }
}

//! Core domain: game state definitions for the level flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GameState {
    /// Level and tuning data are being read. Stays here if they fail to load.
    #[default]
    Loading,
    /// Start overlay, waiting for the player.
    Title,
    Playing,
    /// Win or game-over overlay shown. The simulation keeps ticking so
    /// enemies and the win path finish moving.
    Finished,
}

impl GameState {
    /// States in which the simulation advances.
    pub fn is_simulating(&self) -> bool {
        matches!(self, GameState::Playing | GameState::Finished)
    }
}

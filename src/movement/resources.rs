//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-tick motion constants. Speeds are in world units per tick.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Simulation ticks per second.
    pub tick_hz: f64,
    /// Gravity before the first landing.
    pub initial_gravity: f32,
    /// Gravity restored on every landing.
    pub base_gravity: f32,
    /// Horizontal velocity added per tick while steering.
    pub speed_coeff: f32,
    pub jump_speed: f32,
    /// Gravity multiplier for the ground-pound descent.
    pub groundpound_coeff: f32,
    /// Horizontal velocity is multiplied by this every tick.
    pub friction: f32,
    pub spin_duration_ms: f64,
    pub player_size: f32,
    pub enemy_size: f32,
    /// Milliseconds per enemy oscillation time unit.
    pub enemy_time_scale: f64,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            initial_gravity: 0.013,
            base_gravity: 0.015,
            speed_coeff: 0.2,
            jump_speed: 0.4,
            groundpound_coeff: 2.0,
            friction: 0.5,
            spin_duration_ms: 300.0,
            player_size: 0.5,
            enemy_size: 0.8,
            enemy_time_scale: 300.0,
        }
    }
}

/// Logical actions held during the current tick.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub ground_pound: bool,
    /// Enter a teleport pipe.
    pub down: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub zoom_reset: bool,
}

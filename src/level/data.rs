//! Level domain: RON data definitions for level geometry, spawns and tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::collision::Aabb;
use crate::gameplay::GameRules;
use crate::movement::MovementTuning;

/// A static, axis-aligned level piece (ground, pipe, block, flag...).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PieceDef {
    pub name: String,
    pub center: [f32; 3],
    pub size: [f32; 3],
}

impl PieceDef {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(Vec3::from_array(self.center), Vec3::from_array(self.size))
    }
}

fn default_enemy_y() -> f32 {
    2.524
}

/// Oscillating enemy spawn parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnemyDef {
    pub name: String,
    pub spawn_x: f32,
    #[serde(default = "default_enemy_y")]
    pub spawn_y: f32,
    pub speed: f32,
    /// Oscillation amplitude is twice this value.
    pub max_distance: f32,
}

/// Scripted flythrough after touching the goal.
///
/// The slide ends at `small_landing_y` or `big_landing_y` depending on the
/// power state held when the goal was touched, so a small player lands on
/// the ground rather than hovering at the big player's height.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WinPathDef {
    pub small_landing_y: f32,
    pub big_landing_y: f32,
    pub slide_ms: f64,
    pub exit_z: f32,
    pub exit_ms: f64,
    pub walk_x: f32,
    pub walk_ms: f64,
    pub return_z: f32,
    pub return_ms: f64,
}

impl Default for WinPathDef {
    fn default() -> Self {
        Self {
            small_landing_y: 2.374_140_5,
            big_landing_y: 2.499_140_5,
            slide_ms: 1228.0,
            exit_z: 1.8,
            exit_ms: 1000.0,
            walk_x: 120.5,
            walk_ms: 2000.0,
            return_z: 0.0,
            return_ms: 1000.0,
        }
    }
}

/// Scripted pipe travel from the teleport pipe to its exit.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TeleportPathDef {
    pub entry_x: f32,
    pub descend: f32,
    pub descend_ms: f64,
    pub exit_x: f32,
    pub travel_ms: f64,
    pub exit_y: f32,
    pub rise_ms: f64,
}

impl Default for TeleportPathDef {
    fn default() -> Self {
        Self {
            entry_x: -42.6,
            descend: 8.0,
            descend_ms: 1000.0,
            exit_x: 75.4,
            travel_ms: 2000.0,
            exit_y: 5.3869,
            rise_ms: 1000.0,
        }
    }
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub schema_version: u32,
    pub player_spawn: [f32; 3],
    pub pieces: Vec<PieceDef>,
    pub enemies: Vec<EnemyDef>,
    #[serde(default)]
    pub win: WinPathDef,
    #[serde(default)]
    pub teleport: TeleportPathDef,
}

/// All tunable constants, loaded from `tuning.ron`.
#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Tuning {
    pub movement: MovementTuning,
    pub rules: GameRules,
}

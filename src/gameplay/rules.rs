//! Gameplay domain: rule constants loaded from tuning data.

use serde::{Deserialize, Serialize};

use super::effects::ItemKind;
use super::power::PowerState;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GameRules {
    /// Minimum time between two accepted damage events.
    pub damage_cooldown_ms: f64,
    /// Falling below this world y ends the run.
    pub fall_threshold: f32,
    pub small_scale: f32,
    pub big_scale: f32,
    /// Object cubes that hold a power-up instead of a coin.
    pub item_block_indices: Vec<u32>,
    /// Brick cubes a big player can break.
    pub destructible_bricks: Vec<u32>,
    pub item_size: f32,
    /// Pop distance when the block is hit from below.
    pub item_rise: f32,
    /// Pop distance when the block is pounded from above.
    pub item_drop: f32,
    /// Units per millisecond.
    pub item_pop_speed: f32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            damage_cooldown_ms: 2000.0,
            fall_threshold: -20.0,
            small_scale: 1.0,
            big_scale: 1.5,
            item_block_indices: vec![2, 5, 11],
            destructible_bricks: vec![1, 2, 3, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30],
            item_size: 0.7,
            item_rise: 1.5,
            item_drop: 0.5,
            item_pop_speed: 0.006,
        }
    }
}

impl GameRules {
    /// Item released by object cube `index` for a player in `power`.
    pub fn item_for(&self, index: u32, power: PowerState) -> ItemKind {
        if !self.item_block_indices.contains(&index) {
            ItemKind::Coin
        } else if power == PowerState::Small {
            ItemKind::Mushroom
        } else {
            ItemKind::Flower
        }
    }

    pub fn is_destructible(&self, brick_index: u32) -> bool {
        self.destructible_bricks.contains(&brick_index)
    }

    /// Milliseconds an item needs to travel `distance`.
    pub fn pop_duration_ms(&self, distance: f32) -> f64 {
        if self.item_pop_speed <= 0.0 {
            return 0.0;
        }
        f64::from(distance / self.item_pop_speed)
    }
}

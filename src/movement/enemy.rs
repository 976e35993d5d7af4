//! Movement domain: oscillating enemy patrols.

use bevy::prelude::*;

use super::body::KinematicBody;
use super::resources::MovementTuning;
use crate::level::EnemyDef;

/// Parameters of a sinusoidal patrol along x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyMotion {
    pub spawn_x: f32,
    pub speed: f32,
    pub max_distance: f32,
}

/// Patrol position after `elapsed_ms`: `spawn + 2d * sin(speed * t / d)`
/// with `t` measured in units of `time_scale` milliseconds.
pub fn oscillation_x(motion: &EnemyMotion, elapsed_ms: f64, time_scale: f64) -> f32 {
    let t = (elapsed_ms / time_scale) as f32;
    let d = motion.max_distance;
    motion.spawn_x + 2.0 * d * (motion.speed * t / d).sin()
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub name: String,
    pub motion: EnemyMotion,
    pub body: KinematicBody,
}

impl Enemy {
    pub fn from_def(def: &EnemyDef, tuning: &MovementTuning) -> Self {
        Self {
            name: def.name.clone(),
            motion: EnemyMotion {
                spawn_x: def.spawn_x,
                speed: def.speed,
                max_distance: def.max_distance,
            },
            body: KinematicBody::new(
                Vec3::new(def.spawn_x, def.spawn_y, 0.0),
                tuning.enemy_size,
                0.0,
            ),
        }
    }

    /// Move to the patrol position for `elapsed_ms` since the run started.
    pub fn update(&mut self, elapsed_ms: f64, time_scale: f64) {
        let x = oscillation_x(&self.motion, elapsed_ms, time_scale);
        let position = self.body.position().with_x(x);
        self.body.set_position(position);
    }
}

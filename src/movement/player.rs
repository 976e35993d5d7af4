//! Movement domain: the player avatar and its ability flags.

use bevy::prelude::*;

use super::body::KinematicBody;
use super::resources::{MovementTuning, PlayerInput};

/// Mutually independent movement flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Abilities {
    /// Airborne from a jump or a fall.
    pub jumping: bool,
    pub ground_pounding: bool,
    /// A scripted path owns the body; input and physics are paused.
    pub teleporting: bool,
}

#[derive(Debug, Clone)]
pub struct PlayerAvatar {
    pub body: KinematicBody,
    pub abilities: Abilities,
    pub visible: bool,
}

impl PlayerAvatar {
    pub fn new(spawn: Vec3, tuning: &MovementTuning) -> Self {
        Self {
            body: KinematicBody::new(spawn, tuning.player_size, tuning.initial_gravity),
            abilities: Abilities::default(),
            visible: true,
        }
    }

    /// Launch upward. Used both for jump input and for bouncing off enemies.
    pub fn jump(&mut self, tuning: &MovementTuning) {
        self.body.velocity.y = tuning.jump_speed;
        self.abilities.jumping = true;
    }

    /// Apply horizontal steering. Ground-pounding locks steering.
    pub fn steer(&mut self, input: &PlayerInput, tuning: &MovementTuning) {
        if self.abilities.ground_pounding {
            return;
        }
        if input.left {
            self.body.velocity.x -= tuning.speed_coeff;
        }
        if input.right {
            self.body.velocity.x += tuning.speed_coeff;
        }
    }

    /// Freeze mid-air and start the pound. Returns false when not allowed.
    pub fn begin_ground_pound(&mut self) -> bool {
        if !self.abilities.jumping || self.abilities.ground_pounding {
            return false;
        }
        self.body.velocity.y = 0.0;
        self.body.gravity = 0.0;
        self.abilities.ground_pounding = true;
        true
    }

    /// Friction, then move, then accelerate downward.
    pub fn integrate(&mut self, tuning: &MovementTuning) {
        let body = &mut self.body;
        body.velocity.x *= tuning.friction;
        body.velocity.z *= tuning.friction;
        let velocity = body.velocity;
        body.translate(velocity);
        body.velocity.y -= body.gravity;
    }
}

//! Movement domain: kinematic body shared by the player and enemies.

use bevy::prelude::*;

use crate::animation::{Animated, Channel};
use crate::collision::{Aabb, Contact, ContactSide};

/// Position, velocity and gravity of a cube-shaped entity.
///
/// The bounding box is derived from the transform (position, uniform scale
/// and spin about the x axis) and recomputed on every change to it.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    position: Vec3,
    scale: f32,
    spin: f32,
    size: f32,
    bounds: Aabb,
    pub velocity: Vec3,
    pub gravity: f32,
}

impl KinematicBody {
    pub fn new(position: Vec3, size: f32, gravity: f32) -> Self {
        let mut body = Self {
            position,
            scale: 1.0,
            spin: 0.0,
            size,
            bounds: Aabb::from_center_size(position, Vec3::splat(size)),
            velocity: Vec3::ZERO,
            gravity,
        };
        body.refresh_bounds();
        body
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.refresh_bounds();
    }

    pub fn translate(&mut self, delta: Vec3) {
        self.set_position(self.position + delta);
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
        self.refresh_bounds();
    }

    /// Rotation about the x axis in radians.
    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn set_spin(&mut self, spin: f32) {
        self.spin = spin;
        self.refresh_bounds();
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Push the body out of an obstacle and stop it moving back in.
    pub fn apply_contact(&mut self, contact: &Contact) {
        let d = contact.distance;
        match contact.side {
            ContactSide::Top => {
                self.velocity.y = self.velocity.y.max(0.0);
                self.translate(Vec3::Y * d);
            }
            ContactSide::Bottom => {
                self.velocity.y = self.velocity.y.min(0.0);
                self.translate(Vec3::NEG_Y * d);
            }
            ContactSide::Right => {
                self.velocity.x = self.velocity.x.max(0.0);
                self.translate(Vec3::X * d);
            }
            ContactSide::Left => {
                self.velocity.x = self.velocity.x.min(0.0);
                self.translate(Vec3::NEG_X * d);
            }
            ContactSide::Front => {
                self.velocity.z = self.velocity.z.max(0.0);
                self.translate(Vec3::Z * d);
            }
            ContactSide::Back => {
                self.velocity.z = self.velocity.z.min(0.0);
                self.translate(Vec3::NEG_Z * d);
            }
        }
    }

    fn refresh_bounds(&mut self) {
        let half = self.size * self.scale * 0.5;
        // A cube spun about x covers more of y and z.
        let spread = half * (self.spin.cos().abs() + self.spin.sin().abs());
        let extents = Vec3::new(half, spread, spread);
        self.bounds = Aabb::new(self.position - extents, self.position + extents);
    }
}

impl Animated for KinematicBody {
    fn channel(&self, channel: Channel) -> f32 {
        match channel {
            Channel::X => self.position.x,
            Channel::Y => self.position.y,
            Channel::Z => self.position.z,
            Channel::Spin => self.spin,
        }
    }

    fn set_channel(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::X => self.set_position(self.position.with_x(value)),
            Channel::Y => self.set_position(self.position.with_y(value)),
            Channel::Z => self.set_position(self.position.with_z(value)),
            Channel::Spin => self.set_spin(value),
        }
    }
}

//! Presentation domain: chase camera with stepped zoom.

use bevy::prelude::*;

use crate::gameplay::{PLAYER_NAME, Simulation};
use crate::movement::PlayerInput;

/// Offset from the player at zoom 1.
pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 15.0, 20.0);
pub const MIN_ZOOM: f32 = 0.4;
pub const MAX_ZOOM: f32 = 2.5;
pub const ZOOM_STEP: f32 = 0.1;

/// Camera that trails the player. Smaller zoom is closer.
#[derive(Component, Debug)]
pub struct FollowCamera {
    pub zoom: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

impl FollowCamera {
    pub fn apply_input(&mut self, input: &PlayerInput) {
        if input.zoom_reset {
            self.zoom = 1.0;
        }
        if input.zoom_in {
            self.zoom -= ZOOM_STEP;
        }
        if input.zoom_out {
            self.zoom += ZOOM_STEP;
        }
        self.zoom = self.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn eye_for(&self, target: Vec3) -> Vec3 {
        target + CAMERA_OFFSET * self.zoom
    }
}

pub(crate) fn spawn_camera(mut commands: Commands) {
    let camera = FollowCamera::default();
    commands.spawn((
        Name::new("FollowCamera"),
        Camera3d::default(),
        Transform::from_translation(camera.eye_for(Vec3::ZERO)).looking_at(Vec3::ZERO, Vec3::Y),
        camera,
    ));
}

pub(crate) fn zoom_camera(input: Res<PlayerInput>, mut cameras: Query<&mut FollowCamera>) {
    if !(input.zoom_in || input.zoom_out || input.zoom_reset) {
        return;
    }
    for mut camera in &mut cameras {
        camera.apply_input(&input);
        debug!("Camera zoom {:.1}", camera.zoom);
    }
}

pub(crate) fn follow_player(
    simulation: Res<Simulation>,
    mut cameras: Query<(&FollowCamera, &mut Transform)>,
) {
    let Some(pose) = simulation.pose_of(PLAYER_NAME) else {
        return;
    };
    for (camera, mut transform) in &mut cameras {
        *transform = Transform::from_translation(camera.eye_for(pose.position))
            .looking_at(pose.position, Vec3::Y);
    }
}

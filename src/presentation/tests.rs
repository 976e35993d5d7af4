//! Presentation domain: unit tests for camera zoom and screen content.

use bevy::audio::PlaybackMode;
use bevy::prelude::*;

use super::audio::playback_settings;
use super::camera::{CAMERA_OFFSET, FollowCamera, MAX_ZOOM, MIN_ZOOM};
use super::overlay::overlay_text;
use super::scene::piece_color;
use crate::gameplay::{Overlay, SoundCue};
use crate::movement::PlayerInput;

#[test]
fn test_camera_trails_player_at_default_zoom() {
    let camera = FollowCamera::default();
    let target = Vec3::new(-100.0, 2.5, 0.0);
    assert_eq!(camera.eye_for(target), target + CAMERA_OFFSET);
}

#[test]
fn test_zoom_steps_and_clamps() {
    let mut camera = FollowCamera::default();
    let zoom_in = PlayerInput {
        zoom_in: true,
        ..default()
    };
    camera.apply_input(&zoom_in);
    assert!((camera.zoom - 0.9).abs() < 1e-6);

    for _ in 0..20 {
        camera.apply_input(&zoom_in);
    }
    assert_eq!(camera.zoom, MIN_ZOOM);

    let zoom_out = PlayerInput {
        zoom_out: true,
        ..default()
    };
    for _ in 0..40 {
        camera.apply_input(&zoom_out);
    }
    assert_eq!(camera.zoom, MAX_ZOOM);
}

#[test]
fn test_zoom_reset_restores_default() {
    let mut camera = FollowCamera { zoom: 2.0 };
    camera.apply_input(&PlayerInput {
        zoom_reset: true,
        ..default()
    });
    assert_eq!(camera.zoom, 1.0);
}

#[test]
fn test_end_screens_offer_restart() {
    assert!(overlay_text(Overlay::Start).1.contains("start"));
    assert!(overlay_text(Overlay::Win).1.contains("restart"));
    assert!(overlay_text(Overlay::GameOver).1.contains("restart"));
    assert_ne!(overlay_text(Overlay::Win).0, overlay_text(Overlay::GameOver).0);
}

#[test]
fn test_only_main_theme_loops() {
    assert!(matches!(playback_settings(SoundCue::Main).mode, PlaybackMode::Loop));
    assert!(matches!(playback_settings(SoundCue::Coin).mode, PlaybackMode::Despawn));
}

#[test]
fn test_all_pipes_share_a_colour() {
    assert_eq!(piece_color("Pipe_1"), piece_color("Pipe_4"));
    assert_ne!(piece_color("ObjectCube_1"), piece_color("BrickCube_1"));
}

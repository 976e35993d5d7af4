//! Presentation domain: sound cue playback.

use bevy::audio::Volume;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::gameplay::{SimEffect, SoundCue};

/// Marks an audio entity with the cue it is playing.
#[derive(Component, Debug)]
pub struct CuePlayer(pub SoundCue);

pub(super) fn playback_settings(cue: SoundCue) -> PlaybackSettings {
    let settings = if cue.looping() {
        PlaybackSettings::LOOP
    } else {
        PlaybackSettings::DESPAWN
    };
    settings.with_volume(Volume::Linear(cue.volume()))
}

fn play(commands: &mut Commands, asset_server: &AssetServer, cue: SoundCue) {
    commands.spawn((
        CuePlayer(cue),
        AudioPlayer::new(asset_server.load(cue.asset_path())),
        playback_settings(cue),
    ));
}

pub(crate) fn start_main_theme(mut commands: Commands, asset_server: Res<AssetServer>) {
    play(&mut commands, &asset_server, SoundCue::Main);
}

/// Silence everything, including the theme. Runs on every entry to Title.
pub(crate) fn stop_all_cues(mut commands: Commands, players: Query<Entity, With<CuePlayer>>) {
    for entity in &players {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn play_sound_effects(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut effects: MessageReader<SimEffect>,
    players: Query<(Entity, &CuePlayer)>,
) {
    for effect in effects.read() {
        match effect {
            SimEffect::PlaySound(cue) => play(&mut commands, &asset_server, *cue),
            SimEffect::StopSound(cue) => {
                for (entity, player) in &players {
                    if player.0 == *cue {
                        commands.entity(entity).despawn();
                    }
                }
            }
            _ => {}
        }
    }
}

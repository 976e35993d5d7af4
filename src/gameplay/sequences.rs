//! Gameplay domain: the scripted stage chains (win, teleport, spin, item pop).

use std::f32::consts::TAU;

use super::effects::{Overlay, SoundCue};
use crate::animation::{Channel, Stage, Target};
use crate::level::{TeleportPathDef, WinPathDef};
use crate::movement::MovementTuning;

/// Completion hooks understood by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathHook {
    Sound(SoundCue),
    Overlay(Overlay),
    HidePlayer,
    ShowPlayer,
    EndTeleport,
    /// Reset rotation and start the fast ground-pound descent.
    EndSpin,
    /// The popped item becomes collidable.
    RegisterItem,
}

/// Slide down the pole, step out, walk to the castle and step back in.
pub fn win_stages(path: &WinPathDef, landing_y: f32) -> Vec<Stage<PathHook>> {
    vec![
        Stage::new(Channel::Y, Target::Absolute(landing_y), path.slide_ms)
            .then(PathHook::Sound(SoundCue::Win)),
        Stage::new(Channel::Z, Target::Absolute(path.exit_z), path.exit_ms),
        Stage::new(Channel::X, Target::Absolute(path.walk_x), path.walk_ms),
        Stage::new(Channel::Z, Target::Absolute(path.return_z), path.return_ms)
            .then(PathHook::Overlay(Overlay::Win)),
    ]
}

/// Sink into the pipe, travel hidden to the exit pipe and rise out of it.
pub fn teleport_stages(path: &TeleportPathDef) -> Vec<Stage<PathHook>> {
    vec![
        Stage::new(Channel::Y, Target::Offset(-path.descend), path.descend_ms)
            .then(PathHook::HidePlayer),
        Stage::new(Channel::X, Target::Absolute(path.exit_x), path.travel_ms)
            .then(PathHook::ShowPlayer)
            .then(PathHook::Sound(SoundCue::PipeDamage)),
        Stage::new(Channel::Y, Target::Absolute(path.exit_y), path.rise_ms)
            .then(PathHook::EndTeleport),
    ]
}

/// One full turn about x before the pound descent.
pub fn spin_stages(tuning: &MovementTuning) -> Vec<Stage<PathHook>> {
    vec![
        Stage::new(Channel::Spin, Target::Absolute(TAU), tuning.spin_duration_ms)
            .then(PathHook::EndSpin),
    ]
}

/// Move an item out of its block by `offset`, taking `duration_ms`.
pub fn item_pop_stages(offset: f32, duration_ms: f64) -> Vec<Stage<PathHook>> {
    vec![Stage::new(Channel::Y, Target::Offset(offset), duration_ms).then(PathHook::RegisterItem)]
}

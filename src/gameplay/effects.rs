//! Gameplay domain: side effects the simulation asks its collaborators to perform.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Audio cues. The main theme loops, everything else plays once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Main,
    Coin,
    Jump,
    Powerup,
    PipeDamage,
    GameOver,
    EnemyDefeated,
    BlockHit,
    BlockBroken,
    Bump,
    Win,
    Flagpole,
}

impl SoundCue {
    pub fn asset_path(self) -> &'static str {
        match self {
            SoundCue::Main => "audio/main.ogg",
            SoundCue::Coin => "audio/coin.ogg",
            SoundCue::Jump => "audio/jump.ogg",
            SoundCue::Powerup => "audio/powerup.ogg",
            SoundCue::PipeDamage => "audio/pipe_damage.ogg",
            SoundCue::GameOver => "audio/gameover.ogg",
            SoundCue::EnemyDefeated => "audio/enemy_defeated.ogg",
            SoundCue::BlockHit => "audio/block_hit.ogg",
            SoundCue::BlockBroken => "audio/block_broken.ogg",
            SoundCue::Bump => "audio/bump.ogg",
            SoundCue::Win => "audio/win.ogg",
            SoundCue::Flagpole => "audio/flagpole.ogg",
        }
    }

    pub fn volume(self) -> f32 {
        match self {
            SoundCue::Coin => 0.9,
            SoundCue::Jump => 0.1,
            _ => 0.5,
        }
    }

    pub fn looping(self) -> bool {
        self == SoundCue::Main
    }
}

/// Full-screen overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Start,
    Win,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Skin {
    #[default]
    Normal,
    Fire,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Mushroom,
    Flower,
    Coin,
}

impl ItemKind {
    /// Name prefix that makes the spawned cube classify as this item.
    pub fn prefix(self) -> &'static str {
        match self {
            ItemKind::Mushroom => "MushroomCube",
            ItemKind::Flower => "FlowerCube",
            ItemKind::Coin => "CoinCube",
        }
    }
}

/// One request from the simulation to the outside world.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEffect {
    PlaySound(SoundCue),
    StopSound(SoundCue),
    ShowOverlay(Overlay),
    SpawnItem {
        name: String,
        kind: ItemKind,
        position: Vec3,
        size: f32,
    },
    Despawn(String),
    SetVisible {
        name: String,
        visible: bool,
    },
    /// Recolour a block that has been hit.
    MarkBlockUsed(String),
    SetSkin(Skin),
    CoinsChanged(u32),
}

impl Message for SimEffect {}

//! Gameplay domain: the simulation context and its per-tick step.

use bevy::prelude::*;

use super::effects::{SimEffect, Skin, SoundCue};
use super::power::{DamageCooldown, Latches, PowerState};
use super::rules::GameRules;
use super::sequences::{self, PathHook};
use crate::animation::Sequence;
use crate::collision::{BoundingVolumeRegistry, check_collisions};
use crate::level::{LevelDef, TeleportPathDef, Tuning, WinPathDef};
use crate::movement::{Abilities, Enemy, KinematicBody, MovementTuning, PlayerAvatar, PlayerInput};

/// Scene name of the player avatar.
pub const PLAYER_NAME: &str = "Player";

/// Where a moving object should be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub scale: f32,
    pub spin: f32,
}

/// An item cube released from an object cube.
#[derive(Debug, Clone)]
pub(super) struct ItemCube {
    pub(super) name: String,
    pub(super) body: KinematicBody,
    pub(super) pop: Option<Sequence<PathHook>>,
}

/// All mutable game state for one run of the level.
#[derive(Resource, Debug)]
pub struct Simulation {
    pub(super) movement: MovementTuning,
    pub(super) rules: GameRules,
    pub(super) win_path: WinPathDef,
    pub(super) teleport_path: TeleportPathDef,
    pub(super) registry: BoundingVolumeRegistry,
    pub(super) player: PlayerAvatar,
    pub(super) power: PowerState,
    pub(super) skin: Skin,
    pub(super) cooldown: DamageCooldown,
    pub(super) latches: Latches,
    pub(super) coins: u32,
    pub(super) item_counter: u32,
    pub(super) enemies: Vec<Enemy>,
    pub(super) items: Vec<ItemCube>,
    pub(super) player_path: Option<Sequence<PathHook>>,
    pub(super) spin: Option<Sequence<PathHook>>,
    started_ms: Option<f64>,
    effects: Vec<SimEffect>,
}

impl Simulation {
    /// Fresh run: every static piece and enemy registered, player at spawn.
    pub fn new(level: &LevelDef, tuning: &Tuning) -> Self {
        let mut registry = BoundingVolumeRegistry::new();
        for piece in &level.pieces {
            registry.insert(piece.name.as_str(), piece.bounds());
        }

        let enemies: Vec<Enemy> = level
            .enemies
            .iter()
            .map(|def| Enemy::from_def(def, &tuning.movement))
            .collect();
        for enemy in &enemies {
            registry.insert(enemy.name.as_str(), enemy.body.bounds());
        }

        let spawn = Vec3::from_array(level.player_spawn);
        let mut player = PlayerAvatar::new(spawn, &tuning.movement);
        player.body.set_scale(tuning.rules.small_scale);

        Self {
            movement: tuning.movement.clone(),
            rules: tuning.rules.clone(),
            win_path: level.win.clone(),
            teleport_path: level.teleport.clone(),
            registry,
            player,
            power: PowerState::Small,
            skin: Skin::Normal,
            cooldown: DamageCooldown::new(tuning.rules.damage_cooldown_ms),
            latches: Latches::default(),
            coins: 0,
            item_counter: 0,
            enemies,
            items: Vec::new(),
            player_path: None,
            spin: None,
            started_ms: None,
            effects: Vec::new(),
        }
    }

    /// Advance one tick at `now_ms`.
    ///
    /// Scripted sequences advance first, then input and collisions unless a
    /// sequence owns the player or the player is defeated, then enemies.
    pub fn step(&mut self, input: &PlayerInput, now_ms: f64) {
        let origin = *self.started_ms.get_or_insert(now_ms);

        self.tick_sequences(now_ms);

        if !self.player.abilities.teleporting && self.power != PowerState::Ko {
            self.player.steer(input, &self.movement);

            if input.jump && !self.player.abilities.jumping {
                self.player.jump(&self.movement);
                self.emit(SimEffect::PlaySound(SoundCue::Jump));
            }

            if input.ground_pound && self.player.begin_ground_pound() {
                debug!("Ground pound started");
                self.spin = Some(Sequence::begin(
                    sequences::spin_stages(&self.movement),
                    now_ms,
                    &self.player.body,
                ));
            }

            let contacts = check_collisions(&self.player.body.bounds(), &self.registry);
            if contacts.is_empty() {
                self.player.abilities.jumping = true;
            }
            self.handle_contacts(&contacts, input, now_ms);

            self.player.integrate(&self.movement);
        }

        let elapsed = now_ms - origin;
        for enemy in &mut self.enemies {
            enemy.update(elapsed, self.movement.enemy_time_scale);
            self.registry.refresh(&enemy.name, enemy.body.bounds());
        }

        if self.player.body.position().y < self.rules.fall_threshold {
            self.game_over();
        }
    }

    pub(super) fn tick_sequences(&mut self, now_ms: f64) {
        if let Some(spin) = &mut self.spin {
            let hooks = spin.tick(now_ms, &mut self.player.body);
            if spin.is_finished() {
                self.spin = None;
            }
            for hook in hooks {
                self.apply_hook(hook);
            }
        }

        if let Some(path) = &mut self.player_path {
            let hooks = path.tick(now_ms, &mut self.player.body);
            if path.is_finished() {
                self.player_path = None;
            }
            for hook in hooks {
                self.apply_hook(hook);
            }
        }

        let mut landed = Vec::new();
        for item in &mut self.items {
            if let Some(pop) = &mut item.pop {
                let hooks = pop.tick(now_ms, &mut item.body);
                if pop.is_finished() {
                    item.pop = None;
                }
                if hooks.contains(&PathHook::RegisterItem) {
                    landed.push((item.name.clone(), item.body.bounds()));
                }
            }
        }
        for (name, bounds) in landed {
            debug!("Item {} is now collectable", name);
            self.registry.insert(name, bounds);
        }
    }

    pub(super) fn apply_hook(&mut self, hook: PathHook) {
        match hook {
            PathHook::Sound(cue) => self.emit(SimEffect::PlaySound(cue)),
            PathHook::Overlay(overlay) => self.emit(SimEffect::ShowOverlay(overlay)),
            PathHook::HidePlayer => self.set_player_visible(false),
            PathHook::ShowPlayer => self.set_player_visible(true),
            PathHook::EndTeleport => {
                info!("Teleport finished");
                self.player.abilities.teleporting = false;
            }
            PathHook::EndSpin => {
                self.player.body.set_spin(0.0);
                self.player.body.gravity =
                    self.movement.base_gravity * self.movement.groundpound_coeff;
            }
            PathHook::RegisterItem => {}
        }
    }

    pub(super) fn set_player_visible(&mut self, visible: bool) {
        self.player.visible = visible;
        self.emit(SimEffect::SetVisible {
            name: PLAYER_NAME.to_string(),
            visible,
        });
    }

    pub(super) fn emit(&mut self, effect: SimEffect) {
        self.effects.push(effect);
    }

    /// Take every effect produced since the last drain, in order.
    pub fn drain_effects(&mut self) -> Vec<SimEffect> {
        std::mem::take(&mut self.effects)
    }

    /// Current pose of the player, an enemy or an item, by scene name.
    pub fn pose_of(&self, name: &str) -> Option<Pose> {
        let body = if name == PLAYER_NAME {
            Some(&self.player.body)
        } else {
            self.enemies
                .iter()
                .find(|e| e.name == name)
                .map(|e| &e.body)
                .or_else(|| self.items.iter().find(|i| i.name == name).map(|i| &i.body))
        }?;
        Some(Pose {
            position: body.position(),
            scale: body.scale(),
            spin: body.spin(),
        })
    }

    pub fn power(&self) -> PowerState {
        self.power
    }

    pub fn skin(&self) -> Skin {
        self.skin
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn abilities(&self) -> Abilities {
        self.player.abilities
    }

    pub fn player(&self) -> &PlayerAvatar {
        &self.player
    }

    pub fn registry(&self) -> &BoundingVolumeRegistry {
        &self.registry
    }

    pub fn latches(&self) -> &Latches {
        &self.latches
    }

    pub fn cooldown(&self) -> &DamageCooldown {
        &self.cooldown
    }

    /// True while a scripted path (win or teleport) owns the player.
    pub fn is_scripted(&self) -> bool {
        self.player_path.is_some()
    }
}

//! Gameplay domain: reactions to player contacts and the terminal transitions.

use bevy::prelude::*;

use super::effects::{Overlay, SimEffect, Skin, SoundCue};
use super::power::{DamageOutcome, PowerState, latch};
use super::sequences;
use super::simulation::{ItemCube, Simulation};
use crate::animation::Sequence;
use crate::collision::{Contact, ContactSide};
use crate::level::{ObjectKind, classify};
use crate::movement::{KinematicBody, PlayerInput};

/// Which way a popped item leaves its block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PopDirection {
    Up,
    Down,
}

impl Simulation {
    /// Resolve contacts in order. Each one is fully handled before the next.
    pub(super) fn handle_contacts(&mut self, contacts: &[Contact], input: &PlayerInput, now_ms: f64) {
        for contact in contacts {
            self.handle_contact(contact, input, now_ms);
        }
    }

    fn handle_contact(&mut self, contact: &Contact, input: &PlayerInput, now_ms: f64) {
        let kind = classify(&contact.name);
        self.player.body.apply_contact(contact);

        match contact.side {
            ContactSide::Top => self.land(&contact.name, kind, now_ms),
            ContactSide::Bottom => self.bump_from_below(&contact.name, kind, now_ms),
            _ => {}
        }

        match kind {
            ObjectKind::MushroomCube(_) => self.collect_mushroom(&contact.name, now_ms),
            ObjectKind::FlowerCube(_) => self.collect_flower(&contact.name, now_ms),
            ObjectKind::CoinCube(_) => self.collect_coin(&contact.name),
            ObjectKind::Enemy(_) => {
                if contact.side == ContactSide::Top {
                    self.stomp(&contact.name);
                } else if !self.latches.defeated_enemies.contains(&contact.name) {
                    self.take_damage(now_ms);
                }
            }
            ObjectKind::Goal => self.start_win(now_ms),
            ObjectKind::TeleportPipe if input.down => self.start_teleport(now_ms),
            _ => {}
        }
    }

    fn land(&mut self, name: &str, kind: ObjectKind, now_ms: f64) {
        let pounding = self.player.abilities.ground_pounding;
        match kind {
            ObjectKind::ObjectCube(index) if pounding => {
                self.hit_object_cube(name, index, PopDirection::Down, now_ms);
            }
            ObjectKind::BrickCube(index) if pounding && self.power != PowerState::Small => {
                self.hit_brick(name, index);
            }
            _ => {}
        }

        self.player.body.gravity = self.movement.base_gravity;
        self.emit(SimEffect::StopSound(SoundCue::Jump));
        self.player.abilities.jumping = false;
        if pounding {
            self.player.abilities.ground_pounding = false;
            self.emit(SimEffect::PlaySound(SoundCue::Bump));
        }
    }

    fn bump_from_below(&mut self, name: &str, kind: ObjectKind, now_ms: f64) {
        match kind {
            ObjectKind::ObjectCube(index) => {
                self.hit_object_cube(name, index, PopDirection::Up, now_ms);
            }
            ObjectKind::BrickCube(index) if self.power != PowerState::Small => {
                self.hit_brick(name, index);
            }
            ObjectKind::BrickCube(_) => self.emit(SimEffect::PlaySound(SoundCue::Bump)),
            _ => {}
        }
    }

    /// Release an item the first time; later hits only bump.
    fn hit_object_cube(&mut self, name: &str, index: u32, direction: PopDirection, now_ms: f64) {
        if !latch(&mut self.latches.hit_cubes, name) {
            self.emit(SimEffect::PlaySound(SoundCue::Bump));
            return;
        }
        self.emit(SimEffect::MarkBlockUsed(name.to_string()));
        self.emit(SimEffect::PlaySound(SoundCue::BlockHit));

        let Some(block) = self.registry.get(name).copied() else {
            warn!("Object cube {} hit but not registered", name);
            return;
        };

        let kind = self.rules.item_for(index, self.power);
        let item_name = format!("{}_{}", kind.prefix(), self.item_counter);
        self.item_counter += 1;

        let offset = match direction {
            PopDirection::Up => self.rules.item_rise,
            PopDirection::Down => -self.rules.item_drop,
        };
        let duration_ms = self.rules.pop_duration_ms(offset.abs());

        let body = KinematicBody::new(block.center(), self.rules.item_size, 0.0);
        let pop = Sequence::begin(sequences::item_pop_stages(offset, duration_ms), now_ms, &body);

        debug!("{} released {} ({:?})", name, item_name, kind);
        self.emit(SimEffect::SpawnItem {
            name: item_name.clone(),
            kind,
            position: body.position(),
            size: self.rules.item_size,
        });
        self.items.push(ItemCube {
            name: item_name,
            body,
            pop: Some(pop),
        });
    }

    fn hit_brick(&mut self, name: &str, index: u32) {
        if self.rules.is_destructible(index) {
            self.destroy_brick(name);
        } else if latch(&mut self.latches.hit_cubes, name) {
            debug!("{} bumped", name);
            self.emit(SimEffect::MarkBlockUsed(name.to_string()));
        }
    }

    fn destroy_brick(&mut self, name: &str) {
        if !latch(&mut self.latches.destroyed_bricks, name) {
            return;
        }
        debug!("{} destroyed", name);
        self.registry.remove(name);
        self.emit(SimEffect::Despawn(name.to_string()));
        self.emit(SimEffect::PlaySound(SoundCue::BlockBroken));
    }

    /// Latch the item and take it out of the world. False if already taken.
    fn take_item(&mut self, name: &str) -> bool {
        if !latch(&mut self.latches.collected_items, name) {
            return false;
        }
        self.registry.remove(name);
        self.items.retain(|item| item.name != name);
        self.emit(SimEffect::Despawn(name.to_string()));
        true
    }

    fn grow(&mut self) {
        self.player.body.set_scale(self.rules.big_scale);
    }

    fn power_up(&mut self, next: PowerState, now_ms: f64) {
        info!("Power up: {:?} -> {:?}", self.power, next);
        self.cooldown.restart(now_ms);
        self.power = next;
        self.emit(SimEffect::PlaySound(SoundCue::Powerup));
    }

    fn collect_mushroom(&mut self, name: &str, now_ms: f64) {
        if !self.take_item(name) {
            return;
        }
        self.grow();
        if let Some(next) = self.power.on_mushroom() {
            self.power_up(next, now_ms);
        }
    }

    fn collect_flower(&mut self, name: &str, now_ms: f64) {
        if !self.take_item(name) {
            return;
        }
        self.skin = Skin::Fire;
        self.emit(SimEffect::SetSkin(Skin::Fire));
        self.grow();
        if let Some(next) = self.power.on_flower() {
            self.power_up(next, now_ms);
        }
    }

    fn collect_coin(&mut self, name: &str) {
        if !self.take_item(name) {
            return;
        }
        self.coins += 1;
        debug!("Coin collected, total {}", self.coins);
        self.emit(SimEffect::CoinsChanged(self.coins));
        self.emit(SimEffect::PlaySound(SoundCue::Coin));
    }

    fn stomp(&mut self, name: &str) {
        if !latch(&mut self.latches.defeated_enemies, name) {
            return;
        }
        debug!("{} stomped", name);
        self.registry.remove(name);
        self.enemies.retain(|enemy| enemy.name != name);
        self.emit(SimEffect::Despawn(name.to_string()));
        self.player.jump(&self.movement);
        self.emit(SimEffect::PlaySound(SoundCue::EnemyDefeated));
    }

    /// Lose one power level, or the run when already small.
    pub fn take_damage(&mut self, now_ms: f64) {
        if self.power.is_terminal() || !self.cooldown.is_ready(now_ms) {
            return;
        }
        self.cooldown.restart(now_ms);

        match self.power.on_damage() {
            DamageOutcome::Fatal => self.game_over(),
            DamageOutcome::Downgraded(next) => {
                info!("Damage taken: {:?} -> {:?}", self.power, next);
                self.emit(SimEffect::PlaySound(SoundCue::PipeDamage));
                match next {
                    PowerState::Small => self.player.body.set_scale(self.rules.small_scale),
                    _ => {
                        self.skin = Skin::Normal;
                        self.emit(SimEffect::SetSkin(Skin::Normal));
                    }
                }
                self.power = next;
            }
            DamageOutcome::Unaffected => {}
        }
    }

    /// End the run. Only the first call has any effect.
    pub fn game_over(&mut self) {
        if self.power == PowerState::Ko {
            return;
        }
        info!("Game over from {:?}", self.power);
        self.power = PowerState::Ko;
        self.emit(SimEffect::StopSound(SoundCue::Main));
        self.emit(SimEffect::PlaySound(SoundCue::GameOver));
        self.set_player_visible(false);
        self.emit(SimEffect::ShowOverlay(Overlay::GameOver));
    }

    /// Touching the goal. Ignored once the run has ended either way.
    pub fn start_win(&mut self, now_ms: f64) {
        if self.power.is_terminal() {
            return;
        }
        let landing_y = if self.power == PowerState::Small {
            self.win_path.small_landing_y
        } else {
            self.win_path.big_landing_y
        };
        info!("Goal reached as {:?}", self.power);

        self.power = PowerState::Winner;
        self.emit(SimEffect::StopSound(SoundCue::Main));
        self.emit(SimEffect::PlaySound(SoundCue::Flagpole));
        self.player.abilities.teleporting = true;
        self.player_path = Some(Sequence::begin(
            sequences::win_stages(&self.win_path, landing_y),
            now_ms,
            &self.player.body,
        ));
    }

    /// Enter the teleport pipe. Ignored while already travelling.
    pub fn start_teleport(&mut self, now_ms: f64) {
        if self.player.abilities.teleporting {
            return;
        }
        info!("Teleport started");
        self.player.abilities.teleporting = true;
        let position = self.player.body.position().with_x(self.teleport_path.entry_x);
        self.player.body.set_position(position);
        self.emit(SimEffect::PlaySound(SoundCue::PipeDamage));
        self.player_path = Some(Sequence::begin(
            sequences::teleport_stages(&self.teleport_path),
            now_ms,
            &self.player.body,
        ));
    }
}

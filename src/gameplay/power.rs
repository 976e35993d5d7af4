//! Gameplay domain: power-level state machine, damage cooldown and one-shot latches.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PowerState {
    #[default]
    Small,
    Big,
    Fire,
    /// Defeated. Terminal.
    Ko,
    /// Reached the goal. Terminal.
    Winner,
}

/// What an accepted hit does to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    Unaffected,
    Downgraded(PowerState),
    Fatal,
}

impl PowerState {
    pub fn is_terminal(self) -> bool {
        matches!(self, PowerState::Ko | PowerState::Winner)
    }

    /// Damage moves one step toward small; small players are defeated.
    pub fn on_damage(self) -> DamageOutcome {
        match self {
            PowerState::Small => DamageOutcome::Fatal,
            PowerState::Big => DamageOutcome::Downgraded(PowerState::Small),
            PowerState::Fire => DamageOutcome::Downgraded(PowerState::Big),
            PowerState::Ko | PowerState::Winner => DamageOutcome::Unaffected,
        }
    }

    /// New state after a mushroom, if it raises the power level.
    pub fn on_mushroom(self) -> Option<PowerState> {
        match self {
            PowerState::Small => Some(PowerState::Big),
            _ => None,
        }
    }

    /// New state after a fire flower, if it raises the power level.
    pub fn on_flower(self) -> Option<PowerState> {
        match self {
            PowerState::Small | PowerState::Big => Some(PowerState::Fire),
            _ => None,
        }
    }
}

/// Invulnerability window after damage or a power-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageCooldown {
    window_ms: f64,
    last_ms: Option<f64>,
}

impl DamageCooldown {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_ms: None,
        }
    }

    /// True when no damage or power-up happened within the window.
    pub fn is_ready(&self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) => now_ms - last >= self.window_ms,
            None => true,
        }
    }

    pub fn restart(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    pub fn last_ms(&self) -> Option<f64> {
        self.last_ms
    }
}

/// Names of objects whose one-shot reaction already happened.
#[derive(Debug, Clone, Default)]
pub struct Latches {
    pub collected_items: HashSet<String>,
    pub defeated_enemies: HashSet<String>,
    pub hit_cubes: HashSet<String>,
    pub destroyed_bricks: HashSet<String>,
}

/// Record `name` in `set`. Returns false if it was already there.
pub fn latch(set: &mut HashSet<String>, name: &str) -> bool {
    if set.contains(name) {
        return false;
    }
    set.insert(name.to_string())
}

//! Combatants: the player and the enemy.
//!
//! Both sides share `Vitals` (current and max health). Health never drops
//! below 0 and never exceeds max; every mutation goes through the clamping
//! helpers here.

use serde::{Deserialize, Serialize};

use super::config::BattleConfig;
use crate::enemy::{EnemyDef, EnemyId};

/// Current and max health of one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub health: u32,
    pub max_health: u32,
}

impl Vitals {
    /// Full health at the given max.
    #[must_use]
    pub const fn full(max_health: u32) -> Self {
        Self {
            health: max_health,
            max_health,
        }
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Health as a percentage of max, in `[0, 100]`.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.max_health == 0 {
            return 0.0;
        }
        f64::from(self.health) * 100.0 / f64::from(self.max_health)
    }

    /// Lose up to `amount` health. Returns the health actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.health);
        self.health -= lost;
        lost
    }

    /// Heal up to max. Returns the health actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.max_health.min(self.health.saturating_add(amount));
        self.health - before
    }

    /// Raise max health and current health by the same amount.
    pub fn raise_max(&mut self, amount: u32) {
        self.max_health = self.max_health.saturating_add(amount);
        self.health = self.health.saturating_add(amount);
    }

    /// Set health back to max.
    pub fn restore(&mut self) {
        self.health = self.max_health;
    }
}

/// The player character.
///
/// Gold, level and experience persist between battles as part of the
/// saved progress; health and mana are reset at battle start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub vitals: Vitals,
    pub mana: u32,
    pub max_mana: u32,
    pub gold: u32,
    pub level: u32,
    pub experience: u32,
}

impl Player {
    /// A fresh level-1 player.
    #[must_use]
    pub fn new(config: &BattleConfig) -> Self {
        Self {
            vitals: Vitals::full(config.starting_health),
            mana: config.starting_mana,
            max_mana: config.starting_mana,
            gold: 0,
            level: 1,
            experience: 0,
        }
    }

    #[must_use]
    pub fn with_vitals(mut self, health: u32, max_health: u32) -> Self {
        self.vitals = Vitals { health, max_health };
        self
    }

    #[must_use]
    pub fn with_mana(mut self, mana: u32, max_mana: u32) -> Self {
        self.mana = mana;
        self.max_mana = max_mana;
        self
    }

    /// Refill mana to max.
    pub fn refill_mana(&mut self) {
        self.mana = self.max_mana;
    }

    /// Restore mana up to max. Returns mana actually restored.
    pub fn restore_mana(&mut self, amount: u32) -> u32 {
        let before = self.mana;
        self.mana = self.max_mana.min(self.mana.saturating_add(amount));
        self.mana - before
    }

    /// Raise max mana and current mana by the same amount.
    pub fn raise_max_mana(&mut self, amount: u32) {
        self.max_mana = self.max_mana.saturating_add(amount);
        self.mana = self.mana.saturating_add(amount);
    }
}

/// The opposing enemy, instantiated from an `EnemyDef`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub name: String,
    pub vitals: Vitals,
    /// Current attack stat. Enemy strength grants are folded in here.
    pub attack: u32,
}

impl Enemy {
    /// Spawn an enemy at full health.
    #[must_use]
    pub fn from_def(def: &EnemyDef) -> Self {
        Self {
            id: def.id,
            name: def.name.clone(),
            vitals: Vitals::full(def.health),
            attack: def.attack,
        }
    }
}

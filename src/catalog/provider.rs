//! Catalog provider contract.
//!
//! The engine never loads definitions itself. Whatever owns the card, enemy
//! and level data implements `Catalog`, and the battle reads through it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::enemy::{EnemyDef, EnemyId};

/// Unique identifier for a level. Levels are numbered from 1 and unlock in
/// sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LevelId(pub u32);

impl LevelId {
    /// Create a new level ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The level after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for LevelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level({})", self.0)
    }
}

/// What a level grants on victory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rewards {
    pub gold: u32,
    pub experience: u32,
    pub cards: Vec<CardId>,
}

/// Static level definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDef {
    pub id: LevelId,
    pub name: String,
    /// Enemy fought in this level.
    pub enemy: EnemyId,
    #[serde(default)]
    pub rewards: Rewards,
}

impl LevelDef {
    #[must_use]
    pub fn new(id: LevelId, name: impl Into<String>, enemy: EnemyId) -> Self {
        Self {
            id,
            name: name.into(),
            enemy,
            rewards: Rewards::default(),
        }
    }

    /// Set gold and experience rewards.
    #[must_use]
    pub fn with_rewards(mut self, gold: u32, experience: u32) -> Self {
        self.rewards.gold = gold;
        self.rewards.experience = experience;
        self
    }

    #[must_use]
    pub fn with_card_reward(mut self, card: CardId) -> Self {
        self.rewards.cards.push(card);
        self
    }
}

/// Read-only source of card, enemy and level definitions.
pub trait Catalog {
    fn card(&self, id: CardId) -> Option<&Arc<Card>>;

    fn enemy(&self, id: EnemyId) -> Option<&EnemyDef>;

    fn level(&self, id: LevelId) -> Option<&LevelDef>;

    /// The level whose encounter is `enemy`.
    fn level_for_enemy(&self, enemy: EnemyId) -> Option<&LevelDef>;

    /// Number of levels in the campaign.
    fn levels_count(&self) -> u32;

    /// Every card id, in a stable order.
    fn card_ids(&self) -> Vec<CardId>;
}

impl<T: Catalog + ?Sized> Catalog for &T {
    fn card(&self, id: CardId) -> Option<&Arc<Card>> {
        (**self).card(id)
    }

    fn enemy(&self, id: EnemyId) -> Option<&EnemyDef> {
        (**self).enemy(id)
    }

    fn level(&self, id: LevelId) -> Option<&LevelDef> {
        (**self).level(id)
    }

    fn level_for_enemy(&self, enemy: EnemyId) -> Option<&LevelDef> {
        (**self).level_for_enemy(enemy)
    }

    fn levels_count(&self) -> u32 {
        (**self).levels_count()
    }

    fn card_ids(&self) -> Vec<CardId> {
        (**self).card_ids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_id() {
        let id = LevelId::new(3);
        assert_eq!(id.raw(), 3);
        assert_eq!(id.next(), LevelId::new(4));
        assert_eq!(format!("{}", id), "Level(3)");
    }

    #[test]
    fn test_level_builder() {
        let level = LevelDef::new(LevelId::new(1), "Forest Entrance", EnemyId::new(1))
            .with_rewards(50, 20)
            .with_card_reward(CardId::new(1));

        assert_eq!(level.rewards.gold, 50);
        assert_eq!(level.rewards.experience, 20);
        assert_eq!(level.rewards.cards, vec![CardId::new(1)]);
    }
}

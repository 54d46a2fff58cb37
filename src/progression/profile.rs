//! Persistent player progress.
//!
//! `Progress` is everything that survives between battles: the player's
//! gold, level and experience, unlocked levels, card collection, equipped
//! deck, achievements and lifetime statistics.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::achievements::Achievement;
use crate::cards::{CardId, CardInstance};
use crate::catalog::{Catalog, LevelId};
use crate::core::{BattleConfig, BattleError, IdAllocator, Player};

/// Current save layout version.
pub const PROGRESS_VERSION: u32 = 1;

/// Lifetime counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub damage_dealt: u64,
    pub healing: u64,
    pub gold_earned: u64,
    pub battles_won: u64,
    pub cards_played: u64,
}

impl Statistics {
    /// Add another set of counters onto this one.
    pub fn merge(&mut self, other: &Statistics) {
        self.damage_dealt += other.damage_dealt;
        self.healing += other.healing;
        self.gold_earned += other.gold_earned;
        self.battles_won += other.battles_won;
        self.cards_played += other.cards_played;
    }
}

/// Deck-building failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProgressError {
    #[error("no unequipped copy of card {0} is owned")]
    NotOwned(CardId),

    #[error("card {0} is not equipped")]
    NotEquipped(CardId),
}

/// Saved player progress.
///
/// ## Example
///
/// ```
/// use card_battle::cards::CardId;
/// use card_battle::core::BattleConfig;
/// use card_battle::progression::Progress;
///
/// let mut progress = Progress::new(&BattleConfig::default());
/// progress.add_card(CardId::new(1));
///
/// assert!(progress.equip(CardId::new(1)).is_ok());
/// // Only one copy is owned
/// assert!(progress.equip(CardId::new(1)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub version: u32,
    pub player: Player,
    /// Levels the player may start, in unlock order.
    pub unlocked_levels: Vec<LevelId>,
    /// Card collection. Duplicates are separate copies.
    pub owned_cards: Vec<CardId>,
    /// Battle deck, drawn from the owned copies.
    pub equipped_cards: Vec<CardId>,
    pub achievements: Vec<Achievement>,
    pub stats: Statistics,
}

impl Progress {
    /// New game: level 1 player with only the first level unlocked.
    #[must_use]
    pub fn new(config: &BattleConfig) -> Self {
        Self {
            version: PROGRESS_VERSION,
            player: Player::new(config),
            unlocked_levels: vec![LevelId::new(1)],
            owned_cards: Vec::new(),
            equipped_cards: Vec::new(),
            achievements: Vec::new(),
            stats: Statistics::default(),
        }
    }

    /// Own and equip every card in `cards` (builder pattern).
    #[must_use]
    pub fn with_starter_deck(mut self, cards: impl IntoIterator<Item = CardId>) -> Self {
        for card in cards {
            self.owned_cards.push(card);
            self.equipped_cards.push(card);
        }
        self
    }

    #[must_use]
    pub fn is_unlocked(&self, level: LevelId) -> bool {
        self.unlocked_levels.contains(&level)
    }

    /// Unlock `level`. Returns false if it already was.
    pub fn unlock(&mut self, level: LevelId) -> bool {
        if self.is_unlocked(level) {
            return false;
        }
        self.unlocked_levels.push(level);
        true
    }

    pub fn add_card(&mut self, card: CardId) {
        self.owned_cards.push(card);
    }

    /// Number of distinct cards in the collection.
    #[must_use]
    pub fn distinct_cards(&self) -> usize {
        let mut ids = self.owned_cards.clone();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    #[must_use]
    pub fn has_achievement(&self, achievement: Achievement) -> bool {
        self.achievements.contains(&achievement)
    }

    /// Add an owned copy of `card` to the battle deck.
    pub fn equip(&mut self, card: CardId) -> Result<(), ProgressError> {
        let owned = self.owned_cards.iter().filter(|&&c| c == card).count();
        let equipped = self.equipped_cards.iter().filter(|&&c| c == card).count();
        if equipped >= owned {
            return Err(ProgressError::NotOwned(card));
        }
        self.equipped_cards.push(card);
        Ok(())
    }

    /// Take one copy of `card` out of the battle deck.
    pub fn unequip(&mut self, card: CardId) -> Result<(), ProgressError> {
        let index = self
            .equipped_cards
            .iter()
            .position(|&c| c == card)
            .ok_or(ProgressError::NotEquipped(card))?;
        self.equipped_cards.remove(index);
        Ok(())
    }

    /// Instantiate the equipped deck, one fresh instance per copy.
    pub fn deck_from_equipped<C: Catalog + ?Sized>(
        &self,
        catalog: &C,
        ids: &mut IdAllocator,
    ) -> Result<Vec<CardInstance>, BattleError> {
        self.equipped_cards
            .iter()
            .map(|&id| {
                let card = catalog.card(id).ok_or(BattleError::UnknownCard(id))?;
                Ok(CardInstance::new(ids.next_instance(), Arc::clone(card)))
            })
            .collect()
    }
}

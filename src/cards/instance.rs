//! Card instances - one physical copy of a card in a battle deck.
//!
//! The definition is shared behind an `Arc`, so moving an instance between
//! piles never copies card data.

use std::sync::Arc;

use super::definition::{Card, CardId, CardType};
use crate::core::entity::InstanceId;

/// A copy of a card inside a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardInstance {
    /// Unique id of this copy for the battle.
    pub id: InstanceId,

    /// Shared catalog definition.
    pub card: Arc<Card>,
}

impl CardInstance {
    #[must_use]
    pub fn new(id: InstanceId, card: Arc<Card>) -> Self {
        Self { id, card }
    }

    /// Catalog id of the underlying card.
    #[must_use]
    pub fn card_id(&self) -> CardId {
        self.card.id
    }

    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.card.card_type
    }

    #[must_use]
    pub fn mana_cost(&self) -> u32 {
        self.card.mana_cost
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.card.name
    }
}

impl std::fmt::Display for CardInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.card.name, self.id)
    }
}

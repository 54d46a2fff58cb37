//! Player action records.
//!
//! Every accepted player input is appended to the battle history, in the
//! order it was applied. Together with the RNG seed this is enough to
//! replay a battle.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use crate::cards::CardId;

/// An accepted player input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleAction {
    /// Played the hand card at `index`.
    PlayCard {
        index: usize,
        card: CardId,
        instance: InstanceId,
    },
    /// Discarded the hand card at `index` without playing it.
    Discard {
        index: usize,
        card: CardId,
        instance: InstanceId,
    },
    /// Ended the turn, explicitly or because no play was left.
    EndTurn { automatic: bool },
}

/// A recorded action with the turn it happened on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Turn number the action was taken on.
    pub turn: u32,

    /// The action that was applied.
    pub action: BattleAction,
}

impl ActionRecord {
    #[must_use]
    pub fn new(turn: u32, action: BattleAction) -> Self {
        Self { turn, action }
    }
}

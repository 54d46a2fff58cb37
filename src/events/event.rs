//! Battle event types.
//!
//! Every transition returns the ordered list of events it produced. The
//! engine never waits on observers: presentation layers replay the list at
//! whatever pace they like.

use serde::{Deserialize, Serialize};

use crate::battle::Outcome;
use crate::cards::CardId;
use crate::catalog::LevelId;
use crate::core::{EffectId, InstanceId, Side};
use crate::effects::{EffectKind, StatusEffect};
use crate::enemy::EnemyAction;
use crate::progression::Achievement;

/// What caused a health loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageKind {
    /// A card or enemy attack through the full pipeline.
    Attack,
    /// Per-turn tick of a damage-over-time effect.
    Tick(EffectKind),
    /// Counter damage from thorns.
    Thorns,
    /// Counter damage from reflect.
    Reflect,
    /// Unmitigated card bonus damage.
    Bonus,
    /// Enemy execute below the health threshold.
    Execute,
}

/// A semantic event emitted by a battle transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BattleEvent {
    TurnStarted { side: Side, turn: u32 },
    TurnEnded { side: Side },
    /// The side was stunned and loses this turn.
    TurnSkipped { side: Side },

    CardDrawn { card: CardId, instance: InstanceId },
    /// Discard pile shuffled back into an empty draw pile.
    PileRecycled { cards: usize },
    CardPlayed { card: CardId, instance: InstanceId, mana_spent: u32 },
    CardDiscarded { card: CardId, instance: InstanceId },
    /// Hand replaced by random catalog cards.
    HandTransformed { cards: Vec<CardId> },

    DamageDealt {
        source: Side,
        target: Side,
        amount: u32,
        absorbed: u32,
        kind: DamageKind,
    },
    Healed { target: Side, amount: u32 },
    ManaChanged { mana: u32, max_mana: u32 },
    MaxHealthChanged { target: Side, max_health: u32 },
    EnemyAttackChanged { attack: u32 },

    EffectApplied { effect: StatusEffect },
    EffectExpired { id: EffectId, kind: EffectKind, target: Side },
    /// A one-shot effect used up by a rule (shield broken, stun spent).
    EffectConsumed { id: EffectId, kind: EffectKind, target: Side },

    EnemyActed { action: EnemyAction },

    GoldGained { amount: u32 },
    ExperienceGained { amount: u32 },
    LeveledUp { level: u32, max_health: u32, max_mana: u32 },
    LevelUnlocked { level: LevelId },
    CardRewarded { card: CardId },
    AchievementUnlocked { achievement: Achievement },
    ProgressSaved { success: bool },

    BattleEnded { outcome: Outcome },
}

impl BattleEvent {
    /// Health lost by `target`, if this is a damage event.
    #[must_use]
    pub fn damage_to(&self, side: Side) -> Option<u32> {
        match self {
            BattleEvent::DamageDealt { target, amount, .. } if *target == side => Some(*amount),
            _ => None,
        }
    }
}

//! Status effect definitions.
//!
//! Status effects are timed modifiers on one side of the battle. Each kind
//! declares how it behaves when its owner's turn starts:
//!
//! ## Per-turn effects
//!
//! - `Poison`, `Burn`, `Bleed`: lose `value` health
//! - `Regeneration`: heal `value` health
//!
//! ## Reactive effects
//!
//! Read on demand by the damage pipeline or card resolution:
//! - `Shield`: absorbs incoming damage, consumed as it absorbs
//! - `Thorns`: flat counter damage to the attacker
//! - `Reflect`: percentage counter damage to the attacker
//! - `Weakness`: flat reduction of outgoing damage
//! - `Strength`: flat bonus to outgoing damage (enemy: folded into attack)
//! - `DoubleNext`: doubles the next attack card, then consumed
//!
//! ## Turn gates
//!
//! - `Stun`: the afflicted side loses its next turn
//! - `Disarm`: the afflicted side cannot play attack cards

use serde::{Deserialize, Serialize};

use crate::core::{EffectId, Side};

/// Kind of a status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    Poison,
    Burn,
    Bleed,
    Regeneration,
    Shield,
    Thorns,
    Reflect,
    Weakness,
    Strength,
    DoubleNext,
    Stun,
    Disarm,
}

/// What an effect does at its owner's turn-start tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickBehavior {
    /// Lose `value` health.
    Damage,
    /// Heal `value` health.
    Heal,
    /// Nothing; read on demand elsewhere.
    Reactive,
    /// Nothing; checked by the turn machine or card gate.
    TurnGate,
}

impl EffectKind {
    #[must_use]
    pub const fn tick_behavior(self) -> TickBehavior {
        match self {
            EffectKind::Poison | EffectKind::Burn | EffectKind::Bleed => TickBehavior::Damage,
            EffectKind::Regeneration => TickBehavior::Heal,
            EffectKind::Shield
            | EffectKind::Thorns
            | EffectKind::Reflect
            | EffectKind::Weakness
            | EffectKind::Strength
            | EffectKind::DoubleNext => TickBehavior::Reactive,
            EffectKind::Stun | EffectKind::Disarm => TickBehavior::TurnGate,
        }
    }

    /// Whether the effect hurts the side it is placed on.
    ///
    /// Harmful effects are granted to the opponent of the granting side,
    /// helpful ones to the granting side itself.
    #[must_use]
    pub const fn is_harmful(self) -> bool {
        matches!(
            self,
            EffectKind::Poison
                | EffectKind::Burn
                | EffectKind::Bleed
                | EffectKind::Weakness
                | EffectKind::Stun
                | EffectKind::Disarm
        )
    }

    /// Side an effect granted by `source` lands on.
    #[must_use]
    pub const fn target_for(self, source: Side) -> Side {
        if self.is_harmful() {
            source.opponent()
        } else {
            source
        }
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EffectKind::Poison => "poison",
            EffectKind::Burn => "burn",
            EffectKind::Bleed => "bleed",
            EffectKind::Regeneration => "regeneration",
            EffectKind::Shield => "shield",
            EffectKind::Thorns => "thorns",
            EffectKind::Reflect => "reflect",
            EffectKind::Weakness => "weakness",
            EffectKind::Strength => "strength",
            EffectKind::DoubleNext => "double_next",
            EffectKind::Stun => "stun",
            EffectKind::Disarm => "disarm",
        };
        f.write_str(name)
    }
}

/// One granted status effect.
///
/// `source` decides whose turn ticks it; `target` is the side it acts on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub id: EffectId,
    pub kind: EffectKind,
    pub value: u32,
    /// Remaining turns. Always > 0 while the effect is active.
    pub duration: u32,
    pub source: Side,
    pub target: Side,
}

impl StatusEffect {
    #[must_use]
    pub fn new(id: EffectId, kind: EffectKind, value: u32, duration: u32, source: Side, target: Side) -> Self {
        Self {
            id,
            kind,
            value,
            duration,
            source,
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_behavior() {
        assert_eq!(EffectKind::Poison.tick_behavior(), TickBehavior::Damage);
        assert_eq!(EffectKind::Bleed.tick_behavior(), TickBehavior::Damage);
        assert_eq!(EffectKind::Regeneration.tick_behavior(), TickBehavior::Heal);
        assert_eq!(EffectKind::Shield.tick_behavior(), TickBehavior::Reactive);
        assert_eq!(EffectKind::Stun.tick_behavior(), TickBehavior::TurnGate);
    }

    #[test]
    fn test_targeting() {
        assert_eq!(EffectKind::Poison.target_for(Side::Player), Side::Enemy);
        assert_eq!(EffectKind::Disarm.target_for(Side::Enemy), Side::Player);
        assert_eq!(EffectKind::Shield.target_for(Side::Enemy), Side::Enemy);
        assert_eq!(EffectKind::Strength.target_for(Side::Player), Side::Player);
    }

    #[test]
    fn test_display_matches_serde() {
        for kind in [EffectKind::DoubleNext, EffectKind::Regeneration, EffectKind::Stun] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }
}

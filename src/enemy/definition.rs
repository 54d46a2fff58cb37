//! Enemy definitions - static enemy data and behaviour scripts.
//!
//! An enemy acts once per turn. What it does is decided by its
//! `EnemyBehavior`:
//! - `Basic`: always a plain attack with its attack stat
//! - `Conditional`: a uniform pick among the actions whose condition holds
//! - `Pattern`: a fixed cycle indexed by the turn counter
//!
//! Every action kind carries only the fields it needs; omitted magnitudes
//! fall back to the defaults documented on each variant.

use serde::{Deserialize, Serialize};

use crate::effects::EffectKind;

/// Unique identifier for an enemy definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

impl EnemyId {
    /// Create a new enemy ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Enemy({})", self.0)
    }
}

/// Status rider attached to an enemy attack, landing on the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiderKind {
    /// 2 per turn for 3 turns.
    Poison,
    /// -1 damage for 2 turns.
    Weakness,
    /// 2 per turn for 3 turns.
    Burn,
    /// 1 per turn for 3 turns.
    Bleed,
    /// Player loses the next turn.
    Stun,
}

/// Self buff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuffKind {
    /// +2 attack for 2 turns.
    Strength,
    /// 5 shield for 1 turn.
    Shield,
    /// Heal 3 per turn for 3 turns.
    Regeneration,
    /// 2 thorns for 2 turns.
    Thorns,
}

/// Debuff placed on the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebuffKind {
    /// -2 damage for 2 turns.
    Weakness,
    /// 2 per turn for 3 turns.
    Poison,
    /// 3 per turn for 2 turns.
    Burn,
    /// No attack cards for 1 turn.
    Disarm,
}

/// Status kind plus default value and duration.
pub type StatusDefaults = (EffectKind, u32, u32);

impl RiderKind {
    #[must_use]
    pub const fn defaults(self) -> StatusDefaults {
        match self {
            RiderKind::Poison => (EffectKind::Poison, 2, 3),
            RiderKind::Weakness => (EffectKind::Weakness, 1, 2),
            RiderKind::Burn => (EffectKind::Burn, 2, 3),
            RiderKind::Bleed => (EffectKind::Bleed, 1, 3),
            RiderKind::Stun => (EffectKind::Stun, 0, 1),
        }
    }
}

impl BuffKind {
    #[must_use]
    pub const fn defaults(self) -> StatusDefaults {
        match self {
            BuffKind::Strength => (EffectKind::Strength, 2, 2),
            BuffKind::Shield => (EffectKind::Shield, 5, 1),
            BuffKind::Regeneration => (EffectKind::Regeneration, 3, 3),
            BuffKind::Thorns => (EffectKind::Thorns, 2, 2),
        }
    }
}

impl DebuffKind {
    #[must_use]
    pub const fn defaults(self) -> StatusDefaults {
        match self {
            DebuffKind::Weakness => (EffectKind::Weakness, 2, 2),
            DebuffKind::Poison => (EffectKind::Poison, 2, 3),
            DebuffKind::Burn => (EffectKind::Burn, 3, 2),
            DebuffKind::Disarm => (EffectKind::Disarm, 0, 1),
        }
    }
}

/// Status rider with optional overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rider {
    pub kind: RiderKind,
    #[serde(default)]
    pub value: Option<u32>,
    #[serde(default)]
    pub duration: Option<u32>,
}

/// Named special abilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum SpecialAction {
    /// `count` hits (default 3) of `value` each (default attack / count).
    MultiAttack {
        #[serde(default)]
        count: Option<u32>,
        #[serde(default)]
        value: Option<u32>,
    },
    /// Calls help: attack permanently rises by `value` (default 3).
    Summon {
        #[serde(default)]
        value: Option<u32>,
    },
    /// Attack for `value` (default attack), heal `percent` (default 50) of it.
    LifeSteal {
        #[serde(default)]
        value: Option<u32>,
        #[serde(default)]
        percent: Option<u32>,
    },
    /// Drop the player to 0 when at or under `threshold` percent health
    /// (default 30); plain attack otherwise.
    Execute {
        #[serde(default)]
        threshold: Option<u32>,
    },
    /// Player discards `count` random hand cards (default 1).
    Disrupt {
        #[serde(default)]
        count: Option<u32>,
    },
}

/// One enemy action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EnemyAction {
    /// Hit for `value` (default: attack stat), then apply the rider.
    Attack {
        #[serde(default)]
        value: Option<u32>,
        #[serde(default)]
        rider: Option<Rider>,
    },
    /// Heal `value` (default 10).
    Heal {
        #[serde(default)]
        value: Option<u32>,
    },
    Buff {
        buff: BuffKind,
        #[serde(default)]
        value: Option<u32>,
        #[serde(default)]
        duration: Option<u32>,
    },
    Debuff {
        debuff: DebuffKind,
        #[serde(default)]
        value: Option<u32>,
        #[serde(default)]
        duration: Option<u32>,
    },
    Special { special: SpecialAction },
}

impl EnemyAction {
    /// Plain attack with the current attack stat.
    pub const BASIC_ATTACK: EnemyAction = EnemyAction::Attack {
        value: None,
        rider: None,
    };
}

/// Guard on a conditioned action. Percentages are of max health.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Condition {
    /// Enemy health strictly under this percentage.
    HealthBelow(u32),
    /// Enemy health strictly over this percentage.
    HealthAbove(u32),
    /// Player health strictly under this percentage.
    PlayerHealthBelow(u32),
    /// Turn counter at least this value.
    TurnCount(u32),
    /// Passes with this probability, rolled each time it is checked.
    Random(f64),
}

/// An action guarded by an optional condition. No condition always passes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConditionedAction {
    #[serde(default)]
    pub condition: Option<Condition>,
    pub action: EnemyAction,
}

impl ConditionedAction {
    #[must_use]
    pub fn always(action: EnemyAction) -> Self {
        Self {
            condition: None,
            action,
        }
    }

    #[must_use]
    pub fn when(condition: Condition, action: EnemyAction) -> Self {
        Self {
            condition: Some(condition),
            action,
        }
    }
}

/// How an enemy picks its action.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "actions", rename_all = "snake_case")]
pub enum EnemyBehavior {
    #[default]
    Basic,
    Conditional(Vec<ConditionedAction>),
    Pattern(Vec<EnemyAction>),
}

/// Static enemy definition.
///
/// ## Example
///
/// ```
/// use card_battle::enemy::{EnemyAction, EnemyBehavior, EnemyDef, EnemyId};
///
/// let golem = EnemyDef::new(EnemyId::new(2), "Rock Golem", 50, 8)
///     .with_behavior(EnemyBehavior::Pattern(vec![
///         EnemyAction::BASIC_ATTACK,
///         EnemyAction::Heal { value: None },
///     ]));
///
/// assert_eq!(golem.health, 50);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyDef {
    pub id: EnemyId,
    pub name: String,
    pub health: u32,
    pub attack: u32,
    #[serde(default)]
    pub behavior: EnemyBehavior,
    #[serde(default)]
    pub description: String,
}

impl EnemyDef {
    /// Create an enemy that only ever attacks.
    #[must_use]
    pub fn new(id: EnemyId, name: impl Into<String>, health: u32, attack: u32) -> Self {
        Self {
            id,
            name: name.into(),
            health,
            attack,
            behavior: EnemyBehavior::Basic,
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_behavior(mut self, behavior: EnemyBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_id() {
        assert_eq!(format!("{}", EnemyId::new(4)), "Enemy(4)");
        assert_eq!(EnemyId::new(4).raw(), 4);
    }

    #[test]
    fn test_defaults_tables() {
        assert_eq!(RiderKind::Stun.defaults(), (EffectKind::Stun, 0, 1));
        assert_eq!(BuffKind::Shield.defaults(), (EffectKind::Shield, 5, 1));
        assert_eq!(DebuffKind::Burn.defaults(), (EffectKind::Burn, 3, 2));
    }

    #[test]
    fn test_basic_behavior_by_default() {
        let json = r#"{ "id": 1, "name": "Goblin", "health": 30, "attack": 5 }"#;
        let def: EnemyDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.behavior, EnemyBehavior::Basic);
    }

    #[test]
    fn test_conditional_json() {
        let json = r#"{
            "id": 3, "name": "Fire Spirit", "health": 40, "attack": 12,
            "behavior": { "mode": "conditional", "actions": [
                { "action": { "type": "attack", "rider": { "kind": "burn" } } },
                { "condition": { "type": "health_below", "value": 50 },
                  "action": { "type": "heal", "value": 8 } },
                { "condition": { "type": "random", "value": 0.25 },
                  "action": { "type": "special", "special": { "name": "multi_attack", "count": 2 } } }
            ] }
        }"#;

        let def: EnemyDef = serde_json::from_str(json).unwrap();
        let EnemyBehavior::Conditional(actions) = def.behavior else {
            panic!("expected conditional behavior");
        };

        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0].condition, None);
        assert_eq!(actions[1].condition, Some(Condition::HealthBelow(50)));
        assert_eq!(actions[1].action, EnemyAction::Heal { value: Some(8) });
        assert_eq!(
            actions[2].action,
            EnemyAction::Special {
                special: SpecialAction::MultiAttack { count: Some(2), value: None }
            }
        );
    }
}

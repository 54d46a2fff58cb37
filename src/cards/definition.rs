//! Card definitions - static card data.
//!
//! `Card` holds the immutable properties of a catalog card. For example,
//! "Poison Blade" costs 2 mana, deals 4 damage and poisons the target;
//! these are part of the definition.
//!
//! Which copy of a card sits in which pile is tracked separately by
//! `CardInstance`.

use serde::{Deserialize, Serialize};

use crate::effects::EffectKind;

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The four card families. Each resolves its primary value differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    /// Deals `value` damage to the enemy.
    Attack,
    /// Grants a shield of `value`.
    Defense,
    /// Self-targeted utility, selected by the effect tag.
    Skill,
    /// Resource and deck manipulation, selected by the effect tag.
    Item,
}

/// Effect tag of a card.
///
/// Each tag belongs to exactly one card type; see [`CardEffect::card_type`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardEffect {
    // Attack riders, granted to the enemy after the hit
    Poison,
    Weakness,
    Burn,
    Bleed,
    Stun,

    // Defense riders
    Thorns,
    Regeneration,
    Reflect,
    Fortify,

    // Skills
    Heal,
    Draw,
    Strength,
    Mana,
    Weaken,
    DoubleNext,

    // Items
    Gold,
    MaxHealth,
    MaxMana,
    Transform,
}

impl CardEffect {
    /// The card type this tag is meaningful on.
    #[must_use]
    pub const fn card_type(self) -> CardType {
        use CardEffect::*;
        match self {
            Poison | Weakness | Burn | Bleed | Stun => CardType::Attack,
            Thorns | Regeneration | Reflect | Fortify => CardType::Defense,
            Heal | Draw | Strength | Mana | Weaken | DoubleNext => CardType::Skill,
            Gold | MaxHealth | MaxMana | Transform => CardType::Item,
        }
    }

    /// Status effect granted by a rider tag, with its default value and
    /// duration. `None` for tags that do not grant a status.
    #[must_use]
    pub const fn rider(self) -> Option<(EffectKind, u32, u32)> {
        match self {
            CardEffect::Poison => Some((EffectKind::Poison, 2, 3)),
            CardEffect::Weakness => Some((EffectKind::Weakness, 1, 2)),
            CardEffect::Burn => Some((EffectKind::Burn, 2, 3)),
            CardEffect::Bleed => Some((EffectKind::Bleed, 1, 3)),
            CardEffect::Stun => Some((EffectKind::Stun, 0, 1)),
            CardEffect::Thorns => Some((EffectKind::Thorns, 1, 2)),
            CardEffect::Regeneration => Some((EffectKind::Regeneration, 2, 3)),
            CardEffect::Reflect => Some((EffectKind::Reflect, 50, 1)),
            _ => None,
        }
    }
}

/// A secondary grant resolved after the card's primary effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardBonus {
    /// Unmitigated damage to the enemy.
    Damage { value: u32 },
    Heal { value: u32 },
    Shield {
        value: u32,
        #[serde(default)]
        duration: Option<u32>,
    },
    Draw { count: u32 },
    Mana { value: u32 },
    /// Any status effect. Harmful kinds land on the enemy, the rest on the
    /// player.
    Status {
        kind: EffectKind,
        value: u32,
        duration: u32,
    },
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use card_battle::cards::{Card, CardEffect, CardId, CardType};
///
/// let blade = Card::new(CardId::new(4), "Poison Blade", CardType::Attack, 2, 4)
///     .with_effect(CardEffect::Poison);
///
/// assert_eq!(blade.mana_cost, 2);
/// assert_eq!(blade.effect, Some(CardEffect::Poison));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    pub name: String,

    #[serde(rename = "type")]
    pub card_type: CardType,

    pub mana_cost: u32,

    /// Primary magnitude: damage, shield, heal amount, gold, and so on.
    #[serde(default)]
    pub value: u32,

    /// Duration of the primary status (defense shields). Defaults to 1.
    #[serde(default)]
    pub duration: Option<u32>,

    #[serde(default)]
    pub effect: Option<CardEffect>,

    /// Overrides the effect tag's default magnitude.
    #[serde(default)]
    pub effect_value: Option<u32>,

    /// Overrides the effect tag's default duration.
    #[serde(default)]
    pub effect_duration: Option<u32>,

    #[serde(default)]
    pub bonuses: Vec<CardBonus>,

    #[serde(default)]
    pub description: String,
}

impl Card {
    /// Create a card with no effect tag.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        card_type: CardType,
        mana_cost: u32,
        value: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            card_type,
            mana_cost,
            value,
            duration: None,
            effect: None,
            effect_value: None,
            effect_duration: None,
            bonuses: Vec::new(),
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Override the effect tag's magnitude and duration.
    #[must_use]
    pub fn with_effect_params(mut self, value: Option<u32>, duration: Option<u32>) -> Self {
        self.effect_value = value;
        self.effect_duration = duration;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn with_bonus(mut self, bonus: CardBonus) -> Self {
        self.bonuses.push(bonus);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Primary value, or `default` when the card leaves it at 0.
    #[must_use]
    pub fn value_or(&self, default: u32) -> u32 {
        if self.value == 0 {
            default
        } else {
            self.value
        }
    }

    #[must_use]
    pub fn is_attack(&self) -> bool {
        self.card_type == CardType::Attack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_effect_card_types() {
        assert_eq!(CardEffect::Poison.card_type(), CardType::Attack);
        assert_eq!(CardEffect::Fortify.card_type(), CardType::Defense);
        assert_eq!(CardEffect::DoubleNext.card_type(), CardType::Skill);
        assert_eq!(CardEffect::Transform.card_type(), CardType::Item);
    }

    #[test]
    fn test_rider_defaults() {
        assert_eq!(CardEffect::Poison.rider(), Some((EffectKind::Poison, 2, 3)));
        assert_eq!(CardEffect::Reflect.rider(), Some((EffectKind::Reflect, 50, 1)));
        assert_eq!(CardEffect::Fortify.rider(), None);
        assert_eq!(CardEffect::Heal.rider(), None);
    }

    #[test]
    fn test_value_or() {
        let draw = Card::new(CardId::new(1), "Draw", CardType::Skill, 1, 0)
            .with_effect(CardEffect::Draw);
        assert_eq!(draw.value_or(1), 1);

        let draw_two = Card::new(CardId::new(2), "Draw Two", CardType::Skill, 1, 2);
        assert_eq!(draw_two.value_or(1), 2);
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "id": 4,
            "name": "Poison Blade",
            "type": "attack",
            "mana_cost": 2,
            "value": 4,
            "effect": "poison",
            "bonuses": [{ "type": "status", "kind": "weakness", "value": 1, "duration": 2 }]
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.card_type, CardType::Attack);
        assert_eq!(card.effect, Some(CardEffect::Poison));
        assert_eq!(card.effect_value, None);
        assert_eq!(
            card.bonuses,
            vec![CardBonus::Status { kind: EffectKind::Weakness, value: 1, duration: 2 }]
        );
    }
}

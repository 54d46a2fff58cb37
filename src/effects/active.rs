//! Active effect collection.
//!
//! Holds every status effect in play on both sides, in grant order. Grant
//! order is the tick order and the shield absorption order, so it is
//! preserved across removals.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::status::{EffectKind, StatusEffect};
use crate::core::{EffectId, Side};

/// Status effects in play, in insertion order.
///
/// ## Example
///
/// ```
/// use card_battle::core::{EffectId, Side};
/// use card_battle::effects::{ActiveEffects, EffectKind, StatusEffect};
///
/// let mut effects = ActiveEffects::new();
/// effects.push(StatusEffect::new(EffectId(0), EffectKind::Weakness, 2, 2, Side::Enemy, Side::Player));
/// effects.push(StatusEffect::new(EffectId(1), EffectKind::Weakness, 1, 1, Side::Enemy, Side::Player));
///
/// // Instances of one kind coexist and stack
/// assert_eq!(effects.total(Side::Player, EffectKind::Weakness), 3);
/// assert_eq!(effects.total(Side::Enemy, EffectKind::Weakness), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffects {
    effects: Vector<StatusEffect>,
}

impl ActiveEffects {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    /// Add an effect after all existing ones.
    pub fn push(&mut self, effect: StatusEffect) {
        self.effects.push_back(effect);
    }

    /// Effects acting on `target`, in grant order.
    pub fn on(&self, target: Side) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter().filter(move |e| e.target == target)
    }

    /// Effects of one kind acting on `target`, in grant order.
    pub fn of_kind(&self, target: Side, kind: EffectKind) -> impl Iterator<Item = &StatusEffect> {
        self.on(target).filter(move |e| e.kind == kind)
    }

    #[must_use]
    pub fn has(&self, target: Side, kind: EffectKind) -> bool {
        self.of_kind(target, kind).next().is_some()
    }

    /// Whether `target` holds an effect of `kind` granted by `source`.
    #[must_use]
    pub fn has_from(&self, target: Side, kind: EffectKind, source: Side) -> bool {
        self.of_kind(target, kind).any(|e| e.source == source)
    }

    /// Sum of values of all effects of one kind on `target`.
    #[must_use]
    pub fn total(&self, target: Side, kind: EffectKind) -> u32 {
        self.of_kind(target, kind).fold(0u32, |acc, e| acc.saturating_add(e.value))
    }

    /// Ids of effects ticked on `source`'s turn, in grant order.
    #[must_use]
    pub fn ids_from(&self, source: Side) -> Vec<EffectId> {
        self.effects
            .iter()
            .filter(|e| e.source == source)
            .map(|e| e.id)
            .collect()
    }

    /// Ids of effects of one kind on `target`, in grant order.
    #[must_use]
    pub fn ids_of_kind(&self, target: Side, kind: EffectKind) -> Vec<EffectId> {
        self.of_kind(target, kind).map(|e| e.id).collect()
    }

    fn position(&self, id: EffectId) -> Option<usize> {
        self.effects.iter().position(|e| e.id == id)
    }

    #[must_use]
    pub fn get(&self, id: EffectId) -> Option<&StatusEffect> {
        self.position(id).and_then(|i| self.effects.get(i))
    }

    pub fn get_mut(&mut self, id: EffectId) -> Option<&mut StatusEffect> {
        let index = self.position(id)?;
        self.effects.get_mut(index)
    }

    /// Remove an effect by id.
    pub fn remove(&mut self, id: EffectId) -> Option<StatusEffect> {
        let index = self.position(id)?;
        Some(self.effects.remove(index))
    }

    /// Remove and return the oldest effect of `kind` on `target` granted by
    /// `source`.
    pub fn take_first(&mut self, target: Side, kind: EffectKind, source: Side) -> Option<StatusEffect> {
        let id = self
            .of_kind(target, kind)
            .find(|e| e.source == source)
            .map(|e| e.id)?;
        self.remove(id)
    }

    /// Decrement an effect's duration by one turn. Returns the remaining
    /// duration, or `None` if the effect is gone.
    pub fn decrement(&mut self, id: EffectId) -> Option<u32> {
        let effect = self.get_mut(id)?;
        effect.duration = effect.duration.saturating_sub(1);
        Some(effect.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(id: u32, kind: EffectKind, value: u32, source: Side, target: Side) -> StatusEffect {
        StatusEffect::new(EffectId(id), kind, value, 2, source, target)
    }

    #[test]
    fn test_insertion_order_survives_removal() {
        let mut effects = ActiveEffects::new();
        effects.push(effect(0, EffectKind::Shield, 5, Side::Player, Side::Player));
        effects.push(effect(1, EffectKind::Poison, 2, Side::Player, Side::Enemy));
        effects.push(effect(2, EffectKind::Shield, 3, Side::Player, Side::Player));

        effects.remove(EffectId(1));
        assert_eq!(effects.ids_from(Side::Player), vec![EffectId(0), EffectId(2)]);
        assert_eq!(
            effects.ids_of_kind(Side::Player, EffectKind::Shield),
            vec![EffectId(0), EffectId(2)]
        );
    }

    #[test]
    fn test_source_and_target_are_separate() {
        let mut effects = ActiveEffects::new();
        effects.push(effect(0, EffectKind::Poison, 2, Side::Player, Side::Enemy));

        assert!(effects.has(Side::Enemy, EffectKind::Poison));
        assert!(!effects.has(Side::Player, EffectKind::Poison));
        assert!(effects.has_from(Side::Enemy, EffectKind::Poison, Side::Player));
        assert!(!effects.has_from(Side::Enemy, EffectKind::Poison, Side::Enemy));
        assert_eq!(effects.ids_from(Side::Enemy), Vec::<EffectId>::new());
    }

    #[test]
    fn test_take_first() {
        let mut effects = ActiveEffects::new();
        effects.push(effect(0, EffectKind::Stun, 0, Side::Player, Side::Enemy));
        effects.push(effect(1, EffectKind::Stun, 0, Side::Player, Side::Enemy));

        let taken = effects.take_first(Side::Enemy, EffectKind::Stun, Side::Player).unwrap();
        assert_eq!(taken.id, EffectId(0));
        assert_eq!(effects.len(), 1);
        assert!(effects.take_first(Side::Enemy, EffectKind::Stun, Side::Enemy).is_none());
    }

    #[test]
    fn test_decrement() {
        let mut effects = ActiveEffects::new();
        effects.push(effect(0, EffectKind::Burn, 3, Side::Enemy, Side::Player));

        assert_eq!(effects.decrement(EffectId(0)), Some(1));
        assert_eq!(effects.decrement(EffectId(0)), Some(0));
        assert_eq!(effects.decrement(EffectId(7)), None);
    }
}

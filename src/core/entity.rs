//! Runtime identifiers for battle objects.
//!
//! Two kinds of objects are created while a battle runs:
//! - Card instances: one per copy of a card in the deck
//! - Status effects: one per grant, never reused
//!
//! Both are numbered by a single `IdAllocator` owned by the battle, so ids
//! are unique for the battle's lifetime and stable across snapshots.
//!
//! ## Usage
//!
//! ```
//! use card_battle::core::IdAllocator;
//!
//! let mut ids = IdAllocator::new();
//! let first = ids.next_instance();
//! let second = ids.next_instance();
//! assert_ne!(first, second);
//!
//! let effect = ids.next_effect();
//! assert_eq!(effect.raw(), 0);
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of one physical copy of a card within a battle.
///
/// Two copies of "Strike" share a `CardId` but have distinct `InstanceId`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
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

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// Identifier of a single status effect grant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectId(pub u32);

impl EffectId {
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

impl std::fmt::Display for EffectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Effect({})", self.0)
    }
}

/// Monotonic id source for card instances and effects.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IdAllocator {
    next_instance: u32,
    next_effect: u32,
}

impl IdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh card instance id.
    pub fn next_instance(&mut self) -> InstanceId {
        let id = InstanceId(self.next_instance);
        self.next_instance += 1;
        id
    }

    /// Allocate a fresh effect id.
    pub fn next_effect(&mut self) -> EffectId {
        let id = EffectId(self.next_effect);
        self.next_effect += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instances_are_sequential() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_instance(), InstanceId(0));
        assert_eq!(ids.next_instance(), InstanceId(1));
        assert_eq!(ids.next_instance(), InstanceId(2));
    }

    #[test]
    fn test_streams_are_independent() {
        let mut ids = IdAllocator::new();
        ids.next_instance();
        ids.next_instance();

        // Effect numbering does not advance with instances
        assert_eq!(ids.next_effect(), EffectId(0));
        assert_eq!(ids.next_instance(), InstanceId(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", InstanceId(7)), "Instance(7)");
        assert_eq!(format!("{}", EffectId(42)), "Effect(42)");
    }

    #[test]
    fn test_serialization() {
        let id = EffectId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: EffectId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

//! Battle configuration.
//!
//! `BattleConfig` holds the tunable numbers of the combat rules that are not
//! part of any card, enemy or level definition:
//! - Hand size the draw step refills to
//! - Starting vitals of a fresh player profile
//! - Level-up thresholds and growth
//!
//! Configs deserialize with every field optional, so a JSON file only needs
//! to name what it changes:
//!
//! ```
//! use card_battle::core::BattleConfig;
//!
//! let config: BattleConfig = serde_json::from_str(r#"{ "hand_size": 6 }"#).unwrap();
//! assert_eq!(config.hand_size, 6);
//! assert_eq!(config.starting_health, 100);
//! ```

use serde::{Deserialize, Serialize};

/// Tunable combat and progression numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Cards in hand after the turn-start draw.
    pub hand_size: usize,

    /// Max health of a new player profile.
    pub starting_health: u32,

    /// Max mana of a new player profile.
    pub starting_mana: u32,

    /// Experience needed per level: `level * experience_per_level`.
    pub experience_per_level: u32,

    /// Max health gained on each level-up.
    pub health_per_level: u32,

    /// Max mana gained on each level-up.
    pub mana_per_level: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            starting_health: 100,
            starting_mana: 3,
            experience_per_level: 100,
            health_per_level: 10,
            mana_per_level: 1,
        }
    }
}

impl BattleConfig {
    /// Create a configuration with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hand size the draw step refills to.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set starting health and mana for new profiles.
    #[must_use]
    pub fn with_starting_vitals(mut self, health: u32, mana: u32) -> Self {
        self.starting_health = health;
        self.starting_mana = mana;
        self
    }

    /// Set the level curve: experience per level and growth per level-up.
    #[must_use]
    pub fn with_level_curve(mut self, experience: u32, health: u32, mana: u32) -> Self {
        self.experience_per_level = experience;
        self.health_per_level = health;
        self.mana_per_level = mana;
        self
    }

    /// Experience required to advance from `level` to the next one.
    #[must_use]
    pub fn experience_for_level(&self, level: u32) -> u32 {
        level.saturating_mul(self.experience_per_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BattleConfig::default();
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.starting_health, 100);
        assert_eq!(config.starting_mana, 3);
        assert_eq!(config.experience_for_level(1), 100);
        assert_eq!(config.experience_for_level(3), 300);
    }

    #[test]
    fn test_builder() {
        let config = BattleConfig::new()
            .with_hand_size(7)
            .with_starting_vitals(80, 4)
            .with_level_curve(50, 5, 2);

        assert_eq!(config.hand_size, 7);
        assert_eq!(config.starting_health, 80);
        assert_eq!(config.starting_mana, 4);
        assert_eq!(config.experience_for_level(2), 100);
        assert_eq!(config.health_per_level, 5);
        assert_eq!(config.mana_per_level, 2);
    }

    #[test]
    fn test_partial_json() {
        let config: BattleConfig =
            serde_json::from_str(r#"{ "experience_per_level": 10 }"#).unwrap();
        assert_eq!(config.experience_per_level, 10);
        assert_eq!(config.hand_size, 5);
    }
}

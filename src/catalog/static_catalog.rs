//! In-memory catalog.
//!
//! `StaticCatalog` stores definitions in hash maps for fast lookup by id. It
//! can be assembled with builder calls or loaded from one JSON document:
//!
//! ```json
//! { "cards": [...], "enemies": [...], "levels": [...] }
//! ```

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::provider::{Catalog, LevelDef, LevelId};
use crate::cards::{Card, CardId};
use crate::enemy::{EnemyDef, EnemyId};

/// Errors raised while loading catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("card {0} is defined twice")]
    DuplicateCard(CardId),

    #[error("enemy {0} is defined twice")]
    DuplicateEnemy(EnemyId),

    #[error("level {0} is defined twice")]
    DuplicateLevel(LevelId),

    #[error("level {level} references unknown enemy {enemy}")]
    MissingEnemy { level: LevelId, enemy: EnemyId },
}

/// Serialized shape of a catalog document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogData {
    pub cards: Vec<Card>,
    pub enemies: Vec<EnemyDef>,
    pub levels: Vec<LevelDef>,
}

/// Catalog held entirely in memory.
///
/// ## Example
///
/// ```
/// use card_battle::cards::{Card, CardId, CardType};
/// use card_battle::catalog::{Catalog, StaticCatalog};
///
/// let catalog = StaticCatalog::new()
///     .with_card(Card::new(CardId::new(1), "Strike", CardType::Attack, 1, 6));
///
/// assert_eq!(catalog.card(CardId::new(1)).unwrap().name, "Strike");
/// assert!(catalog.card(CardId::new(2)).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    cards: FxHashMap<CardId, Arc<Card>>,
    enemies: FxHashMap<EnemyId, EnemyDef>,
    levels: FxHashMap<LevelId, LevelDef>,
}

impl StaticCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    /// Build from parsed data, rejecting duplicates and dangling enemy
    /// references.
    pub fn from_data(data: CatalogData) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();

        for card in data.cards {
            if catalog.cards.contains_key(&card.id) {
                return Err(CatalogError::DuplicateCard(card.id));
            }
            catalog.cards.insert(card.id, Arc::new(card));
        }
        for enemy in data.enemies {
            if catalog.enemies.contains_key(&enemy.id) {
                return Err(CatalogError::DuplicateEnemy(enemy.id));
            }
            catalog.enemies.insert(enemy.id, enemy);
        }
        for level in data.levels {
            if catalog.levels.contains_key(&level.id) {
                return Err(CatalogError::DuplicateLevel(level.id));
            }
            if !catalog.enemies.contains_key(&level.enemy) {
                return Err(CatalogError::MissingEnemy {
                    level: level.id,
                    enemy: level.enemy,
                });
            }
            catalog.levels.insert(level.id, level);
        }

        Ok(catalog)
    }

    /// Add or replace a card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.insert(card.id, Arc::new(card));
        self
    }

    /// Add or replace an enemy (builder pattern).
    #[must_use]
    pub fn with_enemy(mut self, enemy: EnemyDef) -> Self {
        self.enemies.insert(enemy.id, enemy);
        self
    }

    /// Add or replace a level (builder pattern).
    #[must_use]
    pub fn with_level(mut self, level: LevelDef) -> Self {
        self.levels.insert(level.id, level);
        self
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}

impl Catalog for StaticCatalog {
    fn card(&self, id: CardId) -> Option<&Arc<Card>> {
        self.cards.get(&id)
    }

    fn enemy(&self, id: EnemyId) -> Option<&EnemyDef> {
        self.enemies.get(&id)
    }

    fn level(&self, id: LevelId) -> Option<&LevelDef> {
        self.levels.get(&id)
    }

    fn level_for_enemy(&self, enemy: EnemyId) -> Option<&LevelDef> {
        // Lowest level id wins when several levels share an enemy
        self.levels
            .values()
            .filter(|l| l.enemy == enemy)
            .min_by_key(|l| l.id)
    }

    fn levels_count(&self) -> u32 {
        u32::try_from(self.levels.len()).unwrap_or(u32::MAX)
    }

    fn card_ids(&self) -> Vec<CardId> {
        let mut ids: Vec<_> = self.cards.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;

    const SMALL: &str = r#"{
        "cards": [
            { "id": 1, "name": "Strike", "type": "attack", "mana_cost": 1, "value": 6 },
            { "id": 2, "name": "Defend", "type": "defense", "mana_cost": 1, "value": 5 }
        ],
        "enemies": [
            { "id": 1, "name": "Goblin", "health": 30, "attack": 5 }
        ],
        "levels": [
            { "id": 1, "name": "Forest", "enemy": 1,
              "rewards": { "gold": 50, "experience": 20, "cards": [1] } }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let catalog = StaticCatalog::from_json(SMALL).unwrap();

        assert_eq!(catalog.card_count(), 2);
        assert_eq!(catalog.card(CardId::new(2)).unwrap().card_type, CardType::Defense);
        assert_eq!(catalog.enemy(EnemyId::new(1)).unwrap().attack, 5);
        assert_eq!(catalog.levels_count(), 1);
        assert_eq!(
            catalog.level_for_enemy(EnemyId::new(1)).map(|l| l.id),
            Some(LevelId::new(1))
        );
        assert_eq!(catalog.card_ids(), vec![CardId::new(1), CardId::new(2)]);
    }

    #[test]
    fn test_duplicate_card_rejected() {
        let json = r#"{ "cards": [
            { "id": 1, "name": "Strike", "type": "attack", "mana_cost": 1, "value": 6 },
            { "id": 1, "name": "Strike+", "type": "attack", "mana_cost": 1, "value": 8 }
        ] }"#;

        let err = StaticCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCard(id) if id == CardId::new(1)));
    }

    #[test]
    fn test_dangling_enemy_rejected() {
        let json = r#"{ "levels": [ { "id": 1, "name": "Nowhere", "enemy": 9 } ] }"#;

        let err = StaticCatalog::from_json(json).unwrap_err();
        assert_eq!(err.to_string(), "level Level(1) references unknown enemy Enemy(9)");
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            StaticCatalog::from_json("{ not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_lookup_through_reference() {
        fn count<C: Catalog>(catalog: C) -> u32 {
            catalog.levels_count()
        }

        let catalog = StaticCatalog::from_json(SMALL).unwrap();
        assert_eq!(count(&catalog), 1);
    }
}

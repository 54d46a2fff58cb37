//! # card-battle
//!
//! Combat resolution engine for a turn-based card battler: one player with
//! a deck of action cards against one enemy at a time.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness flows through one seeded
//!    `BattleRng`. The same seed, catalog and inputs replay the same battle.
//!
//! 2. **Events Out**: Every transition runs to completion and returns the
//!    ordered `BattleEvent`s it produced. Pacing and presentation are the
//!    caller's concern.
//!
//! 3. **Closed Vocabularies**: Card effects, status kinds and enemy actions
//!    are enums, so unknown tags are rejected when the catalog loads rather
//!    than mid-battle.
//!
//! ## Modules
//!
//! - `core`: Ids, sides, combatants, state, actions, RNG, config, errors
//! - `zones`: Draw pile, hand and discard pile
//! - `cards`: Card definitions and instances
//! - `catalog`: Read-only card, enemy and level data
//! - `effects`: Status effects and the turn-start tick
//! - `combat`: Battle context, damage pipeline, card resolution
//! - `enemy`: Enemy definitions and decision procedure
//! - `battle`: The turn state machine
//! - `progression`: Rewards, level-ups, achievements, saves
//! - `events`: Events emitted by transitions

pub mod core;
pub mod zones;
pub mod cards;
pub mod catalog;
pub mod effects;
pub mod combat;
pub mod enemy;
pub mod battle;
pub mod progression;
pub mod events;

// Re-export commonly used types
pub use crate::core::{
    BattleAction, BattleConfig, BattleError, BattleRng, BattleRngState, BattleState, EffectId, Enemy,
    InstanceId, Player, Result, Side, Vitals,
};

pub use crate::zones::{DeckZones, Pile};

pub use crate::cards::{Card, CardBonus, CardEffect, CardId, CardInstance, CardType};

pub use crate::catalog::{Catalog, CatalogError, LevelDef, LevelId, Rewards, StaticCatalog};

pub use crate::effects::{ActiveEffects, EffectKind, StatusEffect};

pub use crate::combat::{BattleContext, DamageOutcome};

pub use crate::enemy::{EnemyAction, EnemyBehavior, EnemyDef, EnemyId};

pub use crate::battle::{Battle, Outcome, Phase};

pub use crate::progression::{Achievement, MemoryStore, Progress, ProgressStore, Statistics};

pub use crate::events::{BattleEvent, DamageKind};

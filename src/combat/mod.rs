//! Combat resolution: the battle context, the damage pipeline and card
//! resolution.
//!
//! All health, mana and effect changes during a battle go through these
//! functions, which take the `BattleContext` by `&mut`.

pub mod context;
pub mod damage;
pub mod cards;

pub use context::BattleContext;
pub use damage::{heal, resolve_damage, DamageOutcome};
pub use cards::play_card;

//! Core battle types: ids, sides, combatants, state, actions, RNG,
//! configuration and errors.
//!
//! Everything else in the crate builds on these. None of them know about
//! card rules or enemy behaviour.

pub mod entity;
pub mod side;
pub mod rng;
pub mod config;
pub mod combatant;
pub mod action;
pub mod state;
pub mod error;

pub use entity::{EffectId, IdAllocator, InstanceId};
pub use side::Side;
pub use rng::{BattleRng, BattleRngState};
pub use config::BattleConfig;
pub use combatant::{Enemy, Player, Vitals};
pub use action::{ActionRecord, BattleAction};
pub use state::BattleState;
pub use error::{BattleError, Result};

//! Domain events emitted by battle transitions.
//!
//! Sound, animation and UI layers subscribe to these instead of being
//! called from inside combat logic.

pub mod event;

pub use event::{BattleEvent, DamageKind};

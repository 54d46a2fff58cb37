//! Status effect registry.
//!
//! - `EffectKind`: Closed set of status kinds with their tick behaviour
//! - `StatusEffect`: One granted instance with explicit source and target
//! - `ActiveEffects`: Effects in play, in grant order
//! - `tick_effects`: Turn-start decay, the only place durations change
//!
//! ## Source and target
//!
//! `source` is the side that granted the effect and decides whose turn
//! start ticks it. `target` is the side the effect acts on. Player poison
//! on the enemy therefore ticks at the start of the player's turn and
//! damages the enemy.

mod status;
mod active;
mod tick;

pub use status::{EffectKind, StatusEffect, TickBehavior};
pub use active::ActiveEffects;
pub use tick::tick_effects;

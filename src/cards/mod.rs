//! Card system: definitions and instances.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for catalog cards
//! - `CardType`: Attack, defense, skill or item
//! - `CardEffect`: Closed set of effect tags
//! - `CardBonus`: Secondary grants resolved after the primary effect
//! - `Card`: Immutable catalog definition
//! - `CardInstance`: One copy of a card inside a battle deck

pub mod definition;
pub mod instance;

pub use definition::{Card, CardBonus, CardEffect, CardId, CardType};
pub use instance::CardInstance;

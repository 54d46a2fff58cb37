//! Deck zones: draw pile, hand and discard pile.
//!
//! The battle owns one `DeckZones`. Cards move between the three piles;
//! the draw step refills the hand and recycles the discard pile when the
//! draw pile runs out.

pub mod deck;

pub use deck::{DeckZones, Pile};

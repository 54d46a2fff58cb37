//! Deck zones for card locations and movement.
//!
//! `DeckZones` owns the three piles of one battle deck:
//! - Draw pile: ordered, top is the end of the vector
//! - Hand: ordered as drawn, addressed by index
//! - Discard pile: ordered, newest on top
//!
//! The piles are disjoint and cards only move between them, so the multiset
//! of cards is constant for the battle. The one exception is
//! [`DeckZones::replace_hand_card`], used by the transform item.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::CardInstance;
use crate::core::{BattleError, BattleRng, Result};
use crate::events::BattleEvent;

/// One of the three piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pile {
    Draw,
    Hand,
    Discard,
}

/// The draw pile, hand and discard pile of one battle.
///
/// ## Usage
///
/// ```
/// use std::sync::Arc;
/// use card_battle::cards::{Card, CardId, CardInstance, CardType};
/// use card_battle::core::{BattleRng, InstanceId};
/// use card_battle::zones::DeckZones;
///
/// let strike = Arc::new(Card::new(CardId::new(1), "Strike", CardType::Attack, 1, 6));
/// let cards = (0..8)
///     .map(|i| CardInstance::new(InstanceId::new(i), Arc::clone(&strike)))
///     .collect();
///
/// let mut deck = DeckZones::new(cards);
/// let mut rng = BattleRng::new(42);
/// let mut events = Vec::new();
///
/// deck.draw_to_hand_size(5, &mut rng, &mut events);
/// assert_eq!(deck.hand().len(), 5);
/// assert_eq!(deck.draw_pile().len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DeckZones {
    draw_pile: Vec<CardInstance>,
    hand: Vec<CardInstance>,
    discard_pile: Vec<CardInstance>,
}

impl DeckZones {
    /// Create zones with every card in the draw pile, in the given order.
    #[must_use]
    pub fn new(cards: Vec<CardInstance>) -> Self {
        Self {
            draw_pile: cards,
            hand: Vec::new(),
            discard_pile: Vec::new(),
        }
    }

    #[must_use]
    pub fn draw_pile(&self) -> &[CardInstance] {
        &self.draw_pile
    }

    #[must_use]
    pub fn hand(&self) -> &[CardInstance] {
        &self.hand
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[CardInstance] {
        &self.discard_pile
    }

    /// Cards across all three piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len() + self.hand.len() + self.discard_pile.len()
    }

    fn pile_mut(&mut self, pile: Pile) -> &mut Vec<CardInstance> {
        match pile {
            Pile::Draw => &mut self.draw_pile,
            Pile::Hand => &mut self.hand,
            Pile::Discard => &mut self.discard_pile,
        }
    }

    /// Shuffle a pile in place.
    pub fn shuffle(&mut self, pile: Pile, rng: &mut BattleRng) {
        rng.shuffle(self.pile_mut(pile));
    }

    /// Draw until the hand holds `target` cards.
    ///
    /// An empty draw pile is refilled from the discard pile (shuffled) as
    /// needed. Stops early, without error, when both piles run dry.
    /// Returns the number of cards drawn.
    pub fn draw_to_hand_size(
        &mut self,
        target: usize,
        rng: &mut BattleRng,
        events: &mut Vec<BattleEvent>,
    ) -> usize {
        let mut drawn = 0;
        while self.hand.len() < target {
            if !self.draw_one(rng, events) {
                break;
            }
            drawn += 1;
        }
        drawn
    }

    /// Draw up to `count` cards regardless of hand size.
    ///
    /// Uses the same recycling rule as [`DeckZones::draw_to_hand_size`].
    pub fn draw(&mut self, count: usize, rng: &mut BattleRng, events: &mut Vec<BattleEvent>) -> usize {
        let mut drawn = 0;
        while drawn < count && self.draw_one(rng, events) {
            drawn += 1;
        }
        drawn
    }

    /// Move the top card of the draw pile to the hand, recycling first if
    /// needed. Returns false when no card is left anywhere.
    fn draw_one(&mut self, rng: &mut BattleRng, events: &mut Vec<BattleEvent>) -> bool {
        if self.draw_pile.is_empty() {
            if self.discard_pile.is_empty() {
                return false;
            }
            self.recycle(rng, events);
        }

        match self.draw_pile.pop() {
            Some(card) => {
                events.push(BattleEvent::CardDrawn {
                    card: card.card_id(),
                    instance: card.id,
                });
                self.hand.push(card);
                true
            }
            None => false,
        }
    }

    fn recycle(&mut self, rng: &mut BattleRng, events: &mut Vec<BattleEvent>) {
        let count = self.discard_pile.len();
        self.draw_pile.append(&mut self.discard_pile);
        self.shuffle(Pile::Draw, rng);
        debug!(cards = count, "recycled discard pile into draw pile");
        events.push(BattleEvent::PileRecycled { cards: count });
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.hand.len() {
            Ok(())
        } else {
            Err(BattleError::InvalidIndex {
                index,
                len: self.hand.len(),
            })
        }
    }

    /// Move the hand card at `index` to the discard pile.
    pub fn discard(&mut self, index: usize) -> Result<&CardInstance> {
        self.check_index(index)?;
        let card = self.hand.remove(index);
        self.discard_pile.push(card);
        Ok(&self.discard_pile[self.discard_pile.len() - 1])
    }

    /// Look at the hand card at `index`.
    pub fn hand_card(&self, index: usize) -> Result<&CardInstance> {
        self.hand.get(index).ok_or(BattleError::InvalidIndex {
            index,
            len: self.hand.len(),
        })
    }

    /// Replace the hand card at `index` with a new instance, returning the
    /// old one. The old instance leaves the battle.
    pub fn replace_hand_card(&mut self, index: usize, card: CardInstance) -> Result<CardInstance> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.hand[index], card))
    }
}

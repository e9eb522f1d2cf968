//! Four-card battle decks.
//!
//! A `Deck` borrows its cards from a catalog. Card order is play order:
//! round *n* uses the card at index *n − 1*.

use crate::core::BattleError;

use super::definition::{Card, CardId};

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 4;

/// Ordered lineup of exactly `DECK_SIZE` cards.
///
/// Duplicates are allowed.
#[derive(Clone, Copy, Debug)]
pub struct Deck<'c> {
    cards: [&'c Card; DECK_SIZE],
}

impl<'c> Deck<'c> {
    /// Build a deck, failing with `BattleError::InvalidDeck` unless exactly
    /// `DECK_SIZE` cards are given.
    pub fn new(cards: &[&'c Card]) -> Result<Self, BattleError> {
        let cards: [&'c Card; DECK_SIZE] =
            cards.try_into().map_err(|_| BattleError::InvalidDeck {
                len: cards.len(),
                expected: DECK_SIZE,
            })?;
        Ok(Self { cards })
    }

    /// Card played in the given 0-based round slot.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'c Card> {
        self.cards.get(index).copied()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate cards in play order.
    pub fn iter(&self) -> impl Iterator<Item = &'c Card> + '_ {
        self.cards.iter().copied()
    }

    /// Card ids in play order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.iter().map(|card| card.id).collect()
    }
}

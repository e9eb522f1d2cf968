//! Card registry for definition lookup.
//!
//! The `CardRegistry` is the catalog decks borrow from. It keeps insertion
//! order so iteration and deck sampling are reproducible.

use rustc_hash::FxHashMap;

use crate::core::{BattleError, BattleRng};

use super::deck::{Deck, DECK_SIZE};
use super::definition::{Card, CardId};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use rivals_datagen::cards::{Card, CardId, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(Card::new(CardId::new(1), "Fighter").with_flat_stats(6, 3)).unwrap();
///
/// assert_eq!(registry.get(CardId::new(1)).unwrap().name, "Fighter");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from cards, rejecting duplicate ids.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, BattleError> {
        let mut registry = Self::new();
        for card in cards {
            registry.register(card)?;
        }
        Ok(registry)
    }

    /// Register a card definition.
    pub fn register(&mut self, card: Card) -> Result<(), BattleError> {
        if self.index.contains_key(&card.id) {
            return Err(BattleError::DuplicateCard(card.id));
        }
        self.index.insert(card.id, self.cards.len());
        self.cards.push(card);
        Ok(())
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.index.get(&id).map(|&i| &self.cards[i])
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate cards in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Resolve card ids into a deck.
    pub fn deck(&self, ids: &[CardId]) -> Result<Deck<'_>, BattleError> {
        let cards = ids
            .iter()
            .map(|&id| self.get(id).ok_or(BattleError::UnknownCard(id)))
            .collect::<Result<Vec<_>, _>>()?;
        Deck::new(&cards)
    }

    /// Draw a deck of distinct cards uniformly at random.
    pub fn sample_deck(&self, rng: &mut BattleRng) -> Result<Deck<'_>, BattleError> {
        let picks = rng
            .sample_indices(self.cards.len(), DECK_SIZE)
            .ok_or(BattleError::CatalogTooSmall {
                available: self.cards.len(),
                required: DECK_SIZE,
            })?;
        let cards: Vec<&Card> = picks.into_iter().map(|i| &self.cards[i]).collect();
        Deck::new(&cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(n: u32) -> CardRegistry {
        CardRegistry::from_cards(
            (1..=n).map(|i| Card::new(CardId::new(i), format!("Card {i}")).with_flat_stats(5, 2)),
        )
        .unwrap()
    }

    #[test]
    fn test_register_and_get() {
        let registry = registry(3);

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get(CardId::new(2)).unwrap().name, "Card 2");
        assert!(registry.get(CardId::new(99)).is_none());
        assert!(registry.contains(CardId::new(1)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = registry(1);
        let err = registry.register(Card::new(CardId::new(1), "Again")).unwrap_err();
        assert_eq!(err, BattleError::DuplicateCard(CardId::new(1)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_iteration_keeps_registration_order() {
        let registry = registry(4);
        let ids: Vec<_> = registry.iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_deck_from_ids() {
        let registry = registry(5);
        let ids = [CardId::new(4), CardId::new(2), CardId::new(2), CardId::new(5)];
        let deck = registry.deck(&ids).unwrap();
        assert_eq!(deck.ids(), ids.to_vec());

        let unknown = registry.deck(&[CardId::new(1), CardId::new(9), CardId::new(2), CardId::new(3)]);
        assert_eq!(unknown.unwrap_err(), BattleError::UnknownCard(CardId::new(9)));

        let short = registry.deck(&ids[..3]);
        assert!(matches!(short, Err(BattleError::InvalidDeck { len: 3, .. })));
    }

    #[test]
    fn test_sample_deck() {
        let registry = registry(10);
        let mut rng = BattleRng::new(42);
        let deck = registry.sample_deck(&mut rng).unwrap();

        let mut ids = deck.ids();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), DECK_SIZE);

        let mut rng_again = BattleRng::new(42);
        assert_eq!(registry.sample_deck(&mut rng_again).unwrap().ids(), deck.ids());
    }

    #[test]
    fn test_sample_deck_small_catalog() {
        let registry = registry(3);
        let mut rng = BattleRng::new(1);
        assert_eq!(
            registry.sample_deck(&mut rng).unwrap_err(),
            BattleError::CatalogTooSmall { available: 3, required: 4 }
        );
    }
}

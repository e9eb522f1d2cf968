//! Error types for deck construction and catalog lookup.
//!
//! The only failure a battle itself can hit is a malformed deck. Everything
//! numeric inside a battle is clamped instead of raised.

use crate::cards::CardId;

/// Errors raised while assembling the inputs of a battle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    /// A deck did not contain exactly `DECK_SIZE` cards.
    #[error("invalid deck: expected {expected} cards, got {len}")]
    InvalidDeck { len: usize, expected: usize },

    /// A deck referenced a card id the registry does not know.
    #[error("unknown card {0}")]
    UnknownCard(CardId),

    /// A card id was registered twice.
    #[error("card {0} already registered")]
    DuplicateCard(CardId),

    /// Not enough cards to sample a deck without repetition.
    #[error("catalog has {available} cards, need at least {required}")]
    CatalogTooSmall { available: usize, required: usize },
}

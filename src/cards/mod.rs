//! Card system: definitions, decks, registry, and catalog generation.
//!
//! ## Key Types
//!
//! - `Card`: Static card data with a per-level power/damage table
//! - `Level`: Validated level in `1..=5`
//! - `Deck`: Ordered four-card lineup borrowed from a registry
//! - `CardRegistry`: Card lookup and deck sampling
//! - `CatalogGenerator`: Seeded synthetic catalog

pub mod deck;
pub mod definition;
pub mod generator;
pub mod registry;

pub use deck::{Deck, DECK_SIZE};
pub use definition::{Ability, Card, CardId, Level, LevelStats, ParseCardIdError, Rarity};
pub use generator::{clan_index, CatalogConfig, CatalogGenerator, ABILITIES, CLANS};
pub use registry::CardRegistry;

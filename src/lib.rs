//! # rivals-datagen
//!
//! Generates labeled training data for card-battle ML models by simulating
//! a simplified two-deck battle game.
//!
//! ## Rules
//!
//! Each side brings a four-card deck and starts with 12 life and 12 pills.
//! Round *n* pits card *n* of each deck against each other. Each side commits
//! up to 5 pills (never more than it has left); attack is the card's level-5
//! power plus the pills. The higher attack deals its card's level-5 damage to
//! the other side; equal attacks draw. The battle ends after 4 rounds or as
//! soon as either side is at or below 0 life. The side with more life wins.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness flows through an explicitly passed
//!    `BattleRng`; a seed reproduces a whole dataset.
//!
//! 2. **Owned State**: Each `BattleOrchestrator` owns its `BattleState`, so
//!    battles parallelize with no shared mutable data.
//!
//! 3. **Typed Records**: `BattleRecord` and `RoundRecord` are fixed-shape
//!    structs whose serialized form is the dataset contract.
//!
//! ## Modules
//!
//! - `core`: Sides, RNG, rule configuration, errors
//! - `cards`: Card definitions, decks, registry, catalog generation
//! - `battle`: Pill strategies, round resolution, orchestration, records
//! - `training`: Parallel dataset generation, features, export, market data

pub mod battle;
pub mod cards;
pub mod core;
pub mod training;

// Re-export commonly used types
pub use crate::core::{BattleConfig, BattleError, BattleRng, Side, Winner};

pub use crate::cards::{
    Card, CardId, CardRegistry, CatalogConfig, CatalogGenerator, Deck, Level, Rarity, DECK_SIZE,
};

pub use crate::battle::{
    resolve_round, simulate, simulate_with_config, BattleOrchestrator, BattlePhase, BattleRecord,
    BattleState, FinalScore, FixedPills, MaxPills, PillRequest, PillStrategy, RoundOutcome,
    RoundRecord, UniformPills,
};

pub use crate::training::{
    BattleFeatures, BattleSample, CardFeatures, DatasetConfig, DatasetError, DatasetGenerator,
    GenerationReport, MarketConfig, MarketGenerator, MarketRow, SkippedBattle, TrainingExport,
};

//! Training data generation.
//!
//! - **DatasetGenerator**: runs many battles in parallel from a card registry
//! - **features**: flat feature rows for card and battle models
//! - **export**: JSON training bundle and bincode sample storage
//! - **MarketGenerator**: seeded per-card daily price history
//!
//! ## Usage
//!
//! ```
//! use rivals_datagen::cards::CatalogGenerator;
//! use rivals_datagen::training::{DatasetConfig, DatasetGenerator, TrainingExport};
//!
//! let registry = CatalogGenerator::default().generate().unwrap();
//! let report = DatasetGenerator::new(&registry, DatasetConfig::new().with_battles(8))
//!     .generate()
//!     .unwrap();
//!
//! let export = TrainingExport::build(&registry, &report.samples);
//! assert_eq!(export.metadata.battles_count, 8);
//! ```

pub mod dataset;
pub mod error;
pub mod export;
pub mod features;
pub mod market;

pub use dataset::{BattleSample, DatasetConfig, DatasetGenerator, GenerationReport, SkippedBattle};
pub use error::DatasetError;
pub use export::{
    read_samples_bincode, read_samples_bincode_file, write_rows_json, write_samples_bincode,
    write_samples_json,
    ExportMetadata, TrainingExport, EXPORT_VERSION,
};
pub use features::{battle_features, card_features, BattleFeatures, CardFeatures};
pub use market::{price_band, MarketConfig, MarketGenerator, MarketRow};

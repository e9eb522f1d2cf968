//! Dataset export.
//!
//! Two formats: a compact JSON training bundle (metadata plus feature rows)
//! for the model side, and bincode for storing raw battle samples.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::{CardRegistry, CLANS};

use super::dataset::BattleSample;
use super::error::DatasetError;
use super::features::{battle_features, card_features, BattleFeatures, CardFeatures};

/// Export format version.
pub const EXPORT_VERSION: &str = "1.0.0";

/// Summary of an export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub version: String,
    pub cards_count: usize,
    pub battles_count: usize,
    pub clans: Vec<String>,
}

/// Everything the model side needs, in one document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingExport {
    pub metadata: ExportMetadata,
    pub card_features: Vec<CardFeatures>,
    pub battle_features: Vec<BattleFeatures>,
    /// Clan name to bonus text.
    pub clans_data: BTreeMap<String, String>,
}

impl TrainingExport {
    /// Extract features from a registry and a set of battles.
    pub fn build(registry: &CardRegistry, samples: &[BattleSample]) -> Self {
        let card_features = card_features(registry);
        let battle_features = battle_features(samples);

        Self {
            metadata: ExportMetadata {
                version: EXPORT_VERSION.to_string(),
                cards_count: card_features.len(),
                battles_count: battle_features.len(),
                clans: CLANS.iter().map(|(name, _)| (*name).to_string()).collect(),
            },
            card_features,
            battle_features,
            clans_data: CLANS
                .iter()
                .map(|(name, bonus)| ((*name).to_string(), (*bonus).to_string()))
                .collect(),
        }
    }

    /// Write compact JSON.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), DatasetError> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    /// Write compact JSON to a file.
    pub fn write_json_file(&self, path: impl AsRef<Path>) -> Result<(), DatasetError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_json(&mut writer)?;
        writer.flush()?;
        info!(
            path = %path.display(),
            cards = self.metadata.cards_count,
            battles = self.metadata.battles_count,
            "wrote training export"
        );
        Ok(())
    }
}

/// Write battle samples as a JSON array.
pub fn write_samples_json<W: Write>(samples: &[BattleSample], writer: W) -> Result<(), DatasetError> {
    serde_json::to_writer(writer, samples)?;
    Ok(())
}

/// Write any rows (skipped battles, market data) as a JSON array.
pub fn write_rows_json<T: Serialize, W: Write>(rows: &[T], writer: W) -> Result<(), DatasetError> {
    serde_json::to_writer(writer, rows)?;
    Ok(())
}

/// Write battle samples as bincode.
pub fn write_samples_bincode<W: Write>(samples: &[BattleSample], writer: W) -> Result<(), DatasetError> {
    bincode::serialize_into(writer, samples)?;
    Ok(())
}

/// Read battle samples written by `write_samples_bincode`.
pub fn read_samples_bincode<R: Read>(reader: R) -> Result<Vec<BattleSample>, DatasetError> {
    Ok(bincode::deserialize_from(reader)?)
}

/// Read bincode battle samples from a file.
pub fn read_samples_bincode_file(path: impl AsRef<Path>) -> Result<Vec<BattleSample>, DatasetError> {
    read_samples_bincode(BufReader::new(File::open(path)?))
}

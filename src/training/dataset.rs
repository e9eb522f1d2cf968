//! Parallel battle generation.
//!
//! Battle `i` of a run is fully determined by `seed + i`: that seed drives
//! deck sampling, and a fork of it drives pill choices. Battles run on the
//! rayon pool and are collected in battle order, so the output does not
//! depend on thread count or scheduling.

use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::battle::{simulate_with_config, BattleRecord, UniformPills};
use crate::cards::{CardId, CardRegistry};
use crate::core::{BattleConfig, BattleError, BattleRng};

use super::error::DatasetError;

/// Configuration for a generation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Number of battles to simulate.
    pub battles: usize,

    /// Base seed; battle `i` uses `seed + i`.
    pub seed: u64,

    /// Worker threads. `None` uses the global rayon pool.
    pub threads: Option<usize>,

    /// Rules every battle is played under.
    pub battle: BattleConfig,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            battles: 10_000,
            seed: 0,
            threads: None,
            battle: BattleConfig::default(),
        }
    }
}

impl DatasetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of battles.
    pub fn with_battles(mut self, battles: usize) -> Self {
        self.battles = battles;
        self
    }

    /// Set the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use a dedicated pool with this many threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Set the battle rules.
    pub fn with_battle_config(mut self, battle: BattleConfig) -> Self {
        self.battle = battle;
        self
    }

    /// Seed for battle `index`.
    pub fn battle_seed(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64)
    }
}

/// One simulated battle with the decks that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSample {
    /// `battle_<index>`.
    pub battle_id: String,
    pub seed: u64,
    pub player_deck: Vec<CardId>,
    pub opponent_deck: Vec<CardId>,
    pub record: BattleRecord,
}

/// A battle that could not be set up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedBattle {
    pub battle_id: String,
    pub seed: u64,
    pub error: String,
}

/// Everything a run produced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Completed battles in battle order.
    pub samples: Vec<BattleSample>,
    /// Battles whose setup failed.
    pub skipped: Vec<SkippedBattle>,
    /// Battles never started because the run was cancelled.
    pub cancelled: usize,
}

enum BattleResult {
    Done(BattleSample),
    Skipped(SkippedBattle),
    NotStarted,
}

/// Generates battle datasets from a card registry.
pub struct DatasetGenerator<'r> {
    registry: &'r CardRegistry,
    config: DatasetConfig,
}

impl<'r> DatasetGenerator<'r> {
    pub fn new(registry: &'r CardRegistry, config: DatasetConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Run every battle.
    pub fn generate(&self) -> Result<GenerationReport, DatasetError> {
        self.generate_until(&AtomicBool::new(false))
    }

    /// Run battles until `cancel` is set.
    ///
    /// Cancellation only stops new battles from starting; a battle already
    /// running always finishes.
    pub fn generate_until(&self, cancel: &AtomicBool) -> Result<GenerationReport, DatasetError> {
        let results = match self.config.threads {
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?
                .install(|| self.run_all(cancel)),
            None => self.run_all(cancel),
        };

        let mut report = GenerationReport::default();
        for result in results {
            match result {
                BattleResult::Done(sample) => report.samples.push(sample),
                BattleResult::Skipped(skipped) => {
                    warn!(battle = %skipped.battle_id, error = %skipped.error, "battle skipped");
                    report.skipped.push(skipped);
                }
                BattleResult::NotStarted => report.cancelled += 1,
            }
        }

        info!(
            battles = report.samples.len(),
            skipped = report.skipped.len(),
            cancelled = report.cancelled,
            "battle generation finished"
        );
        Ok(report)
    }

    fn run_all(&self, cancel: &AtomicBool) -> Vec<BattleResult> {
        (0..self.config.battles)
            .into_par_iter()
            .map(|index| {
                if cancel.load(Ordering::Relaxed) {
                    return BattleResult::NotStarted;
                }
                match self.generate_battle(index) {
                    Ok(sample) => BattleResult::Done(sample),
                    Err(err) => BattleResult::Skipped(SkippedBattle {
                        battle_id: battle_id(index),
                        seed: self.config.battle_seed(index),
                        error: err.to_string(),
                    }),
                }
            })
            .collect()
    }

    /// Simulate battle `index` of this run.
    pub fn generate_battle(&self, index: usize) -> Result<BattleSample, BattleError> {
        let seed = self.config.battle_seed(index);
        let mut rng = BattleRng::new(seed);

        let player_deck = self.registry.sample_deck(&mut rng)?;
        let opponent_deck = self.registry.sample_deck(&mut rng)?;
        let strategy = UniformPills::new(rng.fork());

        let record = simulate_with_config(
            self.config.battle.clone(),
            &player_deck,
            &opponent_deck,
            strategy,
        );

        Ok(BattleSample {
            battle_id: battle_id(index),
            seed,
            player_deck: player_deck.ids(),
            opponent_deck: opponent_deck.ids(),
            record,
        })
    }
}

fn battle_id(index: usize) -> String {
    format!("battle_{index}")
}

//! Synthetic market price history.
//!
//! One row per card per day. Prices come from a rarity band with normal
//! noise on top; trade counts are Poisson. Day `d` is drawn from its own
//! `seed + d` stream, so days can run in parallel and still come back
//! identical for a given seed.

use std::ops::RangeInclusive;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::{Card, CardId, CardRegistry, Rarity};
use crate::core::BattleRng;

/// Market generation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Days of history.
    pub days: u32,

    /// Base seed; day `d` uses `seed + d`.
    pub seed: u64,

    /// Standard deviation of the relative price noise.
    pub price_noise: f64,

    /// Mean daily transactions per card.
    pub mean_transactions: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            days: 180,
            seed: 0,
            price_noise: 0.1,
            mean_transactions: 5.0,
        }
    }
}

impl MarketConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_price_noise(mut self, noise: f64) -> Self {
        self.price_noise = noise;
        self
    }
}

/// One card's market activity on one day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketRow {
    /// Days before generation; 0 is the most recent.
    pub day: u32,
    pub card_id: CardId,
    pub card_name: String,
    pub price: u64,
    pub transaction_count: u32,
    pub total_volume: u64,
}

/// Base price band for a rarity.
#[must_use]
pub fn price_band(rarity: Rarity) -> RangeInclusive<u32> {
    match rarity {
        Rarity::Common => 50..=199,
        Rarity::Uncommon => 150..=499,
        Rarity::Rare => 400..=1499,
        Rarity::Legendary => 1000..=4999,
    }
}

/// Generates market history for a card registry.
pub struct MarketGenerator<'r> {
    registry: &'r CardRegistry,
    config: MarketConfig,
}

impl<'r> MarketGenerator<'r> {
    pub fn new(registry: &'r CardRegistry, config: MarketConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Every row, ordered by day then by registry order.
    pub fn generate(&self) -> Vec<MarketRow> {
        let rows: Vec<MarketRow> = (0..self.config.days)
            .into_par_iter()
            .flat_map_iter(|day| self.generate_day(day))
            .collect();

        info!(
            days = self.config.days,
            cards = self.registry.len(),
            rows = rows.len(),
            "generated market data"
        );
        rows
    }

    /// Rows for a single day.
    pub fn generate_day(&self, day: u32) -> Vec<MarketRow> {
        let mut rng = BattleRng::new(self.config.seed.wrapping_add(u64::from(day)));
        self.registry
            .iter()
            .map(|card| self.generate_row(&mut rng, day, card))
            .collect()
    }

    fn generate_row(&self, rng: &mut BattleRng, day: u32, card: &Card) -> MarketRow {
        let base = f64::from(rng.gen_range_inclusive(price_band(card.rarity)));
        let variation = rng.gen_normal(0.0, self.config.price_noise);
        // Float to int casts saturate and send NaN to 0.
        let price = ((base * (1.0 + variation)) as u64).max(1);
        let transaction_count = rng.gen_poisson(self.config.mean_transactions);

        MarketRow {
            day,
            card_id: card.id,
            card_name: card.name.clone(),
            price,
            transaction_count,
            total_volume: price.saturating_mul(u64::from(transaction_count)),
        }
    }
}

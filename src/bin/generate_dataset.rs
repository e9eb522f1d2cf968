//! Generate a training dataset: catalog, battles, features.
//!
//! Writes into the output directory:
//! - `cards.json`: the generated catalog
//! - `battles.json` / `battles.bin`: battle samples (JSON and bincode)
//! - `market_data.json`: daily price history per card
//! - `training_data.json`: metadata plus card and battle feature rows
//! - `skipped.json`: battles that could not be set up, if any
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use rivals_datagen::training::{write_rows_json, write_samples_bincode, write_samples_json};
use rivals_datagen::{
    CatalogConfig, CatalogGenerator, DatasetConfig, DatasetGenerator, MarketConfig,
    MarketGenerator, TrainingExport,
};

/// Card battle training data generator
#[derive(Parser, Debug)]
#[command(name = "generate-dataset")]
#[command(about = "Simulate card battles and export ML training data", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of battles to simulate
    #[arg(long, default_value_t = 10_000)]
    battles: usize,

    /// Base seed for battles (battle i uses seed + i)
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Seed for the synthetic card catalog
    #[arg(long, default_value_t = 0)]
    catalog_seed: u64,

    /// Cards generated per clan
    #[arg(long, default_value_t = 11)]
    cards_per_clan: u32,

    /// Days of market history
    #[arg(long, default_value_t = 180)]
    market_days: u32,

    /// Worker threads (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Output directory
    #[arg(long, short, default_value = "datasets")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    fs::create_dir_all(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;

    let catalog = CatalogGenerator::new(
        CatalogConfig::new()
            .with_cards_per_clan(cli.cards_per_clan)
            .with_seed(cli.catalog_seed),
    );
    let registry = catalog.generate()?;
    write_json(&cli.output.join("cards.json"), &registry.iter().collect::<Vec<_>>())?;

    let mut config = DatasetConfig::new().with_battles(cli.battles).with_seed(cli.seed);
    if let Some(threads) = cli.threads {
        config = config.with_threads(threads);
    }

    let report = DatasetGenerator::new(&registry, config).generate()?;

    let battles_json = cli.output.join("battles.json");
    let mut writer = BufWriter::new(create(&battles_json)?);
    write_samples_json(&report.samples, &mut writer)?;
    writer.flush()?;

    let battles_bin = cli.output.join("battles.bin");
    let mut writer = BufWriter::new(create(&battles_bin)?);
    write_samples_bincode(&report.samples, &mut writer)?;
    writer.flush()?;

    if !report.skipped.is_empty() {
        let skipped = cli.output.join("skipped.json");
        let mut writer = BufWriter::new(create(&skipped)?);
        write_rows_json(&report.skipped, &mut writer)?;
        writer.flush()?;
    }

    let market = MarketGenerator::new(
        &registry,
        MarketConfig::new().with_days(cli.market_days).with_seed(cli.seed),
    )
    .generate();
    let market_json = cli.output.join("market_data.json");
    let mut writer = BufWriter::new(create(&market_json)?);
    write_rows_json(&market, &mut writer)?;
    writer.flush()?;

    TrainingExport::build(&registry, &report.samples)
        .write_json_file(cli.output.join("training_data.json"))?;

    info!(
        output = %cli.output.display(),
        cards = registry.len(),
        battles = report.samples.len(),
        skipped = report.skipped.len(),
        market_rows = market.len(),
        "dataset complete"
    );
    Ok(())
}

fn create(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("creating {}", path.display()))
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut writer = BufWriter::new(create(path)?);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

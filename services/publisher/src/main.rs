//! Snapshot publisher CLI
//!
//! Publishes the demo orderbook into a snapshot directory and optionally
//! writes the matching verification task payload.

use anyhow::Context;
use chrono::{Duration, Utc};
use clap::Parser;
use publisher::{sample_data, task_input, FsSnapshotStore, PublishCursor, SnapshotPublisher};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use types::ids::MarketId;

#[derive(Parser, Debug)]
#[command(name = "publisher")]
#[command(about = "Publish orderbook snapshots for settlement verification")]
struct Args {
    /// Output directory for snapshots
    #[arg(long, env = "PUBLISHER_OUTPUT", default_value = "./snapshots")]
    output: PathBuf,

    /// Market ID for the snapshot
    #[arg(long, env = "PUBLISHER_MARKET", default_value = "TRUMP-2024-WIN")]
    market: String,

    /// Generate and publish sample data
    #[arg(long, default_value_t = false)]
    generate: bool,

    /// Output file for task input JSON
    #[arg(long)]
    task_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if !args.generate {
        println!("Nothing to publish; pass --generate to publish the sample book (see --help)");
        return Ok(());
    }

    let store = FsSnapshotStore::new(&args.output);
    let mut cursor = PublishCursor::resume(&store)
        .with_context(|| {
            format!("failed to read existing snapshots in {}", args.output.display())
        })?;
    let publisher = SnapshotPublisher::new(store);

    let now = Utc::now();
    let (orders, trades) = sample_data(now - Duration::minutes(5));
    let market_id = MarketId::from(args.market.as_str());

    let snapshot = publisher
        .publish(&mut cursor, &market_id, orders, &trades, now)
        .context("failed to publish snapshot")?;

    if let Some(task_file) = &args.task_file {
        let input = task_input(&snapshot, &trades, format!("batch-{}", snapshot.sequence_number));
        let data = serde_json::to_vec_pretty(&input).context("failed to encode task input")?;
        std::fs::write(task_file, data)
            .with_context(|| format!("failed to write task file {}", task_file.display()))?;
        info!(file = %task_file.display(), "Task input written to file");
    }

    println!("Snapshot published successfully!");
    println!("Sequence Number: {}", snapshot.sequence_number);
    println!("Market ID: {}", snapshot.market_id);
    println!("Merkle Root: {}", snapshot.merkle_root);
    println!("Orders: {}", snapshot.orders.len());
    println!("Trades: {}", trades.len());

    Ok(())
}

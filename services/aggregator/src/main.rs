use aggregator::{SubmitterConfig, SystemClock, TaskSubmitter};
use anyhow::Context;
use clap::{Parser, Subcommand};
use publisher::FsSnapshotStore;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "aggregator")]
#[command(about = "Submit verification tasks for published orderbook snapshots")]
struct Args {
    /// Directory the publisher writes snapshots into
    #[arg(long, env = "AGGREGATOR_SNAPSHOT_DIR")]
    snapshot_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Watch for new snapshots until interrupted
    Watch {
        /// Poll interval in milliseconds
        #[arg(long, env = "AGGREGATOR_INTERVAL_MS")]
        interval_ms: Option<u64>,
    },
    /// List submitted tasks
    Tasks,
    /// Run a submitted task through the verifier locally
    Verify {
        #[arg(long)]
        task_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = SubmitterConfig::default();
    if let Some(dir) = args.snapshot_dir {
        config.snapshot_dir = dir;
    }

    let mut submitter = TaskSubmitter::new(FsSnapshotStore::new(&config.snapshot_dir), SystemClock);

    match args.command {
        Command::Watch { interval_ms } => {
            if let Some(ms) = interval_ms {
                config.poll_interval = Duration::from_millis(ms);
            }
            submitter
                .watch(config.poll_interval, async {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        tracing::error!(error = %e, "Failed to listen for shutdown signal");
                    }
                })
                .await;
            println!("Watcher stopped");
        }
        Command::Tasks => {
            let tasks = submitter.task_submissions().context("failed to list tasks")?;
            for task in &tasks {
                println!(
                    "{}  batch={}  sequence={}  trades={}  submitted_at={}",
                    task.task_id,
                    task.batch_id,
                    task.snapshot.sequence_number,
                    task.trades.len(),
                    task.submitted_at.to_rfc3339()
                );
            }
            println!("{} task(s)", tasks.len());
        }
        Command::Verify { task_id } => {
            let result = submitter
                .simulate_task_execution(&task_id)
                .with_context(|| format!("failed to verify task {}", task_id))?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

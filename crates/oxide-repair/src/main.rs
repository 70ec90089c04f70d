//! oxide-repair CLI
//!
//! Repairs a file of generated SQL statements against their databases.

use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use oxide_repair::prelude::*;

/// Repair generated SQL until it executes.
#[derive(Parser)]
#[command(name = "oxide-repair")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Prediction file with one generated SQL statement per line.
    #[arg(long)]
    pred_file: PathBuf,

    /// Processed dataset file (JSON array of schema instances).
    #[arg(long)]
    input_file: PathBuf,

    /// Directory holding `<db_id>/<db_id>.sqlite` databases.
    #[arg(long, env = "REPAIR_DB_DIR")]
    db_dir: PathBuf,

    /// Output file (defaults to `<pred-file stem>_fixed.txt`).
    #[arg(short, long)]
    output_file: Option<PathBuf>,

    /// Maximum execute-classify-fix cycles per statement.
    #[arg(short, long, env = "REPAIR_PATIENCE", default_value_t = DEFAULT_PATIENCE)]
    patience: usize,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let predictions = load_predictions(&cli.pred_file)?;
    let instances = load_instances(&cli.input_file)?;
    info!(
        predictions = predictions.len(),
        instances = instances.len(),
        "Loaded batch"
    );

    let config = RepairConfig::default()
        .patience(cli.patience)
        .verbose(cli.verbose);
    let engine = RepairEngine::new(SqliteOracle::new(&cli.db_dir), config);
    let batch = BatchRepair::new(engine, instances);

    let (repaired, report) = batch.run(&predictions).await?;

    println!("{report}");
    println!(
        "Failed reasons: {}",
        serde_json::to_string_pretty(&report.failure_reasons)?
    );

    let output = cli
        .output_file
        .unwrap_or_else(|| default_output_path(&cli.pred_file));
    write_output(&output, &repaired)?;
    info!("Wrote {} statements to {}", repaired.len(), output.display());

    Ok(())
}

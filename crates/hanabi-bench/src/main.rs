use std::path::PathBuf;

use clap::Parser;

use hanabi_bench::config::{BenchConfig, ResolvedOutputs};
use hanabi_bench::logging::init_logging;
use hanabi_bench::runner::BatchRunner;

/// Deterministic batch harness for Hanabi policies.
#[derive(Debug, Parser)]
#[command(
    name = "hanabi-bench",
    author,
    version,
    about = "Deterministic Hanabi simulation harness"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "bench/bench.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the number of games to play.
    #[arg(long, value_name = "GAMES")]
    games: Option<usize>,

    /// Override the base RNG seed for game shuffles.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Exit after validating the configuration (no games are played).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = BenchConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(games) = cli.games {
        config.games.count = games;
    }

    if let Some(seed) = cli.seed {
        config.games.seed = Some(seed);
    }

    config.validate()?;

    let outputs: ResolvedOutputs = config.resolved_outputs();
    let run_id = config.run_id.clone();
    let games = config.games.count;
    let seats = config.seats.len();

    println!(
        "Loaded configuration '{run_id}' with {seats} seat{} ({games} game{})",
        if seats == 1 { "" } else { "s" },
        if games == 1 { "" } else { "s" }
    );

    let logging_guard = init_logging(&config.logging, &outputs)?;

    if cli.validate_only {
        println!("Validation-only mode: batch execution skipped.");
        return Ok(());
    }

    let runner = BatchRunner::new(config, outputs);
    let summary = runner.run()?;
    println!(
        "Batch complete for '{run_id}': {} games → {} rows at {}",
        summary.games_played,
        summary.rows_written,
        summary.jsonl_path.display()
    );
    println!("Summary table: {}", summary.summary_path.display());
    if let Some(guard) = logging_guard.as_ref() {
        println!("Structured log: {}", guard.log_path.display());
    }

    Ok(())
}

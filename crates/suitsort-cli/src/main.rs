use std::path::PathBuf;

use clap::Parser;

use suitsort_cli::config::{OutputFormat, RunConfig};
use suitsort_cli::logging::init_logging;
use suitsort_core::{AppInfo, DistributionMode};

/// Exact odds that a dealt hand can be grouped by suit with a single block move.
#[derive(Debug, Parser)]
#[command(
    name = "suitsort",
    author,
    version,
    about = "Exact odds that a dealt hand can be grouped by suit with one move"
)]
struct Cli {
    /// Path to an optional YAML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Smallest hand size to report.
    #[arg(long, value_name = "N")]
    min: Option<usize>,

    /// Largest hand size to report (at most 13).
    #[arg(long, value_name = "N")]
    max: Option<usize>,

    /// Build full distributions and filter while summing.
    #[arg(long)]
    unpruned: bool,

    /// Attach a Monte Carlo estimate over this many shuffled deals.
    #[arg(long, value_name = "TRIALS")]
    trials: Option<u64>,

    /// Override the RNG seed used for Monte Carlo deals.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Output format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Exhaustively check the pruning properties before computing.
    #[arg(long)]
    verify: bool,

    /// Override the tracing level (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match cli.config.as_ref() {
        Some(path) => RunConfig::from_path(path)?,
        None => RunConfig::default(),
    };

    if let Some(min) = cli.min {
        config.hand_sizes.min = min;
    }

    if let Some(max) = cli.max {
        config.hand_sizes.max = max;
    }

    if cli.unpruned {
        config.mode = DistributionMode::Unpruned;
    }

    if let Some(trials) = cli.trials {
        config.simulation.trials = trials;
    }

    if let Some(seed) = cli.seed {
        config.simulation.seed = seed;
    }

    if let Some(format) = cli.format {
        config.output.format = format;
    }

    if cli.verify {
        config.verify.enabled = true;
    }

    if let Some(level) = cli.log_level {
        config.logging.tracing_level = level;
    }

    if cli.log_json {
        config.logging.json = true;
    }

    config.validate()?;
    init_logging(&config.logging);
    tracing::debug!(
        target: "suitsort_cli",
        version = AppInfo::version(),
        "{} starting",
        AppInfo::name()
    );

    let report = suitsort_cli::run(&config)?;
    print!("{report}");
    if config.output.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

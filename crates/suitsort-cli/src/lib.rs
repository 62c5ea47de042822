pub mod config;
pub mod logging;
pub mod report;

use anyhow::{Context, Result};
use suitsort_core::Orderability;
use suitsort_core::order::OrderableCache;
use suitsort_core::verify::{verify_non_recoverable, verify_run_bound};
use tracing::info;

use crate::config::RunConfig;

/// Runs the configured checks and computations, returning the rendered report.
pub fn run(config: &RunConfig) -> Result<String> {
    if config.verify.enabled {
        verify_run_bound(config.verify.max_len).context("checking the run bound")?;
        let mut cache = OrderableCache::new();
        verify_non_recoverable(&mut cache).context("checking non-recoverable prefixes")?;
    }

    let mut engine = Orderability::new(config.mode);
    let rows = report::build_rows(&mut engine, config.hand_sizes.range(), &config.simulation)
        .context("computing orderable probabilities")?;
    info!(
        target: "suitsort_cli",
        rows = rows.len(),
        mode = ?config.mode,
        cached_sequences = engine.builder().cache().len(),
        "computed probability table"
    );
    report::render(&rows, config.output.format).context("rendering report")
}

//! Sort Stress Test - Main Entry Point

use sort_stress::{init_logging, run_stress_test, StressConfig};
use std::path::PathBuf;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    info!("=== Sort Stress Test v{} ===", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = StressConfig::load(config_path.as_deref())?;

    let report = run_stress_test(&config, &mut rand::thread_rng())?;
    let failures = report.failures();
    if failures > 0 {
        anyhow::bail!("{} of {} runs produced unsorted output", failures, report.runs.len());
    }

    info!("All {} runs verified", report.runs.len());
    Ok(())
}

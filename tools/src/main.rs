//! balance-runner: runs the balance suite against the game repository.
//!
//! Usage:
//!   balance-runner
//!
//! Prints the report, writes BALANCE_TEST_REPORT.txt at the repository
//! root, and exits 1 if any check failed a hard target.

use anyhow::Result;
use cheese_balance_core::{config::HarnessConfig, suite::BalanceSuite};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    env_logger::init();

    let config = HarnessConfig::from_repo_root(repo_root());
    log::info!("repo root: {}", config.repo_root.display());

    let suite = BalanceSuite::build(config);
    let report = suite.run()?;

    println!("{}", report.render());
    report.write_to(&suite.config().report_path)?;
    println!(
        "\nReport written to {} at {}",
        suite.config().report_path.display(),
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );

    Ok(ExitCode::from(report.exit_code() as u8))
}

/// The game repository root: this workspace directory, one level above
/// the runner crate.
fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest_dir.to_path_buf())
}

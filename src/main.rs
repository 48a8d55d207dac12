//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use site_audit::initialization::init_logger_with;
use site_audit::{run_analysis, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_analysis(config).await {
        Ok(report) => {
            println!();
            println!("📄 Report saved to: {}", report.report_path.display());
            println!(
                "{} finding{}, {} issue{} in {:.1}s",
                report.findings.len(),
                if report.findings.len() == 1 { "" } else { "s" },
                report.issues.len(),
                if report.issues.len() == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("site_audit error: {:#}", e);
            process::exit(1);
        }
    }
}

//! site_audit library: one-shot analysis of a web app checkout and its live site
//!
//! A run scans the project's bundled script files, checks its backend
//! configuration files, probes the live site's endpoints and SEO markup, and
//! writes every finding and issue to a plain-text report.
//!
//! # Example
//!
//! ```no_run
//! use site_audit::{Config, run_analysis};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     project_root: std::path::PathBuf::from("./frontend"),
//!     base_url: "https://staging.example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_analysis(config).await?;
//! println!("{} findings, {} issues", report.findings.len(), report.issues.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Checks run one after another; a
//! current-thread runtime is enough.

pub mod backend_config;
pub mod bundle;
pub mod config;
pub mod error_handling;
pub mod initialization;
mod models;
mod parse;
pub mod probe;
pub mod report;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Stage};
pub use models::AuditLog;
pub use run::{run_analysis, AnalysisReport};

// Internal run module (contains the sequential driver)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{debug, info};
    use strum::IntoEnumIterator;

    use crate::backend_config::check_backend_config;
    use crate::bundle::scan_bundles;
    use crate::config::{Config, Stage};
    use crate::initialization::init_client;
    use crate::models::AuditLog;
    use crate::probe::{check_endpoints, check_seo};
    use crate::report::{print_report, render_report, write_report};

    /// Results of an analysis run.
    #[derive(Debug, Clone)]
    pub struct AnalysisReport {
        /// Positive observations, in the order they were recorded
        pub findings: Vec<String>,
        /// Negative observations and caught errors, in the order they were recorded
        pub issues: Vec<String>,
        /// Path the report was written to
        pub report_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    fn stage_banner(stage: Stage) -> &'static str {
        match stage {
            Stage::Bundle => "🔍 ANALYZING REACT APP STRUCTURE...",
            Stage::Config => "🗄️  CHECKING SUPABASE CONNECTION...",
            Stage::Endpoints => "🌐 CHECKING LIVE SITE FUNCTIONALITY...",
            Stage::Seo => "🎯 CHECKING SEO STRUCTURE...",
        }
    }

    /// Runs every enabled check in order, then prints and writes the report.
    ///
    /// Check failures (unreadable files, network errors, non-200 responses)
    /// are recorded as issues and never abort the run.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid (bad base URL, relative endpoint, zero timeout)
    /// - The HTTP client cannot be built
    /// - The report file cannot be written
    pub async fn run_analysis(config: Config) -> Result<AnalysisReport> {
        config.validate().context("Invalid configuration")?;
        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        let start = Instant::now();
        let mut log = AuditLog::new();

        info!(
            "🚀 STARTING {} SYSTEM ANALYSIS...",
            config.site_name.to_uppercase()
        );

        for stage in Stage::iter() {
            if !config.is_enabled(stage) {
                info!("Skipping {} (--skip)", stage);
                continue;
            }

            info!("{}", stage_banner(stage));
            let stage_start = Instant::now();
            match stage {
                Stage::Bundle => scan_bundles(&config, &mut log),
                Stage::Config => check_backend_config(&config, &mut log),
                Stage::Endpoints => check_endpoints(&client, &config, &mut log).await,
                Stage::Seo => check_seo(&client, &config, &mut log).await,
            }
            debug!(
                "{} finished in {:.2}s ({} findings, {} issues so far)",
                stage,
                stage_start.elapsed().as_secs_f64(),
                log.findings().len(),
                log.issues().len()
            );
        }

        print_report(&config.site_name, &log);

        let report_path = config.report_path();
        write_report(&report_path, &render_report(&config.site_name, &log))
            .with_context(|| format!("Failed to write report to {}", report_path.display()))?;

        let (findings, issues) = log.into_parts();
        Ok(AnalysisReport {
            findings,
            issues,
            report_path,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }
}

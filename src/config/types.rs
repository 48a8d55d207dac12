//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use strum_macros::{Display as DisplayMacro, EnumIter as EnumIterMacro};

use crate::config::constants::{
    DEFAULT_ASSETS_DIR, DEFAULT_BASE_URL, DEFAULT_ENDPOINTS, DEFAULT_PROJECT_ROOT,
    DEFAULT_REPORT_FILE, DEFAULT_SITE_NAME, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// One check of the analysis run, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, EnumIterMacro, DisplayMacro)]
pub enum Stage {
    /// Regex scan of the bundled script files
    #[strum(serialize = "bundle scan")]
    Bundle,
    /// Backend configuration file check
    #[strum(serialize = "backend config")]
    Config,
    /// Live endpoint status check
    #[strum(serialize = "live endpoints")]
    Endpoints,
    /// SEO markup check of the home page
    #[strum(serialize = "SEO structure")]
    Seo,
}

fn default_endpoints() -> Vec<String> {
    DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()).collect()
}

/// Analysis configuration.
///
/// Every field has a default matching the fixed values the tool was built
/// around, so `site_audit` with no arguments analyzes the original project.
/// The struct can also be constructed programmatically.
///
/// # Examples
///
/// ```no_run
/// use site_audit::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     project_root: PathBuf::from("./frontend"),
///     base_url: "https://staging.example.com".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "site_audit",
    about = "Scans a web app checkout's script bundles and probes its live site."
)]
pub struct Config {
    /// Project checkout to analyze
    #[arg(long, value_parser, default_value = DEFAULT_PROJECT_ROOT)]
    pub project_root: PathBuf,

    /// Script bundle directory, relative to the project root
    #[arg(long, value_parser, default_value = DEFAULT_ASSETS_DIR)]
    pub assets_dir: PathBuf,

    /// Base URL of the live site
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Path to request on the live site (repeatable)
    #[arg(long = "endpoint", default_values_t = default_endpoints())]
    pub endpoints: Vec<String>,

    /// Report output path (default: <project-root>/system_analysis_report.txt)
    #[arg(long, value_parser)]
    pub report_path: Option<PathBuf>,

    /// Label printed in the report header
    #[arg(long, default_value = DEFAULT_SITE_NAME)]
    pub site_name: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Check to skip (repeatable): bundle|config|endpoints|seo
    #[arg(long, value_enum)]
    pub skip: Vec<Stage>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from(DEFAULT_PROJECT_ROOT),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoints: default_endpoints(),
            report_path: None,
            site_name: DEFAULT_SITE_NAME.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            skip: Vec::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Directory scanned for script bundles.
    pub fn assets_path(&self) -> PathBuf {
        self.project_root.join(&self.assets_dir)
    }

    /// Where the report is written.
    pub fn report_path(&self) -> PathBuf {
        self.report_path
            .clone()
            .unwrap_or_else(|| self.project_root.join(DEFAULT_REPORT_FILE))
    }

    /// Whether `stage` runs in this configuration.
    pub fn is_enabled(&self, stage: Stage) -> bool {
        !self.skip.contains(&stage)
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Checks values clap cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL is not an http(s) URL, if an
    /// endpoint does not start with `/`, or if the timeout is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(self.base_url.clone(), e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl(
                self.base_url.clone(),
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }
        if let Some(bad) = self.endpoints.iter().find(|e| !e.starts_with('/')) {
            return Err(ConfigError::InvalidEndpoint(bad.clone()));
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

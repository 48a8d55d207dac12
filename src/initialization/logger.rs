//! Logger initialization.
//!
//! Plain lines carry the check area that logged them (`bundle`, `probe::seo`,
//! ...) so stage output can be told apart in a long run.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter};

const CRATE_TARGET: &str = "site_audit";

/// Shortens a log target to the check area within this crate.
///
/// `site_audit::probe::seo` becomes `probe::seo`, the crate root becomes
/// `run`, and foreign targets are left as they are.
fn check_area(target: &str) -> &str {
    match target.strip_prefix(CRATE_TARGET) {
        Some("") => "run",
        Some(rest) => rest.strip_prefix("::").unwrap_or(target),
        None => target,
    }
}

fn level_marker(level: Level) -> (&'static str, ColoredString) {
    let name = level.to_string();
    match level {
        Level::Error => ("❌", name.red()),
        Level::Warn => ("⚠️", name.yellow()),
        Level::Info => ("✔️", name.green()),
        Level::Debug => ("🔍", name.blue()),
        Level::Trace => ("🔬", name.purple()),
    }
}

/// Installs the global logger.
///
/// `RUST_LOG` is read first; `level` then applies to this crate and as the
/// default for everything else. HTML parser and HTTP stack chatter is capped.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module(CRATE_TARGET, level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let msg = serde_json::to_string(&record.args().to_string())
                    .unwrap_or_else(|_| "\"\"".into());
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"area\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    check_area(record.target()),
                    msg
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let (emoji, level) = level_marker(record.level());
                writeln!(
                    buf,
                    "{} {} [{}] {}: {}",
                    chrono::Local::now().format("%H:%M:%S"),
                    emoji,
                    level,
                    check_area(record.target()).dimmed(),
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_area_strips_crate_prefix() {
        assert_eq!(check_area("site_audit::probe::seo"), "probe::seo");
        assert_eq!(check_area("site_audit::bundle"), "bundle");
        assert_eq!(check_area("site_audit"), "run");
        assert_eq!(check_area("site_auditor::x"), "site_auditor::x");
        assert_eq!(check_area("reqwest::connect"), "reqwest::connect");
    }

    #[test]
    fn test_init_logger_second_call_errors_instead_of_panicking() {
        // Only one logger can be installed per process; whichever call comes
        // second must report LoggerError.
        let first = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(first.is_ok() || matches!(first, Err(InitializationError::LoggerError(_))));
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }
}

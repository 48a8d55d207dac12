//! Tests for CLI option parsing.

use clap::Parser;
use site_audit::{Config, LogFormat, LogLevel, Stage};
use std::path::PathBuf;

#[test]
fn test_cli_no_args_uses_fixed_defaults() {
    let config = Config::try_parse_from(["site_audit"]).expect("Should parse without args");
    assert_eq!(
        config.project_root,
        PathBuf::from("/home/ubuntu/trustup24-frontend")
    );
    assert_eq!(config.assets_dir, PathBuf::from("assets"));
    assert_eq!(config.base_url, "http://trustup24.ae");
    assert_eq!(
        config.endpoints,
        vec![
            "/",
            "/anbieter-finden.html",
            "/matching-finden.html",
            "/anbieter-vergleichen.html",
        ]
    );
    assert_eq!(config.timeout_seconds, 10);
    assert_eq!(config.site_name, "TRUSTUP24");
    assert!(config.skip.is_empty());
    // LogLevel doesn't implement PartialEq, so we compare via conversion
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::from(LogLevel::Info)
    );
    match config.log_format {
        LogFormat::Plain => {}
        LogFormat::Json => panic!("Default format should be Plain"),
    }
}

#[test]
fn test_cli_all_overrides() {
    let args = [
        "site_audit",
        "--project-root",
        "/srv/app",
        "--assets-dir",
        "dist/assets",
        "--base-url",
        "https://staging.example.com",
        "--endpoint",
        "/health",
        "--report-path",
        "/tmp/report.txt",
        "--site-name",
        "staging",
        "--timeout-seconds",
        "3",
        "--user-agent",
        "audit/1.0",
        "--skip",
        "bundle",
        "--skip",
        "config",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ];
    let config = Config::try_parse_from(args).expect("Should parse all options");

    assert_eq!(config.assets_path(), PathBuf::from("/srv/app/dist/assets"));
    assert_eq!(config.base_url, "https://staging.example.com");
    assert_eq!(config.endpoints, vec!["/health"]);
    assert_eq!(config.report_path(), PathBuf::from("/tmp/report.txt"));
    assert_eq!(config.site_name, "staging");
    assert_eq!(config.timeout_seconds, 3);
    assert_eq!(config.user_agent, "audit/1.0");
    assert_eq!(config.skip, vec![Stage::Bundle, Stage::Config]);
    assert!(config.is_enabled(Stage::Endpoints));
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::Debug
    );
    assert!(matches!(config.log_format, LogFormat::Json));
    assert!(config.validate().is_ok());
}

#[test]
fn test_cli_rejects_unknown_stage() {
    let result = Config::try_parse_from(["site_audit", "--skip", "database"]);
    assert!(result.is_err(), "Unknown stage should be rejected");
}

#[test]
fn test_cli_rejects_non_numeric_timeout() {
    let result = Config::try_parse_from(["site_audit", "--timeout-seconds", "ten"]);
    assert!(result.is_err(), "Non-numeric timeout should be rejected");
}

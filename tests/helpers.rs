// Shared test helpers for building throwaway project checkouts.
//
// This module provides common utilities used across multiple test files to reduce duplication.

// Not every test file uses every helper
#![allow(dead_code)]

use std::fs;
use std::net::TcpListener;
use std::path::PathBuf;

use site_audit::{Config, LogFormat, LogLevel};
use tempfile::TempDir;

/// A temporary project root with an `assets/` directory.
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp project dir");
        fs::create_dir(dir.path().join("assets")).expect("Failed to create assets dir");
        Self { dir }
    }

    /// Writes a script bundle under `assets/`.
    pub fn asset(self, name: &str, content: &str) -> Self {
        fs::write(self.dir.path().join("assets").join(name), content)
            .expect("Failed to write asset");
        self
    }

    /// Writes a file at the project root.
    pub fn root_file(self, name: &str, content: &str) -> Self {
        fs::write(self.dir.path().join(name), content).expect("Failed to write root file");
        self
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub fn report_path(&self) -> PathBuf {
        self.dir.path().join("system_analysis_report.txt")
    }
}

/// Creates a Config pointing at `project` and `base_url`, with quiet logging.
pub fn create_test_config(project: &TestProject, base_url: &str) -> Config {
    Config {
        project_root: project.root(),
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        user_agent: "site_audit_test/1.0".to_string(),
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        ..Default::default()
    }
}

/// Returns a base URL on a local port nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind ephemeral port");
    let port = listener
        .local_addr()
        .expect("Failed to read local addr")
        .port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Splits a written report into its finding and issue entries.
pub fn parse_report_entries(report: &str) -> (Vec<String>, Vec<String>) {
    let mut findings = Vec::new();
    let mut issues = Vec::new();
    let mut in_issues = false;
    for line in report.lines() {
        if line.starts_with("ISSUES (") {
            in_issues = true;
        } else if let Some(entry) = line.strip_prefix("• ") {
            if in_issues {
                issues.push(entry.to_string());
            } else {
                findings.push(entry.to_string());
            }
        }
    }
    (findings, issues)
}

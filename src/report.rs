//! Report rendering and output.
//!
//! The written report lists every finding and every issue exactly once, in the
//! order they were recorded. The console rendering carries the same entries
//! with a wider banner and a note when there are no issues.

use std::fs;
use std::io;
use std::path::Path;

use colored::*;

use crate::config::{CONSOLE_RULE_WIDTH, REPORT_RULE_WIDTH};
use crate::models::AuditLog;

fn report_title(site_name: &str) -> String {
    let name = site_name.trim().to_uppercase();
    if name.is_empty() {
        "SYSTEM ANALYSIS REPORT".to_string()
    } else {
        format!("{} SYSTEM ANALYSIS REPORT", name)
    }
}

// Each entry renders as exactly one line
fn bullets<'a>(prefix: &'a str, entries: &'a [String]) -> impl Iterator<Item = String> + 'a {
    entries
        .iter()
        .map(move |entry| format!("{}{}", prefix, entry.replace(['\n', '\r'], " ")))
}

fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Renders the plain-text report written to disk.
pub fn render_report(site_name: &str, log: &AuditLog) -> String {
    let mut lines = vec![
        report_title(site_name),
        "=".repeat(REPORT_RULE_WIDTH),
        String::new(),
        "FINDINGS:".to_string(),
    ];
    lines.extend(bullets("• ", log.findings()));
    lines.push(String::new());
    lines.push(format!("ISSUES ({}):", log.issues().len()));
    lines.extend(bullets("• ", log.issues()));
    join_lines(lines)
}

/// Renders the console version of the report.
pub fn render_console_report(site_name: &str, log: &AuditLog) -> String {
    let rule = "=".repeat(CONSOLE_RULE_WIDTH);
    let mut lines = vec![
        String::new(),
        rule.clone(),
        format!("📋 {}", report_title(site_name).bold()),
        rule,
        String::new(),
        "✅ FINDINGS:".green().to_string(),
    ];
    lines.extend(bullets("  • ", log.findings()));
    lines.push(String::new());
    lines.push(
        format!("❌ ISSUES FOUND ({}):", log.issues().len())
            .red()
            .to_string(),
    );
    lines.extend(bullets("  • ", log.issues()));
    if log.issues().is_empty() {
        lines.push("  🎉 No critical issues found!".to_string());
    }
    join_lines(lines)
}

/// Prints the console report to stdout.
pub fn print_report(site_name: &str, log: &AuditLog) {
    print!("{}", render_console_report(site_name, log));
}

/// Writes the report to `path`, creating missing parent directories.
///
/// # Errors
///
/// Returns the `io::Error` from creating directories or writing the file.
pub fn write_report(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}

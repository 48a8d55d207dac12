//! Bundle scanner.
//!
//! Lists the built `*.js` files of the checked-out web app and records what
//! regex extraction finds in each: declared components, routes, API-call
//! targets, backend client usage and form handling.

mod patterns;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::{Config, BACKEND_KEYWORD, SCRIPT_EXTENSION};
use crate::models::AuditLog;

pub use patterns::{analyze_script_content, ScriptAnalysis};

/// Lists the script files directly inside `assets_dir`, sorted by file name.
///
/// Only files with a `.js` extension are returned, including symlinks to
/// files; subdirectories are not descended into.
///
/// # Errors
///
/// Returns the `io::Error` from reading the directory listing.
pub fn list_script_files(assets_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(assets_dir)? {
        let path = entry?.path();
        let is_script = path
            .extension()
            .is_some_and(|ext| ext == SCRIPT_EXTENSION);
        if is_script && path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Records the findings for one analyzed script.
pub fn record_script_analysis(file: &str, analysis: &ScriptAnalysis, log: &mut AuditLog) {
    if !analysis.components.is_empty() {
        let names: Vec<&str> = analysis.components.iter().map(String::as_str).collect();
        info!("  📦 Found components: {}", names.join(", "));
        log.finding(format!("Components in {}: {}", file, names.join(", ")));
    }

    if !analysis.routes.is_empty() {
        info!("  🛣️  Found routes: {}", analysis.routes.join(", "));
        log.finding(format!("Routes in {}: {}", file, analysis.routes.join(", ")));
    }

    if !analysis.api_calls.is_empty() {
        info!("  🌐 API calls found: {}", analysis.api_calls.join(", "));
        log.finding(format!(
            "API calls in {}: {}",
            file,
            analysis.api_calls.join(", ")
        ));
    }

    if analysis.backend_client_calls > 0 {
        log.finding(format!(
            "Supabase client calls in {}: {}",
            file, analysis.backend_client_calls
        ));
    }

    if analysis.backend_integration {
        info!("  ✅ Supabase integration detected");
        log.finding(format!("Supabase integration found in {}", file));
    }

    if analysis.form_handling {
        info!("  📝 Form handling detected");
        log.finding(format!("Form handling found in {}", file));
    }
}

/// Scans every script bundle under the configured assets directory.
///
/// A missing assets directory and unreadable files are recorded as issues;
/// the scan continues past a file it cannot read.
pub fn scan_bundles(config: &Config, log: &mut AuditLog) {
    let assets_dir = config.assets_path();
    if !assets_dir.is_dir() {
        log.issue("❌ No assets directory found");
        return;
    }

    let files = match list_script_files(&assets_dir) {
        Ok(files) => files,
        Err(e) => {
            log.issue(format!(
                "❌ Could not list {}: {}",
                assets_dir.display(),
                e
            ));
            return;
        }
    };

    info!("Found {} JavaScript files:", files.len());
    for path in &files {
        let name = display_name(path);
        let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        info!("  - {} ({} bytes)", name, size);

        match fs::read_to_string(path) {
            Ok(content) => {
                debug!("Analyzing {} for {} markers", name, BACKEND_KEYWORD);
                info!("📊 ANALYZING {}...", name);
                let analysis = analyze_script_content(&content);
                record_script_analysis(&name, &analysis, log);
            }
            Err(e) => log.issue(format!("❌ Could not read {}: {}", name, e)),
        }
    }
}

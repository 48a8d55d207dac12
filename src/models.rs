//! Findings and issues accumulated during a run.

use crate::utils::sanitize::sanitize_report_entry;

/// Append-only record of what the checks observed.
///
/// `findings` are positive observations, `issues` negative ones or errors.
/// Both keep insertion order; nothing is ever removed or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditLog {
    findings: Vec<String>,
    issues: Vec<String>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a positive observation.
    ///
    /// Findings quote scanned text (route values, page titles), so they get the
    /// same single-line sanitizing as issues.
    pub fn finding(&mut self, text: impl AsRef<str>) {
        let text = sanitize_report_entry(text.as_ref());
        log::debug!("finding: {}", text);
        self.findings.push(text);
    }

    /// Records a negative observation or a caught error.
    ///
    /// Issue text often embeds error messages, so it is sanitized, capped and
    /// folded onto one line.
    pub fn issue(&mut self, text: impl AsRef<str>) {
        let text = sanitize_report_entry(text.as_ref());
        log::debug!("issue: {}", text);
        self.issues.push(text);
    }

    pub fn findings(&self) -> &[String] {
        &self.findings
    }

    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.findings, self.issues)
    }
}

//! Output formatting for scan results.
//!
//! Two output formats:
//! - Pretty: grouped human-readable text
//! - JSON: structured output for CI consumption

use serde::{Deserialize, Serialize};

use crate::detect::{Finding, Severity};

/// Fixed message for a document with no findings.
pub const CLEAN_MESSAGE: &str = "No fluff detected!";

/// Render findings as grouped human-readable text.
///
/// Errors come first under an error-count header, then warnings under a
/// warning-count header, each preserving its original relative order.
pub fn render(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return CLEAN_MESSAGE.to_string();
    }

    let errors: Vec<&Finding> = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .collect();
    let warnings: Vec<&Finding> = findings
        .iter()
        .filter(|f| f.severity == Severity::Warning)
        .collect();

    let mut sections = Vec::new();
    if !errors.is_empty() {
        sections.push(render_section(format!("{} ERROR(S):", errors.len()), &errors));
    }
    if !warnings.is_empty() {
        sections.push(render_section(
            format!("{} WARNING(S):", warnings.len()),
            &warnings,
        ));
    }
    sections.join("\n")
}

fn render_section(header: String, findings: &[&Finding]) -> String {
    let mut out = vec![header];
    for f in findings {
        // First 60 characters of the trimmed source line.
        let content: String = f.content.as_deref().unwrap_or("").chars().take(60).collect();
        out.push(format!("  Line {}: {}\n    → {}", f.line, f.pattern, content));
    }
    out.join("\n")
}

/// JSON report for a whole run.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub files: Vec<JsonFileReport>,
    pub total: usize,
}

/// JSON report for a single scanned file.
#[derive(Serialize, Deserialize)]
pub struct JsonFileReport {
    pub path: String,
    pub findings: Vec<Finding>,
    pub total: usize,
}

/// Write results for all scanned files in JSON format.
pub fn write_json(files: Vec<JsonFileReport>) -> anyhow::Result<()> {
    let total = files.iter().map(|f| f.total).sum();
    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        files,
        total,
    };
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

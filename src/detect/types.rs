//! Core types for scan findings.

use serde::{Deserialize, Serialize};

/// Severity levels for findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            _ => Err(format!("unknown severity: {}", s)),
        }
    }
}

/// A single detected fluff issue.
///
/// Findings are immutable once created. The full set for a document is
/// ordered: hierarchy findings first, then pattern findings top to bottom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// 1-based line number in the source document.
    pub line: usize,
    /// Category label, e.g. "Meta-commentary".
    pub category: String,
    /// Full pattern description, e.g. "Meta-commentary: Date stamps".
    /// For hierarchy findings this is the level jump, e.g. "H1→H3".
    pub pattern: String,
    pub severity: Severity,
    /// Trimmed text of the matched line. Absent for hierarchy findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

//! The fixed fluff pattern tables.
//!
//! Three ordered tables, each mapping a case-insensitive regex to a
//! descriptive label. Severity is fixed per table: meta-commentary
//! findings are errors, conversational and redundancy findings are
//! warnings. Every table is checked exhaustively against every line,
//! so overlapping categories on one line each surface as their own
//! finding.

use lazy_static::lazy_static;
use regex::Regex;

use super::{Finding, Severity};

/// A compiled fluff pattern with its descriptive label.
pub struct FluffPattern {
    regex: Regex,
    /// Label in "Category: detail" form. The text before the first colon
    /// is the finding's category.
    description: &'static str,
}

impl FluffPattern {
    fn new(pattern: &str, description: &'static str) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap(),
            description,
        }
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Category label: the description text before the first colon.
    pub fn category(&self) -> &'static str {
        match self.description.split_once(':') {
            Some((category, _)) => category,
            None => self.description,
        }
    }
}

lazy_static! {
    /// Meta-commentary about the document itself: date stamps, status
    /// markers, justifications of changes. Reported as errors.
    pub static ref META_PATTERNS: Vec<FluffPattern> = vec![
        FluffPattern::new(
            r"(?i)(last\s+updated|updated on|created on|modified on)",
            "Meta-commentary: Date stamps",
        ),
        FluffPattern::new(
            r"(?i)(!|UPDATED!|FIXED!|NEW!|IMPROVED!)",
            "Status marker: Unnecessary emphasis",
        ),
        FluffPattern::new(
            r"(?i)(we\s+(have\s+)?recently|we\s+(have\s+)?now|we\s+chose|we\s+added)",
            "Meta-commentary: Change justification",
        ),
        FluffPattern::new(
            r"(?i)(this\s+is\s+(now|currently)\s+fixed|critical\s+fix)",
            "Status marker: Achievement callout",
        ),
        FluffPattern::new(
            r"(?i)(✅|✓|🎉|⚠️|🔴)",
            "Emoji: Unnecessary emphasis",
        ),
    ];

    /// Conversational phrasing that reads like a chat transcript.
    /// Reported as warnings.
    pub static ref CONVERSATIONAL_PATTERNS: Vec<FluffPattern> = vec![
        FluffPattern::new(
            r"(?i)(as\s+mentioned\s+(earlier|above|below)|see\s+examples?\s+(above|below))",
            "Transition: Cross-reference",
        ),
        FluffPattern::new(
            r"(?i)(for\s+those\s+who|if\s+you.*want\s+to|so\s+here'?s)",
            "Conversational: Informal setup",
        ),
        FluffPattern::new(
            r"(?i)(you'?ll?\s+want\s+to|you\s+should|you\s+need\s+to|you\s+can)",
            "Conversational: Second-person imperative",
        ),
        FluffPattern::new(
            r"(?i)(gotchas|heads?\s+up|questions\?|keep\s+this\s+in\s+mind)",
            "Conversational: Informal tone",
        ),
        FluffPattern::new(
            r"(?i)(tldr|quick\s+summary)",
            "Conversational: Slang",
        ),
        FluffPattern::new(
            r"(?i)(here'?s\s+what\s+happens|this\s+is\s+how\s+it\s+works)",
            "Narrative: Explanatory preamble",
        ),
    ];

    /// Redundant restatement and justification. Reported as warnings.
    pub static ref REDUNDANCY_PATTERNS: Vec<FluffPattern> = vec![
        FluffPattern::new(
            r"(?i)(previously|before,|in\s+the\s+old|the\s+old\s+way)",
            "Redundancy: Explaining what was changed",
        ),
        FluffPattern::new(
            r"(?i)(that\s+approach\s+had|which\s+provides|this\s+design|the\s+main\s+benefit)",
            "Redundancy: Justification",
        ),
        FluffPattern::new(
            r"(?i)(don'?t\s+do\s+this|not\s+recommended|avoid\s+this)",
            "Redundancy: Restating after example",
        ),
    ];
}

/// Check one line against all three tables.
///
/// Returns one finding per matching pattern, in table order (meta,
/// conversational, redundancy) and declaration order within a table.
/// No short-circuit: a single line can yield several findings.
pub fn scan_line(line: &str, line_number: usize) -> Vec<Finding> {
    let mut findings = Vec::new();
    check_table(line, line_number, &META_PATTERNS, Severity::Error, &mut findings);
    check_table(
        line,
        line_number,
        &CONVERSATIONAL_PATTERNS,
        Severity::Warning,
        &mut findings,
    );
    check_table(
        line,
        line_number,
        &REDUNDANCY_PATTERNS,
        Severity::Warning,
        &mut findings,
    );
    findings
}

fn check_table(
    line: &str,
    line_number: usize,
    table: &[FluffPattern],
    severity: Severity,
    findings: &mut Vec<Finding>,
) {
    for p in table {
        if p.regex.is_match(line) {
            findings.push(Finding {
                line: line_number,
                category: p.category().to_string(),
                pattern: p.description.to_string(),
                severity,
                content: Some(line.trim().to_string()),
            });
        }
    }
}

//! Heading hierarchy check.

use lazy_static::lazy_static;
use regex::Regex;

use super::{Finding, Severity};

lazy_static! {
    /// Leading #-run heading marker.
    static ref HEADING: Regex = Regex::new(r"^(#+)\s+").unwrap();
}

/// Flag headings whose level jumps more than one step deeper than the
/// immediately preceding heading (e.g. H1 directly to H3).
///
/// Only consecutive heading pairs are compared: decreases and single
/// steps never flag, regardless of where the hierarchy last was.
pub fn check_hierarchy(lines: &[&str]) -> Vec<Finding> {
    let headings: Vec<(usize, usize)> = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| HEADING.captures(line).map(|caps| (idx + 1, caps[1].len())))
        .collect();

    let mut findings = Vec::new();
    for pair in headings.windows(2) {
        let (_, prev_level) = pair[0];
        let (line, curr_level) = pair[1];
        if curr_level > prev_level + 1 {
            findings.push(Finding {
                line,
                category: "Hierarchy: Skipped heading level".to_string(),
                pattern: format!("H{}→H{}", prev_level, curr_level),
                severity: Severity::Warning,
                content: None,
            });
        }
    }
    findings
}

//! Document scanning: hierarchy check plus per-line pattern sweep.

use super::{headings, patterns, Finding};

/// Lines whose trimmed text starts with a code-fence or frontmatter
/// delimiter are exempt from pattern checks.
///
/// This is a plain prefix test, not a block-aware parse: content between
/// a pair of fence markers is still checked, and only lines literally
/// starting with the delimiter are skipped.
fn is_exempt(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("```") || trimmed.starts_with("---")
}

/// Scan a document for fluff findings.
///
/// Hierarchy findings come first in heading order, then pattern findings
/// line by line, top to bottom. The whole document is always processed;
/// there is no early exit.
pub fn detect(text: &str) -> Vec<Finding> {
    let lines: Vec<&str> = text.split('\n').collect();

    let mut findings = headings::check_hierarchy(&lines);

    for (idx, line) in lines.iter().enumerate() {
        if is_exempt(line) {
            continue;
        }
        findings.extend(patterns::scan_line(line, idx + 1));
    }

    findings
}

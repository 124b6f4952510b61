//! Command-line interface for fluffcheck.

use clap::Parser;
use colored::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::detect::{self, Finding};
use crate::report::{self, JsonFileReport};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Extensions picked up when walking a directory argument.
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Documentation quality linter - detect fluff patterns in markdown.
///
/// Fluffcheck scans markdown documents for prose patterns that dilute
/// terse documentation: meta-commentary (date stamps, change
/// justifications, status markers), conversational phrasing, redundant
/// justification, and skipped heading levels.
#[derive(Parser)]
#[command(name = "fluffcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Markdown files or directories to scan
    pub paths: Vec<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Collect markdown files under a directory, sorted for stable output.
fn collect_markdown_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            // Skip hidden directories, but never the root itself.
            let name = e.file_name().to_string_lossy();
            e.depth() == 0 || !(e.file_type().is_dir() && name.starts_with('.'))
        })
    {
        let entry = entry?;
        if entry.file_type().is_file() {
            let ext = entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("");
            if MARKDOWN_EXTENSIONS.contains(&ext) {
                files.push(entry.path().to_path_buf());
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Run a scan over all CLI paths. Returns the process exit code.
///
/// Exit code is 0 only when every processed file was clean. A missing
/// path is reported and skipped without affecting the tally.
pub fn run(args: &Cli) -> anyhow::Result<i32> {
    if args.paths.is_empty() {
        println!("Usage: fluffcheck <markdown-file> [<markdown-file> ...]");
        return Ok(EXIT_FAILED);
    }

    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let json = args.format == "json";
    let mut json_files = Vec::new();
    let mut total = 0usize;

    for path in &args.paths {
        if !path.exists() {
            eprintln!("File not found: {}", path.display());
            continue;
        }

        let files = if path.is_dir() {
            collect_markdown_files(path)?
        } else {
            vec![path.clone()]
        };

        for file in files {
            let text = std::fs::read_to_string(&file)?;
            let findings = detect::detect(&text);
            total += findings.len();

            if json {
                json_files.push(JsonFileReport {
                    path: file.to_string_lossy().to_string(),
                    total: findings.len(),
                    findings,
                });
            } else {
                print_file_report(&file, &findings);
            }
        }
    }

    if json {
        report::write_json(json_files)?;
    }

    if total == 0 {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}

/// Print the per-file header and report for pretty output.
fn print_file_report(path: &Path, findings: &[Finding]) {
    println!();
    println!("{}", path.display().to_string().cyan().bold());
    if findings.is_empty() {
        println!("{}", report::CLEAN_MESSAGE.green());
    } else {
        println!("{}", report::render(findings));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_markdown_files() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("b.md"), "# B\n").unwrap();
        std::fs::write(temp.path().join("a.markdown"), "# A\n").unwrap();
        std::fs::write(temp.path().join("notes.txt"), "skip me\n").unwrap();

        let nested = temp.path().join("docs");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("c.md"), "# C\n").unwrap();

        let hidden = temp.path().join(".git");
        std::fs::create_dir(&hidden).unwrap();
        std::fs::write(hidden.join("d.md"), "# D\n").unwrap();

        let files = collect_markdown_files(temp.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.markdown", "b.md", "c.md"]);
    }

    #[test]
    fn test_no_arguments_is_usage_failure() {
        let args = Cli {
            paths: vec![],
            format: "pretty".to_string(),
        };
        assert_eq!(run(&args).unwrap(), EXIT_FAILED);
    }

    #[test]
    fn test_invalid_format_is_error() {
        let args = Cli {
            paths: vec![PathBuf::from("README.md")],
            format: "yaml".to_string(),
        };
        assert_eq!(run(&args).unwrap(), EXIT_ERROR);
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let temp = TempDir::new().unwrap();
        let args = Cli {
            paths: vec![temp.path().join("no-such-file.md")],
            format: "pretty".to_string(),
        };
        assert_eq!(run(&args).unwrap(), EXIT_SUCCESS);
    }

    #[test]
    fn test_findings_produce_failure_exit() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("doc.md");
        std::fs::write(&file, "Last updated: 2024-01-01\n").unwrap();

        let args = Cli {
            paths: vec![file],
            format: "pretty".to_string(),
        };
        assert_eq!(run(&args).unwrap(), EXIT_FAILED);
    }

    #[test]
    fn test_clean_file_exits_success() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("doc.md");
        std::fs::write(&file, "# Parser\n\nThe parser builds a syntax tree.\n").unwrap();

        let args = Cli {
            paths: vec![file],
            format: "pretty".to_string(),
        };
        assert_eq!(run(&args).unwrap(), EXIT_SUCCESS);
    }

    #[test]
    fn test_missing_file_does_not_abort_remaining() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("doc.md");
        std::fs::write(&file, "TLDR\n").unwrap();

        let args = Cli {
            paths: vec![temp.path().join("gone.md"), file],
            format: "pretty".to_string(),
        };
        // The second argument is still processed and its finding counted.
        assert_eq!(run(&args).unwrap(), EXIT_FAILED);
    }
}

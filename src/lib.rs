//! Fluffcheck - documentation fluff linter.
//!
//! Fluffcheck scans markdown documents for prose patterns that violate
//! terse, AI-oriented documentation style: meta-commentary (date stamps,
//! change justifications, status markers), conversational phrasing,
//! redundant justification, and skipped heading levels.
//!
//! # Architecture
//!
//! - `detect`: the three fixed pattern tables, the heading hierarchy
//!   check, and the `detect` entry point
//! - `report`: output formatting (pretty text, JSON)
//! - `cli`: argument handling and the per-file driver

pub mod cli;
pub mod detect;
pub mod report;

pub use detect::{detect, Finding, Severity};

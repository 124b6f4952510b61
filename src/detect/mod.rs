//! Fluff detection for markdown documents.

mod headings;
mod patterns;
mod scanner;
mod types;

pub use patterns::{FluffPattern, CONVERSATIONAL_PATTERNS, META_PATTERNS, REDUNDANCY_PATTERNS};
pub use scanner::detect;
pub use types::{Finding, Severity};

// crates/usecase/src/dto.rs
use std::path::PathBuf;

use line_tally_domain::LineTally;
use serde::Serialize;

/// A file that was discovered but could not be counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct CountLinesOutput {
    /// Totals over every file that was read to completion.
    pub tally: LineTally,
    /// Number of files the enumerator returned, skipped ones included.
    pub discovered: usize,
    pub skipped: Vec<SkippedFile>,
}

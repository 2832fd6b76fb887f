// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use line_tally_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Input parameters controlling file enumeration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileEnumerationPlan {
    pub roots: Vec<PathBuf>,
    /// Extensions without a leading dot, compared case-insensitively.
    pub extensions: Vec<String>,
    pub recursive: bool,
    pub include_hidden: bool,
    pub follow_links: bool,
    /// Honour `.gitignore` / `.ignore` files while walking.
    pub respect_ignore_files: bool,
}

/// DTO representing a file entry discovered by an input port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntryDto {
    pub path: PathBuf,
    pub ext: String,
    pub name: String,
    pub size: u64,
}

/// Port for enumerating file entries.
pub trait FileEnumerator: Send + Sync {
    fn collect(&self, plan: &FileEnumerationPlan) -> Result<Vec<FileEntryDto>>;
}

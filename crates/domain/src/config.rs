// crates/domain/src/config.rs
use std::path::PathBuf;

use line_tally_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

use crate::markers::MarkerSet;

/// Marker lists exactly as the user wrote them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMarkers {
    pub line: Vec<String>,
    pub block_starts: Vec<String>,
    pub block_ends: Vec<String>,
    pub continuation: Vec<String>,
}

/// Unvalidated configuration, as produced by a loader and amended by CLI overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDraft {
    pub directories: Vec<PathBuf>,
    pub extensions: Vec<String>,
    pub recursive: bool,
    pub markers: RawMarkers,
}

/// Validated settings for one counting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountingConfig {
    pub directories: Vec<PathBuf>,
    /// Extensions without a leading dot; matched case-insensitively.
    pub extensions: Vec<String>,
    pub recursive: bool,
    pub markers: MarkerSet,
}

impl ConfigDraft {
    /// Checks the draft and reports every problem in a single error.
    pub fn validate(self) -> DomainResult<CountingConfig> {
        let RawMarkers { line, block_starts, block_ends, continuation } = self.markers;
        let mut problems = MarkerSet::problems(&line, &block_starts, &block_ends, &continuation);

        if self.directories.is_empty() {
            problems.push("at least one directory must be specified".to_string());
        }

        let extensions: Vec<String> =
            self.extensions.iter().map(|e| e.trim().trim_start_matches('.').to_string()).collect();
        if extensions.is_empty() {
            problems.push("at least one extension must be specified".to_string());
        } else if extensions.iter().any(String::is_empty) {
            problems.push("empty extension".to_string());
        }

        if !problems.is_empty() {
            return Err(DomainError::InvalidConfiguration { reason: problems.join("; ") });
        }

        Ok(CountingConfig {
            directories: self.directories,
            extensions,
            recursive: self.recursive,
            markers: MarkerSet::from_parallel_lists(line, block_starts, block_ends, continuation),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::BlockMarker;

    fn draft() -> ConfigDraft {
        ConfigDraft {
            directories: vec![PathBuf::from("src")],
            extensions: vec![".CPP".into(), "h".into()],
            recursive: true,
            markers: RawMarkers {
                line: vec!["//".into()],
                block_starts: vec!["/*".into()],
                block_ends: vec!["*/".into()],
                continuation: vec!["\\".into()],
            },
        }
    }

    #[test]
    fn valid_draft_builds_marker_set() {
        let config = draft().validate().expect("valid");
        assert_eq!(config.extensions, vec!["CPP".to_string(), "h".to_string()]);
        assert_eq!(config.markers.block_markers(), [BlockMarker::new("/*", "*/")]);
        assert_eq!(config.markers.continuation_markers(), ["\\".to_string()]);
        assert!(config.recursive);
    }

    #[test]
    fn all_problems_are_reported_together() {
        let mut d = draft();
        d.directories.clear();
        d.extensions.clear();
        d.markers.block_ends.clear();

        let err = d.validate().unwrap_err();
        let DomainError::InvalidConfiguration { reason } = err else {
            panic!("unexpected error kind");
        };
        assert!(reason.contains("block comment starts (1) and ends (0)"));
        assert!(reason.contains("directory"));
        assert!(reason.contains("extension"));
    }

    #[test]
    fn empty_marker_lists_are_valid() {
        let mut d = draft();
        d.markers = RawMarkers::default();
        let config = d.validate().expect("markers are optional");
        assert!(config.markers.line_markers().is_empty());
    }
}

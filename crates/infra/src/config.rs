// crates/infra/src/config.rs
//! Configuration file loading.
//!
//! 拡張子で形式を選ぶ: `.json` は JSON、`.yaml`/`.yml` は YAML (feature `yaml`)、
//! それ以外は `KEY = value` 形式として読む。

use std::path::{Path, PathBuf};

use line_tally_domain::{ConfigDraft, RawMarkers};
use line_tally_shared_kernel::{ErrorContext, InfrastructureError, Result};
use serde::Deserialize;

use crate::persistence::FileReader;

/// Structured (JSON / YAML) configuration document.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigDocument {
    directories: Vec<PathBuf>,
    extensions: Vec<String>,
    comments: Vec<String>,
    block_comments: Vec<BlockCommentPair>,
    continuations: Vec<String>,
    recursive: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BlockCommentPair {
    start: String,
    end: String,
}

impl From<ConfigDocument> for ConfigDraft {
    fn from(doc: ConfigDocument) -> Self {
        let (block_starts, block_ends) = doc.block_comments.into_iter().map(|p| (p.start, p.end)).unzip();
        Self {
            directories: doc.directories,
            extensions: doc.extensions,
            recursive: doc.recursive,
            markers: RawMarkers { line: doc.comments, block_starts, block_ends, continuation: doc.continuations },
        }
    }
}

/// Reads `path` into an unvalidated [`ConfigDraft`].
pub fn load_config(path: &Path) -> Result<ConfigDraft> {
    let text = FileReader::read_to_string(path).map_err(|err| InfrastructureError::ConfigRead {
        path: path.to_path_buf(),
        details: err.to_string(),
    })?;
    log::debug!("loaded configuration from {}", path.display());

    let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => serde_json::from_str::<ConfigDocument>(&text)
            .map(ConfigDraft::from)
            .with_context(|| format!("parsing {}", path.display())),
        #[cfg(feature = "yaml")]
        Some("yaml" | "yml") => serde_yaml::from_str::<ConfigDocument>(&text)
            .map(ConfigDraft::from)
            .with_context(|| format!("parsing {}", path.display())),
        #[cfg(not(feature = "yaml"))]
        Some("yaml" | "yml") => Err(InfrastructureError::ConfigRead {
            path: path.to_path_buf(),
            details: "YAML support is not enabled in this build".to_string(),
        }
        .into()),
        _ => parse_key_value(&text)
            .map_err(|details| InfrastructureError::ConfigRead { path: path.to_path_buf(), details }.into()),
    }
}

/// Parses the `KEY = value` format. Repeated keys append to their list.
pub fn parse_key_value(text: &str) -> std::result::Result<ConfigDraft, String> {
    let mut draft = ConfigDraft::default();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(format!("line {line_no}: expected KEY = value"));
        };
        let value = value.trim().to_string();

        match key.trim().to_ascii_uppercase().as_str() {
            "DIRECTORY" => draft.directories.push(PathBuf::from(value)),
            "EXTENSION" => draft.extensions.push(value),
            "COMMENT" => draft.markers.line.push(value),
            "BLOCK_COMMENT_START" => draft.markers.block_starts.push(value),
            "BLOCK_COMMENT_END" => draft.markers.block_ends.push(value),
            "CONTINUATION" => draft.markers.continuation.push(value),
            "RECURSIVE_SEARCH" => {
                draft.recursive = parse_bool(&value)
                    .ok_or_else(|| format!("line {line_no}: '{value}' is not a boolean"))?;
            }
            other => return Err(format!("line {line_no}: unknown key '{other}'")),
        }
    }

    Ok(draft)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

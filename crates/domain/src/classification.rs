// crates/domain/src/classification.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Disposition of a single physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Contains at least one non-blank character of program text.
    Code,
    /// Empty or blank-only.
    Whitespace,
    /// A single-line comment, or a block comment that closes on this line.
    Comment,
    /// A single-line comment whose trailing continuation marker carries
    /// comment-ness onto the next line.
    ContinuingComment,
    /// Inside a block comment that is still open at the end of the line.
    BlockComment,
}

/// Counter bucket a classification is tallied under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

impl Classification {
    pub const fn kind(self) -> LineKind {
        match self {
            Self::Whitespace => LineKind::Blank,
            Self::Comment | Self::ContinuingComment | Self::BlockComment => LineKind::Comment,
            Self::Code => LineKind::Code,
        }
    }

    pub const fn is_comment(self) -> bool {
        matches!(self.kind(), LineKind::Comment)
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Blank => "Blank",
            Self::Comment => "Comment",
            Self::Code => "Code",
        };
        f.write_str(label)
    }
}

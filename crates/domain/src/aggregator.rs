// crates/domain/src/aggregator.rs
use line_tally_shared_kernel::{FileCount, LineCount};
use serde::{Deserialize, Serialize};

use crate::classification::{Classification, LineKind};

/// Point-in-time view of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTally {
    pub blank: LineCount,
    pub comment: LineCount,
    pub code: LineCount,
    pub files: FileCount,
}

impl LineTally {
    pub fn total(&self) -> LineCount {
        self.blank + self.comment + self.code
    }

    pub fn count(&self, kind: LineKind) -> LineCount {
        match kind {
            LineKind::Blank => self.blank,
            LineKind::Comment => self.comment,
            LineKind::Code => self.code,
        }
    }

    /// Percentage of all lines that fall under `kind`.
    ///
    /// An empty tally divides by one, so every share is `0.0`.
    pub fn share(&self, kind: LineKind) -> f64 {
        let total = self.total().value().max(1);
        self.count(kind).value() as f64 / total as f64 * 100.0
    }
}

/// Blank/comment/code/file counters fed by [`Classification`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregator {
    tally: LineTally,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, classification: Classification) {
        match classification.kind() {
            LineKind::Blank => self.tally.blank.increment(),
            LineKind::Comment => self.tally.comment.increment(),
            LineKind::Code => self.tally.code.increment(),
        }
    }

    /// Counts one completed file, independent of how many lines it had.
    pub fn record_file_processed(&mut self) {
        self.tally.files.increment();
    }

    pub fn snapshot(&self) -> LineTally {
        self.tally
    }

    /// Folds another aggregator's counters into this one.
    pub fn merge(mut self, other: Self) -> Self {
        self.tally.blank += other.tally.blank;
        self.tally.comment += other.tally.comment;
        self.tally.code += other.tally.code;
        self.tally.files += other.tally.files;
        self
    }
}

impl Extend<Classification> for Aggregator {
    fn extend<I: IntoIterator<Item = Classification>>(&mut self, iter: I) {
        for classification in iter {
            self.record(classification);
        }
    }
}

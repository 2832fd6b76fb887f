// crates/ports/src/progress.rs
use std::path::Path;

use line_tally_domain::LineTally;
use line_tally_shared_kernel::Result;

pub trait ProgressSink: Send + Sync {
    fn on_file(&self, path: &Path) -> Result<()>;
    fn on_skipped(&self, path: &Path, reason: &str) -> Result<()>;
    fn on_complete(&self, tally: &LineTally) -> Result<()>;
}

// crates/infra/src/progress.rs
use std::path::Path;

use line_tally_domain::LineTally;
use line_tally_ports::progress::ProgressSink;
use line_tally_shared_kernel::Result;

/// Reports progress through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn on_file(&self, path: &Path) -> Result<()> {
        log::info!("Parsing file {}", path.display());
        Ok(())
    }

    fn on_skipped(&self, path: &Path, reason: &str) -> Result<()> {
        log::warn!("skipping {}: {reason}", path.display());
        Ok(())
    }

    fn on_complete(&self, tally: &LineTally) -> Result<()> {
        log::debug!(
            "finished {} file(s): {} blank, {} comment, {} code",
            tally.files,
            tally.blank,
            tally.comment,
            tally.code
        );
        Ok(())
    }
}

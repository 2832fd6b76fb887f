// crates/ports/src/line_source.rs
use std::path::Path;

use line_tally_shared_kernel::Result;

/// Port for reading a file one line at a time.
pub trait LineSource: Send + Sync {
    /// Calls `visit` for every line of `path`, without its terminator, and
    /// returns the number of lines visited.
    ///
    /// An error may be returned after some lines were already visited; callers
    /// that need all-or-nothing semantics must buffer their own results.
    fn visit_lines(&self, path: &Path, visit: &mut dyn FnMut(&str)) -> Result<usize>;
}

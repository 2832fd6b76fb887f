// crates/usecase/src/orchestrator.rs
use std::path::Path;

use line_tally_domain::{Aggregator, Classifier, MarkerSet};
use line_tally_ports::{
    filesystem::{FileEntryDto, FileEnumerationPlan, FileEnumerator},
    line_source::LineSource,
    progress::ProgressSink,
};
use line_tally_shared_kernel::{ApplicationError, Result};

use crate::dto::{CountLinesOutput, SkippedFile};

/// Counts blank, comment and code lines over every file of a plan.
///
/// Each file gets its own [`Classifier`], so comment state never leaks from
/// one file into the next. Per-file tallies are only merged once the file was
/// read to completion; a file that fails part way contributes nothing.
pub struct CountLines<'a> {
    enumerator: &'a dyn FileEnumerator,
    source: &'a dyn LineSource,
    progress: Option<&'a dyn ProgressSink>,
}

impl<'a> CountLines<'a> {
    pub fn new(enumerator: &'a dyn FileEnumerator, source: &'a dyn LineSource) -> Self {
        Self { enumerator, source, progress: None }
    }

    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn run(&self, plan: &FileEnumerationPlan, markers: &MarkerSet) -> Result<CountLinesOutput> {
        let entries = self.enumerator.collect(plan).map_err(|source| ApplicationError::FileCollectionFailed {
            reason: "could not enumerate input files".to_string(),
            source: Some(Box::new(source)),
        })?;
        log::debug!("counting {} file(s)", entries.len());

        let outcomes = self.tally_entries(&entries, markers);

        let mut total = Aggregator::new();
        let mut skipped = Vec::new();
        for (entry, outcome) in entries.iter().zip(outcomes) {
            match outcome {
                Ok(file_tally) => total = total.merge(file_tally),
                Err(err) => {
                    let reason = err.to_string();
                    if let Some(progress) = self.progress {
                        progress.on_skipped(&entry.path, &reason)?;
                    }
                    skipped.push(SkippedFile { path: entry.path.clone(), reason });
                }
            }
        }

        let tally = total.snapshot();
        if let Some(progress) = self.progress {
            progress.on_complete(&tally)?;
        }

        Ok(CountLinesOutput { tally, discovered: entries.len(), skipped })
    }

    #[cfg(feature = "parallel")]
    fn tally_entries(&self, entries: &[FileEntryDto], markers: &MarkerSet) -> Vec<Result<Aggregator>> {
        use rayon::prelude::*;

        entries.par_iter().map(|entry| self.tally_file(&entry.path, markers)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn tally_entries(&self, entries: &[FileEntryDto], markers: &MarkerSet) -> Vec<Result<Aggregator>> {
        entries.iter().map(|entry| self.tally_file(&entry.path, markers)).collect()
    }

    fn tally_file(&self, path: &Path, markers: &MarkerSet) -> Result<Aggregator> {
        if let Some(progress) = self.progress {
            progress.on_file(path)?;
        }

        let mut classifier = Classifier::new(markers);
        let mut aggregator = Aggregator::new();
        self.source.visit_lines(path, &mut |line| aggregator.record(classifier.classify(line)))?;
        aggregator.record_file_processed();
        Ok(aggregator)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        io,
        path::PathBuf,
        sync::Mutex,
    };

    use line_tally_domain::{BlockMarker, LineTally};
    use line_tally_shared_kernel::{InfrastructureError, LineTallyError};

    use super::*;

    #[derive(Default)]
    struct StubEnumerator {
        entries: Mutex<Vec<FileEntryDto>>,
    }

    impl StubEnumerator {
        fn with_paths(paths: &[&str]) -> Self {
            let entries = paths
                .iter()
                .map(|p| FileEntryDto { path: p.into(), ext: "cpp".into(), name: (*p).into(), size: 0 })
                .collect();
            Self { entries: Mutex::new(entries) }
        }
    }

    impl FileEnumerator for StubEnumerator {
        fn collect(&self, _plan: &FileEnumerationPlan) -> Result<Vec<FileEntryDto>> {
            Ok(self.entries.lock().unwrap().clone())
        }
    }

    struct FailingEnumerator;

    impl FileEnumerator for FailingEnumerator {
        fn collect(&self, _plan: &FileEnumerationPlan) -> Result<Vec<FileEntryDto>> {
            Err(io::Error::other("walk failed").into())
        }
    }

    /// Serves canned file contents; `None` simulates an unreadable file.
    #[derive(Default)]
    struct StubSource {
        files: HashMap<PathBuf, Option<Vec<&'static str>>>,
    }

    impl StubSource {
        fn file(mut self, path: &str, lines: &[&'static str]) -> Self {
            self.files.insert(path.into(), Some(lines.to_vec()));
            self
        }

        fn unreadable(mut self, path: &str) -> Self {
            self.files.insert(path.into(), None);
            self
        }
    }

    impl LineSource for StubSource {
        fn visit_lines(&self, path: &Path, visit: &mut dyn FnMut(&str)) -> Result<usize> {
            match self.files.get(path) {
                Some(Some(lines)) => {
                    for line in lines {
                        visit(line);
                    }
                    Ok(lines.len())
                }
                _ => {
                    // emit one line first to prove partial reads are discarded
                    visit("int partial;");
                    Err(LineTallyError::from(InfrastructureError::FileRead {
                        path: path.to_path_buf(),
                        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
                    }))
                }
            }
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        files: Mutex<Vec<PathBuf>>,
        skipped: Mutex<Vec<PathBuf>>,
        completed: Mutex<Option<LineTally>>,
    }

    impl ProgressSink for RecordingProgress {
        fn on_file(&self, path: &Path) -> Result<()> {
            self.files.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }

        fn on_skipped(&self, path: &Path, _reason: &str) -> Result<()> {
            self.skipped.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }

        fn on_complete(&self, tally: &LineTally) -> Result<()> {
            *self.completed.lock().unwrap() = Some(*tally);
            Ok(())
        }
    }

    fn markers() -> MarkerSet {
        MarkerSet::new(["//"], vec![BlockMarker::new("/*", "*/")], Vec::<String>::new())
    }

    #[test]
    fn run_sums_per_file_tallies() {
        let enumerator = StubEnumerator::with_paths(&["a.cpp", "b.cpp"]);
        let source = StubSource::default()
            .file("a.cpp", &["// header", "", "int main() {", "}"])
            .file("b.cpp", &["/* block", "  still */", "x();"]);

        let output = CountLines::new(&enumerator, &source).run(&FileEnumerationPlan::default(), &markers()).unwrap();

        assert_eq!(output.discovered, 2);
        assert!(output.skipped.is_empty());
        assert_eq!(output.tally.files, 2usize);
        assert_eq!(output.tally.blank, 1usize);
        assert_eq!(output.tally.comment, 3usize);
        assert_eq!(output.tally.code, 3usize);
    }

    #[test]
    fn comment_state_does_not_leak_between_files() {
        let enumerator = StubEnumerator::with_paths(&["open.cpp", "next.cpp"]);
        let source = StubSource::default().file("open.cpp", &["/* never closed"]).file("next.cpp", &["int x;"]);

        let output = CountLines::new(&enumerator, &source).run(&FileEnumerationPlan::default(), &markers()).unwrap();

        assert_eq!(output.tally.comment, 1usize);
        assert_eq!(output.tally.code, 1usize);
    }

    #[test]
    fn unreadable_file_is_skipped_without_partial_counts() {
        let enumerator = StubEnumerator::with_paths(&["ok.cpp", "locked.cpp"]);
        let source = StubSource::default().file("ok.cpp", &["int a;"]).unreadable("locked.cpp");
        let progress = RecordingProgress::default();

        let output = CountLines::new(&enumerator, &source)
            .with_progress(&progress)
            .run(&FileEnumerationPlan::default(), &markers())
            .unwrap();

        assert_eq!(output.tally.files, 1usize);
        assert_eq!(output.tally.code, 1usize);
        assert_eq!(output.skipped.len(), 1);
        assert_eq!(output.skipped[0].path, PathBuf::from("locked.cpp"));
        assert!(output.skipped[0].reason.contains("locked.cpp"));
        assert_eq!(*progress.skipped.lock().unwrap(), vec![PathBuf::from("locked.cpp")]);
        assert_eq!(progress.files.lock().unwrap().len(), 2);
        assert_eq!(*progress.completed.lock().unwrap(), Some(output.tally));
    }

    #[test]
    fn empty_file_still_counts_as_processed() {
        let enumerator = StubEnumerator::with_paths(&["empty.cpp"]);
        let source = StubSource::default().file("empty.cpp", &[]);

        let output = CountLines::new(&enumerator, &source).run(&FileEnumerationPlan::default(), &markers()).unwrap();

        assert_eq!(output.tally.files, 1usize);
        assert!(output.tally.total().is_zero());
    }

    #[test]
    fn enumeration_failure_is_an_application_error() {
        let source = StubSource::default();
        let err = CountLines::new(&FailingEnumerator, &source)
            .run(&FileEnumerationPlan::default(), &markers())
            .unwrap_err();

        assert!(matches!(err, LineTallyError::Application(ApplicationError::FileCollectionFailed { .. })));
    }
}

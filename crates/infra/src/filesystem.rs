// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};
use line_tally_ports::filesystem::{FileEntryDto, FileEnumerationPlan, FileEnumerator};
use line_tally_shared_kernel::Result;

/// Walks the plan's roots and keeps files whose extension is listed.
#[derive(Debug, Default)]
pub struct ExtensionFileEnumerator;

impl ExtensionFileEnumerator {
    pub fn new() -> Self {
        Self
    }

    pub fn enumerate(plan: &FileEnumerationPlan) -> Result<Vec<FileEntryDto>> {
        let extensions: Vec<String> = plan.extensions.iter().map(|e| e.to_lowercase()).collect();

        let mut entries = Vec::new();
        for root in &plan.roots {
            if !root.exists() {
                log::warn!("{} does not exist, skipping", root.display());
                continue;
            }
            collect_from_root(root, plan, &extensions, &mut entries);
        }

        // Overlapping roots would otherwise count the same file twice.
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries.dedup_by(|a, b| a.path == b.path);
        Ok(entries)
    }
}

impl FileEnumerator for ExtensionFileEnumerator {
    fn collect(&self, plan: &FileEnumerationPlan) -> Result<Vec<FileEntryDto>> {
        Self::enumerate(plan)
    }
}

fn collect_from_root(root: &Path, plan: &FileEnumerationPlan, extensions: &[String], out: &mut Vec<FileEntryDto>) {
    let mut builder = WalkBuilder::new(root);
    builder.follow_links(plan.follow_links);
    builder.hidden(!plan.include_hidden);
    builder.max_depth(if plan.recursive { None } else { Some(1) });

    let respect = plan.respect_ignore_files;
    builder.git_ignore(respect);
    builder.git_global(respect);
    builder.git_exclude(respect);
    builder.ignore(respect);
    builder.parents(respect);
    builder.require_git(false);

    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("walk error: {err}");
                continue;
            }
        };

        let Some(file_type) = entry.file_type() else { continue };
        if file_type.is_dir() {
            if entry.depth() > 0 {
                log::info!("Entering directory {}", entry.path().display());
            }
            continue;
        }
        if !file_type.is_file() {
            continue;
        }

        if let Some(dto) = to_entry_if_listed(entry, extensions) {
            out.push(dto);
        }
    }
}

fn to_entry_if_listed(entry: DirEntry, extensions: &[String]) -> Option<FileEntryDto> {
    let name = entry.file_name().to_string_lossy().into_owned();
    let ext = extension_key(&name).to_lowercase();
    if !extensions.contains(&ext) {
        return None;
    }

    let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
    let path: PathBuf = entry.into_path();
    Some(FileEntryDto { path, ext, name, size })
}

/// Text after the last `.` of a file name, or the whole name when it has none.
fn extension_key(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(_, ext)| ext)
}

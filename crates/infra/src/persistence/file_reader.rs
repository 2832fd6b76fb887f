// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// 64 KiB: large enough that long source files need few syscalls.
const READ_BUFFER_CAPACITY: usize = 64 * 1024;

/// Convenience helpers for reading files with consistent buffering.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        File::open(path).map(|file| BufReader::with_capacity(READ_BUFFER_CAPACITY, file))
    }

    /// Read the whole file as UTF-8 text.
    pub fn read_to_string(path: &Path) -> std::io::Result<String> {
        let mut text = String::new();
        Self::open_buffered(path)?.read_to_string(&mut text)?;
        Ok(text)
    }
}

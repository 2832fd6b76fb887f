// crates/infra/src/line_reader.rs
use std::{borrow::Cow, io::BufRead, path::Path};

use line_tally_ports::line_source::LineSource;
use line_tally_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads files line by line through a buffered reader.
///
/// 改行は `\n` で分割し、末尾の `\r` (CRLF) と先頭行の BOM を取り除く。
/// 不正な UTF-8 は置換文字でデコードする。
#[derive(Debug, Default, Clone, Copy)]
pub struct BufferedLineSource;

impl BufferedLineSource {
    pub fn new() -> Self {
        Self
    }
}

impl LineSource for BufferedLineSource {
    fn visit_lines(&self, path: &Path, visit: &mut dyn FnMut(&str)) -> Result<usize> {
        let file_read = |source| InfrastructureError::FileRead { path: path.to_path_buf(), source };

        let mut reader = FileReader::open_buffered(path).map_err(file_read)?;
        let mut buf = Vec::with_capacity(256);
        let mut count = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).map_err(file_read)? == 0 {
                break;
            }
            let line = strip_terminator(&buf);
            let line = if count == 0 { line.strip_prefix(UTF8_BOM).unwrap_or(line) } else { line };
            visit(&decode(line));
            count += 1;
        }

        Ok(count)
    }
}

fn strip_terminator(raw: &[u8]) -> &[u8] {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn decode(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

// src/presentation.rs
use std::{
    fmt::Write as _,
    io::{self, Write as _},
};

use chrono::{DateTime, Local};
use line_tally_domain::LineKind;
use line_tally_shared_kernel::{InfrastructureError, Result};
use line_tally_usecase::{CountLinesOutput, SkippedFile};
use serde::Serialize;

use crate::cli::OutputFormat;

/// JSON report document.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub version: &'static str,
    pub generated_at: DateTime<Local>,
    pub files: usize,
    pub lines: usize,
    pub blank: usize,
    pub comment: usize,
    pub code: usize,
    pub percentages: JsonPercentages,
    pub skipped: &'a [SkippedFile],
}

#[derive(Debug, Serialize)]
pub struct JsonPercentages {
    pub blank: f64,
    pub comment: f64,
    pub code: f64,
}

impl<'a> JsonReport<'a> {
    pub fn new(output: &'a CountLinesOutput, generated_at: DateTime<Local>) -> Self {
        let tally = &output.tally;
        Self {
            version: crate::VERSION,
            generated_at,
            files: tally.files.value(),
            lines: tally.total().value(),
            blank: tally.blank.value(),
            comment: tally.comment.value(),
            code: tally.code.value(),
            percentages: JsonPercentages {
                blank: tally.share(LineKind::Blank),
                comment: tally.share(LineKind::Comment),
                code: tally.share(LineKind::Code),
            },
            skipped: &output.skipped,
        }
    }
}

pub fn print_report(output: &CountLinesOutput, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Table => render_table(output),
        OutputFormat::Json => render_json(output)?,
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| InfrastructureError::OutputError { message: "failed to write report".into(), source: Some(Box::new(e)) })?;
    Ok(())
}

pub fn render_table(output: &CountLinesOutput) -> String {
    let tally = &output.tally;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "line_tally v{}", crate::VERSION);
    let _ = writeln!(out);
    let _ = writeln!(out, "Number of files searched: {}", tally.files);
    let _ = writeln!(out, "Total number of lines: {}", tally.total());
    for (label, kind) in [("Blank", LineKind::Blank), ("Comment", LineKind::Comment), ("Code", LineKind::Code)] {
        let _ = writeln!(out, "{label} lines: {} ({:.1}%)", tally.count(kind), tally.share(kind));
    }

    if !output.skipped.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Skipped {} of {} file(s):", output.skipped.len(), output.discovered);
        for skipped in &output.skipped {
            let _ = writeln!(out, "  {}: {}", skipped.path.display(), skipped.reason);
        }
    }
    out
}

pub fn render_json(output: &CountLinesOutput) -> Result<String> {
    let report = JsonReport::new(output, Local::now());
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

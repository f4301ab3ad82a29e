//! @ai:module:intent Drive a run: enumerate files, rewrite each, write results back
//! @ai:module:layer application
//! @ai:module:public_api run, RunReport
//! @ai:module:depends_on config, rewriter, matcher, newline, error

use crate::config::Config;
use crate::error::{Error, Result};
use crate::matcher::MethodMatcher;
use crate::newline::{split_lines, LineEnding};
use crate::rewriter::rewrite_lines;
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// @ai:intent Aggregate counters for a completed run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub files_processed: usize,
    pub annotations_inserted: usize,
    pub annotations_removed: usize,
    pub imports_replaced: usize,
}

/// @ai:intent Rewrite every file directly under the configured directory
/// @ai:pre config has been validated
/// @ai:post each file is either fully rewritten or left untouched
/// @ai:effects fs:read, fs:write, console
pub fn run(config: &Config) -> Result<RunReport> {
    let matcher = MethodMatcher::new();
    let mut report = RunReport::default();

    // Direct children only, in enumeration order; no extension filter is
    // applied, every regular file is treated as rewritable text.
    for entry in WalkDir::new(&config.source_path)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        process_file(entry.path(), config, &matcher, &mut report)?;
    }

    Ok(report)
}

/// @ai:intent Rewrite a single file in place, preserving its newline convention
/// @ai:effects fs:read, fs:write, console
fn process_file(
    path: &Path,
    config: &Config,
    matcher: &MethodMatcher,
    report: &mut RunReport,
) -> Result<()> {
    let raw = fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let ending = LineEnding::detect(&raw);
    let lines = split_lines(&raw);
    let outcome = rewrite_lines(&lines, config, matcher);

    for insertion in &outcome.inserted {
        println!(
            "{} {} in file {}",
            "Added".green(),
            insertion.text.trim(),
            path.display()
        );
    }

    let mut output = String::with_capacity(raw.len() + 64);
    for line in &outcome.lines {
        output.push_str(line);
        output.push_str(ending.as_str());
    }

    fs::write(path, output).map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    report.files_processed += 1;
    report.annotations_inserted += outcome.inserted.len();
    report.annotations_removed += outcome.removed;
    if outcome.import_replaced {
        report.imports_replaced += 1;
    }

    Ok(())
}

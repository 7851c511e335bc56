//! @dose
//! purpose: This module implements the batch conversion command. It resolves the named paths,
//!     runs the signature rewriter over each file, writes back files whose text changed,
//!     and prints one notice per path followed by a summary line.
//!
//! when-editing:
//!     - !A file is only written when the rewritten text differs from what was read
//!     - !Missing paths are skipped with a notice; they never fail the run
//!     - Notices are printed in command-line order even though files are processed in parallel
//!     - When the run fails, files after the failing one may already have been written
//!
//! invariants:
//!     - --dry-run and --check never touch the filesystem beyond reading
//!     - Any read/write failure other than "not found" is returned as an error
//!     - Every file that was written gets its notice printed, even when another file failed
//!
//! flows:
//!     - Collect: Expand paths into file and missing targets
//!     - Convert: Read, flatten signatures, write if changed (parallel per file)
//!     - Report: Print notices in order, then the summary; surface the first error

use crate::cli::ConvertArgs;
use crate::collect::{collect_targets, Target};
use crate::error::ConvertError;
use crate::rewrite::{apply_signatures, find_signatures};
use anyhow::Result;
use rayon::prelude::*;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What happened to a single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Rewritten in place
    Converted { signatures: usize },
    /// Would be rewritten, but writes are disabled
    WouldConvert { signatures: usize },
    /// Already in the flat syntax (or has no signatures)
    Unchanged,
    /// Path does not exist
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl FileReport {
    /// The line printed for this path.
    pub fn notice(&self) -> String {
        let path = self.path.display();
        match self.outcome {
            FileOutcome::Converted { .. } => format!("✓ Converted: {}", path),
            FileOutcome::WouldConvert { .. } => format!("~ Would convert: {}", path),
            FileOutcome::Unchanged => format!("  Unchanged: {}", path),
            FileOutcome::Skipped => format!("Skip: {} (not found)", path),
        }
    }
}

/// Totals for a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub converted: usize,
    pub would_convert: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

impl ConvertSummary {
    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Converted { .. } => self.converted += 1,
            FileOutcome::WouldConvert { .. } => self.would_convert += 1,
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Skipped => self.skipped += 1,
        }
    }

    /// Files still in the nested syntax after this run.
    pub fn pending(&self) -> usize {
        self.would_convert
    }
}

impl fmt::Display for ConvertSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.would_convert > 0 {
            write!(f, "Would convert: {}, ", self.would_convert)?;
        }
        write!(
            f,
            "Converted: {}, Unchanged: {}, Skipped: {}",
            self.converted, self.unchanged, self.skipped
        )
    }
}

pub fn run_convert(args: &ConvertArgs, verbose: bool) -> Result<ConvertSummary> {
    let targets = collect_targets(&args.paths);
    let writes = args.writes();

    if verbose {
        println!("Processing {} path(s)...", targets.len());
    }

    let results: Vec<Result<FileReport, ConvertError>> = targets
        .par_iter()
        .map(|target| convert_target(target, writes))
        .collect();

    let mut summary = ConvertSummary::default();
    let mut first_error = None;

    for result in results {
        match result {
            Ok(report) => {
                println!("{}", report.notice());
                summary.record(report.outcome);
            }
            Err(e) => {
                debug!("Conversion failed for {}", e.path().display());
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    if let Some(e) = first_error {
        return Err(e.into());
    }

    println!("{}", summary);
    Ok(summary)
}

fn convert_target(target: &Target, writes: bool) -> Result<FileReport, ConvertError> {
    let outcome = match target {
        Target::Missing(_) => FileOutcome::Skipped,
        Target::File(path) => convert_file(path, writes)?,
    };

    Ok(FileReport {
        path: target.path().to_path_buf(),
        outcome,
    })
}

/// Convert one file on disk.
pub fn convert_file(path: &Path, writes: bool) -> Result<FileOutcome, ConvertError> {
    let content = fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let found = find_signatures(&content);
    let converted = apply_signatures(&content, &found);
    if converted == content.as_str() {
        debug!("{}: no nested signatures", path.display());
        return Ok(FileOutcome::Unchanged);
    }

    let signatures = found.len();
    debug!("{}: {} signature(s) to flatten", path.display(), signatures);

    if !writes {
        return Ok(FileOutcome::WouldConvert { signatures });
    }

    fs::write(path, converted.as_bytes()).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(FileOutcome::Converted { signatures })
}

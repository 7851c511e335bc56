//! @dose
//! purpose: Resolves command-line paths into the ordered list of conversion targets.
//!     Files are taken as named, directories are walked for `.aisl` files, and paths
//!     that don't exist become skip targets instead of errors.
//!
//! invariants:
//!     - Targets keep command-line order; directory contents are sorted
//!     - A file reached twice (named twice, or also under a named directory) appears once
//!     - Named files are accepted regardless of extension
//!
//! gotchas:
//!     - Paths are compared as given, not canonicalized: `a.aisl` and `./a.aisl` are distinct

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Extension picked up when walking directories
pub const AISL_EXTENSION: &str = "aisl";

/// A single path to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// An existing file to convert
    File(PathBuf),
    /// A named path that does not exist
    Missing(PathBuf),
}

impl Target {
    pub fn path(&self) -> &Path {
        match self {
            Target::File(path) | Target::Missing(path) => path,
        }
    }
}

pub fn collect_targets(paths: &[PathBuf]) -> Vec<Target> {
    let mut targets = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for path in paths {
        if !path.exists() {
            targets.push(Target::Missing(path.clone()));
            continue;
        }

        if path.is_dir() {
            for file in walk_aisl_files(path) {
                if seen.insert(file.clone()) {
                    targets.push(Target::File(file));
                }
            }
        } else if seen.insert(path.clone()) {
            targets.push(Target::File(path.clone()));
        }
    }

    targets
}

fn walk_aisl_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e))
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", dir.display(), err);
                None
            }
        })
        .filter(|e| e.file_type().is_file() && has_aisl_extension(e.path()))
        .map(|e| e.into_path())
        .collect();

    files.sort();
    files
}

fn has_aisl_extension(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(AISL_EXTENSION)
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() || entry.depth() == 0 {
        return false;
    }

    matches!(
        entry.file_name().to_string_lossy().as_ref(),
        ".git" | "target"
    )
}

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a conversion run.
///
/// A missing file is not an error; it is reported as a skip.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConvertError::Read { path, .. } | ConvertError::Write { path, .. } => path,
        }
    }
}

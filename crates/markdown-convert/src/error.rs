use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Conditions that abort an entire directory run.
///
/// These are the only errors [`process_directory`](crate::process_directory)
/// returns; everything that goes wrong inside the per-file loop is recorded
/// as a [`FileOutcome`](crate::FileOutcome) instead.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("source folder does not exist: {0}")]
    MissingSource(PathBuf),

    #[error("could not create target folder {path}: {source}")]
    TargetCreate { path: PathBuf, source: io::Error },

    #[error("could not read source folder {path}: {source}")]
    SourceUnreadable { path: PathBuf, source: io::Error },
}

/// Failures attributable to a single document conversion.
///
/// During batch runs these are caught per file; for single-file conversions
/// they abort the command.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read template {path}: {source}")]
    TemplateRead { path: PathBuf, source: io::Error },

    #[error("failed to read {path}: {source}")]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("failed to write {path}: {source}")]
    WriteOutput { path: PathBuf, source: io::Error },
}

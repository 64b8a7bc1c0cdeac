//! Directory batch conversion.
//!
//! [`process_directory`] converts every eligible Markdown file in a flat
//! source folder into HTML in a target folder, one file at a time and in
//! enumeration order. Per-file failures are recorded and reported, never
//! propagated; only a missing source folder, an uncreatable target folder or
//! an unreadable directory listing abort the run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BatchError, ConvertError};
use crate::fs::atomic_write;
use crate::render::{render_document, RenderOptions};

/// A single directory conversion run. Immutable once built.
#[derive(Clone, Debug)]
pub struct BatchJob {
    pub source_dir: PathBuf,
    pub target_dir: PathBuf,
    pub template: Option<PathBuf>,
    pub options: RenderOptions,
}

impl BatchJob {
    /// Describe a run converting every Markdown file in `source` into
    /// `target`, with default parser options and no template.
    pub fn new(source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source.into(),
            target_dir: target.into(),
            template: None,
            options: RenderOptions::default(),
        }
    }

    /// Apply the given template to every rendered document.
    pub fn with_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = Some(path.into());
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }
}

/// Conversion status of one input file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileStatus {
    Converted,
    Failed,
}

/// Outcome recorded for one eligible input file.
#[derive(Clone, Debug)]
pub struct FileOutcome {
    pub file_name: String,
    pub status: FileStatus,
    /// Message text of the failure, present only for [`FileStatus::Failed`].
    pub error: Option<String>,
}

/// Counters and per-file outcomes for one run, in enumeration order.
#[derive(Clone, Debug, Default)]
pub struct BatchResult {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<FileOutcome>,
}

/// Returns true for names ending in `.md`, compared case-insensitively.
pub fn is_markdown_name(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".md")
}

/// Derive the output name for an eligible input by replacing the trailing
/// `.md` suffix with `.html`. Returns `None` for ineligible names.
///
/// There is no collision detection: inputs differing only in suffix case
/// collapse to one output name and the later file silently overwrites the
/// earlier one.
pub fn html_file_name(name: &str) -> Option<String> {
    if !is_markdown_name(name) {
        return None;
    }
    // The matched suffix is ASCII, so the slice boundary is valid.
    Some(format!("{}.html", &name[..name.len() - ".md".len()]))
}

/// Convert every eligible file under `job.source_dir` into
/// `job.target_dir`.
///
/// Progress and the final summary are emitted as they happen: success and
/// summary notices on stdout, per-file error notices on stderr. The returned
/// [`BatchResult`] carries the same information in structured form so
/// callers never have to parse output.
pub fn process_directory(job: &BatchJob) -> Result<BatchResult, BatchError> {
    if !job.source_dir.exists() {
        return Err(BatchError::MissingSource(job.source_dir.clone()));
    }

    fs::create_dir_all(&job.target_dir).map_err(|source| BatchError::TargetCreate {
        path: job.target_dir.clone(),
        source,
    })?;

    let files = eligible_files(&job.source_dir)?;

    if files.is_empty() {
        println!("No Markdown files found in {}", job.source_dir.display());
        return Ok(BatchResult::default());
    }

    let mut result = BatchResult {
        attempted: files.len(),
        ..BatchResult::default()
    };

    for (file_name, output_name) in files {
        match convert_file(job, &file_name, &output_name) {
            Ok(()) => {
                println!("✓ Converted: {file_name} → {output_name}");
                result.succeeded += 1;
                result.outcomes.push(FileOutcome {
                    file_name,
                    status: FileStatus::Converted,
                    error: None,
                });
            }
            Err(err) => {
                eprintln!("✗ Error converting {file_name}:");
                eprintln!("  {err}");
                result.failed += 1;
                result.outcomes.push(FileOutcome {
                    file_name,
                    status: FileStatus::Failed,
                    error: Some(err.to_string()),
                });
            }
        }
    }

    println!(
        "\nProcessed {} of {} file(s) from {} to {}",
        result.succeeded,
        result.attempted,
        job.source_dir.display(),
        job.target_dir.display()
    );
    if result.failed > 0 {
        println!("{} file(s) failed to convert", result.failed);
    }

    Ok(result)
}

/// List immediate entries of `dir` whose names are eligible, paired with
/// their derived output names. Non-recursive; entries are returned in the
/// order the directory yields them.
fn eligible_files(dir: &Path) -> Result<Vec<(String, String)>, BatchError> {
    let entries = fs::read_dir(dir).map_err(|source| BatchError::SourceUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| BatchError::SourceUnreadable {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if let Some(output_name) = html_file_name(&name) {
            files.push((name, output_name));
        }
    }

    Ok(files)
}

fn convert_file(job: &BatchJob, file_name: &str, output_name: &str) -> Result<(), ConvertError> {
    let input_path = job.source_dir.join(file_name);
    let output_path = job.target_dir.join(output_name);

    let markdown = fs::read_to_string(&input_path).map_err(|source| ConvertError::ReadInput {
        path: input_path,
        source,
    })?;

    let html = render_document(&markdown, job.template.as_deref(), job.options)?;

    atomic_write(&output_path, &html).map_err(|source| ConvertError::WriteOutput {
        path: output_path,
        source,
    })
}

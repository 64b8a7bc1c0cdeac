//! Filesystem helpers shared by the batch processor and the CLI.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::Builder;

/// Atomically write `contents` to `path`, ensuring readers never observe
/// partial content. The write goes to a temporary file in the destination
/// directory followed by a rename. Missing parent directories are created.
pub fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let mut tmp = Builder::new()
        .prefix(".markdown-convert")
        .tempfile_in(parent)?;

    tmp.as_file_mut().write_all(contents.as_bytes())?;
    tmp.as_file_mut().sync_all()?;

    tmp.persist(path).map(|_| ()).map_err(|err| err.error)
}

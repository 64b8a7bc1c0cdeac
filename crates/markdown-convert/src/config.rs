//! Project configuration for directory conversions.
//!
//! A `.markdown-convert.toml` in the working directory can supply the
//! source/target folders and template so the batch command runs without
//! arguments. All keys are optional; command-line arguments win.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const CONFIG_FILE_NAME: &str = ".markdown-convert.toml";

/// Defaults for the batch command, resolved from the on-disk config file.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Folder scanned for Markdown input files.
    pub source: Option<PathBuf>,
    /// Folder receiving the generated HTML files.
    pub target: Option<PathBuf>,
    /// Template applied to every rendered document.
    pub template: Option<PathBuf>,
}

/// Errors surfaced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ProjectConfig {
    /// Load `.markdown-convert.toml` from `dir`. A missing file is not an
    /// error; it resolves to the all-`None` defaults.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| ConfigError::Parse { path, source })
    }
}

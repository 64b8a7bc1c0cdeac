//! Convert Markdown documents into standalone HTML documents.
//!
//! Two layers: [`render_document`] turns one Markdown string into a finished
//! HTML document (built-in skeleton or caller-supplied template), and
//! [`process_directory`] drives that conversion over every eligible file in
//! a flat source folder, recording per-file outcomes without aborting the
//! run.

pub mod batch;
pub mod config;
pub mod error;
pub mod fs;
pub mod render;

pub use batch::{
    html_file_name, is_markdown_name, process_directory, BatchJob, BatchResult, FileOutcome,
    FileStatus,
};
pub use config::{ConfigError, ProjectConfig};
pub use error::{BatchError, ConvertError};
pub use render::{render_document, render_fragment, RenderOptions, CONTENT_PLACEHOLDER};

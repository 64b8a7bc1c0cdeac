//! Markdown to HTML document rendering.
//!
//! [`render_fragment`] converts Markdown text into an HTML fragment;
//! [`render_document`] wraps that fragment into a finished document, either
//! through a caller-supplied template or the built-in skeleton.

use std::fs;
use std::path::Path;

use comrak::options::Options;

use crate::error::ConvertError;

/// Token replaced by the rendered fragment in user-supplied templates.
pub const CONTENT_PLACEHOLDER: &str = "{{content}}";

/// Parser toggles applied to a conversion.
///
/// Passed by value into every render call so the parser configuration stays
/// explicit instead of living in shared mutable state.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// GFM pipe tables.
    pub tables: bool,
    /// GFM `~~strikethrough~~` spans.
    pub strikethrough: bool,
    /// Turn bare URLs into links.
    pub autolink: bool,
    /// Render single newlines as `<br />` instead of collapsing them.
    pub hard_breaks: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            autolink: true,
            hard_breaks: true,
        }
    }
}

impl RenderOptions {
    fn to_comrak(self) -> Options<'static> {
        let mut options = Options::default();

        let ext = &mut options.extension;
        ext.table = self.tables;
        ext.strikethrough = self.strikethrough;
        ext.autolink = self.autolink;
        // Raw HTML in the source passes through unmodified, script tags
        // included. Sanitisation is a caller-supplied post-process step.
        ext.tagfilter = false;
        options.render.r#unsafe = true;

        options.render.hardbreaks = self.hard_breaks;
        options
    }
}

/// Convert Markdown text into an HTML fragment without any surrounding
/// document structure.
pub fn render_fragment(markdown: &str, options: RenderOptions) -> String {
    comrak::markdown_to_html(markdown, &options.to_comrak())
}

/// Convert Markdown text into a complete HTML document.
///
/// When `template` is given, its contents are read on every call and the
/// first occurrence of [`CONTENT_PLACEHOLDER`] is replaced with the rendered
/// fragment. A template without the placeholder is returned verbatim and the
/// fragment is dropped; that quirk is part of the contract. An unreadable
/// template fails the whole render, there is no fallback to the default
/// skeleton.
pub fn render_document(
    markdown: &str,
    template: Option<&Path>,
    options: RenderOptions,
) -> Result<String, ConvertError> {
    let fragment = render_fragment(markdown, options);

    if let Some(path) = template {
        let template_text =
            fs::read_to_string(path).map_err(|source| ConvertError::TemplateRead {
                path: path.to_path_buf(),
                source,
            })?;
        return Ok(template_text.replacen(CONTENT_PLACEHOLDER, &fragment, 1));
    }

    Ok(default_document(&fragment))
}

fn default_document(fragment: &str) -> String {
    format!("{DOCUMENT_HEAD}\n{fragment}\n{DOCUMENT_FOOT}")
}

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Converted Document</title>
  <link rel="stylesheet" href="style.css">
  <style>
    body {
      max-width: 800px;
      margin: 0 auto;
      padding: 2rem;
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
      line-height: 1.6;
      color: #333;
    }
    code {
      background-color: #f4f4f4;
      padding: 0.2rem 0.4rem;
      border-radius: 3px;
      font-family: 'Courier New', monospace;
    }
    pre {
      background-color: #f4f4f4;
      padding: 1rem;
      border-radius: 5px;
      overflow-x: auto;
    }
    pre code {
      background-color: transparent;
      padding: 0;
    }
    blockquote {
      border-left: 4px solid #ddd;
      margin-left: 0;
      padding-left: 1rem;
      color: #666;
    }
    img {
      max-width: 100%;
      height: auto;
    }
    table {
      border-collapse: collapse;
      width: 100%;
      margin: 1rem 0;
    }
    table th,
    table td {
      border: 1px solid #ddd;
      padding: 0.5rem;
      text-align: left;
    }
    table th {
      background-color: #f4f4f4;
    }
  </style>
</head>
<body>"#;

const DOCUMENT_FOOT: &str = "</body>\n</html>";

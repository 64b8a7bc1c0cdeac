use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use markdown_convert::fs::atomic_write;
use markdown_convert::{
    html_file_name, process_directory, render_document, BatchJob, ProjectConfig, RenderOptions,
};

#[derive(Parser)]
#[command(name = "markdown-convert", version, about = "Convert Markdown files to HTML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a single Markdown file to HTML
    Convert(ConvertArgs),
    /// Convert every Markdown file in a folder
    Batch(BatchArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Input Markdown file path
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output HTML file path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// HTML template file path
    #[arg(short, long, value_name = "PATH")]
    template: Option<PathBuf>,
}

#[derive(Args)]
struct BatchArgs {
    /// Folder containing Markdown input files
    #[arg(value_name = "SOURCE")]
    source: Option<PathBuf>,

    /// Folder receiving the generated HTML files
    #[arg(value_name = "TARGET")]
    target: Option<PathBuf>,

    /// HTML template file path
    #[arg(short, long, value_name = "PATH")]
    template: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert(args) => run_convert(args),
        Command::Batch(args) => run_batch(args),
    }
}

fn run_convert(args: ConvertArgs) -> Result<()> {
    if !args.input.exists() {
        bail!("Input file not found: {}", args.input.display());
    }

    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&args.input));

    let markdown = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let html = render_document(&markdown, args.template.as_deref(), RenderOptions::default())?;

    atomic_write(&output, &html).with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "✓ Successfully converted: {} → {}",
        args.input.display(),
        output.display()
    );
    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<()> {
    let config = ProjectConfig::load(Path::new("."))?;

    let source = args.source.or(config.source).context(
        "no source folder given; pass SOURCE or set `source` in .markdown-convert.toml",
    )?;
    let target = args.target.or(config.target).context(
        "no target folder given; pass TARGET or set `target` in .markdown-convert.toml",
    )?;

    let mut job = BatchJob::new(source, target);
    if let Some(template) = args.template.or(config.template) {
        job = job.with_template(template);
    }

    process_directory(&job)?;
    Ok(())
}

/// Default output path for a single conversion: a trailing `.md` becomes
/// `.html`; any other input name gets its extension set to `html` so the
/// output never lands on top of the input.
fn default_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match html_file_name(&name) {
        Some(html_name) => input.with_file_name(html_name),
        None => input.with_extension("html"),
    }
}

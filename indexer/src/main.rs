use anyhow::{bail, Context, Result};
use clap::Parser;
use sift_core::builder::build_index;
use sift_core::persist::save_index;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "sift-indexer")]
#[command(about = "Build a boolean search index over a corpus of XML documents", long_about = None)]
struct Cli {
    /// Corpus directory
    #[arg(short, long)]
    input: PathBuf,
    /// Where to write the index artifact
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    if !cli.input.is_dir() {
        bail!("path to corpus must be a directory: {}", cli.input.display());
    }

    let (index, stats) = build_index(&cli.input, |_| {});
    if stats.failures > 0 {
        tracing::warn!(failures = stats.failures, "some documents could not be indexed");
    }

    tracing::info!(output = %cli.output.display(), "saving index");
    save_index(&cli.output, &index)
        .with_context(|| format!("failed to write index to {}", cli.output.display()))?;
    tracing::info!(documents = stats.documents_indexed, terms = stats.terms, "index build complete");
    Ok(())
}

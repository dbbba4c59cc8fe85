use anyhow::{bail, Context, Result};
use clap::Parser;
use sift_searcher::{write_text, Searcher, DEFAULT_LIMIT};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "sift-searcher")]
#[command(about = "Answer one boolean query read from stdin", long_about = None)]
struct Args {
    /// Corpus directory the index was built from (used for snippets)
    #[arg(short, long)]
    corpus: PathBuf,
    /// Index artifact path
    #[arg(short, long)]
    index: PathBuf,
    /// Maximum number of documents to list
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,
    /// Print the response as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();
    let args = Args::parse();

    if !args.corpus.is_dir() {
        bail!("path to corpus must be a directory: {}", args.corpus.display());
    }
    let searcher = Searcher::open(&args.corpus, &args.index)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !args.json {
        writeln!(out, "Enter query:")?;
        out.flush()?;
    }
    let mut query = String::new();
    io::stdin().lock().read_line(&mut query).context("failed to read query")?;

    let resp = searcher.search(&query, args.limit).context("invalid query")?;
    if args.json {
        serde_json::to_writer_pretty(&mut out, &resp)?;
        writeln!(out)?;
    } else {
        write_text(&mut out, &resp)?;
    }
    Ok(())
}

use anyhow::{Context, Result};
use serde::Serialize;
use sift_core::eval::evaluate;
use sift_core::persist::load_index;
use sift_core::query::{parse, QueryError};
use sift_core::snippet::generate_snippet;
use sift_core::{DocId, InvertedIndex};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_LIMIT: usize = 10;

const SEPARATOR: &str = "------------------------------";

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub path: String,
    pub snippet: Vec<String>,
}

/// A loaded index together with the corpus it was built from.
pub struct Searcher {
    corpus_root: PathBuf,
    index: InvertedIndex,
}

impl Searcher {
    pub fn new(corpus_root: impl Into<PathBuf>, index: InvertedIndex) -> Self {
        Self { corpus_root: corpus_root.into(), index }
    }

    /// Load the index artifact at `index_path`. Snippets are read from `corpus_root`.
    pub fn open(corpus_root: &Path, index_path: &Path) -> Result<Self> {
        let index = load_index(index_path)
            .with_context(|| format!("failed to load index from {}", index_path.display()))?;
        tracing::info!(documents = index.num_docs(), terms = index.num_terms(), "index loaded");
        Ok(Self::new(corpus_root, index))
    }

    /// Evaluate `query` and build snippets for at most `limit` matching documents.
    /// `total_hits` always counts every match.
    pub fn search(&self, query: &str, limit: usize) -> Result<SearchResponse, QueryError> {
        let start = std::time::Instant::now();
        let query = query.trim();
        let expr = parse(query)?;
        let ids = evaluate(&self.index, &expr);
        tracing::debug!(%expr, hits = ids.len(), "query evaluated");

        let mut results = Vec::new();
        for &doc_id in ids.iter().take(limit) {
            let Some(path) = self.index.doc_path(doc_id) else { continue };
            results.push(SearchHit { doc_id, path: path.to_string(), snippet: self.snippet(query, path) });
        }

        let elapsed = start.elapsed();
        Ok(SearchResponse { query: query.to_string(), took_s: elapsed.as_secs_f64(), total_hits: ids.len(), results })
    }

    fn snippet(&self, query: &str, rel: &str) -> Vec<String> {
        let path = self.corpus_root.join(rel);
        generate_snippet(query, &path).unwrap_or_else(|error| {
            tracing::warn!(path = %path.display(), %error, "no snippet");
            Vec::new()
        })
    }
}

/// Plain-text listing: match count, then each hit with its snippet sentences.
pub fn write_text<W: Write>(out: &mut W, resp: &SearchResponse) -> io::Result<()> {
    writeln!(out, "Found {} results:", resp.total_hits)?;
    for hit in &resp.results {
        writeln!(out, "Document: {}", hit.path)?;
        for sentence in &hit.snippet {
            writeln!(out, "> {sentence}")?;
        }
        writeln!(out, "{SEPARATOR}")?;
    }
    Ok(())
}

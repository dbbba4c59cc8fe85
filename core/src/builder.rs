use crate::corpus::{list_files, relative_path};
use crate::document::{extract_terms, DocumentError};
use crate::postings::finalize;
use crate::{DocId, InvertedIndex};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Progress is logged every this many processed documents.
pub const PROGRESS_EVERY: usize = 1000;

/// A document that contributed no terms because it could not be read or parsed.
#[derive(Debug)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub error: DocumentError,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub documents_seen: usize,
    pub documents_indexed: usize,
    /// Total terms emitted across all documents, repeats included.
    pub tokens: u64,
    /// Distinct terms in the finished index.
    pub terms: usize,
    pub failures: usize,
}

/// Accumulates documents into an inverted index.
///
/// Posting lists may hold repeated ids while building; [`IndexBuilder::finish`]
/// sorts and deduplicates them.
#[derive(Default)]
pub struct IndexBuilder {
    docs: Vec<String>,
    postings: BTreeMap<String, Vec<DocId>>,
    stats: BuildStats,
}

impl IndexBuilder {
    pub fn new() -> Self { Self::default() }

    /// Record one processed document. Returns its id, or `None` when it had no terms
    /// (such documents are left out of the document list).
    pub fn add_document(&mut self, path: impl Into<String>, terms: Vec<String>) -> Option<DocId> {
        self.stats.documents_seen += 1;
        self.stats.tokens += terms.len() as u64;

        let doc_id = if terms.is_empty() {
            None
        } else {
            let id = self.docs.len() as DocId;
            self.docs.push(path.into());
            for term in terms {
                self.postings.entry(term).or_default().push(id);
            }
            Some(id)
        };

        if self.stats.documents_seen % PROGRESS_EVERY == 0 {
            tracing::info!(processed = self.stats.documents_seen, "processed documents");
        }
        doc_id
    }

    /// Record a document that failed extraction. It counts as processed and yields no terms.
    pub fn add_failure(&mut self, path: impl Into<String>) {
        self.stats.failures += 1;
        self.add_document(path, Vec::new());
    }

    pub fn finish(self) -> (InvertedIndex, BuildStats) {
        let IndexBuilder { docs, mut postings, mut stats } = self;
        for list in postings.values_mut() {
            finalize(list);
        }
        stats.documents_indexed = docs.len();
        stats.terms = postings.len();
        tracing::info!(tokens = stats.tokens, terms = stats.terms, documents = stats.documents_indexed, "index built");
        (InvertedIndex { docs, index: postings }, stats)
    }
}

/// Build an index over every file under `corpus_dir`.
///
/// Files are visited in sorted path order so ids are reproducible. Documents that
/// cannot be read or parsed are reported to `on_diagnostic` and indexing continues.
/// The caller is responsible for checking that `corpus_dir` is a directory.
pub fn build_index<F>(corpus_dir: &Path, mut on_diagnostic: F) -> (InvertedIndex, BuildStats)
where
    F: FnMut(Diagnostic),
{
    let mut builder = IndexBuilder::new();
    tracing::info!(corpus = %corpus_dir.display(), "processing documents");

    let files = list_files(corpus_dir, |err| {
        let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| corpus_dir.to_path_buf());
        let msg = err.to_string();
        let io = err.into_io_error().unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, msg));
        tracing::warn!(path = %path.display(), error = %io, "skipping unreadable entry");
        on_diagnostic(Diagnostic { path, error: DocumentError::Io(io) });
    });

    for path in files {
        let rel = relative_path(corpus_dir, &path);
        match extract_terms(&path) {
            Ok(terms) => {
                builder.add_document(rel, terms);
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "skipping document");
                builder.add_failure(rel);
                on_diagnostic(Diagnostic { path, error });
            }
        }
    }

    builder.finish()
}

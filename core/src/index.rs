use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type DocId = u32;

/// Document list plus term -> posting list mapping.
///
/// The position of a path in `docs` is its document id. Every posting list in
/// `index` is sorted ascending with no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvertedIndex {
    /// Paths relative to the corpus root, indexed by doc id.
    pub docs: Vec<String>,
    pub index: BTreeMap<String, Vec<DocId>>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    pub fn num_docs(&self) -> usize { self.docs.len() }

    pub fn num_terms(&self) -> usize { self.index.len() }

    /// Posting list for an already-normalized term; empty when the term is unknown.
    pub fn postings(&self, term: &str) -> &[DocId] {
        self.index.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn doc_path(&self, doc_id: DocId) -> Option<&str> {
        self.docs.get(doc_id as usize).map(String::as_str)
    }
}

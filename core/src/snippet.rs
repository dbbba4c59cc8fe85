use crate::document::{read_text_nodes, DocumentError};
use crate::tokenizer::words;
use std::path::Path;

pub const MAX_SENTENCES: usize = 3;

const SENTENCE_TERMINATOR: char = '.';
const OPERATORS: [&str; 3] = ["and", "or", "not"];

/// Sentences of a document: each text node split on '.', in document order.
pub fn sentences<S: AsRef<str>>(text_nodes: &[S]) -> Vec<&str> {
    text_nodes
        .iter()
        .flat_map(|text| text.as_ref().split(SENTENCE_TERMINATOR))
        .collect()
}

/// Pick up to [`MAX_SENTENCES`] sentences illustrating the query.
///
/// For each non-operator word of the query, the first sentence containing it
/// (case-insensitively, as a substring) is taken.
pub fn select_sentences<'a>(query: &str, sentences: &[&'a str]) -> Vec<&'a str> {
    let query = query.to_lowercase();
    let lowered: Vec<String> = sentences.iter().map(|s| s.to_lowercase()).collect();
    let mut picked = Vec::new();
    for word in words(&query) {
        if OPERATORS.contains(&word) { continue; }
        if let Some(i) = lowered.iter().position(|s| s.contains(word)) {
            picked.push(sentences[i]);
            if picked.len() == MAX_SENTENCES { break; }
        }
    }
    picked
}

/// Snippet sentences for a document on disk.
pub fn generate_snippet(query: &str, path: &Path) -> Result<Vec<String>, DocumentError> {
    let nodes = read_text_nodes(path)?;
    let all = sentences(&nodes);
    Ok(select_sentences(query, &all).into_iter().map(str::to_owned).collect())
}

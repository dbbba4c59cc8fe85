//! Reading corpus documents into text nodes.
//!
//! Only XML documents are supported. Text is collected from every text node of
//! the tree in document order (depth-first pre-order), so nested elements and
//! text following a child element are both included.

use crate::tokenizer::tokenize_into;
use roxmltree::{Document, ParsingOptions};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const SUPPORTED_EXTENSION: &str = "xml";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("unsupported extension")]
    UnsupportedExtension,
    #[error("failed to read: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse: {0}")]
    Parse(#[from] roxmltree::Error),
}

pub fn is_supported(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(SUPPORTED_EXTENSION)
}

/// Text nodes of an XML string, in document order.
pub fn text_nodes_from_str(xml: &str) -> Result<Vec<String>, DocumentError> {
    let mut opts = ParsingOptions::default();
    opts.allow_dtd = true;
    let doc = Document::parse_with_options(xml, opts)?;
    let nodes = doc
        .root()
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .map(str::to_owned)
        .collect();
    Ok(nodes)
}

/// Read a document from disk and return its text nodes.
pub fn read_text_nodes(path: &Path) -> Result<Vec<String>, DocumentError> {
    if !is_supported(path) {
        return Err(DocumentError::UnsupportedExtension);
    }
    let xml = fs::read_to_string(path)?;
    text_nodes_from_str(&xml)
}

/// Terms of a document, in order of occurrence. Each text node is tokenized separately.
pub fn extract_terms(path: &Path) -> Result<Vec<String>, DocumentError> {
    let nodes = read_text_nodes(path)?;
    let mut terms = Vec::new();
    for text in &nodes {
        tokenize_into(text, &mut terms);
    }
    Ok(terms)
}

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\w+").expect("valid regex");
}

/// Terms shorter than this (in characters) are dropped.
pub const MIN_TERM_LEN: usize = 2;

/// Maximal runs of word characters (letters, digits, underscore), as they appear in `text`.
pub fn words(text: &str) -> impl Iterator<Item = &str> + '_ {
    WORD_RE.find_iter(text).map(|m| m.as_str())
}

/// Tokenize text into normalized terms: split on non-word characters, drop short tokens, lowercase.
/// Order of occurrence is kept and repeated terms are not collapsed.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut terms = Vec::new();
    tokenize_into(text, &mut terms);
    terms
}

/// Same as [`tokenize`], appending to an existing buffer.
pub fn tokenize_into(text: &str, terms: &mut Vec<String>) {
    for token in words(text) {
        if token.chars().count() < MIN_TERM_LEN { continue; }
        terms.push(token.to_lowercase());
    }
}

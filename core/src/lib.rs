pub mod builder;
pub mod corpus;
pub mod document;
pub mod eval;
mod index;
pub mod persist;
pub mod postings;
pub mod query;
pub mod snippet;
pub mod tokenizer;

pub use index::*;

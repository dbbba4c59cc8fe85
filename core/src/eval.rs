use crate::postings::{complement, intersect, union};
use crate::query::{parse, Expr, QueryError};
use crate::{DocId, InvertedIndex};

/// Evaluate an expression against the index. The result is sorted ascending with no duplicates.
///
/// Unknown terms match nothing. `Not` matches every known document the child does not.
pub fn evaluate(index: &InvertedIndex, expr: &Expr) -> Vec<DocId> {
    match expr {
        Expr::Term(word) => index.postings(&word.to_lowercase()).to_vec(),
        Expr::And(l, r) => intersect(&evaluate(index, l), &evaluate(index, r)),
        Expr::Or(l, r) => union(&evaluate(index, l), &evaluate(index, r)),
        Expr::Not(child) => complement(&evaluate(index, child), index.num_docs() as DocId),
    }
}

/// Parse and evaluate a query string.
pub fn search(index: &InvertedIndex, query: &str) -> Result<Vec<DocId>, QueryError> {
    let expr = parse(query)?;
    tracing::debug!(%expr, "evaluating query");
    Ok(evaluate(index, &expr))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InvertedIndex {
        let mut idx = InvertedIndex::new();
        idx.docs = (0..8).map(|i| format!("doc{i}.xml")).collect();
        idx.index.insert("a".into(), vec![1, 3, 5]);
        idx.index.insert("b".into(), vec![3, 5, 7]);
        idx.index.insert("rust".into(), vec![0, 5]);
        idx
    }

    #[test]
    fn and_or_and_unknown_terms() {
        let idx = sample();
        assert_eq!(search(&idx, "a and b").unwrap(), vec![3, 5]);
        assert_eq!(search(&idx, "a or b").unwrap(), vec![1, 3, 5, 7]);
        assert!(search(&idx, "c").unwrap().is_empty());
    }

    #[test]
    fn terms_are_case_folded() {
        let idx = sample();
        assert_eq!(search(&idx, "RUST").unwrap(), vec![0, 5]);
    }

    #[test]
    fn grouping_changes_result() {
        let idx = sample();
        assert_eq!(search(&idx, "rust and a or b").unwrap(), vec![3, 5, 7]);
        assert_eq!(search(&idx, "rust and (a or b)").unwrap(), vec![5]);
    }

    #[test]
    fn not_is_complement_over_known_documents() {
        let idx = sample();
        assert_eq!(search(&idx, "not a").unwrap(), vec![0, 2, 4, 6, 7]);
        assert_eq!(search(&idx, "not a and b").unwrap(), vec![7]);
        assert_eq!(search(&idx, "not missing").unwrap(), (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn parse_errors_are_returned() {
        let idx = sample();
        assert_eq!(search(&idx, "a and"), Err(QueryError::UnexpectedEnd));
    }
}

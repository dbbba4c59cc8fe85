//! Merges over posting lists.
//!
//! Every function here expects its inputs sorted ascending with no duplicates
//! and returns a list with the same property.

use crate::DocId;

/// Sort a raw posting list and drop repeated ids.
pub fn finalize(postings: &mut Vec<DocId>) {
    postings.sort_unstable();
    postings.dedup();
}

/// Ids present in both lists.
pub fn intersect(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            out.push(a[i]);
            i += 1;
            j += 1;
        } else if a[i] < b[j] {
            i += 1;
        } else {
            j += 1;
        }
    }
    out
}

/// Ids present in either list.
pub fn union(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            out.push(a[i]);
            i += 1;
            j += 1;
        } else if a[i] < b[j] {
            out.push(a[i]);
            i += 1;
        } else {
            out.push(b[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// Ids in `0..num_docs` that are not in `a`. Ids of `a` outside the universe are ignored.
pub fn complement(a: &[DocId], num_docs: DocId) -> Vec<DocId> {
    let mut out = Vec::with_capacity((num_docs as usize).saturating_sub(a.len()));
    let mut excluded = a.iter().copied().peekable();
    for id in 0..num_docs {
        while excluded.next_if(|&x| x < id).is_some() {}
        if excluded.next_if_eq(&id).is_none() {
            out.push(id);
        }
    }
    out
}

pub fn is_strictly_increasing(postings: &[DocId]) -> bool {
    postings.windows(2).all(|w| w[0] < w[1])
}

//! On-disk index artifact.
//!
//! The artifact is a single MessagePack map with two fields: `docs` (paths by
//! doc id) and `index` (term -> posting list).

use crate::postings::is_strictly_increasing;
use crate::InvertedIndex;
use serde::de::IgnoredAny;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode index: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
    #[error("invalid serialization format: {0}")]
    InvalidFormat(String),
}

fn invalid(msg: impl Into<String>) -> StoreError { StoreError::InvalidFormat(msg.into()) }

pub fn to_bytes(index: &InvertedIndex) -> Result<Vec<u8>, StoreError> {
    Ok(rmp_serde::to_vec_named(index)?)
}

/// Decode an artifact, rejecting anything that is not a map holding both `docs` and `index`.
pub fn from_bytes(bytes: &[u8]) -> Result<InvertedIndex, StoreError> {
    let fields: HashMap<String, IgnoredAny> =
        rmp_serde::from_slice(bytes).map_err(|e| invalid(format!("expected a map: {e}")))?;
    for required in ["docs", "index"] {
        if !fields.contains_key(required) {
            return Err(invalid(format!("missing field `{required}`")));
        }
    }
    let index: InvertedIndex = rmp_serde::from_slice(bytes).map_err(|e| invalid(e.to_string()))?;
    validate(&index)?;
    Ok(index)
}

fn validate(index: &InvertedIndex) -> Result<(), StoreError> {
    let num_docs = index.num_docs();
    for (term, postings) in &index.index {
        if !is_strictly_increasing(postings) {
            return Err(invalid(format!("posting list for {term:?} is not strictly increasing")));
        }
        if let Some(&last) = postings.last() {
            if last as usize >= num_docs {
                return Err(invalid(format!("posting list for {term:?} references unknown document {last}")));
            }
        }
    }
    Ok(())
}

pub fn save_index(path: &Path, index: &InvertedIndex) -> Result<(), StoreError> {
    let bytes = to_bytes(index)?;
    let mut f = BufWriter::new(File::create(path)?);
    f.write_all(&bytes)?;
    f.flush()?;
    Ok(())
}

pub fn load_index(path: &Path) -> Result<InvertedIndex, StoreError> {
    let mut f = BufReader::new(File::open(path)?);
    let mut buf = Vec::new();
    f.read_to_end(&mut buf)?;
    from_bytes(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocId;
    use proptest::prelude::*;
    use serde::Serialize;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    fn sample() -> InvertedIndex {
        let mut idx = InvertedIndex::new();
        idx.docs = vec!["a.xml".into(), "sub/b.xml".into()];
        idx.index.insert("hello".into(), vec![0, 1]);
        idx.index.insert("world".into(), vec![1]);
        idx
    }

    #[test]
    fn save_then_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.msgpack");
        save_index(&path, &sample()).unwrap();
        assert_eq!(load_index(&path).unwrap(), sample());
    }

    #[test]
    fn rejects_non_map() {
        let bytes = rmp_serde::to_vec(&vec![1u32, 2, 3]).unwrap();
        assert!(matches!(from_bytes(&bytes), Err(StoreError::InvalidFormat(_))));
    }

    #[test]
    fn rejects_struct_encoded_as_array() {
        let bytes = rmp_serde::to_vec(&sample()).unwrap();
        assert!(matches!(from_bytes(&bytes), Err(StoreError::InvalidFormat(_))));
    }

    #[test]
    fn rejects_missing_fields() {
        #[derive(Serialize)]
        struct DocsOnly {
            docs: Vec<String>,
        }
        let bytes = rmp_serde::to_vec_named(&DocsOnly { docs: vec!["a.xml".into()] }).unwrap();
        match from_bytes(&bytes) {
            Err(StoreError::InvalidFormat(msg)) => assert!(msg.contains("index")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_docs() {
        #[derive(Serialize)]
        struct IndexOnly {
            index: BTreeMap<String, Vec<DocId>>,
        }
        let bytes = rmp_serde::to_vec_named(&IndexOnly { index: sample().index }).unwrap();
        match from_bytes(&bytes) {
            Err(StoreError::InvalidFormat(msg)) => assert!(msg.contains("docs")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rejects_unsorted_postings() {
        let mut idx = sample();
        idx.index.insert("bad".into(), vec![1, 0]);
        let bytes = to_bytes(&idx).unwrap();
        assert!(matches!(from_bytes(&bytes), Err(StoreError::InvalidFormat(_))));
    }

    #[test]
    fn rejects_out_of_range_ids() {
        let mut idx = sample();
        idx.index.insert("ghost".into(), vec![7]);
        let bytes = to_bytes(&idx).unwrap();
        assert!(matches!(from_bytes(&bytes), Err(StoreError::InvalidFormat(_))));
    }

    #[test]
    fn ignores_extra_fields() {
        #[derive(Serialize)]
        struct WithVersion {
            version: u32,
            docs: Vec<String>,
            index: BTreeMap<String, Vec<DocId>>,
        }
        let s = sample();
        let bytes = rmp_serde::to_vec_named(&WithVersion { version: 2, docs: s.docs.clone(), index: s.index.clone() }).unwrap();
        assert_eq!(from_bytes(&bytes).unwrap(), s);
    }

    fn well_formed() -> impl Strategy<Value = InvertedIndex> {
        (1usize..20).prop_flat_map(|n| {
            let docs = prop::collection::vec("[a-z/]{1,12}\\.xml", n);
            let index = prop::collection::btree_map(
                "[a-z0-9_]{2,8}",
                prop::collection::btree_set(0..n as DocId, 1..=n).prop_map(|s| s.into_iter().collect::<Vec<_>>()),
                0..30,
            );
            (docs, index).prop_map(|(docs, index)| InvertedIndex { docs, index })
        })
    }

    proptest! {
        #[test]
        fn round_trip(idx in well_formed()) {
            let bytes = to_bytes(&idx).unwrap();
            prop_assert_eq!(from_bytes(&bytes).unwrap(), idx);
        }
    }
}

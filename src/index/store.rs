// file: src/index/store.rs
// description: insertion-ordered in-memory document collection keyed by id
// reference: internal data structures

use crate::models::DocumentRecord;
use std::collections::HashMap;
use tracing::debug;

/// Documents in first-insertion order.
///
/// Re-indexing an id replaces the record in place, so its rank among equally
/// scored search hits does not change.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: Vec<DocumentRecord>,
    positions: HashMap<String, usize>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the record; returns true when an existing id was overwritten.
    pub fn upsert(&mut self, record: DocumentRecord) -> bool {
        if let Some(&position) = self.positions.get(&record.id) {
            debug!("Replacing document {}", record.id);
            self.documents[position] = record;
            return true;
        }

        debug!("Inserting document {}", record.id);
        self.positions.insert(record.id.clone(), self.documents.len());
        self.documents.push(record);
        false
    }

    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IndexRequest;

    fn record(id: &str, text: &str) -> DocumentRecord {
        DocumentRecord::from_request(IndexRequest::new(id, text), "Untitled", 200)
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = DocumentStore::new();
        assert!(!store.upsert(record("a", "first")));
        assert!(!store.upsert(record("b", "second")));

        assert_eq!(store.len(), 2);
        assert_eq!(store.documents()[1].text, "second");
    }

    #[test]
    fn test_last_write_wins_in_place() {
        let mut store = DocumentStore::new();
        store.upsert(record("a", "first"));
        store.upsert(record("b", "second"));
        assert!(store.upsert(record("a", "rewritten")));

        assert_eq!(store.len(), 2);
        let ids: Vec<&str> = store.documents().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(store.documents()[0].text, "rewritten");
    }

    #[test]
    fn test_empty_store() {
        let store = DocumentStore::new();
        assert!(store.is_empty());
        assert!(store.documents().is_empty());
    }
}

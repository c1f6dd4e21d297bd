//! Immutable in-memory document index.
//!
//! Built once from a [`Storage`] scan. All existence checks made while serving
//! requests hit this index, never the backend.

use std::collections::HashMap;

use crate::storage::{Document, Storage, StorageError};

/// Snapshot of every document known to a storage backend.
///
/// Documents are kept sorted by URL path so iteration order is deterministic.
#[derive(Debug, Default)]
pub struct DocumentIndex {
    documents: Vec<Document>,
    path_index: HashMap<String, usize>,
}

/// Strip leading and trailing slashes from a URL path.
fn normalize(path: &str) -> &str {
    path.trim_matches('/')
}

impl DocumentIndex {
    /// Scan `storage` and index the result.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the scan fails.
    pub fn build(storage: &dyn Storage) -> Result<Self, StorageError> {
        let index = Self::from_documents(storage.scan()?);
        tracing::info!(document_count = index.len(), "Document index built");
        Ok(index)
    }

    /// Index an already collected list of documents.
    ///
    /// Paths are normalized. When two documents share a path the later one wins.
    #[must_use]
    pub fn from_documents(documents: impl IntoIterator<Item = Document>) -> Self {
        let mut by_path: HashMap<String, Document> = HashMap::new();
        for mut doc in documents {
            let path = normalize(&doc.path).to_owned();
            doc.path.clone_from(&path);
            if let Some(previous) = by_path.insert(path, doc) {
                tracing::debug!(path = %previous.path, "Duplicate document path, keeping last");
            }
        }

        let mut documents: Vec<Document> = by_path.into_values().collect();
        documents.sort_by(|a, b| a.path.cmp(&b.path));

        let path_index = documents
            .iter()
            .enumerate()
            .map(|(i, doc)| (doc.path.clone(), i))
            .collect();

        Self {
            documents,
            path_index,
        }
    }

    /// Get a document by URL path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Document> {
        self.path_index
            .get(normalize(path))
            .map(|&i| &self.documents[i])
    }

    /// Check whether a document exists at a URL path.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.path_index.contains_key(normalize(path))
    }

    /// All documents, sorted by URL path.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Number of indexed documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True if no documents are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> DocumentIndex {
        DocumentIndex::from_documents([
            Document::new("nodes/boolean", "Boolean"),
            Document::new("", "Home"),
            Document::new("/v1.0/nodes/boolean/", "Boolean"),
        ])
    }

    #[test]
    fn test_documents_sorted_by_path() {
        let index = sample();
        let paths: Vec<_> = index.documents().iter().map(|d| d.path.as_str()).collect();

        assert_eq!(paths, vec!["", "nodes/boolean", "v1.0/nodes/boolean"]);
    }

    #[test]
    fn test_lookup_normalizes_slashes() {
        let index = sample();

        assert!(index.contains("v1.0/nodes/boolean"));
        assert!(index.contains("/nodes/boolean/"));
        assert_eq!(index.get("/").map(|d| d.title.as_str()), Some("Home"));
    }

    #[test]
    fn test_missing_path() {
        let index = sample();

        assert!(!index.contains("v1.1/nodes/boolean"));
        assert!(index.get("nodes/missing").is_none());
    }

    #[test]
    fn test_duplicate_path_keeps_last() {
        let index = DocumentIndex::from_documents([
            Document::new("guide", "First"),
            Document::new("guide/", "Second"),
        ]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("guide").unwrap().title, "Second");
    }

    #[test]
    fn test_empty_index() {
        let index = DocumentIndex::default();

        assert!(index.is_empty());
        assert!(!index.contains(""));
    }
}

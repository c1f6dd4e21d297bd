//! In-memory [`Storage`] for tests of the site layer (feature `mock`).

use std::collections::HashMap;

use crate::storage::{Document, Storage, StorageError};

/// Documents listed by hand, returned by `scan()` in insertion order.
///
/// ```ignore
/// let index = DocumentIndex::build(
///     &MockStorage::new()
///         .with_document("nodes/boolean", "Boolean")
///         .with_document("v1.0/nodes/boolean", "Boolean"),
/// )?;
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    documents: Vec<Document>,
    contents: HashMap<String, String>,
}

impl MockStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document with the given URL path and title.
    #[must_use]
    pub fn with_document(mut self, path: impl Into<String>, title: impl Into<String>) -> Self {
        self.documents.push(Document::new(path, title));
        self
    }

    /// Add a document with a title and a description.
    #[must_use]
    pub fn with_described_document(
        mut self,
        path: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.documents
            .push(Document::new(path, title).with_description(description));
        self
    }

    /// Add a fully built document.
    #[must_use]
    pub fn with(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }

    /// Add source content for a URL path.
    #[must_use]
    pub fn with_content(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.contents.insert(path.into(), content.into());
        self
    }
}

impl Storage for MockStorage {
    fn scan(&self) -> Result<Vec<Document>, StorageError> {
        Ok(self.documents.clone())
    }

    fn read(&self, path: &str) -> Result<String, StorageError> {
        self.contents
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::not_found("Mock", path))
    }

    fn exists(&self, path: &str) -> bool {
        self.documents.iter().any(|d| d.path == path)
    }
}

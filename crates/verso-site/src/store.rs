//! Read-only document store seen by the resolution engine.

use verso_storage::{Document, DocumentIndex};

use crate::versions::VersionTag;

/// Source of document records.
///
/// The engine never writes to the store. Implementations are expected to
/// answer from memory: [`DocumentIndex`] is built once at startup.
pub trait DocumentStore: Send + Sync {
    /// Document at a storage path such as `v1.0/nodes/boolean`.
    fn get_document(&self, path: &str) -> Option<&Document>;

    /// Every document, sorted by path.
    fn documents(&self) -> &[Document];

    /// True if `topic_path` has content in the `version` snapshot.
    fn exists(&self, version: &VersionTag, topic_path: &str) -> bool {
        self.get_document(&version.document_path(topic_path)).is_some()
    }
}

impl DocumentStore for DocumentIndex {
    fn get_document(&self, path: &str) -> Option<&Document> {
        self.get(path)
    }

    fn documents(&self) -> &[Document] {
        DocumentIndex::documents(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::versions::VersionTagSet;

    #[test]
    fn test_index_exists_by_version() {
        let index = DocumentIndex::from_documents([
            Document::new("nodes/boolean", "Boolean"),
            Document::new("v1.0/nodes/boolean", "Boolean"),
        ]);
        let versions = VersionTagSet::new("latest", ["v1.1", "v1.0"]).unwrap();

        assert!(index.exists(versions.latest(), "nodes/boolean"));
        assert!(index.exists(versions.get("v1.0").unwrap(), "nodes/boolean"));
        assert!(!index.exists(versions.get("v1.1").unwrap(), "nodes/boolean"));
        assert_eq!(
            index.get_document("v1.0/nodes/boolean").map(|d| d.title.as_str()),
            Some("Boolean")
        );
    }
}

//! Which snapshots have content for a topic.

use crate::store::DocumentStore;
use crate::versions::{VersionTag, VersionTagSet};

/// Lists the versions in which a topic exists.
///
/// The result is exactly what a version switcher may offer: a tag is
/// included only if the store has content for it, so no option leads to a
/// missing page.
pub struct AvailabilityProbe<'a> {
    store: &'a dyn DocumentStore,
    versions: &'a VersionTagSet,
}

impl<'a> AvailabilityProbe<'a> {
    #[must_use]
    pub fn new(store: &'a dyn DocumentStore, versions: &'a VersionTagSet) -> Self {
        Self { store, versions }
    }

    /// Versions with content at `topic_path`, most recent first.
    ///
    /// Never empty: a topic found nowhere yields just the latest tag.
    #[must_use]
    pub fn probe(&self, topic_path: &str) -> Vec<VersionTag> {
        let mut available: Vec<VersionTag> = self
            .versions
            .iter()
            .filter(|tag| self.store.exists(tag, topic_path))
            .cloned()
            .collect();

        if available.is_empty() {
            tracing::debug!(topic = topic_path, "Topic not found in any version");
            available.push(self.versions.latest().clone());
        } else {
            tracing::debug!(
                topic = topic_path,
                versions = ?available.iter().map(VersionTag::name).collect::<Vec<_>>(),
                "Topic availability"
            );
        }
        available
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use verso_storage::{Document, DocumentIndex};

    use super::*;

    fn names(tags: &[VersionTag]) -> Vec<&str> {
        tags.iter().map(VersionTag::name).collect()
    }

    fn versions() -> VersionTagSet {
        VersionTagSet::new("latest", ["v1.1", "v1.0"]).unwrap()
    }

    #[test]
    fn test_skips_versions_without_content() {
        let index = DocumentIndex::from_documents([
            Document::new("nodes/boolean", "Boolean"),
            Document::new("v1.0/nodes/boolean", "Boolean"),
        ]);
        let versions = versions();

        let available = AvailabilityProbe::new(&index, &versions).probe("nodes/boolean");

        assert_eq!(names(&available), vec!["latest", "v1.0"]);
    }

    #[test]
    fn test_topic_only_in_old_versions() {
        let index = DocumentIndex::from_documents([
            Document::new("v1.0/nodes/legacy", "Legacy"),
            Document::new("v1.1/nodes/legacy", "Legacy"),
        ]);
        let versions = versions();

        let available = AvailabilityProbe::new(&index, &versions).probe("nodes/legacy");

        assert_eq!(names(&available), vec!["v1.1", "v1.0"]);
    }

    #[test]
    fn test_missing_topic_falls_back_to_latest() {
        let index = DocumentIndex::default();
        let versions = versions();

        let available = AvailabilityProbe::new(&index, &versions).probe("nodes/missing");

        assert_eq!(names(&available), vec!["latest"]);
    }
}

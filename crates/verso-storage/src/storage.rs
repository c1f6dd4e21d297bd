//! Storage trait, document record, and storage errors.
//!
//! Every path handled here is a URL path relative to the documentation base,
//! without leading slash: `""` is the home page, `"nodes/boolean"` a topic of
//! the latest snapshot, `"v1.0/nodes/boolean"` the same topic in `v1.0`.
//! Backends map these to whatever layout they store.

use std::fmt;

use serde::Serialize;

/// Document record returned by storage scan.
///
/// Carries the raw, source-language strings. Localization happens downstream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Document {
    /// URL path (e.g., "", "nodes", "v1.1/nodes/boolean").
    pub path: String,
    /// Document title (resolved: front matter > H1 > filename).
    pub title: String,
    /// Short description from front matter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Version the topic first appeared in, from front matter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
}

impl Document {
    /// Create a document without a description.
    #[must_use]
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            description: None,
            since: None,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach the version the topic first appeared in.
    #[must_use]
    pub fn with_since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }
}

/// What went wrong in a storage operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// No document at the path.
    NotFound,
    /// The path is malformed or escapes the storage root.
    InvalidPath,
    /// Reading from the backend failed.
    Io,
}

impl fmt::Display for StorageErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotFound => "document not found",
            Self::InvalidPath => "invalid path",
            Self::Io => "read failed",
        })
    }
}

/// Error from a storage backend, tagged with the URL path involved.
#[derive(Debug)]
pub struct StorageError {
    pub kind: StorageErrorKind,
    /// URL path the operation was about.
    pub path: String,
    /// Backend name (e.g., "Fs", "Mock").
    pub backend: &'static str,
    source: Option<std::io::Error>,
}

impl StorageError {
    /// No document at `path`.
    #[must_use]
    pub fn not_found(backend: &'static str, path: impl Into<String>) -> Self {
        Self {
            kind: StorageErrorKind::NotFound,
            path: path.into(),
            backend,
            source: None,
        }
    }

    /// `path` is malformed, e.g. contains `..`.
    #[must_use]
    pub fn invalid_path(backend: &'static str, path: impl Into<String>) -> Self {
        Self {
            kind: StorageErrorKind::InvalidPath,
            path: path.into(),
            backend,
            source: None,
        }
    }

    /// Reading `path` failed. A missing file is reported as `NotFound`.
    #[must_use]
    pub fn io(backend: &'static str, path: impl Into<String>, source: std::io::Error) -> Self {
        let kind = if source.kind() == std::io::ErrorKind::NotFound {
            StorageErrorKind::NotFound
        } else {
            StorageErrorKind::Io
        };
        Self {
            kind,
            path: path.into(),
            backend,
            source: Some(source),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} storage: {} at {:?}", self.backend, self.kind, self.path)?;
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// A source of documentation documents.
///
/// The resolution engine reads storage exactly once:
/// [`DocumentIndex::build`](crate::DocumentIndex::build) calls `scan()` at
/// startup and every later lookup is answered from memory.
pub trait Storage: Send + Sync {
    /// Every document the backend holds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend can't be listed.
    fn scan(&self) -> Result<Vec<Document>, StorageError>;

    /// Raw source of the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the path is invalid, missing, or unreadable.
    fn read(&self, path: &str) -> Result<String, StorageError>;

    /// True if a document exists at `path`. Errors count as absent.
    fn exists(&self, path: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_document_with_description() {
        let doc = Document::new("nodes/group", "Group").with_description("Manage geometry selections");

        assert_eq!(doc.description.as_deref(), Some("Manage geometry selections"));
    }

    #[test]
    fn test_document_serializes_without_missing_description() {
        let json = serde_json::to_value(Document::new("nodes", "Nodes")).unwrap();

        assert_eq!(json, serde_json::json!({"path": "nodes", "title": "Nodes"}));
    }

    #[test]
    fn test_not_found_display() {
        let err = StorageError::not_found("Fs", "v1.0/nodes/boolean");

        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert_eq!(
            err.to_string(),
            "Fs storage: document not found at \"v1.0/nodes/boolean\""
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = StorageError::io("Fs", "nodes/boolean", io_err);

        assert_eq!(err.kind, StorageErrorKind::Io);
        assert_eq!(
            err.to_string(),
            "Fs storage: read failed at \"nodes/boolean\": access denied"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_not_found_maps_to_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");

        assert_eq!(StorageError::io("Fs", "nodes", io_err).kind, StorageErrorKind::NotFound);
    }

    #[test]
    fn test_storage_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StorageError>();
    }
}

//! Filesystem storage implementation for Verso.
//!
//! This crate provides [`FsStorage`], a filesystem-based implementation of the
//! [`Storage`](verso_storage::Storage) trait. It handles:
//!
//! - Recursive directory scanning for `.md` and `.mdx` files
//! - Title and description extraction from YAML front matter
//! - Title fallback to the first H1 heading, then the file name
//!
//! Versioned snapshots are plain directories: `docs/v1.0/nodes/boolean.md`
//! is indexed under the URL path `v1.0/nodes/boolean`.
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use verso_storage::Storage;
//! use verso_storage_fs::FsStorage;
//!
//! let storage = FsStorage::new(PathBuf::from("docs"));
//! let documents = storage.scan()?;
//! for doc in documents {
//!     println!("{}: {}", doc.path, doc.title);
//! }
//! ```

mod front_matter;
mod scanner;

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use front_matter::{extract_h1, parse_front_matter, split_front_matter};
use scanner::{DocumentRef, Scanner};
use verso_storage::{Document, Storage, StorageError};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Convert a slug (kebab-case or `snake_case`) to title case.
///
/// Replaces `-` and `_` with spaces, then capitalizes the first letter of each word.
fn titlecase_from_slug(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for word in slug.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

/// Filesystem storage implementation.
///
/// Scans a source directory recursively for markdown files. Every file is read
/// once per scan; the resulting documents are meant to be captured in a
/// [`DocumentIndex`](verso_storage::DocumentIndex).
pub struct FsStorage {
    /// Root directory for document storage.
    source_dir: PathBuf,
    /// Scanner for document discovery.
    scanner: Scanner,
}

impl FsStorage {
    /// Create a new filesystem storage rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        let scanner = Scanner::new(&source_dir);
        Self {
            source_dir,
            scanner,
        }
    }

    /// Root directory of this storage.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Validate that a URL path doesn't contain path traversal attempts.
    fn validate_path(path: &str) -> Result<(), StorageError> {
        if path.split('/').any(|segment| segment == "..") {
            return Err(StorageError::invalid_path(BACKEND, path));
        }
        Ok(())
    }

    /// Resolve URL path to content file path.
    ///
    /// Prefers `{path}/index.md(x)` over `{path}.md(x)`.
    fn resolve_content(&self, url_path: &str) -> Option<PathBuf> {
        let url_path = url_path.trim_matches('/');
        let base = self.source_dir.join(url_path);

        let mut candidates = vec![base.join("index.md"), base.join("index.mdx")];
        if !url_path.is_empty() {
            // Append rather than `with_extension`: "v1.0" already has a dot
            for ext in [".md", ".mdx"] {
                let mut file = base.clone().into_os_string();
                file.push(ext);
                candidates.push(PathBuf::from(file));
            }
        }

        candidates.into_iter().find(|p| p.is_file())
    }

    /// Build a `Document` from a `DocumentRef`.
    ///
    /// Unreadable files are logged and skipped.
    fn build_document(doc_ref: &DocumentRef) -> Option<Document> {
        let content = fs::read_to_string(&doc_ref.content_path)
            .inspect_err(|e| {
                tracing::warn!(
                    path = %doc_ref.content_path.display(),
                    error = %e,
                    "Failed to read document, skipping"
                );
            })
            .ok()?;

        let (yaml, body) = split_front_matter(&content);
        let front_matter = yaml.map(parse_front_matter).unwrap_or_default();

        let title = front_matter
            .title
            .or_else(|| extract_h1(body))
            .unwrap_or_else(|| Self::derive_title(doc_ref));

        Some(Document {
            path: doc_ref.url_path.clone(),
            title,
            description: front_matter.description,
            since: front_matter.since,
        })
    }

    /// Generate a title from the URL path's last segment.
    fn derive_title(doc_ref: &DocumentRef) -> String {
        match doc_ref.url_path.rsplit('/').next() {
            Some("") | None => "Home".to_owned(),
            Some(slug) => titlecase_from_slug(slug),
        }
    }
}

impl Storage for FsStorage {
    fn scan(&self) -> Result<Vec<Document>, StorageError> {
        let refs = self.scanner.scan();
        let documents: Vec<Document> = refs.par_iter().filter_map(Self::build_document).collect();
        tracing::debug!(document_count = documents.len(), "Filesystem scan completed");
        Ok(documents)
    }

    fn read(&self, path: &str) -> Result<String, StorageError> {
        Self::validate_path(path)?;
        let full_path = self
            .resolve_content(path)
            .ok_or_else(|| StorageError::not_found(BACKEND, path))?;
        fs::read_to_string(&full_path).map_err(|e| StorageError::io(BACKEND, path, e))
    }

    fn exists(&self, path: &str) -> bool {
        Self::validate_path(path).is_ok() && self.resolve_content(path).is_some()
    }
}

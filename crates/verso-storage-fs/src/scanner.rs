//! Document discovery by filesystem walking.
//!
//! The scanner only identifies files that could form documents, returning
//! lightweight references for `FsStorage` to read and build.

use std::fs;
use std::path::{Path, PathBuf};

/// File extensions recognized as document content.
const CONTENT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Reference to a document's source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DocumentRef {
    /// URL path (e.g., "", "nodes", "v1.0/nodes/boolean")
    pub url_path: String,
    /// Path to the content file
    pub content_path: PathBuf,
}

/// Discovers document references by walking the filesystem.
pub(crate) struct Scanner {
    source_dir: PathBuf,
}

impl Scanner {
    pub fn new(source_dir: &Path) -> Self {
        Self {
            source_dir: source_dir.to_path_buf(),
        }
    }

    /// Scan filesystem and return document references.
    ///
    /// Returns an empty Vec if the source directory doesn't exist.
    pub fn scan(&self) -> Vec<DocumentRef> {
        let mut refs = Vec::new();
        if self.source_dir.exists() {
            scan_directory(&self.source_dir, "", &mut refs);
        }
        refs
    }
}

/// Check whether a path has a content extension.
pub(crate) fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| CONTENT_EXTENSIONS.contains(&e))
}

/// Scan a directory and collect document references.
///
/// `index.md` maps to the directory's own URL; every other content file maps
/// to its stem under the directory. Hidden entries are skipped.
fn scan_directory(dir_path: &Path, url_prefix: &str, refs: &mut Vec<DocumentRef>) {
    let Ok(entries) = fs::read_dir(dir_path) else {
        tracing::warn!(path = %dir_path.display(), "Failed to read directory, skipping");
        return;
    };

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());

        if is_dir {
            let child_url = join_url(url_prefix, &name);
            scan_directory(&path, &child_url, refs);
        } else if is_content_file(&path) {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let url_path = if stem.eq_ignore_ascii_case("index") {
                url_prefix.to_owned()
            } else {
                join_url(url_prefix, &stem)
            };
            refs.push(DocumentRef {
                url_path,
                content_path: path,
            });
        }
    }
}

/// Join a URL prefix and a segment.
fn join_url(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}/{segment}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn url_paths(refs: &[DocumentRef]) -> Vec<&str> {
        let mut paths: Vec<_> = refs.iter().map(|r| r.url_path.as_str()).collect();
        paths.sort_unstable();
        paths
    }

    #[test]
    fn test_scan_missing_dir() {
        let scanner = Scanner::new(Path::new("/nonexistent"));

        assert!(scanner.scan().is_empty());
    }

    #[test]
    fn test_scan_versioned_tree() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("nodes")).unwrap();
        fs::create_dir_all(root.join("v1.0/nodes")).unwrap();
        fs::write(root.join("index.md"), "# Home").unwrap();
        fs::write(root.join("nodes/index.mdx"), "# Nodes").unwrap();
        fs::write(root.join("nodes/boolean.mdx"), "# Boolean").unwrap();
        fs::write(root.join("v1.0/nodes/boolean.md"), "# Boolean").unwrap();
        fs::write(root.join("nodes/notes.txt"), "ignored").unwrap();

        let refs = Scanner::new(root).scan();

        assert_eq!(
            url_paths(&refs),
            vec!["", "nodes", "nodes/boolean", "v1.0/nodes/boolean"]
        );
    }

    #[test]
    fn test_scan_skips_hidden_entries() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join(".drafts")).unwrap();
        fs::write(root.join(".drafts/wip.md"), "# WIP").unwrap();
        fs::write(root.join(".hidden.md"), "# Hidden").unwrap();
        fs::write(root.join("visible.md"), "# Visible").unwrap();

        let refs = Scanner::new(root).scan();

        assert_eq!(url_paths(&refs), vec!["visible"]);
    }

    #[test]
    fn test_is_content_file() {
        assert!(is_content_file(Path::new("a/b.md")));
        assert!(is_content_file(Path::new("a/b.mdx")));
        assert!(!is_content_file(Path::new("a/meta.json")));
        assert!(!is_content_file(Path::new("README")));
    }
}

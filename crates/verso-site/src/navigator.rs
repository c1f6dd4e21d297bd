//! Version switch targets.

use crate::versions::{VersionTag, VersionTagSet};

/// Computes the path a "switch version" action lands on.
///
/// Request paths start with a fixed section prefix (`/docs` by default),
/// optionally followed by a version segment:
///
/// ```text
/// /docs/v1.1/nodes/boolean  --latest-->  /docs/nodes/boolean
/// /docs/nodes/boolean       --v1.0--->   /docs/v1.0/nodes/boolean
/// ```
pub struct VersionNavigator<'a> {
    versions: &'a VersionTagSet,
    section_depth: usize,
}

impl<'a> VersionNavigator<'a> {
    /// Navigator for paths with a single top-level section segment.
    #[must_use]
    pub fn new(versions: &'a VersionTagSet) -> Self {
        Self {
            versions,
            section_depth: 1,
        }
    }

    /// Use the segments of `base_url` as the section prefix.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.section_depth = base_url.split('/').filter(|s| !s.is_empty()).count();
        self
    }

    /// Version addressed by a full request path.
    #[must_use]
    pub fn current_version(&self, path: &str) -> &'a VersionTag {
        let segments = split(path);
        match segments.get(self.section_depth..) {
            Some(rest) => self.versions.resolve(rest).0,
            None => self.versions.latest(),
        }
    }

    /// Rewrite `path` to address `target`.
    ///
    /// Returns `path` unchanged when it already addresses `target`, or when
    /// it is shorter than the section prefix. Callers should skip navigation
    /// in that case.
    #[must_use]
    pub fn switch(&self, path: &str, target: &VersionTag) -> String {
        let segments = split(path);
        let Some(rest) = segments.get(self.section_depth..) else {
            return path.to_owned();
        };
        let (current, topic) = self.versions.resolve(rest);
        if current == target {
            return path.to_owned();
        }

        let mut out: Vec<&str> = segments[..self.section_depth].to_vec();
        if !target.is_latest() {
            out.push(target.name());
        }
        out.extend_from_slice(topic);
        format!("/{}", out.join("/"))
    }
}

fn split(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

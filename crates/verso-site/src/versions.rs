//! Version tags and path version resolution.
//!
//! A documentation corpus is published as a set of snapshots. The latest
//! snapshot lives at unprefixed paths (`nodes/boolean`); older snapshots are
//! addressed with a leading tag segment (`v1.0/nodes/boolean`).

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// Errors raised when building a [`VersionTagSet`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// A tag name is empty.
    #[error("Version tag must not be empty")]
    Empty,
    /// A tag name contains a path separator.
    #[error("Version tag {0:?} must not contain '/'")]
    InvalidTag(String),
    /// A tag name appears twice, or a prefixed tag reuses the latest name.
    #[error("Duplicate version tag {0:?}")]
    Duplicate(String),
}

/// One recognized documentation snapshot.
///
/// Tags are only handed out by a [`VersionTagSet`], so every tag in use is a
/// member of the configured set. Tags order by recency: the latest tag sorts
/// first, then prefixed tags in configuration order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VersionTag {
    name: String,
    rank: usize,
}

impl VersionTag {
    /// Tag name as it appears in paths.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for the unprefixed snapshot.
    #[must_use]
    pub fn is_latest(&self) -> bool {
        self.rank == 0
    }

    /// Position in recency order. The latest tag is 0.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Storage path of a topic within this snapshot.
    ///
    /// The latest snapshot uses the topic path unchanged.
    #[must_use]
    pub fn document_path(&self, topic_path: &str) -> String {
        let topic_path = topic_path.trim_matches('/');
        match (self.is_latest(), topic_path.is_empty()) {
            (true, _) => topic_path.to_owned(),
            (false, true) => self.name.clone(),
            (false, false) => format!("{}/{topic_path}", self.name),
        }
    }
}

impl PartialOrd for VersionTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionTag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank).then_with(|| self.name.cmp(&other.name))
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for VersionTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// The fixed, ordered set of recognized version tags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionTagSet {
    /// Latest first, then prefixed tags most recent first.
    tags: Vec<VersionTag>,
}

impl VersionTagSet {
    /// Build a set from the latest tag name and the prefixed tags, most
    /// recent first.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError`] for empty names, names containing `/`, or
    /// duplicates.
    pub fn new<I, S>(latest: &str, prefixed: I) -> Result<Self, VersionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = std::iter::once(latest.to_owned()).chain(prefixed.into_iter().map(Into::into));

        let mut tags: Vec<VersionTag> = Vec::new();
        for (rank, name) in names.enumerate() {
            if name.is_empty() {
                return Err(VersionError::Empty);
            }
            if name.contains('/') {
                return Err(VersionError::InvalidTag(name));
            }
            if tags.iter().any(|t| t.name == name) {
                return Err(VersionError::Duplicate(name));
            }
            tags.push(VersionTag { name, rank });
        }
        Ok(Self { tags })
    }

    /// The unprefixed tag.
    #[must_use]
    pub fn latest(&self) -> &VersionTag {
        &self.tags[0]
    }

    /// Prefixed tags, most recent first.
    #[must_use]
    pub fn prefixed(&self) -> &[VersionTag] {
        &self.tags[1..]
    }

    /// All tags in recency order, latest first.
    pub fn iter(&self) -> impl Iterator<Item = &VersionTag> {
        self.tags.iter()
    }

    /// Look up a tag by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&VersionTag> {
        self.tags.iter().find(|t| t.name == name)
    }

    /// True if `name` is a recognized tag.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of tags, including latest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True if the set holds no tags. Construction requires a latest tag,
    /// so a set built by [`VersionTagSet::new`] is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Find the version addressed by a list of path segments.
    ///
    /// A recognized first segment is the version and is consumed; the
    /// remaining segments are the topic path. Anything else, including an
    /// empty list or an unknown tag such as `v9.9`, addresses the latest
    /// snapshot and all segments stay in the topic path.
    #[doc(alias = "PathVersionResolver")]
    pub fn resolve<'s, 'p, S: AsRef<str>>(&'s self, segments: &'p [S]) -> (&'s VersionTag, &'p [S]) {
        match segments.split_first() {
            Some((first, rest)) => match self.get(first.as_ref()) {
                Some(tag) => (tag, rest),
                None => (self.latest(), segments),
            },
            None => (self.latest(), segments),
        }
    }
}

impl<'a> IntoIterator for &'a VersionTagSet {
    type Item = &'a VersionTag;
    type IntoIter = std::slice::Iter<'a, VersionTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

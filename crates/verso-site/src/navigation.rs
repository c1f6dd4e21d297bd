//! Navigation tree built from the document index.
//!
//! Each version gets its own tree. Nodes are nested by URL path; a path
//! segment without its own document becomes a label-only node whose title is
//! derived from the segment.

use std::collections::BTreeMap;

use serde::Serialize;
use verso_storage::Document;

use crate::versions::{VersionTag, VersionTagSet};

/// Display label of a navigation node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Label {
    /// Plain text, subject to localization.
    Text(String),
    /// An API or component name, always shown as written.
    Code(String),
}

impl Label {
    /// Classify a document title.
    ///
    /// Titles like `merge()` or `<Callout />` are code.
    #[must_use]
    pub fn from_title(title: &str) -> Self {
        if is_code_title(title) {
            Self::Code(title.to_owned())
        } else {
            Self::Text(title.to_owned())
        }
    }

    /// The label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Code(s) => s,
        }
    }
}

fn is_code_title(title: &str) -> bool {
    if title.ends_with("()") {
        return true;
    }
    title
        .strip_prefix('<')
        .and_then(|t| t.strip_suffix("/>"))
        .map(str::trim_end)
        .is_some_and(|name| !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_'))
}

/// A node in the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavNode {
    pub label: Label,
    /// Page URL. `None` for grouping nodes without their own page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavNode>,
}

impl NavNode {
    /// Total number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(NavNode::count).sum::<usize>()
    }
}

#[derive(Default)]
struct Branch<'a> {
    document: Option<&'a Document>,
    children: BTreeMap<&'a str, Branch<'a>>,
}

/// Build the navigation tree of one version.
///
/// Only documents of `version` are included: prefixed ones for an older tag,
/// unprefixed ones for latest. The root document (home page) is not part of
/// the tree. Siblings are sorted by path segment.
#[must_use]
pub fn build_tree(
    documents: &[Document],
    version: &VersionTag,
    versions: &VersionTagSet,
    base_url: &str,
) -> Vec<NavNode> {
    let mut root = Branch::default();

    for doc in documents {
        let Some(topic_path) = topic_path_in(&doc.path, version, versions) else {
            continue;
        };
        if topic_path.is_empty() {
            continue;
        }

        let mut branch = &mut root;
        for segment in topic_path.split('/') {
            branch = branch.children.entry(segment).or_default();
        }
        branch.document = Some(doc);
    }

    root.children
        .into_iter()
        .map(|(segment, branch)| to_node(segment, branch, base_url))
        .collect()
}

/// Topic path of a storage path within `version`, if it belongs to it.
fn topic_path_in<'p>(path: &'p str, version: &VersionTag, versions: &VersionTagSet) -> Option<&'p str> {
    if version.is_latest() {
        let first = path.split('/').next().unwrap_or_default();
        return (!versions.contains(first)).then_some(path);
    }
    let rest = path.strip_prefix(version.name())?;
    if rest.is_empty() {
        return Some("");
    }
    rest.strip_prefix('/')
}

fn to_node(segment: &str, branch: Branch<'_>, base_url: &str) -> NavNode {
    let label = match branch.document {
        Some(doc) => Label::from_title(&doc.title),
        None => Label::Text(titlecase(segment)),
    };
    let url = branch.document.map(|doc| page_url(base_url, &doc.path));
    let children = branch
        .children
        .into_iter()
        .map(|(segment, child)| to_node(segment, child, base_url))
        .collect();

    NavNode { label, url, children }
}

/// Public URL of a storage path under `base_url`.
pub(crate) fn page_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_matches('/');
    match (base.is_empty(), path.is_empty()) {
        (true, true) => "/".to_owned(),
        (true, false) => format!("/{path}"),
        (false, true) => base.to_owned(),
        (false, false) => format!("{base}/{path}"),
    }
}

/// `group-create` -> `Group Create`.
fn titlecase(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

//! Request resolution facade.
//!
//! [`Site`] ties together version resolution, availability, switch targets,
//! and label localization. It is built once from an immutable document store
//! and answers every request from memory.

use std::sync::Arc;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use serde::Serialize;
use verso_i18n::{LabelResolver, Locale};

use crate::availability::AvailabilityProbe;
use crate::localize::{TocEntry, localize_toc, localize_tree};
use crate::navigation::{NavNode, build_tree, page_url};
use crate::navigator::VersionNavigator;
use crate::store::DocumentStore;
use crate::versions::{VersionTag, VersionTagSet};

/// Characters escaped when a decoded segment is written back into a path.
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Topic name that marks a section landing page rather than a topic.
const INDEX_TOPIC: &str = "index";

/// Errors returned by [`Site::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteError {
    /// No document exists at the requested path.
    #[error("Page not found: {0}")]
    PageNotFound(String),
}

/// Configuration for [`Site`].
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// URL prefix of every document (e.g. `/docs`).
    pub base_url: String,
    /// Path segment that precedes topic names (e.g. `nodes`).
    pub topic_section: String,
    /// Recognized versions.
    pub versions: VersionTagSet,
}

impl SiteConfig {
    /// Configuration with the default `/docs` base and `nodes` topic section.
    #[must_use]
    pub fn new(versions: VersionTagSet) -> Self {
        Self {
            base_url: "/docs".to_owned(),
            topic_section: "nodes".to_owned(),
            versions,
        }
    }
}

/// One entry of the version switcher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VersionOption {
    /// Version offered.
    pub version: VersionTag,
    /// Path to navigate to. For the current version this is the request path
    /// with segments decoded, re-escaped, and empty segments dropped.
    pub path: String,
    /// Shown with a "(latest)" marker.
    pub latest: bool,
    /// The version being viewed.
    pub current: bool,
}

/// Everything the presentation layer needs to render a page's chrome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPage {
    pub locale: Locale,
    pub version: VersionTag,
    /// Version-independent path below the base URL (e.g. `nodes/boolean`).
    pub topic_path: String,
    /// Topic name, for pages under the topic section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Versions the switcher may offer, most recent first. Never empty.
    pub available_versions: Vec<VersionTag>,
    /// False means the version is shown as a static badge.
    pub show_version_switcher: bool,
    pub switcher: Vec<VersionOption>,
    /// Version the topic first appeared in. Topic pages only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Canonical page URL.
    pub url: String,
    pub navigation: Vec<NavNode>,
}

/// Version and locale resolution over an immutable document store.
///
/// All state is built in [`Site::new`] and never mutated, so a `Site` can be
/// shared across threads without locking.
pub struct Site {
    store: Arc<dyn DocumentStore>,
    resolver: LabelResolver,
    config: SiteConfig,
    /// Source-language navigation trees, indexed by version rank.
    trees: Vec<Vec<NavNode>>,
}

impl Site {
    /// Create a site and build the navigation tree of every version.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, resolver: LabelResolver, config: SiteConfig) -> Self {
        let trees = config
            .versions
            .iter()
            .map(|version| build_tree(store.documents(), version, &config.versions, &config.base_url))
            .collect();

        Self {
            store,
            resolver,
            config,
            trees,
        }
    }

    /// Recognized versions.
    #[must_use]
    pub fn versions(&self) -> &VersionTagSet {
        &self.config.versions
    }

    /// Label resolver used for localized strings.
    #[must_use]
    pub fn resolver(&self) -> &LabelResolver {
        &self.resolver
    }

    /// Resolve a request path for a locale.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::PageNotFound`] if the path is outside the base
    /// URL or no document exists for it.
    pub fn resolve(&self, request_path: &str, locale: &Locale) -> Result<ResolvedPage, SiteError> {
        let not_found = || SiteError::PageNotFound(request_path.to_owned());

        let segments: Vec<String> = request_path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
            .collect();
        let base: Vec<&str> = self.config.base_url.split('/').filter(|s| !s.is_empty()).collect();
        if segments.len() < base.len() || segments.iter().zip(&base).any(|(s, b)| s != b) {
            return Err(not_found());
        }

        let (version, topic_segments) = self.config.versions.resolve(&segments[base.len()..]);
        let topic_path = topic_segments.join("/");
        let document_path = version.document_path(&topic_path);
        let document = self.store.get_document(&document_path).ok_or_else(not_found)?;

        let topic = self.topic_name(topic_segments);
        let is_topic_page = topic.as_deref().is_some_and(|t| t != INDEX_TOPIC);
        let available_versions = match &topic {
            Some(name) if is_topic_page => self.available_versions(name),
            _ => vec![version.clone()],
        };
        let show_version_switcher = is_topic_page && available_versions.len() > 1;

        // Switch targets are computed from the decoded segments, so an escaped
        // version segment is recognized the same way it was for `version`.
        let canonical_path = format!(
            "/{}",
            segments
                .iter()
                .map(|s| utf8_percent_encode(s, SEGMENT_ENCODE_SET).to_string())
                .collect::<Vec<_>>()
                .join("/")
        );
        let navigator = self.navigator();
        let switcher = available_versions
            .iter()
            .map(|tag| VersionOption {
                version: tag.clone(),
                path: navigator.switch(&canonical_path, tag),
                latest: tag.is_latest(),
                current: tag == version,
            })
            .collect();

        let since = if is_topic_page { document.since.clone() } else { None };

        let url = page_url(&self.config.base_url, &document_path);
        let title = self.resolver.title(Some(&url), &document.title, locale).into_owned();
        let description = document
            .description
            .as_deref()
            .map(|d| self.resolver.description(Some(&url), d, locale).into_owned());

        tracing::debug!(
            path = request_path,
            version = %version,
            locale = %locale,
            "Resolved page"
        );

        Ok(ResolvedPage {
            locale: locale.clone(),
            version: version.clone(),
            topic_path,
            topic,
            available_versions,
            show_version_switcher,
            switcher,
            since,
            title,
            description,
            url,
            navigation: self.navigation(version, locale),
        })
    }

    /// Versions with content for a topic name, most recent first.
    #[must_use]
    pub fn available_versions(&self, topic: &str) -> Vec<VersionTag> {
        let topic_path = format!("{}/{topic}", self.config.topic_section);
        AvailabilityProbe::new(self.store.as_ref(), &self.config.versions).probe(&topic_path)
    }

    /// Path that switches `path` to `target`.
    #[must_use]
    pub fn switch_path(&self, path: &str, target: &VersionTag) -> String {
        self.navigator().switch(path, target)
    }

    /// Localized navigation tree of a version.
    #[must_use]
    pub fn navigation(&self, version: &VersionTag, locale: &Locale) -> Vec<NavNode> {
        self.trees
            .get(version.rank())
            .map(|tree| localize_tree(tree, &self.resolver, locale))
            .unwrap_or_default()
    }

    /// Localized table of contents.
    #[must_use]
    pub fn localize_toc(&self, entries: &[TocEntry], locale: &Locale) -> Vec<TocEntry> {
        localize_toc(entries, &self.resolver, locale)
    }

    fn navigator(&self) -> VersionNavigator<'_> {
        VersionNavigator::new(&self.config.versions).with_base_url(&self.config.base_url)
    }

    /// Segment following the topic section, e.g. `boolean` in `nodes/boolean/inputs`.
    fn topic_name(&self, topic_segments: &[String]) -> Option<String> {
        let position = topic_segments
            .iter()
            .position(|s| *s == self.config.topic_section)?;
        topic_segments.get(position + 1).cloned()
    }
}

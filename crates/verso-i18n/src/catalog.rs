//! Label catalogs.
//!
//! A catalog holds every localized string for one locale:
//!
//! ```toml
//! [titles]
//! "/docs/nodes/group" = "组"
//!
//! [descriptions]
//! "/docs/nodes/group" = "管理几何选集"
//!
//! [terms]
//! "Group" = "组"
//!
//! [[phrases]]
//! pattern = '\bGetting Started\b'
//! replacement = "快速开始"
//! ```
//!
//! Catalogs for `zh` are bundled into the binary. Catalogs found in a user
//! directory (`<locale>.toml`) are merged over the bundled ones.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use regex::{NoExpand, Regex, RegexBuilder};
use serde::Deserialize;

use crate::locale::{Locale, LocaleError};
use crate::resolver::LabelKind;

/// Catalogs compiled into the binary, keyed by locale code.
const BUNDLED: &[(&str, &str)] = &[("zh", include_str!("../catalogs/zh.toml"))];

/// Errors raised while loading catalogs.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file or directory could not be read.
    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid TOML or has unknown fields.
    #[error("Invalid catalog {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    /// A phrase pattern is not a valid regular expression.
    #[error("Invalid phrase pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Catalog file name is not a locale code.
    #[error("Catalog file {}: {source}", path.display())]
    Locale {
        path: PathBuf,
        #[source]
        source: LocaleError,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    titles: HashMap<String, String>,
    #[serde(default)]
    descriptions: HashMap<String, String>,
    #[serde(default)]
    terms: HashMap<String, String>,
    #[serde(default)]
    phrases: Vec<PhraseFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PhraseFile {
    pattern: String,
    replacement: String,
}

/// A case-insensitive substitution applied to labels with no exact match.
#[derive(Debug, Clone)]
pub struct PhraseRule {
    pattern: Regex,
    replacement: String,
}

impl PhraseRule {
    /// Compile a phrase rule. The pattern is matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Pattern`] if `pattern` is not a valid regex.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, CatalogError> {
        let compiled = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| CatalogError::Pattern {
                pattern: pattern.to_owned(),
                source,
            })?;
        Ok(Self {
            pattern: compiled,
            replacement: replacement.into(),
        })
    }

    /// Replace every match in `text`. The replacement is inserted literally.
    #[must_use]
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(text, NoExpand(&self.replacement))
    }

    /// Source of the compiled pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Localized strings for a single locale.
#[derive(Debug, Clone, Default)]
pub struct LabelCatalog {
    titles: HashMap<String, String>,
    descriptions: HashMap<String, String>,
    terms: HashMap<String, String>,
    phrases: Vec<PhraseRule>,
}

impl LabelCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from TOML.
    ///
    /// `origin` names the source in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed TOML and
    /// [`CatalogError::Pattern`] for invalid phrase patterns.
    pub fn from_toml(content: &str, origin: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content).map_err(|source| CatalogError::Parse {
            origin: origin.to_owned(),
            source,
        })?;

        let phrases = file
            .phrases
            .iter()
            .map(|p| PhraseRule::new(&p.pattern, p.replacement.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            titles: file.titles,
            descriptions: file.descriptions,
            terms: file.terms,
            phrases,
        })
    }

    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file can't be read, or any error
    /// from [`LabelCatalog::from_toml`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, &path.display().to_string())
    }

    /// The catalog bundled for `locale`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled catalog fails to parse.
    pub fn bundled(locale: &Locale) -> Result<Option<Self>, CatalogError> {
        BUNDLED
            .iter()
            .find(|(code, _)| *code == locale.as_str())
            .map(|(code, content)| Self::from_toml(content, &format!("bundled:{code}")))
            .transpose()
    }

    /// Add a URL-keyed title override.
    #[must_use]
    pub fn with_title(mut self, url: impl Into<String>, title: impl Into<String>) -> Self {
        self.titles.insert(url.into(), title.into());
        self
    }

    /// Add a URL-keyed description override.
    #[must_use]
    pub fn with_description(mut self, url: impl Into<String>, description: impl Into<String>) -> Self {
        self.descriptions.insert(url.into(), description.into());
        self
    }

    /// Add an exact-match term.
    #[must_use]
    pub fn with_term(mut self, source: impl Into<String>, localized: impl Into<String>) -> Self {
        self.terms.insert(source.into(), localized.into());
        self
    }

    /// Append a phrase rule.
    #[must_use]
    pub fn with_phrase(mut self, rule: PhraseRule) -> Self {
        self.phrases.push(rule);
        self
    }

    /// Layer `overlay` on top of this catalog.
    ///
    /// Entries in `overlay` replace entries with the same key. Overlay phrases
    /// run before the phrases already present.
    #[must_use]
    pub fn merge(mut self, overlay: Self) -> Self {
        merge_table("titles", &mut self.titles, overlay.titles);
        merge_table("descriptions", &mut self.descriptions, overlay.descriptions);
        merge_table("terms", &mut self.terms, overlay.terms);

        let mut phrases = overlay.phrases;
        phrases.append(&mut self.phrases);
        self.phrases = phrases;
        self
    }

    /// URL override for a field kind. Navigation labels have no URL table.
    #[must_use]
    pub fn override_for(&self, kind: LabelKind, url: &str) -> Option<&str> {
        let table = match kind {
            LabelKind::Title => &self.titles,
            LabelKind::Description => &self.descriptions,
            LabelKind::Label => return None,
        };
        table.get(url).map(String::as_str)
    }

    /// Exact-match term for a source label.
    #[must_use]
    pub fn term(&self, label: &str) -> Option<&str> {
        self.terms.get(label).map(String::as_str)
    }

    /// Apply every phrase rule in order, each to the output of the previous.
    #[must_use]
    pub fn apply_phrases<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut result = Cow::Borrowed(text);
        for rule in &self.phrases {
            let replaced = match rule.apply(&result) {
                Cow::Owned(replaced) => Some(replaced),
                Cow::Borrowed(_) => None,
            };
            if let Some(replaced) = replaced {
                result = Cow::Owned(replaced);
            }
        }
        result
    }

    /// Total number of entries across all tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len() + self.descriptions.len() + self.terms.len() + self.phrases.len()
    }

    /// True if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn merge_table(table: &str, base: &mut HashMap<String, String>, overlay: HashMap<String, String>) {
    for (key, value) in overlay {
        if let Some(previous) = base.get(&key)
            && *previous != value
        {
            tracing::debug!(table, key = %key, previous = %previous, value = %value, "Catalog entry overridden");
        }
        base.insert(key, value);
    }
}

/// All catalogs available to a resolver, one per locale.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    by_locale: HashMap<Locale, LabelCatalog>,
}

impl Catalogs {
    /// No catalogs. Every locale resolves to the source labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if a bundled catalog fails to parse.
    pub fn bundled() -> Result<Self, CatalogError> {
        let mut catalogs = Self::new();
        for (code, content) in BUNDLED {
            let locale = code.parse::<Locale>().map_err(|source| CatalogError::Locale {
                path: PathBuf::from(format!("{code}.toml")),
                source,
            })?;
            let catalog = LabelCatalog::from_toml(content, &format!("bundled:{code}"))?;
            catalogs.insert(locale, catalog);
        }
        Ok(catalogs)
    }

    /// Merge every `<locale>.toml` in `dir` over the catalogs already present.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory can't be read, a file name is not a
    /// locale code, or a catalog fails to load.
    pub fn load_dir(mut self, dir: &Path) -> Result<Self, CatalogError> {
        let entries = fs::read_dir(dir).map_err(|source| CatalogError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "toml"))
            .collect();
        paths.sort();

        for path in paths {
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            let locale = stem.parse::<Locale>().map_err(|source| CatalogError::Locale {
                path: path.clone(),
                source,
            })?;
            let catalog = LabelCatalog::load(&path)?;
            tracing::info!(
                locale = %locale,
                entries = catalog.len(),
                path = %path.display(),
                "Catalog loaded"
            );
            self.insert(locale, catalog);
        }
        Ok(self)
    }

    /// Add a catalog, merging it over any existing catalog for the locale.
    pub fn insert(&mut self, locale: Locale, catalog: LabelCatalog) {
        let merged = match self.by_locale.remove(&locale) {
            Some(existing) => existing.merge(catalog),
            None => catalog,
        };
        self.by_locale.insert(locale, merged);
    }

    /// Builder form of [`Catalogs::insert`].
    #[must_use]
    pub fn with_catalog(mut self, locale: Locale, catalog: LabelCatalog) -> Self {
        self.insert(locale, catalog);
        self
    }

    /// Catalog for a locale.
    #[must_use]
    pub fn get(&self, locale: &Locale) -> Option<&LabelCatalog> {
        self.by_locale.get(locale)
    }

    /// Locales with a catalog, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<_> = self.by_locale.keys().collect();
        locales.sort();
        locales
    }
}

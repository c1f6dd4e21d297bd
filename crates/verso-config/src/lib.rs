//! `verso.toml` loading for Verso.
//!
//! The file has three tables: `[docs]` (source directory, base URL, topic
//! section), `[versions]` (the unprefixed tag and the prefixed tags, newest
//! first) and `[i18n]` (locales, description limit, catalog directory).
//! Relative paths resolve against the directory holding the file.
//!
//! `docs.base_url` and `i18n.catalog_dir` may reference the environment as
//! `${VAR}` or `${VAR:-default}`.

mod expand;

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override the locale used when a request carries none.
    pub default_locale: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "verso.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Version snapshot configuration.
    pub versions: VersionsConfig,
    /// Display language configuration.
    pub i18n: I18nConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    base_url: Option<String>,
    topic_section: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug)]
pub struct DocsConfig {
    /// Source directory for markdown files.
    pub source_dir: PathBuf,
    /// URL prefix of every document (e.g., "/docs").
    pub base_url: String,
    /// Path segment that precedes a topic name (e.g., "nodes").
    pub topic_section: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("docs"),
            base_url: "/docs".to_owned(),
            topic_section: "nodes".to_owned(),
        }
    }
}

/// Version snapshot configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct VersionsConfig {
    /// Name of the unprefixed tag.
    pub latest: String,
    /// Prefixed tags, most recent first.
    pub tags: Vec<String>,
}

impl Default for VersionsConfig {
    fn default() -> Self {
        Self {
            latest: "latest".to_owned(),
            tags: Vec::new(),
        }
    }
}

/// Display language configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Language the documentation is authored in.
    pub native_locale: String,
    /// Locale used when the request carries none.
    pub default_locale: String,
    /// Locales a request may select.
    pub locales: Vec<String>,
    /// Descriptions longer than this many characters are never auto-translated.
    pub description_limit: usize,
    /// Directory with `<locale>.toml` label catalogs merged over the bundled ones.
    pub catalog_dir: Option<PathBuf>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            native_locale: "en".to_owned(),
            default_locale: "en".to_owned(),
            locales: vec!["en".to_owned(), "zh".to_owned()],
            description_limit: 120,
            catalog_dir: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`docs.base_url`").
        field: String,
        /// Error message (e.g., "${`DOCS_BASE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a locale to be one of the configured locales.
fn require_listed_locale(value: &str, locales: &[String], field: &str) -> Result<(), ConfigError> {
    if !locales.iter().any(|l| l == value) {
        return Err(ConfigError::Validation(format!(
            "{field} \"{value}\" must be listed in i18n.locales"
        )));
    }
    Ok(())
}

/// Nearest `verso.toml` in `start` or one of its ancestors.
fn locate(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}

impl Config {
    /// Load `verso.toml` and layer CLI settings on top.
    ///
    /// An explicit `config_path` must exist. Without one, the nearest
    /// `verso.toml` in the working directory or its ancestors is used, and a
    /// project with no config file runs on defaults rooted at the working
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().unwrap_or_default();
        let located = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => locate(&cwd),
        };

        let mut config = match located {
            Some(path) => Self::from_file(&path)?,
            None => {
                tracing::debug!(cwd = %cwd.display(), "No {CONFIG_FILENAME} found, using defaults");
                Self::default_with_base(&cwd)
            }
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(locale) = &settings.default_locale {
            self.i18n.default_locale.clone_from(locale);
        }
    }

    /// Defaults with the docs directory under `base`.
    fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            versions: VersionsConfig::default(),
            i18n: I18nConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                ..DocsConfig::default()
            },
            config_path: None,
        }
    }

    /// Parse, expand, resolve, and validate one config file.
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(&std::fs::read_to_string(path)?)?;
        config.expand_env_vars()?;
        config.resolve_paths(path.parent().unwrap_or(Path::new(".")));
        config.config_path = Some(path.to_path_buf());
        config.validate()?;
        tracing::debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI settings
    /// are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_docs()?;
        self.validate_versions()?;
        self.validate_i18n()?;
        Ok(())
    }

    fn validate_docs(&self) -> Result<(), ConfigError> {
        let docs = &self.docs_resolved;
        if !docs.base_url.starts_with('/') {
            return Err(ConfigError::Validation(
                "docs.base_url must start with /".to_owned(),
            ));
        }
        require_non_empty(&docs.topic_section, "docs.topic_section")?;
        if docs.topic_section.contains('/') {
            return Err(ConfigError::Validation(
                "docs.topic_section must be a single path segment".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_versions(&self) -> Result<(), ConfigError> {
        let versions = &self.versions;
        require_non_empty(&versions.latest, "versions.latest")?;

        let mut seen = HashSet::new();
        for tag in &versions.tags {
            require_non_empty(tag, "versions.tags")?;
            if tag.contains('/') {
                return Err(ConfigError::Validation(format!(
                    "version tag \"{tag}\" cannot contain /"
                )));
            }
            if *tag == versions.latest {
                return Err(ConfigError::Validation(format!(
                    "version tag \"{tag}\" duplicates versions.latest"
                )));
            }
            if !seen.insert(tag.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "version tag \"{tag}\" is listed twice"
                )));
            }
        }
        Ok(())
    }

    fn validate_i18n(&self) -> Result<(), ConfigError> {
        let i18n = &self.i18n;
        require_listed_locale(&i18n.native_locale, &i18n.locales, "i18n.native_locale")?;
        require_listed_locale(&i18n.default_locale, &i18n.locales, "i18n.default_locale")?;
        if i18n.description_limit == 0 {
            return Err(ConfigError::Validation(
                "i18n.description_limit must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref base_url) = self.docs.base_url {
            self.docs.base_url = Some(expand::expand_env(base_url, "docs.base_url")?);
        }
        if let Some(ref dir) = self.i18n.catalog_dir {
            let expanded = expand::expand_env(&dir.to_string_lossy(), "i18n.catalog_dir")?;
            self.i18n.catalog_dir = Some(PathBuf::from(expanded));
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let defaults = DocsConfig::default();
        let base_url = self
            .docs
            .base_url
            .as_deref()
            .map_or(defaults.base_url, |url| url.trim_end_matches('/').to_owned());

        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(self.docs.source_dir.as_deref().unwrap_or("docs")),
            base_url: if base_url.is_empty() {
                "/".to_owned()
            } else {
                base_url
            },
            topic_section: self
                .docs
                .topic_section
                .clone()
                .unwrap_or(defaults.topic_section),
        };

        if let Some(dir) = self.i18n.catalog_dir.take() {
            self.i18n.catalog_dir = Some(config_dir.join(dir));
        }
    }
}

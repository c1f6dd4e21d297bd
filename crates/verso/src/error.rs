//! CLI error types.

use verso_config::ConfigError;
use verso_i18n::{CatalogError, LocaleError};
use verso_site::{SiteError, VersionError};
use verso_storage::StorageError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Locale(#[from] LocaleError),

    #[error("{0}")]
    Version(#[from] VersionError),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown version {0:?}")]
    UnknownVersion(String),

    #[error("{0}")]
    Validation(String),
}

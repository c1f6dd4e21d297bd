//! CLI command implementations.

pub(crate) mod nav;
pub(crate) mod resolve;
pub(crate) mod switch;
pub(crate) mod versions;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use verso_config::{CliSettings, Config};
use verso_i18n::{Catalogs, LabelResolver, Locale, LocaleNegotiator};
use verso_site::{Site, SiteConfig, VersionTagSet};
use verso_storage::DocumentIndex;
use verso_storage_fs::FsStorage;

use crate::error::CliError;

pub(crate) use nav::NavArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use switch::SwitchArgs;
pub(crate) use versions::VersionsArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover verso.toml).
    #[arg(short, long, global = true, env = "VERSO_CONFIG")]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long, global = true)]
    source_dir: Option<PathBuf>,

    /// Locale used when a request carries none (overrides config).
    #[arg(long, global = true, env = "VERSO_DEFAULT_LOCALE")]
    default_locale: Option<String>,

    /// Enable verbose output (index and catalog loading logs).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Everything a command needs, built once from configuration.
pub(crate) struct Context {
    pub site: Site,
    pub negotiator: LocaleNegotiator,
    pub default_locale: Locale,
}

impl Context {
    /// Load configuration and build the site.
    pub(crate) fn load(global: &GlobalArgs) -> Result<Self, CliError> {
        let cli_settings = CliSettings {
            source_dir: global.source_dir.clone(),
            default_locale: global.default_locale.clone(),
        };
        let config = Config::load(global.config.as_deref(), Some(&cli_settings))?;
        Self::from_config(&config)
    }

    /// Build the site from an already loaded configuration.
    pub(crate) fn from_config(config: &Config) -> Result<Self, CliError> {
        let versions = VersionTagSet::new(&config.versions.latest, config.versions.tags.iter().cloned())?;

        let mut catalogs = Catalogs::bundled()?;
        if let Some(dir) = &config.i18n.catalog_dir {
            catalogs = catalogs.load_dir(dir)?;
        }
        let native: Locale = config.i18n.native_locale.parse()?;
        let resolver = LabelResolver::new(native, catalogs).with_description_limit(config.i18n.description_limit);

        let storage = FsStorage::new(config.docs_resolved.source_dir.clone());
        let index = DocumentIndex::build(&storage)?;

        let site = Site::new(
            Arc::new(index),
            resolver,
            SiteConfig {
                base_url: config.docs_resolved.base_url.clone(),
                topic_section: config.docs_resolved.topic_section.clone(),
                versions,
            },
        );

        let locales = config
            .i18n
            .locales
            .iter()
            .map(|l| l.parse::<Locale>())
            .collect::<Result<Vec<_>, _>>()?;
        let default_locale: Locale = config.i18n.default_locale.parse()?;

        Ok(Self {
            site,
            negotiator: LocaleNegotiator::new(locales, default_locale.clone()),
            default_locale,
        })
    }

    /// Parse an explicit `--locale`, or fall back to the configured default.
    pub(crate) fn locale(&self, explicit: Option<&str>) -> Result<Locale, CliError> {
        match explicit {
            Some(raw) => Ok(raw.parse()?),
            None => Ok(self.default_locale.clone()),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::fs;
    use std::path::Path;

    use verso_config::Config;

    use super::Context;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// A small docs project with two versions and a zh catalog override.
    pub(crate) fn context(root: &Path) -> Context {
        write(
            root,
            "verso.toml",
            r#"
[docs]
source_dir = "docs"

[versions]
tags = ["v1.1", "v1.0"]

[i18n]
native_locale = "en"
default_locale = "zh"
locales = ["en", "zh"]
catalog_dir = "i18n"
"#,
        );
        write(root, "i18n/zh.toml", "[terms]\n\"Boolean\" = \"布尔\"\n");
        write(root, "docs/index.md", "# Home\n");
        write(root, "docs/nodes/index.md", "---\ntitle: Nodes\n---\n");
        write(root, "docs/nodes/boolean.md", "# Boolean\n");
        write(root, "docs/nodes/group.md", "---\ntitle: Group\ndescription: Manage geometry selections\n---\n");
        write(root, "docs/v1.0/nodes/boolean.md", "# Boolean\n");

        let config = Config::load(Some(&root.join("verso.toml")), None).unwrap();
        Context::from_config(&config).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_context_from_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ctx = test_support::context(temp_dir.path());

        assert_eq!(ctx.default_locale.as_str(), "zh");
        assert_eq!(ctx.site.versions().len(), 3);
        assert_eq!(ctx.locale(Some("EN")).unwrap().as_str(), "en");
        assert!(matches!(ctx.locale(Some("???")), Err(CliError::Locale(_))));
    }

    #[test]
    fn test_user_catalog_is_merged_over_bundled() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ctx = test_support::context(temp_dir.path());
        let zh: Locale = "zh".parse().unwrap();

        let page = ctx.site.resolve("/docs/nodes/boolean", &zh).unwrap();
        assert_eq!(page.title, "布尔");

        let page = ctx.site.resolve("/docs/nodes/group", &zh).unwrap();
        assert_eq!(page.title, "组");
    }
}

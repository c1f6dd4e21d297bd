//! `verso nav` command implementation.

use clap::Args;

use super::{Context, GlobalArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Version tag (default: latest).
    #[arg(long)]
    version: Option<String>,

    /// Display locale (default: configured default locale).
    #[arg(short, long)]
    locale: Option<String>,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, the version is not configured, or
    /// the locale is malformed.
    pub(crate) fn execute(self, global: &GlobalArgs, output: &Output) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let versions = ctx.site.versions();
        let version = match &self.version {
            Some(name) => versions
                .get(name)
                .ok_or_else(|| CliError::UnknownVersion(name.clone()))?,
            None => versions.latest(),
        };
        let locale = ctx.locale(self.locale.as_deref())?;

        output.json(&ctx.site.navigation(version, &locale))
    }
}

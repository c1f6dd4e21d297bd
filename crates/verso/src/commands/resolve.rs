//! `verso resolve` command implementation.

use clap::Args;
use verso_i18n::Negotiation;

use super::{Context, GlobalArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Request path (e.g. /docs/v1.0/nodes/boolean or /zh/docs/nodes).
    path: String,

    /// Display locale, as if stored in the locale cookie.
    #[arg(short, long)]
    locale: Option<String>,

    /// `Accept-Language` header value used when no locale is given.
    #[arg(long)]
    accept_language: Option<String>,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the path has no page.
    pub(crate) fn execute(self, global: &GlobalArgs, output: &Output) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let page = resolve(&ctx, &self)?;
        output.json(&page)
    }
}

fn resolve(ctx: &Context, args: &ResolveArgs) -> Result<verso_site::ResolvedPage, CliError> {
    if let Some(raw) = &args.locale {
        // Reject malformed codes instead of silently using the default
        ctx.locale(Some(raw))?;
    }

    let negotiation = ctx
        .negotiator
        .negotiate(&args.path, args.locale.as_deref(), args.accept_language.as_deref());
    let (path, locale) = match negotiation {
        Negotiation::Skip => {
            return Err(CliError::Validation(format!("Not a page path: {}", args.path)));
        }
        Negotiation::Redirect { location, locale } => {
            tracing::info!(from = %args.path, to = %location, locale = %locale, "Locale prefix stripped");
            (location, locale)
        }
        Negotiation::Serve(locale) => (args.path.clone(), locale),
    };

    Ok(ctx.site.resolve(&path, &locale)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::test_support;

    fn args(path: &str, locale: Option<&str>, accept_language: Option<&str>) -> ResolveArgs {
        ResolveArgs {
            path: path.to_owned(),
            locale: locale.map(str::to_owned),
            accept_language: accept_language.map(str::to_owned),
        }
    }

    #[test]
    fn test_resolve_uses_default_locale() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ctx = test_support::context(temp_dir.path());

        let page = resolve(&ctx, &args("/docs/nodes/group", None, None)).unwrap();

        assert_eq!(page.locale.as_str(), "zh");
        assert_eq!(page.title, "组");
    }

    #[test]
    fn test_resolve_locale_prefix() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ctx = test_support::context(temp_dir.path());

        let page = resolve(&ctx, &args("/en/docs/nodes/group", None, None)).unwrap();

        assert_eq!(page.locale.as_str(), "en");
        assert_eq!(page.title, "Group");
        assert_eq!(page.url, "/docs/nodes/group");
    }

    #[test]
    fn test_resolve_header_locale() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ctx = test_support::context(temp_dir.path());

        let page = resolve(&ctx, &args("/docs/nodes/boolean", None, Some("en-US,en;q=0.9"))).unwrap();

        assert_eq!(page.title, "Boolean");
        assert_eq!(page.available_versions.len(), 2);
    }

    #[test]
    fn test_resolve_rejects_malformed_locale() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ctx = test_support::context(temp_dir.path());

        let err = resolve(&ctx, &args("/docs/nodes", Some("not a locale"), None)).unwrap_err();

        assert!(matches!(err, CliError::Locale(_)));
    }

    #[test]
    fn test_resolve_asset_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ctx = test_support::context(temp_dir.path());

        let err = resolve(&ctx, &args("/docs/logo.svg", None, None)).unwrap_err();

        assert_eq!(err.to_string(), "Not a page path: /docs/logo.svg");
    }

    #[test]
    fn test_resolve_missing_page() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ctx = test_support::context(temp_dir.path());

        let err = resolve(&ctx, &args("/docs/nodes/missing", Some("en"), None)).unwrap_err();

        assert_eq!(err.to_string(), "Page not found: /docs/nodes/missing");
    }
}

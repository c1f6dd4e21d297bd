//! `verso switch` command implementation.

use clap::Args;
use serde::Serialize;

use super::{Context, GlobalArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the switch command.
#[derive(Args)]
pub(crate) struct SwitchArgs {
    /// Current request path.
    path: String,

    /// Target version tag.
    version: String,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct SwitchTarget {
    path: String,
    /// False when the path already addresses the target version.
    changed: bool,
}

impl SwitchArgs {
    /// Execute the switch command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the version is not configured.
    pub(crate) fn execute(self, global: &GlobalArgs, output: &Output) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        output.json(&switch(&ctx, &self)?)
    }
}

fn switch(ctx: &Context, args: &SwitchArgs) -> Result<SwitchTarget, CliError> {
    let target = ctx
        .site
        .versions()
        .get(&args.version)
        .ok_or_else(|| CliError::UnknownVersion(args.version.clone()))?;
    let path = ctx.site.switch_path(&args.path, target);
    Ok(SwitchTarget {
        changed: path != args.path,
        path,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::test_support;

    fn args(path: &str, version: &str) -> SwitchArgs {
        SwitchArgs {
            path: path.to_owned(),
            version: version.to_owned(),
        }
    }

    #[test]
    fn test_switch() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ctx = test_support::context(temp_dir.path());

        assert_eq!(
            switch(&ctx, &args("/docs/v1.1/nodes/boolean", "latest")).unwrap(),
            SwitchTarget {
                path: "/docs/nodes/boolean".to_owned(),
                changed: true,
            }
        );
        assert_eq!(
            switch(&ctx, &args("/docs/nodes/boolean", "latest")).unwrap(),
            SwitchTarget {
                path: "/docs/nodes/boolean".to_owned(),
                changed: false,
            }
        );
    }

    #[test]
    fn test_switch_unknown_version() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ctx = test_support::context(temp_dir.path());

        let err = switch(&ctx, &args("/docs/nodes/boolean", "v9.9")).unwrap_err();

        assert_eq!(err.to_string(), "Unknown version \"v9.9\"");
    }
}

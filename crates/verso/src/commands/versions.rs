//! `verso versions` command implementation.

use clap::Args;
use serde::Serialize;
use verso_site::VersionTag;

use super::{Context, GlobalArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the versions command.
#[derive(Args)]
pub(crate) struct VersionsArgs {
    /// Topic name (e.g. boolean).
    topic: String,
}

#[derive(Serialize)]
struct TopicVersions<'a> {
    topic: &'a str,
    versions: Vec<VersionTag>,
}

impl VersionsArgs {
    /// Execute the versions command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails.
    pub(crate) fn execute(self, global: &GlobalArgs, output: &Output) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        output.json(&TopicVersions {
            topic: &self.topic,
            versions: ctx.site.available_versions(&self.topic),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::test_support;

    #[test]
    fn test_topic_versions_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ctx = test_support::context(temp_dir.path());

        let json = serde_json::to_value(TopicVersions {
            topic: "boolean",
            versions: ctx.site.available_versions("boolean"),
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({"topic": "boolean", "versions": ["latest", "v1.0"]})
        );
    }
}

//! `${VAR}` and `${VAR:-default}` references in configuration strings.
//!
//! Bare `$VAR` is left alone so literal dollar signs in paths survive.

use std::borrow::Cow;

use crate::ConfigError;

/// Substitute environment references in `value`.
///
/// `field` names the config key in the error when a variable without a
/// default is unset.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |name: &str| std::env::var(name).map(Some))
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

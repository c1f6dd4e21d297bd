//! Validated locale codes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Error returned when parsing a malformed locale code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    /// The code is empty or contains invalid subtags.
    #[error("Invalid locale code: {0:?}")]
    Invalid(String),
}

/// A normalized BCP 47-style locale code such as `en`, `zh` or `zh-hans`.
///
/// Codes are lowercased and `_` is accepted as a subtag separator, so
/// `zh_CN` and `zh-cn` are the same locale.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Locale(String);

impl Locale {
    /// The locale code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase().replace('_', "-");
        let mut subtags = code.split('-');

        let primary_ok = subtags
            .next()
            .is_some_and(|p| (2..=3).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphabetic()));
        let rest_ok = subtags.all(|t| (1..=8).contains(&t.len()) && t.chars().all(|c| c.is_ascii_alphanumeric()));

        if primary_ok && rest_ok {
            Ok(Self(code))
        } else {
            Err(LocaleError::Invalid(s.to_owned()))
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Request locale negotiation.
//!
//! Decides which locale a request is served in. An explicit locale prefix in
//! the path is stripped with a redirect that remembers the choice; otherwise
//! the locale comes from the cookie, then the `Accept-Language` header, then
//! the configured default.

use crate::locale::Locale;

/// Path prefixes that are never localized.
const SKIPPED_PREFIXES: &[&str] = &["/api", "/_next", "/admin"];

/// Outcome of negotiating a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Negotiation {
    /// Asset or internal route. Serve as is.
    Skip,
    /// The path carried a locale prefix. Redirect to `location` and persist
    /// `locale` (e.g. in a cookie).
    Redirect { location: String, locale: Locale },
    /// Serve the path in this locale.
    Serve(Locale),
}

/// Chooses a locale for each request from a fixed set of supported locales.
#[derive(Debug, Clone)]
pub struct LocaleNegotiator {
    supported: Vec<Locale>,
    default: Locale,
}

impl LocaleNegotiator {
    /// Create a negotiator. `default` is used when nothing else matches.
    #[must_use]
    pub fn new(supported: Vec<Locale>, default: Locale) -> Self {
        Self { supported, default }
    }

    /// Negotiate the locale for a request path.
    #[must_use]
    pub fn negotiate(&self, path: &str, cookie: Option<&str>, accept_language: Option<&str>) -> Negotiation {
        if SKIPPED_PREFIXES.iter().any(|p| is_under(path, p)) || is_asset(path) {
            return Negotiation::Skip;
        }

        for locale in &self.supported {
            let prefix = format!("/{locale}");
            if is_under(path, &prefix) {
                let rest = &path[prefix.len()..];
                let location = if rest.is_empty() { "/" } else { rest };
                return Negotiation::Redirect {
                    location: location.to_owned(),
                    locale: locale.clone(),
                };
            }
        }

        Negotiation::Serve(self.select(cookie, accept_language))
    }

    /// Pick a locale from the cookie, then the header, then the default.
    #[must_use]
    pub fn select(&self, cookie: Option<&str>, accept_language: Option<&str>) -> Locale {
        cookie
            .and_then(|c| self.supported_locale(c))
            .or_else(|| accept_language.and_then(|h| self.from_header(h)))
            .unwrap_or_else(|| self.default.clone())
    }

    fn supported_locale(&self, raw: &str) -> Option<Locale> {
        let locale: Locale = raw.parse().ok()?;
        if self.supported.contains(&locale) {
            return Some(locale);
        }
        // "zh-cn" falls back to "zh"
        let primary = locale.as_str().split('-').next()?;
        self.supported.iter().find(|l| l.as_str() == primary).cloned()
    }

    /// First supported entry of an `Accept-Language` header, by descending
    /// quality. Entries with `q=0` are ignored.
    fn from_header(&self, header: &str) -> Option<Locale> {
        let mut entries: Vec<(&str, f32)> = header
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.split(';');
                let tag = parts.next()?.trim();
                let quality = parts
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .map_or(Some(1.0), |q| q.trim().parse::<f32>().ok())?;
                (!tag.is_empty() && quality > 0.0).then_some((tag, quality))
            })
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));

        entries.into_iter().find_map(|(tag, _)| self.supported_locale(tag))
    }
}

/// Last segment has a file extension, like `logo.svg`. Version segments such
/// as `v1.0` don't count.
fn is_asset(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .and_then(|segment| segment.rsplit_once('.'))
        .is_some_and(|(_, ext)| ext.starts_with(|c: char| c.is_ascii_alphabetic()))
}

/// `path` equals `prefix` or continues with a `/` after it.
fn is_under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

//! Layered label resolution.

use std::borrow::Cow;

use crate::catalog::Catalogs;
use crate::code::looks_like_code;
use crate::locale::Locale;

/// Descriptions longer than this many characters are never localized.
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 120;

/// Which field a label belongs to.
///
/// Titles and descriptions each have their own URL override table.
/// Navigation labels have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// Page title.
    Title,
    /// Short page description.
    Description,
    /// Navigation tree or table-of-contents label.
    Label,
}

/// Resolves display strings for a requested locale.
///
/// For the native locale, and for any locale without a catalog, resolution is
/// the identity. Otherwise the first matching tier wins:
///
/// 1. Code-like, blank, or over-long description: unchanged.
/// 2. URL override for the field kind.
/// 3. Exact term.
/// 4. Phrase rules, applied cumulatively.
///
/// The resolver holds only immutable tables, so the same input always yields
/// the same output.
#[derive(Debug, Clone)]
pub struct LabelResolver {
    native: Locale,
    catalogs: Catalogs,
    description_limit: usize,
}

impl LabelResolver {
    /// Create a resolver for content authored in `native`.
    #[must_use]
    pub fn new(native: Locale, catalogs: Catalogs) -> Self {
        Self {
            native,
            catalogs,
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
        }
    }

    /// Set the description length guard, in characters.
    #[must_use]
    pub fn with_description_limit(mut self, limit: usize) -> Self {
        self.description_limit = limit;
        self
    }

    /// Locale the source content is written in.
    #[must_use]
    pub fn native_locale(&self) -> &Locale {
        &self.native
    }

    /// True if labels for `locale` are returned unchanged.
    #[must_use]
    pub fn is_passthrough(&self, locale: &Locale) -> bool {
        *locale == self.native || self.catalogs.get(locale).is_none()
    }

    /// Resolve `raw` for `locale`.
    ///
    /// `url` is the exact document URL when known; it enables the override
    /// tier for titles and descriptions.
    #[must_use]
    pub fn resolve<'a>(
        &self,
        kind: LabelKind,
        url: Option<&str>,
        raw: &'a str,
        locale: &Locale,
    ) -> Cow<'a, str> {
        if *locale == self.native {
            return Cow::Borrowed(raw);
        }
        let Some(catalog) = self.catalogs.get(locale) else {
            tracing::debug!(locale = %locale, "No catalog for locale, using source labels");
            return Cow::Borrowed(raw);
        };

        if raw.trim().is_empty() || looks_like_code(raw) {
            return Cow::Borrowed(raw);
        }
        if kind == LabelKind::Description && raw.chars().count() > self.description_limit {
            return Cow::Borrowed(raw);
        }

        if let Some(url) = url
            && let Some(localized) = catalog.override_for(kind, url)
        {
            return Cow::Owned(localized.to_owned());
        }
        if let Some(localized) = catalog.term(raw) {
            return Cow::Owned(localized.to_owned());
        }
        catalog.apply_phrases(raw)
    }

    /// Resolve a page title.
    #[must_use]
    pub fn title<'a>(&self, url: Option<&str>, raw: &'a str, locale: &Locale) -> Cow<'a, str> {
        self.resolve(LabelKind::Title, url, raw, locale)
    }

    /// Resolve a page description.
    #[must_use]
    pub fn description<'a>(&self, url: Option<&str>, raw: &'a str, locale: &Locale) -> Cow<'a, str> {
        self.resolve(LabelKind::Description, url, raw, locale)
    }

    /// Resolve a navigation label.
    #[must_use]
    pub fn label<'a>(&self, raw: &'a str, locale: &Locale) -> Cow<'a, str> {
        self.resolve(LabelKind::Label, None, raw, locale)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::{LabelCatalog, PhraseRule};

    fn en() -> Locale {
        "en".parse().unwrap()
    }

    fn zh() -> Locale {
        "zh".parse().unwrap()
    }

    fn resolver() -> LabelResolver {
        let catalog = LabelCatalog::new()
            .with_title("/docs/nodes/group", "组")
            .with_description("/docs/nodes/group", "管理几何选集")
            .with_term("Group", "分组")
            .with_term("Nodes", "节点")
            .with_term("MAX_POINTS", "最大点数")
            .with_phrase(PhraseRule::new(r"\bGetting Started\b", "快速开始").unwrap())
            .with_phrase(PhraseRule::new(r"\bGeometry\b", "几何").unwrap())
            .with_phrase(PhraseRule::new(r"\bNodes\b", "节点").unwrap());
        LabelResolver::new(en(), Catalogs::new().with_catalog(zh(), catalog))
    }

    #[test]
    fn test_native_locale_is_identity() {
        let resolver = resolver();

        for (url, raw) in [
            (Some("/docs/nodes/group"), "Group"),
            (None, "Nodes"),
            (None, "Getting Started"),
            (None, ""),
        ] {
            for kind in [LabelKind::Title, LabelKind::Description, LabelKind::Label] {
                assert_eq!(resolver.resolve(kind, url, raw, &en()), raw);
            }
        }
    }

    #[test]
    fn test_unknown_locale_is_identity() {
        let fr: Locale = "fr".parse().unwrap();

        assert_eq!(resolver().title(None, "Nodes", &fr), "Nodes");
        assert!(resolver().is_passthrough(&fr));
        assert!(!resolver().is_passthrough(&zh()));
    }

    #[test]
    fn test_url_override_outranks_term() {
        let resolver = resolver();

        assert_eq!(resolver.title(Some("/docs/nodes/group"), "Group", &zh()), "组");
        assert_eq!(resolver.title(None, "Group", &zh()), "分组");
        assert_eq!(resolver.title(Some("/docs/nodes/other"), "Group", &zh()), "分组");
    }

    #[test]
    fn test_override_tables_are_per_kind() {
        let resolver = resolver();

        assert_eq!(
            resolver.description(Some("/docs/nodes/group"), "Manage geometry selections", &zh()),
            "管理几何选集"
        );
        assert_eq!(resolver.resolve(LabelKind::Label, Some("/docs/nodes/group"), "Group", &zh()), "分组");
    }

    #[test]
    fn test_phrases_apply_cumulatively() {
        assert_eq!(
            resolver().label("Getting Started with geometry nodes", &zh()),
            "快速开始 with 几何 节点"
        );
    }

    #[test]
    fn test_unmatched_label_passes_through() {
        assert_eq!(resolver().label("Boolean", &zh()), "Boolean");
    }

    #[test]
    fn test_code_like_labels_are_never_localized() {
        let resolver = resolver();

        for raw in ["MAX_POINTS", "`Nodes`", "<Nodes />", "nodes()", "Nodes(geometry)"] {
            for kind in [LabelKind::Title, LabelKind::Description, LabelKind::Label] {
                assert_eq!(resolver.resolve(kind, None, raw, &zh()), raw);
            }
        }
    }

    #[test]
    fn test_code_guard_beats_url_override() {
        let catalog = LabelCatalog::new().with_title("/docs/api/merge", "合并");
        let resolver = LabelResolver::new(en(), Catalogs::new().with_catalog(zh(), catalog));

        assert_eq!(resolver.title(Some("/docs/api/merge"), "merge()", &zh()), "merge()");
    }

    #[test]
    fn test_description_length_guard() {
        let resolver = resolver();
        let short = "Geometry nodes for procedural modeling tasks in any scene";
        let long = format!("Geometry {}", "x".repeat(291));
        assert_eq!(long.chars().count(), 300);

        assert_eq!(
            resolver.description(None, short, &zh()),
            "几何 节点 for procedural modeling tasks in any scene"
        );
        assert_eq!(resolver.description(None, &long, &zh()), long);
        assert_eq!(resolver.title(None, &long, &zh()), format!("几何 {}", "x".repeat(291)));
    }

    #[test]
    fn test_description_limit_counts_characters() {
        let resolver = resolver().with_description_limit(8);

        assert_eq!(resolver.description(None, "几何几何几何几何", &zh()), "几何几何几何几何");
        assert_eq!(resolver.description(None, "Geometry!", &zh()), "Geometry!");
        assert_eq!(resolver.description(None, "Geometry", &zh()), "几何");
    }

    #[test]
    fn test_blank_label_unchanged() {
        assert_eq!(resolver().label("   ", &zh()), "   ");
    }

    #[test]
    fn test_bundled_catalog_examples() {
        let resolver = LabelResolver::new(en(), Catalogs::bundled().unwrap());

        assert_eq!(resolver.title(Some("/docs/nodes/group"), "Group", &zh()), "组");
        assert_eq!(resolver.title(Some("/docs/nodes"), "Nodes", &zh()), "节点库");
        assert_eq!(resolver.label("AI Texture", &zh()), "AI 贴图");
        assert_eq!(resolver.label("CGraph Editor", &zh()), "CGraph 编辑器");
        assert_eq!(resolver.label("IO", &zh()), "IO");
    }
}

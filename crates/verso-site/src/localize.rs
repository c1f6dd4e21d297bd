//! Localization of navigation trees and tables of contents.
//!
//! Both walks rebuild their input. Only labels change: node count, order, and
//! URLs stay the same. Tree nodes have no override tier; they go through the
//! term and phrase tiers only.

use serde::Serialize;
use verso_i18n::{LabelResolver, Locale};

use crate::navigation::{Label, NavNode};

/// Localize every label of a navigation tree.
///
/// [`Label::Code`] labels pass through unchanged.
#[doc(alias = "PageTreeLocalizer")]
#[must_use]
pub fn localize_tree(nodes: &[NavNode], resolver: &LabelResolver, locale: &Locale) -> Vec<NavNode> {
    if resolver.is_passthrough(locale) {
        return nodes.to_vec();
    }
    nodes
        .iter()
        .map(|node| localize_node(node, resolver, locale))
        .collect()
}

fn localize_node(node: &NavNode, resolver: &LabelResolver, locale: &Locale) -> NavNode {
    let label = match &node.label {
        Label::Text(text) => Label::Text(resolver.label(text, locale).into_owned()),
        Label::Code(code) => Label::Code(code.clone()),
    };
    NavNode {
        label,
        url: node.url.clone(),
        children: node
            .children
            .iter()
            .map(|child| localize_node(child, resolver, locale))
            .collect(),
    }
}

/// Table of contents entry for a page heading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Anchor ID for linking.
    pub id: String,
}

/// Localize the titles of a table of contents. Anchors are kept.
#[must_use]
pub fn localize_toc(entries: &[TocEntry], resolver: &LabelResolver, locale: &Locale) -> Vec<TocEntry> {
    entries
        .iter()
        .map(|entry| TocEntry {
            level: entry.level,
            title: resolver.label(&entry.title, locale).into_owned(),
            id: entry.id.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use verso_i18n::{Catalogs, LabelCatalog, PhraseRule};

    use super::*;

    fn en() -> Locale {
        "en".parse().unwrap()
    }

    fn zh() -> Locale {
        "zh".parse().unwrap()
    }

    fn resolver() -> LabelResolver {
        let catalog = LabelCatalog::new()
            .with_term("Nodes", "节点")
            .with_term("merge()", "合并")
            .with_phrase(PhraseRule::new(r"\bParameters\b", "参数").unwrap());
        LabelResolver::new(en(), Catalogs::new().with_catalog(zh(), catalog))
    }

    fn node(label: Label, url: Option<&str>, children: Vec<NavNode>) -> NavNode {
        NavNode {
            label,
            url: url.map(str::to_owned),
            children,
        }
    }

    fn tree() -> Vec<NavNode> {
        vec![node(
            Label::Text("Nodes".to_owned()),
            None,
            vec![
                node(Label::Code("merge()".to_owned()), Some("/docs/nodes/merge"), vec![]),
                node(
                    Label::Text("Boolean".to_owned()),
                    Some("/docs/nodes/boolean"),
                    vec![node(
                        Label::Text("Parameters".to_owned()),
                        Some("/docs/nodes/boolean/parameters"),
                        vec![],
                    )],
                ),
            ],
        )]
    }

    #[test]
    fn test_localize_tree_rewrites_only_labels() {
        let localized = localize_tree(&tree(), &resolver(), &zh());

        assert_eq!(
            localized,
            vec![node(
                Label::Text("节点".to_owned()),
                None,
                vec![
                    node(Label::Code("merge()".to_owned()), Some("/docs/nodes/merge"), vec![]),
                    node(
                        Label::Text("Boolean".to_owned()),
                        Some("/docs/nodes/boolean"),
                        vec![node(
                            Label::Text("参数".to_owned()),
                            Some("/docs/nodes/boolean/parameters"),
                            vec![],
                        )],
                    ),
                ],
            )]
        );
    }

    #[test]
    fn test_localize_tree_preserves_shape() {
        let original = tree();
        let localized = localize_tree(&original, &resolver(), &zh());

        let count = |nodes: &[NavNode]| nodes.iter().map(NavNode::count).sum::<usize>();
        assert_eq!(count(&localized), count(&original));
    }

    #[test]
    fn test_localize_tree_native_locale() {
        assert_eq!(localize_tree(&tree(), &resolver(), &en()), tree());
    }

    #[test]
    fn test_localize_toc() {
        let toc = vec![
            TocEntry {
                level: 2,
                title: "Parameters".to_owned(),
                id: "parameters".to_owned(),
            },
            TocEntry {
                level: 3,
                title: "MAX_DEPTH".to_owned(),
                id: "max_depth".to_owned(),
            },
        ];

        let localized = localize_toc(&toc, &resolver(), &zh());

        assert_eq!(localized[0].title, "参数");
        assert_eq!(localized[0].id, "parameters");
        assert_eq!(localized[1].title, "MAX_DEPTH");
        assert_eq!(localize_toc(&toc, &resolver(), &en()), toc);
    }
}

//! Menu tree serializer.
//!
//! Converts provider [`LinkElement`] trees into [`MenuEntry`] trees for the
//! JSON API. Disabled links are dropped together with their whole subtree,
//! and entries without surviving children carry no `children` key.
//!
//! # Example
//!
//! ```
//! use restmenu_tree::{LinkElement, UrlTarget, build_menu};
//!
//! let links = vec![
//!     LinkElement::new("Home", UrlTarget::parse("/"), 0),
//!     LinkElement::new("Old", UrlTarget::parse("/old"), 1).with_enabled(false),
//! ];
//!
//! let menu = build_menu(&links);
//! assert_eq!(menu.len(), 1);
//! assert_eq!(
//!     serde_json::to_string(&menu).unwrap(),
//!     r#"[{"title":"Home","url":"/","weight":0}]"#
//! );
//! ```

use serde::Serialize;

use crate::link::{LinkElement, UrlTarget};

/// Menu entry with children for the JSON response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    /// Display title.
    pub title: String,
    /// External URI or internal path.
    pub url: String,
    /// Ordering hint, passed through unchanged.
    pub weight: i32,
    /// Enabled child entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuEntry>,
}

/// Build menu entries for one layer of sibling links.
///
/// Disabled links are skipped without visiting their children.
/// Surviving links keep their input order.
#[must_use]
pub fn build_menu(links: &[LinkElement]) -> Vec<MenuEntry> {
    links.iter().filter_map(build_entry).collect()
}

/// Recursively build a [`MenuEntry`] from a link.
///
/// Returns `None` if the link is disabled.
#[must_use]
pub fn build_entry(link: &LinkElement) -> Option<MenuEntry> {
    if !link.enabled {
        return None;
    }

    Some(MenuEntry {
        title: link.title.clone(),
        url: resolve_url(link),
        weight: link.weight,
        children: build_menu(&link.children),
    })
}

/// Resolve the URL string for a link.
///
/// External targets yield the URI verbatim, internal targets the path.
/// A link without a target yields an empty string.
#[must_use]
pub fn resolve_url(link: &LinkElement) -> String {
    match &link.url {
        Some(UrlTarget::External(uri)) => uri.clone(),
        Some(UrlTarget::Internal(path)) => path.clone(),
        None => {
            tracing::debug!(id = %link.id, title = %link.title, "Link has no URL target");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn link(title: &str, url: &str, weight: i32) -> LinkElement {
        LinkElement::new(title, UrlTarget::parse(url), weight)
    }

    fn to_json(entries: &[MenuEntry]) -> serde_json::Value {
        serde_json::to_value(entries).unwrap()
    }

    #[test]
    fn test_empty_layer_returns_empty_list() {
        assert!(build_menu(&[]).is_empty());
    }

    #[test]
    fn test_single_leaf_has_no_children_key() {
        let menu = build_menu(&[link("Home", "/", 0)]);

        assert_eq!(
            serde_json::to_string(&menu).unwrap(),
            r#"[{"title":"Home","url":"/","weight":0}]"#
        );
    }

    #[test]
    fn test_parent_with_enabled_children_keeps_order() {
        let links = vec![link("Parent", "/parent", 0).with_children(vec![
            link("Second", "/b", 10),
            link("First", "/a", -10),
        ])];

        let menu = build_menu(&links);

        assert_eq!(
            to_json(&menu),
            json!([{
                "title": "Parent",
                "url": "/parent",
                "weight": 0,
                "children": [
                    {"title": "Second", "url": "/b", "weight": 10},
                    {"title": "First", "url": "/a", "weight": -10}
                ]
            }])
        );
    }

    #[test]
    fn test_disabled_child_is_dropped() {
        let links = vec![link("Parent", "/parent", 0).with_children(vec![
            link("On", "/on", 0),
            link("Off", "/off", 1).with_enabled(false),
        ])];

        let menu = build_menu(&links);

        assert_eq!(menu[0].children.len(), 1);
        assert_eq!(menu[0].children[0].title, "On");
    }

    #[test]
    fn test_all_children_disabled_looks_like_leaf() {
        let links = vec![
            link("Parent", "/parent", 3)
                .with_children(vec![link("Off", "/off", 0).with_enabled(false)]),
        ];

        let menu = build_menu(&links);

        assert_eq!(
            to_json(&menu),
            json!([{"title": "Parent", "url": "/parent", "weight": 3}])
        );
    }

    #[test]
    fn test_disabled_root_is_absent() {
        let links = vec![
            link("Hidden", "/hidden", 0).with_enabled(false),
            link("Shown", "/shown", 1),
        ];

        let menu = build_menu(&links);

        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].title, "Shown");
    }

    #[test]
    fn test_disabled_subtree_is_not_visited() {
        let links = vec![
            link("Off", "/off", 0)
                .with_enabled(false)
                .with_children(vec![link("Orphan", "/orphan", 0)]),
        ];

        let menu = build_menu(&links);
        let json = serde_json::to_string(&menu).unwrap();

        assert_eq!(json, "[]");
    }

    #[test]
    fn test_external_url_is_verbatim() {
        let menu = build_menu(&[link("Example", "https://example.com", 0)]);

        assert_eq!(menu[0].url, "https://example.com");
    }

    #[test]
    fn test_url_classification_is_per_link() {
        let links = vec![link("External", "https://example.com", 0).with_children(vec![
            link("Internal", "/local", 0)
                .with_children(vec![link("Deep external", "https://deep.example.com/x", 0)]),
        ])];

        let menu = build_menu(&links);

        assert_eq!(menu[0].url, "https://example.com");
        assert_eq!(menu[0].children[0].url, "/local");
        assert_eq!(
            menu[0].children[0].children[0].url,
            "https://deep.example.com/x"
        );
    }

    #[test]
    fn test_missing_url_degrades_to_empty_string() {
        let links = vec![
            LinkElement::new("Broken", None, 0),
            link("Sibling", "/sibling", 1),
        ];

        let menu = build_menu(&links);

        assert_eq!(menu.len(), 2);
        assert_eq!(menu[0].url, "");
        assert_eq!(menu[1].url, "/sibling");
    }

    #[test]
    fn test_deeply_nested_builds_full_tree() {
        let links = vec![link("A", "/a", 0).with_children(vec![
            link("B", "/a/b", 0).with_children(vec![link("C", "/a/b/c", 0)]),
        ])];

        let menu = build_menu(&links);

        assert_eq!(menu[0].title, "A");
        assert_eq!(menu[0].children[0].title, "B");
        assert_eq!(menu[0].children[0].children[0].title, "C");
        assert!(menu[0].children[0].children[0].children.is_empty());
    }

    #[test]
    fn test_no_serialized_children_array_is_empty() {
        let links = vec![
            link("A", "/a", 0).with_children(vec![
                link("A1", "/a1", 0).with_enabled(false),
                link("A2", "/a2", 0).with_children(vec![link("x", "/x", 0).with_enabled(false)]),
            ]),
            link("B", "/b", 0).with_children(vec![]),
        ];

        let json = serde_json::to_string(&build_menu(&links)).unwrap();

        assert!(!json.contains(r#""children":[]"#));
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let links = vec![
            link("Home", "/", 0),
            link("Docs", "/docs", 1).with_children(vec![
                link("Guide", "/docs/guide", 0),
                link("API", "https://api.example.com", 1),
            ]),
        ];

        let first = serde_json::to_string(&build_menu(&links)).unwrap();
        let second = serde_json::to_string(&build_menu(&links)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_build_entry_disabled_returns_none() {
        assert!(build_entry(&link("Off", "/off", 0).with_enabled(false)).is_none());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let links = vec![link("Parent", "/p", 0).with_children(vec![
            link("Off", "/off", 0).with_enabled(false),
        ])];
        let before = links.clone();

        let _ = build_menu(&links);

        assert_eq!(links, before);
    }
}

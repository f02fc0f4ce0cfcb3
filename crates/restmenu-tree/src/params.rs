//! Route-derived parameters for loading a menu tree.

use serde::Deserialize;

use crate::link::{LinkElement, MenuTree};
use crate::provider::ProviderError;

/// Parameters narrowing the tree a provider returns.
///
/// The default value selects the whole menu.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuTreeParameters {
    /// Return only the children of the enabled link with this id.
    pub root: Option<String>,
    /// Drop links deeper than this (the root layer is depth 1).
    pub max_depth: Option<usize>,
}

impl MenuTreeParameters {
    /// Parameters selecting the subtree below `root`.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Parameters limiting the tree depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Apply the parameters to a loaded tree.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::LinkNotFound`] if `root` names no enabled link
    /// in the menu. A link below a disabled ancestor counts as missing.
    pub fn apply(&self, tree: MenuTree) -> Result<MenuTree, ProviderError> {
        let MenuTree { menu_name, links } = tree;

        let links = match &self.root {
            Some(root) => links
                .iter()
                .find_map(|link| link.find(root))
                .map(|link| link.children.clone())
                .ok_or_else(|| ProviderError::LinkNotFound {
                    menu: menu_name.clone(),
                    id: root.clone(),
                })?,
            None => links,
        };

        let links = match self.max_depth {
            Some(depth) => limit_depth(links, depth),
            None => links,
        };

        Ok(MenuTree { menu_name, links })
    }
}

/// Keep `depth` layers of links, dropping everything below.
fn limit_depth(links: Vec<LinkElement>, depth: usize) -> Vec<LinkElement> {
    if depth == 0 {
        return Vec::new();
    }
    links
        .into_iter()
        .map(|mut link| {
            link.children = limit_depth(std::mem::take(&mut link.children), depth - 1);
            link
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::build_menu;
    use pretty_assertions::assert_eq;

    fn sample_tree() -> MenuTree {
        MenuTree {
            menu_name: "main".to_owned(),
            links: vec![
                LinkElement::new("Home", None, 0).with_id("home"),
                LinkElement::new("Docs", None, 1)
                    .with_id("docs")
                    .with_children(vec![
                        LinkElement::new("Guide", None, 0)
                            .with_id("guide")
                            .with_children(vec![LinkElement::new("Install", None, 0).with_id("install")]),
                    ]),
            ],
        }
    }

    fn titles(links: &[LinkElement]) -> Vec<&str> {
        links.iter().map(|l| l.title.as_str()).collect()
    }

    #[test]
    fn test_default_returns_tree_unchanged() {
        let params = MenuTreeParameters::default();

        let tree = params.apply(sample_tree()).unwrap();

        assert_eq!(tree, sample_tree());
    }

    #[test]
    fn test_root_selects_children() {
        let params = MenuTreeParameters::default().with_root("docs");

        let tree = params.apply(sample_tree()).unwrap();

        assert_eq!(tree.menu_name, "main");
        assert_eq!(titles(&tree.links), vec!["Guide"]);
    }

    #[test]
    fn test_root_finds_nested_link() {
        let params = MenuTreeParameters::default().with_root("guide");

        let tree = params.apply(sample_tree()).unwrap();

        assert_eq!(titles(&tree.links), vec!["Install"]);
    }

    #[test]
    fn test_unknown_root_is_link_not_found() {
        let params = MenuTreeParameters::default().with_root("nope");

        let err = params.apply(sample_tree()).unwrap_err();

        assert!(matches!(err, ProviderError::LinkNotFound { ref id, .. } if id == "nope"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_disabled_root_is_link_not_found() {
        let tree = MenuTree {
            menu_name: "main".to_owned(),
            links: vec![
                LinkElement::new("Old", None, 0)
                    .with_id("old")
                    .with_enabled(false)
                    .with_children(vec![LinkElement::new("Secret", None, 0).with_id("secret")]),
            ],
        };

        for root in ["old", "secret"] {
            let params = MenuTreeParameters::default().with_root(root);
            let err = params.apply(tree.clone()).unwrap_err();
            assert!(matches!(err, ProviderError::LinkNotFound { ref id, .. } if id == root));
        }
    }

    #[test]
    fn test_root_output_only_has_enabled_links() {
        let tree = MenuTree {
            menu_name: "main".to_owned(),
            links: vec![
                LinkElement::new("Docs", None, 0).with_id("docs").with_children(vec![
                    LinkElement::new("Guide", None, 0),
                    LinkElement::new("Draft", None, 1).with_enabled(false),
                ]),
            ],
        };
        let params = MenuTreeParameters::default().with_root("docs");

        let entries = build_menu(&params.apply(tree).unwrap().links);

        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Guide"]);
    }

    #[test]
    fn test_max_depth_one_keeps_root_layer() {
        let params = MenuTreeParameters::default().with_max_depth(1);

        let tree = params.apply(sample_tree()).unwrap();

        assert_eq!(titles(&tree.links), vec!["Home", "Docs"]);
        assert!(tree.links.iter().all(|l| l.children.is_empty()));
    }

    #[test]
    fn test_max_depth_two() {
        let params = MenuTreeParameters::default().with_max_depth(2);

        let tree = params.apply(sample_tree()).unwrap();

        assert_eq!(titles(&tree.links[1].children), vec!["Guide"]);
        assert!(tree.links[1].children[0].children.is_empty());
    }

    #[test]
    fn test_max_depth_zero_is_empty() {
        let params = MenuTreeParameters::default().with_max_depth(0);

        let tree = params.apply(sample_tree()).unwrap();

        assert!(tree.links.is_empty());
    }

    #[test]
    fn test_root_and_max_depth_combine() {
        let params = MenuTreeParameters::default()
            .with_root("docs")
            .with_max_depth(1);

        let tree = params.apply(sample_tree()).unwrap();

        assert_eq!(titles(&tree.links), vec!["Guide"]);
        assert!(tree.links[0].children.is_empty());
    }
}

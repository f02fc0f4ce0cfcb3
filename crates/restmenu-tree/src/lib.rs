//! Menu trees for the restmenu JSON API.
//!
//! This crate holds everything between a menu store and the JSON response:
//!
//! - [`LinkElement`] / [`UrlTarget`] - the link tree handed out by providers
//! - [`MenuTreeProvider`] - the seam to the menu store, with
//!   [`StaticMenuProvider`] (in memory) and [`YamlMenuProvider`] (file backed)
//! - [`MenuTreeParameters`] - route-derived narrowing (subtree root, depth)
//! - [`build_menu`] - the filtering serializer producing [`MenuEntry`] trees
//!
//! # Example
//!
//! ```
//! use restmenu_tree::{MenuTreeParameters, MenuTreeProvider, StaticMenuProvider, build_menu};
//!
//! let provider = StaticMenuProvider::from_yaml_str(
//!     "main:\n  - title: Home\n    url: /\n  - title: Legacy\n    url: /old\n    enabled: false\n",
//! )
//! .unwrap();
//!
//! let tree = provider.resolve_tree("main", &MenuTreeParameters::default()).unwrap();
//! let menu = build_menu(&tree.links);
//!
//! assert_eq!(
//!     serde_json::to_string(&menu).unwrap(),
//!     r#"[{"title":"Home","url":"/","weight":0}]"#
//! );
//! ```

mod link;
mod params;
mod provider;
mod serialize;
mod yaml;

pub use link::{LinkElement, MenuTree, UrlTarget};
pub use params::MenuTreeParameters;
pub use provider::{MenuTreeProvider, ProviderError, StaticMenuProvider};
pub use serialize::{MenuEntry, build_entry, build_menu, resolve_url};
pub use yaml::YamlMenuProvider;

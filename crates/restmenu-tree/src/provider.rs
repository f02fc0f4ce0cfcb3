//! Menu tree provider trait and error types.
//!
//! Provides the [`MenuTreeProvider`] trait, the seam between the serializer
//! and whatever stores menu links, along with [`ProviderError`] and the
//! in-memory [`StaticMenuProvider`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::link::{LinkElement, MenuTree};
use crate::params::MenuTreeParameters;

/// Error returned by menu tree providers.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// No menu with this name exists.
    #[error("Menu not found: {0}")]
    MenuNotFound(String),

    /// The requested root link does not exist in the menu.
    #[error("Link '{id}' not found in menu '{menu}'")]
    LinkNotFound {
        /// Menu name.
        menu: String,
        /// Requested link id.
        id: String,
    },

    /// Menu definitions could not be read.
    #[error("Failed to read menu definitions from {}: {source}", .path.display())]
    Io {
        /// Definitions file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Menu definitions are malformed.
    #[error("Invalid menu definitions{}: {message}", display_path(.path.as_deref()))]
    Parse {
        /// Definitions file, if the definitions came from a file.
        path: Option<PathBuf>,
        /// Parser message.
        message: String,
    },

    /// Backend is temporarily unavailable.
    ///
    /// The bundled providers never return this; it is for embedders whose
    /// provider talks to a database or remote service.
    #[error("Menu backend unavailable: {0}")]
    Unavailable(String),
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

impl ProviderError {
    /// Whether the error means the requested menu or link does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MenuNotFound(_) | Self::LinkNotFound { .. })
    }
}

/// Source of menu trees.
///
/// Implementations must be safe to call from concurrent requests.
pub trait MenuTreeProvider: Send + Sync {
    /// Load the tree of the menu named `menu_name`.
    ///
    /// The returned links are unfiltered: disabled links are included and
    /// left for the serializer to drop.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MenuNotFound`] if the menu does not exist,
    /// or another [`ProviderError`] if the backend fails.
    fn resolve_tree(
        &self,
        menu_name: &str,
        params: &MenuTreeParameters,
    ) -> Result<MenuTree, ProviderError>;
}

/// Provider serving menus held in memory.
///
/// # Example
///
/// ```
/// use restmenu_tree::{LinkElement, MenuTreeParameters, MenuTreeProvider, StaticMenuProvider, UrlTarget};
///
/// let provider = StaticMenuProvider::new()
///     .with_menu("main", vec![LinkElement::new("Home", UrlTarget::parse("/"), 0)]);
///
/// let tree = provider.resolve_tree("main", &MenuTreeParameters::default()).unwrap();
/// assert_eq!(tree.links.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticMenuProvider {
    menus: HashMap<String, Vec<LinkElement>>,
}

impl StaticMenuProvider {
    /// Create a provider without menus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a menu.
    #[must_use]
    pub fn with_menu(mut self, name: impl Into<String>, links: Vec<LinkElement>) -> Self {
        self.menus.insert(name.into(), links);
        self
    }

    /// Parse menus from a YAML mapping of menu name to root links.
    ///
    /// Empty content yields a provider without menus.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Parse`] if the YAML is malformed.
    pub fn from_yaml_str(content: &str) -> Result<Self, ProviderError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::new());
        }

        let menus = serde_yaml::from_str(trimmed).map_err(|e| ProviderError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        Ok(Self { menus })
    }

    /// Names of all menus, sorted.
    #[must_use]
    pub fn menu_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.menus.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl MenuTreeProvider for StaticMenuProvider {
    fn resolve_tree(
        &self,
        menu_name: &str,
        params: &MenuTreeParameters,
    ) -> Result<MenuTree, ProviderError> {
        let links = self
            .menus
            .get(menu_name)
            .ok_or_else(|| ProviderError::MenuNotFound(menu_name.to_owned()))?;

        params.apply(MenuTree {
            menu_name: menu_name.to_owned(),
            links: links.clone(),
        })
    }
}

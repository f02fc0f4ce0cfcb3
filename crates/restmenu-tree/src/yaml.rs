//! YAML file menu provider.
//!
//! Menus are defined in a single YAML document mapping menu names to their
//! root links:
//!
//! ```yaml
//! main:
//!   - id: home
//!     title: Home
//!     url: /
//!   - title: Docs
//!     url: internal:/docs
//!     weight: 10
//!     children:
//!       - title: API reference
//!         url: https://api.example.com
//!       - title: Drafts
//!         url: /docs/drafts
//!         enabled: false
//! ```

use std::path::{Path, PathBuf};

use crate::link::MenuTree;
use crate::params::MenuTreeParameters;
use crate::provider::{MenuTreeProvider, ProviderError, StaticMenuProvider};

/// Provider reading menus from a YAML file.
///
/// The file is read on every request, so edits show up without a restart.
#[derive(Clone, Debug)]
pub struct YamlMenuProvider {
    path: PathBuf,
}

impl YamlMenuProvider {
    /// Create a provider for the given definitions file.
    ///
    /// The file is not read until the first request.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the definitions file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the definitions file.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Io`] if the file cannot be read and
    /// [`ProviderError::Parse`] if it is not valid menu YAML.
    pub fn load(&self) -> Result<StaticMenuProvider, ProviderError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| ProviderError::Io {
            path: self.path.clone(),
            source,
        })?;

        StaticMenuProvider::from_yaml_str(&content).map_err(|e| match e {
            ProviderError::Parse { message, .. } => ProviderError::Parse {
                path: Some(self.path.clone()),
                message,
            },
            other => other,
        })
    }
}

impl MenuTreeProvider for YamlMenuProvider {
    fn resolve_tree(
        &self,
        menu_name: &str,
        params: &MenuTreeParameters,
    ) -> Result<MenuTree, ProviderError> {
        self.load()?.resolve_tree(menu_name, params)
    }
}

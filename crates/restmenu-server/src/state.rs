//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use restmenu_tree::MenuTreeProvider;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Source of menu trees.
    pub(crate) provider: Arc<dyn MenuTreeProvider>,
    /// Application version, mixed into `ETag`s.
    pub(crate) version: String,
    /// `Cache-Control` max-age in seconds.
    pub(crate) cache_max_age: u32,
}

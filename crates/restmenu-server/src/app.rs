//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use restmenu_tree::MenuTreeProvider;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Settings for the menu API router.
#[derive(Clone, Debug)]
pub struct RouterConfig {
    /// Route prefix; menus are served at `{prefix}/{menu}`.
    pub prefix: String,
    /// `Cache-Control` max-age in seconds.
    pub cache_max_age: u32,
    /// Application version, mixed into `ETag`s.
    pub version: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            prefix: "/entity/restmenu".to_owned(),
            cache_max_age: 60,
            version: String::new(),
        }
    }
}

/// Create the menu API router.
///
/// The router is self-contained and can be served directly or nested into
/// a host application.
pub fn create_router(provider: Arc<dyn MenuTreeProvider>, config: RouterConfig) -> Router {
    let state = Arc::new(AppState {
        provider,
        version: config.version,
        cache_max_age: config.cache_max_age,
    });

    let menu_route = format!("{}/{{menu}}", config.prefix);

    let mut router = Router::new().route(&menu_route, get(handlers::menu::get_menu));
    for (name, value) in security::HEADERS {
        router = router.layer(security::header_layer(name, value));
    }

    router
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

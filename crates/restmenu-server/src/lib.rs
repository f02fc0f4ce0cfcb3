//! HTTP server exposing menu trees as a read-only JSON API.
//!
//! Serves `GET {prefix}/{menu}` (default prefix `/entity/restmenu`): the
//! enabled links of the named menu as nested JSON objects with `title`,
//! `url`, `weight` and, when non-empty, `children`.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use restmenu_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         menus_source: PathBuf::from("menus.yaml"),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Embedding
//!
//! [`create_router`] takes any [`MenuTreeProvider`](restmenu_tree::MenuTreeProvider),
//! so a host application can mount the API over its own menu store.
//!
//! # Architecture
//!
//! ```text
//! Client ──HTTP──► axum router (restmenu-server)
//!                        │
//!                        └─► get_menu handler
//!                                │
//!                                ├─► MenuTreeProvider::resolve_tree
//!                                └─► build_menu (restmenu-tree)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use restmenu_tree::YamlMenuProvider;

pub use app::{RouterConfig, create_router};

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// YAML menu definitions file.
    pub menus_source: PathBuf,
    /// Route prefix for the menu endpoint.
    pub prefix: String,
    /// `Cache-Control` max-age in seconds.
    pub cache_max_age: u32,
    /// Application version (mixed into `ETag`s).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let router = RouterConfig::default();
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7980,
            menus_source: PathBuf::from("menus.yaml"),
            prefix: router.prefix,
            cache_max_age: router.cache_max_age,
            version: router.version,
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let provider = Arc::new(YamlMenuProvider::new(config.menus_source.clone()));
    if !provider.path().exists() {
        tracing::warn!(
            path = %provider.path().display(),
            "Menu definitions file does not exist yet"
        );
    }

    let app = create_router(
        provider,
        RouterConfig {
            prefix: config.prefix.clone(),
            cache_max_age: config.cache_max_age,
            version: config.version.clone(),
        },
    );

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, prefix = %config.prefix, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Keep serving; the process can still be stopped by other signals.
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from restmenu config.
///
/// # Arguments
///
/// * `config` - Loaded configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_config(config: &restmenu_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        menus_source: config.menus_resolved.source.clone(),
        prefix: config.api.prefix.clone(),
        cache_max_age: config.api.cache_max_age,
        version,
    }
}

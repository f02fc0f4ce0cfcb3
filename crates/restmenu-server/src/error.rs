//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use restmenu_tree::ProviderError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// No menu with the requested name.
    #[error("Menu not found: {0}")]
    MenuNotFound(String),

    /// The requested root link does not exist in the menu.
    #[error("Link '{id}' not found in menu '{menu}'")]
    LinkNotFound { menu: String, id: String },

    /// Provider failed for a reason other than a missing menu.
    #[error("Menu provider error: {0}")]
    Provider(ProviderError),

    /// Response body could not be serialized.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ProviderError> for ServerError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MenuNotFound(menu) => Self::MenuNotFound(menu),
            ProviderError::LinkNotFound { menu, id } => Self::LinkNotFound { menu, id },
            other => Self::Provider(other),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::MenuNotFound(menu) => {
                tracing::debug!(menu = %menu, "Menu not found");
                (
                    StatusCode::NOT_FOUND,
                    json!({"error": "Menu not found", "menu": menu}),
                )
            }
            Self::LinkNotFound { menu, id } => {
                tracing::debug!(menu = %menu, root = %id, "Root link not found");
                (
                    StatusCode::NOT_FOUND,
                    json!({"error": "Link not found", "menu": menu, "root": id}),
                )
            }
            Self::Provider(e) => {
                tracing::error!(error = %e, "Menu provider failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": e.to_string()}),
                )
            }
            Self::Json(e) => {
                tracing::error!(error = %e, "Failed to serialize menu");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": e.to_string()}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

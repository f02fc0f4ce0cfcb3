//! Menu API endpoint.
//!
//! Returns the enabled links of a menu as a nested JSON array.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use md5::{Digest, Md5};
use restmenu_tree::{MenuTreeParameters, build_menu};

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET {prefix}/{menu}.
///
/// Query parameters (`root`, `max_depth`) narrow the tree before it is
/// serialized; without them the whole menu is returned.
pub(crate) async fn get_menu(
    Path(menu): Path<String>,
    Query(params): Query<MenuTreeParameters>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let tree = state.provider.resolve_tree(&menu, &params)?;
    let entries = build_menu(&tree.links);
    let body = serde_json::to_vec(&entries)?;

    tracing::debug!(menu = %menu, entries = entries.len(), "Serving menu");

    let etag = compute_etag(&state.version, &body);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && let Ok(if_none_match) = if_none_match.to_str()
        && etag_matches(if_none_match, &etag)
    {
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
    }

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_owned()),
            (header::ETAG, etag),
            (
                header::CACHE_CONTROL,
                format!("private, max-age={}", state.cache_max_age),
            ),
        ],
        body,
    )
        .into_response())
}

/// Compute `ETag` from version and response body.
///
/// MD5 truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, body: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(version.as_bytes());
    hasher.update(b":");
    hasher.update(body);
    format!("\"{}\"", &hex::encode(hasher.finalize())[..16])
}

/// Check an `If-None-Match` value against `etag` using weak comparison.
///
/// Accepts `*`, a single tag, or a comma-separated list; `W/` prefixes are ignored.
fn etag_matches(if_none_match: &str, etag: &str) -> bool {
    if_none_match.split(',').map(str::trim).any(|candidate| {
        candidate == "*" || candidate.strip_prefix("W/").unwrap_or(candidate) == etag
    })
}

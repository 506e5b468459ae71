//! Routing cache API endpoints.
//!
//! Read-only queries over the pre-generated routing snapshot. The cache
//! may be empty (no snapshot generated yet); queries then return empty
//! results or 404, never errors.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use pagemap_routing::{ContentType, RouteMetadata, normalize_path};

use crate::error::ServerError;
use crate::state::AppState;

/// Query parameters for GET /api/routes.
#[derive(Deserialize)]
pub(crate) struct RouteListParams {
    /// Filter by content type (content store typename).
    #[serde(default, rename = "type")]
    content_type: Option<String>,
    /// Keep only routes nested under a PageList.
    #[serde(default)]
    nested: Option<bool>,
    /// Keep only routes under the given PageList slug.
    #[serde(default)]
    under: Option<String>,
    /// Case-insensitive substring search over title and path.
    #[serde(default)]
    q: Option<String>,
}

/// Response for GET /api/routes.
#[derive(Serialize)]
pub(crate) struct RouteListResponse {
    /// Matching routes, sorted by path.
    routes: Vec<RouteMetadata>,
    /// Number of matching routes.
    count: usize,
}

/// Handle GET /api/routes/{*path}.
pub(crate) async fn get_route(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<RouteMetadata>, ServerError> {
    state
        .cache
        .get_route(&path)
        .cloned()
        .map(Json)
        .ok_or_else(|| ServerError::RouteNotFound(normalize_path(&path)))
}

/// Handle GET /api/routes.
pub(crate) async fn list_routes(
    Query(params): Query<RouteListParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<RouteListResponse>, ServerError> {
    let content_type = params
        .content_type
        .as_deref()
        .map(|name| {
            ContentType::from_typename(name)
                .ok_or_else(|| ServerError::UnknownContentType(name.to_owned()))
        })
        .transpose()?;

    let routes: Vec<RouteMetadata> = state
        .cache
        .all_routes()
        .into_iter()
        .filter(|route| content_type.is_none_or(|ct| route.content_type == ct))
        .filter(|route| params.nested.is_none_or(|nested| route.is_nested == nested))
        .filter(|route| {
            params.under.as_deref().is_none_or(|slug| {
                route
                    .parents
                    .iter()
                    .any(|parent| parent.slug.as_deref() == Some(slug))
            })
        })
        .filter(|route| {
            params.q.as_deref().is_none_or(|query| {
                let needle = query.to_lowercase();
                route.title.to_lowercase().contains(&needle)
                    || route.path.to_lowercase().contains(&needle)
            })
        })
        .cloned()
        .collect();

    Ok(Json(RouteListResponse {
        count: routes.len(),
        routes,
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_route_list_params_accept_type_keyword() {
        let params: RouteListParams =
            serde_json::from_str(r#"{"type": "Product", "nested": true}"#).unwrap();

        assert_eq!(params.content_type.as_deref(), Some("Product"));
        assert_eq!(params.nested, Some(true));
        assert_eq!(params.under, None);
        assert_eq!(params.q, None);
    }
}

//! Status API endpoint.
//!
//! Exposes the server version and the routing cache's availability,
//! including the snapshot generation timestamp so operators can see the
//! staleness window between regenerations.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/status.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatusResponse {
    /// Application version.
    version: String,
    /// True when a routing snapshot is loaded.
    cache_available: bool,
    /// Number of routes in the cache.
    route_count: usize,
    /// Snapshot generation timestamp, if a snapshot is loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: Option<String>,
}

/// Handle GET /api/status.
pub(crate) async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        version: state.version.clone(),
        cache_available: state.cache.is_available(),
        route_count: state.cache.route_count(),
        generated_at: state.cache.generated_at().map(str::to_owned),
    })
}

//! Error types for the HTTP server.
//!
//! Two client-visible error kinds exist: client errors (missing or bad
//! query input, 4xx) and server errors (content store failures, 500).
//! Server errors log their detail and return a generic body; "not found"
//! during slug resolution is not an error at all.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use pagemap_contentful::ContentError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Required `slug` query parameter missing or empty.
    #[error("Missing required query parameter: slug")]
    MissingSlug,

    /// Unknown content type in a route filter.
    #[error("Unknown content type: {0}")]
    UnknownContentType(String),

    /// No route at the given path in the routing cache.
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// Content store request failed.
    #[error("Content store error: {0}")]
    Content(#[from] ContentError),

    /// Worker task failed to complete.
    #[error("Internal task error")]
    TaskFailed,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::MissingSlug => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Missing required query parameter: slug"}),
            ),
            Self::UnknownContentType(name) => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Unknown content type", "contentType": name}),
            ),
            Self::RouteNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Route not found", "path": path}),
            ),
            Self::Content(e) => {
                tracing::error!(error = %e, "Content store request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": "Internal server error"}),
                )
            }
            Self::TaskFailed => {
                tracing::error!("Resolution task failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": "Internal server error"}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

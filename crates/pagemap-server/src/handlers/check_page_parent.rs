//! Routing resolution API endpoint.
//!
//! Resolves the nesting path for a slug against a fresh content store
//! fetch. An unresolvable slug is a legitimate top-level route, not an
//! error; only a missing `slug` parameter (400) or a content store
//! failure (500) produce error responses.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use pagemap_routing::{ContentType, PageListSummary, ResolvedRoute, resolve_slug};

use crate::error::ServerError;
use crate::state::AppState;

/// Query parameters for GET /api/check-page-parent.
#[derive(Deserialize)]
pub(crate) struct CheckPageParentParams {
    #[serde(default)]
    slug: Option<String>,
}

/// Response for GET /api/check-page-parent.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckPageParentResponse {
    /// Ancestor slugs, root-first.
    parent_path: Vec<String>,
    /// Immediate parent slug (last element of `parentPath`), or null.
    parent_slug: Option<String>,
    /// Parent path joined with `/` plus the requested slug.
    full_path: String,
    /// Matched entry id.
    #[serde(skip_serializing_if = "Option::is_none")]
    item_id: Option<String>,
    /// Matched entry display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    item_name: Option<String>,
    /// Matched entry content type.
    #[serde(skip_serializing_if = "Option::is_none")]
    item_type: Option<ContentType>,
    /// Summary of the directly containing PageList.
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_page_list: Option<ParentPageListResponse>,
}

/// PageList summary for serialization.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ParentPageListResponse {
    id: String,
    slug: Option<String>,
    title: String,
}

impl From<PageListSummary> for ParentPageListResponse {
    fn from(summary: PageListSummary) -> Self {
        Self {
            id: summary.id,
            slug: summary.slug,
            title: summary.title,
        }
    }
}

impl From<ResolvedRoute> for CheckPageParentResponse {
    fn from(resolved: ResolvedRoute) -> Self {
        let parent_slug = resolved.parent_slug().map(str::to_owned);
        let (item_id, item_name, item_type) = match resolved.item {
            Some(item) => (Some(item.id), Some(item.name), Some(item.content_type)),
            None => (None, None, None),
        };

        Self {
            parent_slug,
            full_path: resolved.full_path,
            item_id,
            item_name,
            item_type,
            parent_page_list: resolved.parent_page_list.map(ParentPageListResponse::from),
            parent_path: resolved.parent_path,
        }
    }
}

/// Handle GET /api/check-page-parent.
pub(crate) async fn check_page_parent(
    Query(params): Query<CheckPageParentParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<CheckPageParentResponse>, ServerError> {
    let slug = params
        .slug
        .filter(|slug| !slug.is_empty())
        .ok_or(ServerError::MissingSlug)?;

    // Full fetch on every call; the static cache is a separate surface.
    let store = Arc::clone(&state.store);
    let page_lists = tokio::task::spawn_blocking(move || store.fetch_page_lists())
        .await
        .map_err(|_| ServerError::TaskFailed)??;

    let resolved = resolve_slug(&slug, &page_lists);
    tracing::debug!(
        slug = %slug,
        full_path = %resolved.full_path,
        matched = resolved.item.is_some(),
        "Resolved slug"
    );

    Ok(Json(CheckPageParentResponse::from(resolved)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use pagemap_routing::ResolvedItem;

    #[test]
    fn test_unmatched_response_serialization() {
        let resolved = ResolvedRoute {
            parent_path: Vec::new(),
            full_path: "unknown-xyz".to_owned(),
            item: None,
            parent_page_list: None,
        };

        let json = serde_json::to_value(CheckPageParentResponse::from(resolved)).unwrap();

        assert_eq!(json["parentPath"], serde_json::json!([]));
        assert_eq!(json["parentSlug"], serde_json::Value::Null);
        assert_eq!(json["fullPath"], "unknown-xyz");
        // Item fields are omitted entirely when nothing matched.
        assert!(json.get("itemId").is_none());
        assert!(json.get("itemType").is_none());
        assert!(json.get("parentPageList").is_none());
    }

    #[test]
    fn test_matched_response_serialization() {
        let resolved = ResolvedRoute {
            parent_path: vec!["products".to_owned(), "trackers".to_owned()],
            full_path: "products/trackers/nx-horizon".to_owned(),
            item: Some(ResolvedItem {
                id: "prod-nx".to_owned(),
                name: "NX Horizon".to_owned(),
                content_type: ContentType::Product,
            }),
            parent_page_list: Some(PageListSummary {
                id: "pl-trackers".to_owned(),
                slug: Some("trackers".to_owned()),
                title: "Trackers".to_owned(),
            }),
        };

        let json = serde_json::to_value(CheckPageParentResponse::from(resolved)).unwrap();

        assert_eq!(json["parentPath"], serde_json::json!(["products", "trackers"]));
        assert_eq!(json["parentSlug"], "trackers");
        assert_eq!(json["fullPath"], "products/trackers/nx-horizon");
        assert_eq!(json["itemId"], "prod-nx");
        assert_eq!(json["itemName"], "NX Horizon");
        assert_eq!(json["itemType"], "Product");
        assert_eq!(json["parentPageList"]["id"], "pl-trackers");
        assert_eq!(json["parentPageList"]["slug"], "trackers");
    }
}

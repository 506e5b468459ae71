//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route(
            "/api/check-page-parent",
            get(handlers::check_page_parent::check_page_parent),
        )
        .route("/api/routes", get(handlers::routes::list_routes))
        .route("/api/routes/{*path}", get(handlers::routes::get_route))
        .route("/api/status", get(handlers::status::get_status));

    Router::new()
        .merge(api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use pagemap_contentful::{ContentStore, MockContentStore, mock_child};
    use pagemap_routing::{ContentType, RoutingCache, generate_snapshot};

    use super::*;

    fn nested_store() -> MockContentStore {
        MockContentStore::new()
            .with_simple_list(
                "pl-products",
                Some("products"),
                "Products",
                vec![mock_child(
                    "pl-trackers",
                    Some("trackers"),
                    "Trackers",
                    ContentType::PageList,
                )],
            )
            .with_simple_list(
                "pl-trackers",
                Some("trackers"),
                "Trackers",
                vec![mock_child(
                    "prod-nx",
                    Some("nx-horizon"),
                    "NX Horizon",
                    ContentType::Product,
                )],
            )
    }

    fn generated_cache(store: &MockContentStore) -> RoutingCache {
        let page_lists = store.fetch_page_lists().unwrap();
        RoutingCache::from_snapshot(generate_snapshot(&page_lists, "test").unwrap())
    }

    fn test_app(store: MockContentStore, cache: RoutingCache) -> Router {
        create_router(Arc::new(AppState {
            store: Arc::new(store),
            cache: Arc::new(cache),
            version: "test".to_owned(),
        }))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_check_page_parent_missing_slug_is_400() {
        let app = test_app(nested_store(), RoutingCache::empty());

        let (status, body) = get_json(app, "/api/check-page-parent").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required query parameter: slug");
    }

    #[tokio::test]
    async fn test_check_page_parent_empty_slug_is_400() {
        let app = test_app(nested_store(), RoutingCache::empty());

        let (status, _) = get_json(app, "/api/check-page-parent?slug=").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_check_page_parent_unknown_slug_is_top_level() {
        let app = test_app(nested_store(), RoutingCache::empty());

        let (status, body) = get_json(app, "/api/check-page-parent?slug=unknown-xyz").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["parentPath"], serde_json::json!([]));
        assert_eq!(body["parentSlug"], serde_json::Value::Null);
        assert_eq!(body["fullPath"], "unknown-xyz");
    }

    #[tokio::test]
    async fn test_check_page_parent_nested_slug() {
        let app = test_app(nested_store(), RoutingCache::empty());

        let (status, body) = get_json(app, "/api/check-page-parent?slug=nx-horizon").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["parentPath"], serde_json::json!(["products", "trackers"]));
        assert_eq!(body["parentSlug"], "trackers");
        assert_eq!(body["fullPath"], "products/trackers/nx-horizon");
        assert_eq!(body["itemId"], "prod-nx");
        assert_eq!(body["itemType"], "Product");
        assert_eq!(body["parentPageList"]["slug"], "trackers");
    }

    #[tokio::test]
    async fn test_check_page_parent_store_failure_is_generic_500() {
        let app = test_app(MockContentStore::failing(), RoutingCache::empty());

        let (status, body) = get_json(app, "/api/check-page-parent?slug=anything").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn test_get_route_from_cache() {
        let store = nested_store();
        let cache = generated_cache(&store);
        let app = test_app(store, cache);

        let (status, body) = get_json(app, "/api/routes/products/trackers").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["path"], "/products/trackers");
        assert_eq!(body["contentType"], "PageList");
    }

    #[tokio::test]
    async fn test_get_route_missing_is_404() {
        let store = nested_store();
        let cache = generated_cache(&store);
        let app = test_app(store, cache);

        let (status, body) = get_json(app, "/api/routes/no/such/path").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["path"], "/no/such/path");
    }

    #[tokio::test]
    async fn test_list_routes_filtered_by_type() {
        let store = nested_store();
        let cache = generated_cache(&store);
        let app = test_app(store, cache);

        let (status, body) = get_json(app, "/api/routes?type=Product").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["routes"][0]["path"], "/products/trackers/nx-horizon");
    }

    #[tokio::test]
    async fn test_list_routes_unknown_type_is_400() {
        let app = test_app(nested_store(), RoutingCache::empty());

        let (status, body) = get_json(app, "/api/routes?type=Banner").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["contentType"], "Banner");
    }

    #[tokio::test]
    async fn test_status_reports_cache_state() {
        let store = nested_store();
        let cache = generated_cache(&store);
        let app = test_app(store, cache);

        let (status, body) = get_json(app, "/api/status").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["version"], "test");
        assert_eq!(body["cacheAvailable"], true);
        assert_eq!(body["routeCount"], 3);
    }

    #[tokio::test]
    async fn test_security_headers_present() {
        let app = test_app(nested_store(), RoutingCache::empty());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "DENY");
        assert!(headers.contains_key("content-security-policy"));
    }
}

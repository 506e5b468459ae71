//! Application state.
//!
//! Shared state for all request handlers. The routing cache is built
//! once at startup and injected here; handlers only ever read it.

use std::sync::Arc;

use pagemap_contentful::ContentStore;
use pagemap_routing::RoutingCache;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Content store for live PageList fetches.
    pub(crate) store: Arc<dyn ContentStore>,
    /// Pre-generated routing cache (read-only snapshot).
    pub(crate) cache: Arc<RoutingCache>,
    /// Application version.
    pub(crate) version: String,
}

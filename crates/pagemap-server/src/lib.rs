//! HTTP server for pagemap routing resolution.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - `/api/check-page-parent` for live slug resolution against the
//!   content store
//! - `/api/routes` lookups and queries over the pre-generated routing
//!   cache
//! - `/api/status` for version and cache availability
//!
//! # Architecture
//!
//! ```text
//! Client ──HTTP──► Rust axum server (pagemap-server)
//!                       │
//!                       ├─► /api/check-page-parent ──► ContentStore (fresh fetch)
//!                       │                                  │
//!                       │                                  └─► resolve_slug
//!                       │
//!                       └─► /api/routes, /api/status ──► RoutingCache (static snapshot)
//! ```
//!
//! The content store client and the routing cache are constructed by the
//! caller and injected, keeping initialization order explicit and the
//! handlers testable against mocks.

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use pagemap_contentful::ContentStore;
use pagemap_routing::RoutingCache;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Application version.
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7070,
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
/// * `store` - Content store for live resolution
/// * `cache` - Routing cache loaded at startup
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(
    config: ServerConfig,
    store: Arc<dyn ContentStore>,
    cache: Arc<RoutingCache>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        store,
        cache,
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from pagemap config.
///
/// # Arguments
///
/// * `config` - pagemap configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_config(config: &pagemap_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        version,
    }
}

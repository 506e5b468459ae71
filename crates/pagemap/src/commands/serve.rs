//! `pagemap serve` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use pagemap_config::{CliSettings, Config};
use pagemap_contentful::{ContentStore, ContentfulClient};
use pagemap_routing::RoutingCache;
use pagemap_server::{run_server, server_config_from_config};

use crate::commands::ensure_project_dir;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover pagemap.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Routing snapshot path (overrides config).
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Enable verbose output (info-level logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            snapshot_path: self.snapshot,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        // Ensure project directory exists with .gitignore
        ensure_project_dir(&config.routing_resolved.project_dir)?;

        // Construct collaborators up front; handlers only see the
        // trait object and the read-only cache.
        let contentful = config.require_contentful()?;
        let store: Arc<dyn ContentStore> = Arc::new(ContentfulClient::new(
            &contentful.base_url,
            &contentful.space_id,
            &contentful.environment,
            &contentful.access_token,
        ));
        let cache = Arc::new(RoutingCache::load_or_empty(
            &config.routing_resolved.snapshot_path,
        ));

        // Print startup info
        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Content store: space {} ({})",
            contentful.space_id, contentful.environment
        ));

        if cache.is_available() {
            output.info(&format!(
                "Routing cache: {} routes from {}",
                cache.route_count(),
                config.routing_resolved.snapshot_path.display()
            ));
        } else {
            output.warning("Routing cache: unavailable, run `pagemap generate` to create it");
        }

        // Build server config and run
        let server_config = server_config_from_config(&config, version.to_string());
        run_server(server_config, store, cache)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}

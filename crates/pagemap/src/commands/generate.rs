//! `pagemap generate` command implementation.
//!
//! Produces the `routing-cache.json` artifact consumed by the server's
//! cache endpoints. Containment cycles abort generation with the
//! offending chain; the live resolver stays usable either way.

use std::path::PathBuf;

use clap::Args;
use pagemap_config::{CliSettings, Config};
use pagemap_contentful::{ContentStore, ContentfulClient};
use pagemap_routing::generate_snapshot;

use crate::commands::ensure_project_dir;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Path to configuration file (default: auto-discover pagemap.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output path for the snapshot (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the content store is
    /// unreachable, the containment graph is cyclic, or the artifact
    /// cannot be written.
    pub(crate) fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            snapshot_path: self.output,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        ensure_project_dir(&config.routing_resolved.project_dir)?;

        let contentful = config.require_contentful()?;
        let client = ContentfulClient::new(
            &contentful.base_url,
            &contentful.space_id,
            &contentful.environment,
            &contentful.access_token,
        );

        output.info(&format!(
            "Fetching PageLists from space {} ({})",
            contentful.space_id, contentful.environment
        ));
        let page_lists = client.fetch_page_lists()?;
        output.info(&format!("Fetched {} PageLists", page_lists.len()));

        let snapshot = generate_snapshot(&page_lists, version)?;

        let snapshot_path = &config.routing_resolved.snapshot_path;
        if let Some(parent) = snapshot_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(snapshot_path, serde_json::to_string_pretty(&snapshot)?)?;

        output.success(&format!(
            "Wrote {} routes to {}",
            snapshot.routes.len(),
            snapshot_path.display()
        ));
        Ok(())
    }
}

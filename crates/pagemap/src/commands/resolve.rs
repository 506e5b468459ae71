//! `pagemap resolve` command implementation.
//!
//! One-shot live resolution of a slug, printing the same JSON shape the
//! server's check-page-parent endpoint returns.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use pagemap_config::Config;
use pagemap_contentful::{ContentStore, ContentfulClient};
use pagemap_routing::{ResolvedRoute, resolve_slug};
use serde_json::json;

use crate::error::CliError;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Slug to resolve.
    slug: String,

    /// Path to configuration file (default: auto-discover pagemap.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the content store is
    /// unreachable.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref(), None)?;

        let contentful = config.require_contentful()?;
        let client = ContentfulClient::new(
            &contentful.base_url,
            &contentful.space_id,
            &contentful.environment,
            &contentful.access_token,
        );

        let page_lists = client.fetch_page_lists()?;
        let resolved = resolve_slug(&self.slug, &page_lists);

        let mut stdout = std::io::stdout().lock();
        writeln!(
            stdout,
            "{}",
            serde_json::to_string_pretty(&resolved_to_json(&resolved))?
        )?;
        Ok(())
    }
}

/// Serialize a resolution result in the endpoint's wire shape.
fn resolved_to_json(resolved: &ResolvedRoute) -> serde_json::Value {
    let mut value = json!({
        "parentPath": resolved.parent_path,
        "parentSlug": resolved.parent_slug(),
        "fullPath": resolved.full_path,
    });

    if let Some(item) = &resolved.item {
        value["itemId"] = json!(item.id);
        value["itemName"] = json!(item.name);
        value["itemType"] = json!(item.content_type);
    }
    if let Some(parent) = &resolved.parent_page_list {
        value["parentPageList"] = json!({
            "id": parent.id,
            "slug": parent.slug,
            "title": parent.title,
        });
    }

    value
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use pagemap_routing::{ContentType, ResolvedItem};

    #[test]
    fn test_resolved_to_json_top_level() {
        let resolved = ResolvedRoute {
            parent_path: Vec::new(),
            full_path: "pricing".to_owned(),
            item: None,
            parent_page_list: None,
        };

        let value = resolved_to_json(&resolved);

        assert_eq!(value["parentPath"], json!([]));
        assert_eq!(value["parentSlug"], serde_json::Value::Null);
        assert_eq!(value["fullPath"], "pricing");
        assert!(value.get("itemId").is_none());
    }

    #[test]
    fn test_resolved_to_json_matched() {
        let resolved = ResolvedRoute {
            parent_path: vec!["products".to_owned()],
            full_path: "products/trackers".to_owned(),
            item: Some(ResolvedItem {
                id: "pl-trackers".to_owned(),
                name: "Trackers".to_owned(),
                content_type: ContentType::PageList,
            }),
            parent_page_list: None,
        };

        let value = resolved_to_json(&resolved);

        assert_eq!(value["parentSlug"], "products");
        assert_eq!(value["itemType"], "PageList");
    }
}

//! Static routing cache.
//!
//! Read-only lookup structure over a pre-generated [`RoutingSnapshot`],
//! loaded once at startup and shared by reference. Offers O(1) exact-path
//! lookup plus linear convenience queries; there is no index beyond the
//! single path map.
//!
//! The cache never panics and never errors at query time: a missing or
//! unreadable snapshot degrades to an empty, unavailable cache whose
//! queries all return "not found", pushing callers toward live
//! resolution.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_path, path_from_segments};
use crate::types::{ContentType, RouteMetadata};

/// The `routing-cache.json` artifact.
///
/// Routes are keyed by normalized path and kept sorted so regenerating
/// the artifact produces stable diffs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingSnapshot {
    /// Normalized path to route metadata.
    pub routes: BTreeMap<String, RouteMetadata>,
    /// RFC 3339 timestamp of generation.
    pub generated_at: String,
    /// Version of the generator that produced the artifact.
    pub version: String,
}

/// Error loading a routing snapshot from disk.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Snapshot file does not exist.
    #[error("Routing snapshot not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading the snapshot file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Snapshot file is not valid JSON for the expected shape.
    #[error("Snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory routing cache over a pre-generated snapshot.
pub struct RoutingCache {
    routes: HashMap<String, RouteMetadata>,
    generated_at: Option<String>,
    version: Option<String>,
}

impl RoutingCache {
    /// Create an empty, unavailable cache.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            routes: HashMap::new(),
            generated_at: None,
            version: None,
        }
    }

    /// Build a cache from a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: RoutingSnapshot) -> Self {
        Self {
            routes: snapshot.routes.into_iter().collect(),
            generated_at: Some(snapshot.generated_at),
            version: Some(snapshot.version),
        }
    }

    /// Load a cache from a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the file is missing, unreadable, or
    /// not a valid snapshot.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        if !path.exists() {
            return Err(SnapshotError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let snapshot: RoutingSnapshot = serde_json::from_str(&content)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Load a cache from a snapshot file, degrading to an empty cache.
    ///
    /// Load failures are logged, not surfaced; callers fall back to live
    /// resolution when the cache is unavailable.
    #[must_use]
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(cache) => {
                tracing::info!(
                    path = %path.display(),
                    routes = cache.route_count(),
                    "Loaded routing snapshot"
                );
                cache
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Routing snapshot unavailable, starting with empty cache"
                );
                Self::empty()
            }
        }
    }

    /// True iff the cache holds at least one route.
    #[must_use]
    pub fn is_available(&self) -> bool {
        !self.routes.is_empty()
    }

    /// Number of routes in the cache.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Generation timestamp of the loaded snapshot, if any.
    #[must_use]
    pub fn generated_at(&self) -> Option<&str> {
        self.generated_at.as_deref()
    }

    /// Generator version of the loaded snapshot, if any.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// All routes, sorted by path.
    #[must_use]
    pub fn all_routes(&self) -> Vec<&RouteMetadata> {
        self.filter_sorted(|_| true)
    }

    /// Exact-path lookup after normalization.
    #[must_use]
    pub fn get_route(&self, path: &str) -> Option<&RouteMetadata> {
        self.routes.get(&normalize_path(path))
    }

    /// Lookup by path segments; an empty list maps to the root path.
    #[must_use]
    pub fn get_route_by_segments<S: AsRef<str>>(&self, segments: &[S]) -> Option<&RouteMetadata> {
        self.routes.get(&path_from_segments(segments))
    }

    /// All routes of the given content type, sorted by path.
    #[must_use]
    pub fn routes_by_content_type(&self, content_type: ContentType) -> Vec<&RouteMetadata> {
        self.filter_sorted(|route| route.content_type == content_type)
    }

    /// All routes nested under at least one PageList, sorted by path.
    #[must_use]
    pub fn nested_routes(&self) -> Vec<&RouteMetadata> {
        self.filter_sorted(|route| route.is_nested)
    }

    /// All routes with the given PageList slug in their parent chain,
    /// sorted by path.
    #[must_use]
    pub fn routes_under_page_list(&self, slug: &str) -> Vec<&RouteMetadata> {
        self.filter_sorted(|route| {
            route
                .parents
                .iter()
                .any(|parent| parent.slug.as_deref() == Some(slug))
        })
    }

    /// Case-insensitive substring search over title and path, sorted by
    /// path. An empty query matches nothing.
    #[must_use]
    pub fn search_routes(&self, query: &str) -> Vec<&RouteMetadata> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.filter_sorted(|route| {
            route.title.to_lowercase().contains(&needle)
                || route.path.to_lowercase().contains(&needle)
        })
    }

    fn filter_sorted<F: Fn(&RouteMetadata) -> bool>(&self, predicate: F) -> Vec<&RouteMetadata> {
        let mut routes: Vec<&RouteMetadata> = self
            .routes
            .values()
            .filter(|route| predicate(route))
            .collect();
        routes.sort_by(|a, b| a.path.cmp(&b.path));
        routes
    }
}

//! PageList containment model and route resolution.
//!
//! The content store models site navigation as "PageList" entries that
//! group other entries (pages, products, services, solutions, posts,
//! external pages, and nested PageLists) under shared URL prefixes. This
//! crate owns everything routing-related on top of that model:
//!
//! - [`build_routing_path`]: ancestor-slug chain for any contained entry
//! - [`resolve_slug`]: on-demand resolution for a single slug
//! - [`RoutingCache`]: read-only lookup over a pre-generated snapshot
//! - [`generate_snapshot`]: offline production of the snapshot artifact
//!
//! # Consistency
//!
//! The cache and the live resolver compute nesting independently; between
//! snapshot regenerations the cache may lag the content store. That
//! staleness window is accepted, and the snapshot's `generatedAt` stamp
//! is surfaced so operators can see it.

mod cache;
mod generator;
mod normalize;
mod path_builder;
mod resolver;
mod types;

pub use cache::{RoutingCache, RoutingSnapshot, SnapshotError};
pub use generator::{GenerateError, generate_snapshot, validate_containment};
pub use normalize::{normalize_path, path_from_segments};
pub use path_builder::{MAX_DEPTH, build_routing_path};
pub use resolver::{ResolvedItem, ResolvedRoute, resolve_slug};
pub use types::{
    ChangeFrequency, ChildRef, ContentType, PageList, PageListSummary, RouteMetadata,
};

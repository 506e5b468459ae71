//! Content store access for pagemap.
//!
//! The content store is a headless CMS (Contentful) queried over GraphQL.
//! This crate provides the [`ContentStore`] trait consumed by the server
//! and CLI, the production [`ContentfulClient`], and a mock
//! implementation behind the `mock` feature for tests.
//!
//! PageList snapshots are fetched fresh per call and have no persisted
//! identity beyond the request; callers own any caching.

mod client;
mod error;
#[cfg(feature = "mock")]
mod mock;
mod query;

use pagemap_routing::PageList;

pub use client::ContentfulClient;
pub use error::ContentError;
#[cfg(feature = "mock")]
pub use mock::{MockContentStore, mock_child};

/// Read access to the content store's PageList collection.
pub trait ContentStore: Send + Sync {
    /// Fetch all PageLists with their shallow child references.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] when the store is unreachable or returns
    /// an error response.
    fn fetch_page_lists(&self) -> Result<Vec<PageList>, ContentError>;
}

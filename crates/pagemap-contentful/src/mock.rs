//! Mock content store implementation for testing.
//!
//! Provides [`MockContentStore`] for unit testing without network access.

use pagemap_routing::{ChildRef, ContentType, PageList};

use crate::ContentStore;
use crate::error::ContentError;

/// Mock content store serving canned PageLists.
///
/// Use the builder methods to configure the mock with test data, or
/// [`MockContentStore::failing`] to simulate an unreachable store.
///
/// # Example
///
/// ```ignore
/// use pagemap_contentful::{ContentStore, MockContentStore};
///
/// let store = MockContentStore::new().with_page_list(list);
/// let page_lists = store.fetch_page_lists().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockContentStore {
    page_lists: Vec<PageList>,
    fail: bool,
}

impl MockContentStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a PageList to the store.
    #[must_use]
    pub fn with_page_list(mut self, page_list: PageList) -> Self {
        self.page_lists.push(page_list);
        self
    }

    /// Add a PageList built from `(id, slug, title)` plus typed children.
    #[must_use]
    pub fn with_simple_list(
        self,
        id: &str,
        slug: Option<&str>,
        title: &str,
        children: Vec<ChildRef>,
    ) -> Self {
        self.with_page_list(PageList {
            id: id.to_owned(),
            slug: slug.map(str::to_owned),
            title: title.to_owned(),
            children,
        })
    }

    /// Create a store whose fetches always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            page_lists: Vec::new(),
            fail: true,
        }
    }
}

/// Build a child reference for test fixtures.
#[must_use]
pub fn mock_child(id: &str, slug: Option<&str>, name: &str, content_type: ContentType) -> ChildRef {
    ChildRef {
        id: id.to_owned(),
        name: name.to_owned(),
        slug: slug.map(str::to_owned),
        external_url: None,
        content_type,
    }
}

impl ContentStore for MockContentStore {
    fn fetch_page_lists(&self) -> Result<Vec<PageList>, ContentError> {
        if self.fail {
            return Err(ContentError::GraphQl("mock store failure".to_owned()));
        }
        Ok(self.page_lists.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_mock_store_returns_configured_lists() {
        let store = MockContentStore::new().with_simple_list(
            "pl-products",
            Some("products"),
            "Products",
            vec![mock_child(
                "prod-nx",
                Some("nx-horizon"),
                "NX Horizon",
                ContentType::Product,
            )],
        );

        let lists = store.fetch_page_lists().unwrap();

        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].children[0].name, "NX Horizon");
    }

    #[test]
    fn test_failing_store_errors() {
        let store = MockContentStore::failing();
        assert!(store.fetch_page_lists().is_err());
    }
}

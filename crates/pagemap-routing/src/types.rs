//! Core content model types.
//!
//! These mirror the shapes returned by the content store's
//! "get all PageLists" query: each [`PageList`] carries a shallow,
//! ordered list of typed child references. Children are read-only
//! snapshots fetched per request; nothing here is mutated after
//! construction.

use serde::{Deserialize, Serialize};

/// Content type discriminator for routable entries.
///
/// Closed enum matching the content store's `__typename` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    /// Standard content page.
    Page,
    /// Page linking to an external URL; never gets a route of its own.
    ExternalPage,
    /// Product detail page.
    Product,
    /// Service detail page.
    Service,
    /// Solution detail page.
    Solution,
    /// Blog post.
    Post,
    /// Nested navigation group.
    PageList,
}

impl ContentType {
    /// Map a content store `__typename` to a content type.
    ///
    /// Returns `None` for typenames outside the closed set, letting
    /// callers skip entries the routing model does not know about.
    #[must_use]
    pub fn from_typename(typename: &str) -> Option<Self> {
        match typename {
            "Page" => Some(Self::Page),
            "ExternalPage" => Some(Self::ExternalPage),
            "Product" => Some(Self::Product),
            "Service" => Some(Self::Service),
            "Solution" => Some(Self::Solution),
            "Post" => Some(Self::Post),
            "PageList" => Some(Self::PageList),
            _ => None,
        }
    }

    /// Canonical name, identical to the content store typename.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Page => "Page",
            Self::ExternalPage => "ExternalPage",
            Self::Product => "Product",
            Self::Service => "Service",
            Self::Solution => "Solution",
            Self::Post => "Post",
            Self::PageList => "PageList",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sitemap change-frequency vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

/// Reference to an entry contained in a [`PageList`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildRef {
    /// Content store entry id.
    pub id: String,
    /// Display name (entry title).
    pub name: String,
    /// URL slug. `None` for external pages and unpublished drafts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// External URL for [`ContentType::ExternalPage`] entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    /// Type discriminator.
    pub content_type: ContentType,
}

impl ChildRef {
    /// Check whether this child matches a resolution target by slug or id.
    #[must_use]
    pub(crate) fn matches(&self, target: &str) -> bool {
        self.slug.as_deref() == Some(target) || self.id == target
    }
}

/// A navigation group entry from the content store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageList {
    /// Content store entry id.
    pub id: String,
    /// URL slug contributed to descendant paths. Optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Display title.
    pub title: String,
    /// Ordered child references (shallow).
    pub children: Vec<ChildRef>,
}

impl PageList {
    /// Check whether any direct child matches the target by slug or id.
    #[must_use]
    pub fn contains(&self, target: &str) -> bool {
        self.children.iter().any(|child| child.matches(target))
    }
}

/// Compact PageList identity used in parent chains and responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageListSummary {
    /// Content store entry id.
    pub id: String,
    /// URL slug, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Display title.
    pub title: String,
}

impl From<&PageList> for PageListSummary {
    fn from(list: &PageList) -> Self {
        Self {
            id: list.id.clone(),
            slug: list.slug.clone(),
            title: list.title.clone(),
        }
    }
}

/// Pre-resolved metadata for one known URL path.
///
/// Entries are produced wholesale by the snapshot generator and are
/// immutable at request time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMetadata {
    /// Normalized path key (leading slash, no trailing slash except root).
    pub path: String,
    /// Type of the entry the path resolves to.
    pub content_type: ContentType,
    /// Content store entry id.
    pub content_id: String,
    /// Display title.
    pub title: String,
    /// Ancestor PageLists, root-first.
    pub parents: Vec<PageListSummary>,
    /// True when the route sits under at least one PageList.
    pub is_nested: bool,
    /// Sitemap priority hint.
    pub priority: f32,
    /// Sitemap change-frequency hint.
    #[serde(rename = "changefreq")]
    pub change_frequency: ChangeFrequency,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_content_type_typename_round_trip() {
        for typename in [
            "Page",
            "ExternalPage",
            "Product",
            "Service",
            "Solution",
            "Post",
            "PageList",
        ] {
            let ct = ContentType::from_typename(typename).unwrap();
            assert_eq!(ct.as_str(), typename);
        }
    }

    #[test]
    fn test_content_type_unknown_typename() {
        assert!(ContentType::from_typename("Banner").is_none());
        assert!(ContentType::from_typename("").is_none());
    }

    #[test]
    fn test_change_frequency_serializes_lowercase() {
        let json = serde_json::to_value(ChangeFrequency::Weekly).unwrap();
        assert_eq!(json, "weekly");
    }

    #[test]
    fn test_child_matches_by_slug_or_id() {
        let child = ChildRef {
            id: "id-1".to_owned(),
            name: "NX Horizon".to_owned(),
            slug: Some("nx-horizon".to_owned()),
            external_url: None,
            content_type: ContentType::Product,
        };

        assert!(child.matches("nx-horizon"));
        assert!(child.matches("id-1"));
        assert!(!child.matches("nx"));
    }

    #[test]
    fn test_route_metadata_wire_format() {
        let route = RouteMetadata {
            path: "/products/trackers".to_owned(),
            content_type: ContentType::PageList,
            content_id: "pl-trackers".to_owned(),
            title: "Trackers".to_owned(),
            parents: vec![PageListSummary {
                id: "pl-products".to_owned(),
                slug: Some("products".to_owned()),
                title: "Products".to_owned(),
            }],
            is_nested: true,
            priority: 0.6,
            change_frequency: ChangeFrequency::Weekly,
        };

        let json = serde_json::to_value(&route).unwrap();

        assert_eq!(json["path"], "/products/trackers");
        assert_eq!(json["contentType"], "PageList");
        assert_eq!(json["contentId"], "pl-trackers");
        assert_eq!(json["isNested"], true);
        assert_eq!(json["changefreq"], "weekly");
        assert_eq!(json["parents"][0]["slug"], "products");
    }
}

//! On-demand slug resolution.
//!
//! Resolves a single slug against a freshly fetched PageList snapshot,
//! following the same tie-break policy as the path builder: first match
//! in scan order wins. An unmatched slug is not an error; it resolves to
//! a top-level route with an empty parent chain.

use crate::path_builder::build_routing_path;
use crate::types::{ContentType, PageList, PageListSummary};

/// The entry a slug resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedItem {
    /// Content store entry id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Type discriminator.
    pub content_type: ContentType,
}

/// Result of resolving a slug against the PageList set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Ancestor slugs, root-first. Empty for top-level routes.
    pub parent_path: Vec<String>,
    /// Full path from root including the resolved slug, `/`-joined
    /// without a leading slash.
    pub full_path: String,
    /// Matched entry, if any.
    pub item: Option<ResolvedItem>,
    /// The PageList directly containing the matched entry, if any.
    pub parent_page_list: Option<PageListSummary>,
}

impl ResolvedRoute {
    /// Slug of the immediate parent (last element of the parent path).
    #[must_use]
    pub fn parent_slug(&self) -> Option<&str> {
        self.parent_path.last().map(String::as_str)
    }
}

/// Resolve a slug to its nesting path.
///
/// Resolution order: a PageList whose own slug matches wins over child
/// matches; otherwise every PageList's children are scanned for a slug
/// or id match, first match winning. A slug matching nothing resolves to
/// a top-level route with no item metadata.
#[must_use]
pub fn resolve_slug(slug: &str, page_lists: &[PageList]) -> ResolvedRoute {
    if let Some(list) = page_lists
        .iter()
        .find(|list| list.slug.as_deref() == Some(slug))
    {
        let parent_path = build_routing_path(slug, page_lists);
        return ResolvedRoute {
            full_path: join_full_path(&parent_path, slug),
            item: Some(ResolvedItem {
                id: list.id.clone(),
                name: list.title.clone(),
                content_type: ContentType::PageList,
            }),
            parent_page_list: containing_list(slug, page_lists).map(PageListSummary::from),
            parent_path,
        };
    }

    for list in page_lists {
        if let Some(child) = list.children.iter().find(|child| child.matches(slug)) {
            let parent_path = build_routing_path(slug, page_lists);
            return ResolvedRoute {
                full_path: join_full_path(&parent_path, slug),
                item: Some(ResolvedItem {
                    id: child.id.clone(),
                    name: child.name.clone(),
                    content_type: child.content_type,
                }),
                parent_page_list: Some(PageListSummary::from(list)),
                parent_path,
            };
        }
    }

    ResolvedRoute {
        parent_path: Vec::new(),
        full_path: slug.to_owned(),
        item: None,
        parent_page_list: None,
    }
}

/// First PageList in scan order containing the target.
fn containing_list<'a>(target: &str, page_lists: &'a [PageList]) -> Option<&'a PageList> {
    page_lists.iter().find(|list| list.contains(target))
}

/// Join the parent chain and the resolved slug into a full path.
fn join_full_path(parent_path: &[String], slug: &str) -> String {
    if parent_path.is_empty() {
        slug.to_owned()
    } else {
        format!("{}/{}", parent_path.join("/"), slug)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::ChildRef;

    fn fixture() -> Vec<PageList> {
        vec![
            PageList {
                id: "pl-products".to_owned(),
                slug: Some("products".to_owned()),
                title: "Products".to_owned(),
                children: vec![ChildRef {
                    id: "pl-trackers".to_owned(),
                    name: "Trackers".to_owned(),
                    slug: Some("trackers".to_owned()),
                    external_url: None,
                    content_type: ContentType::PageList,
                }],
            },
            PageList {
                id: "pl-trackers".to_owned(),
                slug: Some("trackers".to_owned()),
                title: "Trackers".to_owned(),
                children: vec![ChildRef {
                    id: "prod-nx".to_owned(),
                    name: "NX Horizon".to_owned(),
                    slug: Some("nx-horizon".to_owned()),
                    external_url: None,
                    content_type: ContentType::Product,
                }],
            },
        ]
    }

    #[test]
    fn test_unmatched_slug_is_top_level() {
        let resolved = resolve_slug("unknown-xyz", &fixture());

        assert_eq!(resolved.parent_path, Vec::<String>::new());
        assert_eq!(resolved.parent_slug(), None);
        assert_eq!(resolved.full_path, "unknown-xyz");
        assert_eq!(resolved.item, None);
        assert_eq!(resolved.parent_page_list, None);
    }

    #[test]
    fn test_nested_item_resolves_full_chain() {
        let resolved = resolve_slug("nx-horizon", &fixture());

        assert_eq!(resolved.parent_path, vec!["products", "trackers"]);
        assert_eq!(resolved.parent_slug(), Some("trackers"));
        assert_eq!(resolved.full_path, "products/trackers/nx-horizon");

        let item = resolved.item.unwrap();
        assert_eq!(item.id, "prod-nx");
        assert_eq!(item.name, "NX Horizon");
        assert_eq!(item.content_type, ContentType::Product);

        let parent = resolved.parent_page_list.unwrap();
        assert_eq!(parent.id, "pl-trackers");
        assert_eq!(parent.slug.as_deref(), Some("trackers"));
    }

    #[test]
    fn test_page_list_own_slug_wins_over_child_scan() {
        let resolved = resolve_slug("trackers", &fixture());

        let item = resolved.item.unwrap();
        assert_eq!(item.content_type, ContentType::PageList);
        assert_eq!(item.id, "pl-trackers");
        assert_eq!(resolved.parent_path, vec!["products"]);
        assert_eq!(resolved.full_path, "products/trackers");

        // The containing list, not the matched list itself.
        let parent = resolved.parent_page_list.unwrap();
        assert_eq!(parent.id, "pl-products");
    }

    #[test]
    fn test_top_level_page_list_has_no_parent() {
        let resolved = resolve_slug("products", &fixture());

        assert_eq!(resolved.parent_path, Vec::<String>::new());
        assert_eq!(resolved.full_path, "products");
        assert_eq!(resolved.item.unwrap().id, "pl-products");
        assert_eq!(resolved.parent_page_list, None);
    }

    #[test]
    fn test_item_resolved_by_id() {
        let resolved = resolve_slug("prod-nx", &fixture());

        assert_eq!(resolved.item.unwrap().name, "NX Horizon");
        assert_eq!(resolved.parent_path, vec!["products", "trackers"]);
    }
}

//! GraphQL query document and response mapping.
//!
//! The "get all PageLists" query fetches each PageList's identity plus a
//! shallow `pagesCollection` of typed child summaries. Children are not
//! expanded further; nesting is reconstructed from the flat set.

use serde::{Deserialize, Serialize};

use pagemap_routing::{ChildRef, ContentType, PageList};

/// Paged query over the PageList collection.
pub(crate) const PAGE_LISTS_QUERY: &str = r"
query PageLists($limit: Int!, $skip: Int!) {
  pageListCollection(limit: $limit, skip: $skip) {
    total
    items {
      sys { id }
      slug
      title
      pagesCollection(limit: 40) {
        items {
          __typename
          ... on Page { sys { id } slug title }
          ... on ExternalPage { sys { id } title url }
          ... on Product { sys { id } slug title }
          ... on Service { sys { id } slug title }
          ... on Solution { sys { id } slug title }
          ... on Post { sys { id } slug title }
          ... on PageList { sys { id } slug title }
        }
      }
    }
  }
}
";

/// GraphQL request body.
#[derive(Serialize)]
pub(crate) struct GraphQlRequest<'a> {
    pub(crate) query: &'a str,
    pub(crate) variables: PageVariables,
}

/// Variables for [`PAGE_LISTS_QUERY`].
#[derive(Serialize)]
pub(crate) struct PageVariables {
    pub(crate) limit: usize,
    pub(crate) skip: usize,
}

/// GraphQL response envelope.
#[derive(Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub(crate) data: Option<T>,
    #[serde(default)]
    pub(crate) errors: Vec<GraphQlError>,
}

/// Single GraphQL error entry.
#[derive(Deserialize)]
pub(crate) struct GraphQlError {
    pub(crate) message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageListsData {
    pub(crate) page_list_collection: PageListCollection,
}

#[derive(Deserialize)]
pub(crate) struct PageListCollection {
    pub(crate) total: usize,
    pub(crate) items: Vec<PageListItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageListItem {
    sys: Sys,
    slug: Option<String>,
    title: Option<String>,
    pages_collection: Option<ChildCollection>,
}

#[derive(Deserialize)]
struct Sys {
    id: String,
}

#[derive(Deserialize)]
struct ChildCollection {
    /// Unresolvable links come back as explicit nulls.
    items: Vec<Option<ChildItem>>,
}

#[derive(Deserialize)]
struct ChildItem {
    #[serde(rename = "__typename")]
    typename: String,
    sys: Sys,
    slug: Option<String>,
    title: Option<String>,
    url: Option<String>,
}

impl PageListItem {
    /// Map a raw collection item into the domain model.
    ///
    /// Children with typenames outside the routing model are dropped
    /// with a debug log.
    pub(crate) fn into_page_list(self) -> PageList {
        let id = self.sys.id;
        let children = self
            .pages_collection
            .map(|collection| {
                collection
                    .items
                    .into_iter()
                    .flatten()
                    .filter_map(ChildItem::into_child_ref)
                    .collect()
            })
            .unwrap_or_default();

        PageList {
            title: self.title.unwrap_or_else(|| id.clone()),
            id,
            slug: self.slug,
            children,
        }
    }
}

impl ChildItem {
    fn into_child_ref(self) -> Option<ChildRef> {
        let Some(content_type) = ContentType::from_typename(&self.typename) else {
            tracing::debug!(
                typename = %self.typename,
                id = %self.sys.id,
                "Skipping child entry with unknown typename"
            );
            return None;
        };
        let id = self.sys.id;
        Some(ChildRef {
            name: self.title.unwrap_or_else(|| id.clone()),
            id,
            slug: self.slug,
            external_url: self.url,
            content_type,
        })
    }
}

//! Contentful GraphQL API client.
//!
//! Sync HTTP client for the Contentful GraphQL Content API with Bearer
//! token authentication. Every fetch pulls the complete PageList set,
//! paginating with skip/limit until the reported total is reached.

use std::time::Duration;

use ureq::Agent;

use pagemap_routing::PageList;

use crate::ContentStore;
use crate::error::ContentError;
use crate::query::{
    GraphQlRequest, GraphQlResponse, PAGE_LISTS_QUERY, PageListCollection, PageListsData,
    PageVariables,
};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// PageLists fetched per request. Contentful caps GraphQL collection
/// pages at 100 items.
const PAGE_SIZE: usize = 100;

/// Contentful GraphQL API client.
pub struct ContentfulClient {
    agent: Agent,
    endpoint: String,
    access_token: String,
}

impl ContentfulClient {
    /// Create a client from config values.
    ///
    /// # Arguments
    /// * `base_url` - GraphQL API base URL (e.g. `https://graphql.contentful.com`)
    /// * `space_id` - Contentful space id
    /// * `environment` - Contentful environment (usually `master`)
    /// * `access_token` - Content Delivery API token
    #[must_use]
    pub fn new(base_url: &str, space_id: &str, environment: &str, access_token: &str) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            endpoint: format!(
                "{}/content/v1/spaces/{space_id}/environments/{environment}",
                base_url.trim_end_matches('/')
            ),
            access_token: access_token.to_owned(),
        }
    }

    /// Fetch one page of the PageList collection.
    fn fetch_page(&self, skip: usize) -> Result<PageListCollection, ContentError> {
        let request = GraphQlRequest {
            query: PAGE_LISTS_QUERY,
            variables: PageVariables {
                limit: PAGE_SIZE,
                skip,
            },
        };

        let response = self
            .agent
            .post(&self.endpoint)
            .header("Authorization", &format!("Bearer {}", self.access_token))
            .header("Content-Type", "application/json")
            .send_json(&request)?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ContentError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let envelope: GraphQlResponse<PageListsData> = body_reader.read_json()?;

        if let Some(error) = envelope.errors.first() {
            return Err(ContentError::GraphQl(error.message.clone()));
        }
        let data = envelope
            .data
            .ok_or_else(|| ContentError::GraphQl("response carried no data".to_owned()))?;

        Ok(data.page_list_collection)
    }
}

impl ContentStore for ContentfulClient {
    fn fetch_page_lists(&self) -> Result<Vec<PageList>, ContentError> {
        let mut page_lists = Vec::new();
        let mut skip = 0;

        loop {
            let page = self.fetch_page(skip)?;
            let fetched = page.items.len();
            page_lists.extend(page.items.into_iter().map(|item| item.into_page_list()));

            if fetched == 0 || page_lists.len() >= page.total {
                break;
            }
            skip += PAGE_SIZE;
        }

        tracing::info!(count = page_lists.len(), "Fetched PageLists");
        Ok(page_lists)
    }
}

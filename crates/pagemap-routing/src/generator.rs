//! Routing snapshot generation.
//!
//! Builds the `routing-cache.json` artifact from the full PageList set.
//! Containment is modeled as an explicit parent-edge graph (first
//! containing PageList in scan order wins, matching the live resolver's
//! tie-break) and validated for acyclicity before any route is emitted,
//! so the request-time cache never has to defend against cycles.

use std::collections::{BTreeMap, HashSet, btree_map::Entry};

use crate::cache::RoutingSnapshot;
use crate::types::{ChangeFrequency, ContentType, PageList, PageListSummary, RouteMetadata};

/// Error during snapshot generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The PageList containment graph loops back on itself.
    #[error("Cyclic PageList containment: {}", .chain.join(" -> "))]
    CyclicContainment {
        /// Slugs (or ids, for slugless lists) along the cycle.
        chain: Vec<String>,
    },
}

/// Generate a routing snapshot from the full PageList set.
///
/// Emits one route per slugged PageList and one per slugged child entry.
/// External pages and other slugless children get no route. Duplicate
/// containment and duplicate paths keep the first occurrence and log a
/// warning.
///
/// # Errors
///
/// Returns [`GenerateError::CyclicContainment`] when PageLists contain
/// each other in a loop; the artifact must describe a forest.
pub fn generate_snapshot(
    page_lists: &[PageList],
    version: &str,
) -> Result<RoutingSnapshot, GenerateError> {
    let parents = parent_edges(page_lists);
    validate_acyclic(page_lists, &parents)?;

    let mut routes = BTreeMap::new();

    // Routes for the PageLists themselves.
    for (i, list) in page_lists.iter().enumerate() {
        let Some(slug) = &list.slug else { continue };
        let chain = slugged_ancestors(i, page_lists, &parents);
        let mut segments: Vec<&str> = chain
            .iter()
            .filter_map(|&a| page_lists[a].slug.as_deref())
            .collect();
        segments.push(slug);

        insert_route(
            &mut routes,
            RouteMetadata {
                path: route_path(&segments),
                content_type: ContentType::PageList,
                content_id: list.id.clone(),
                title: list.title.clone(),
                parents: summaries(&chain, page_lists),
                is_nested: !chain.is_empty(),
                priority: route_priority(chain.len()),
                change_frequency: route_change_frequency(ContentType::PageList),
            },
        );
    }

    // Routes for child entries. PageList children are covered above.
    let mut emitted: HashSet<&str> = HashSet::new();
    for (i, list) in page_lists.iter().enumerate() {
        let chain = slugged_ancestors_including(i, page_lists, &parents);
        let parent_segments: Vec<&str> = chain
            .iter()
            .filter_map(|&a| page_lists[a].slug.as_deref())
            .collect();

        for child in &list.children {
            if child.content_type == ContentType::PageList {
                continue;
            }
            let Some(child_slug) = &child.slug else {
                tracing::debug!(
                    id = %child.id,
                    content_type = %child.content_type,
                    "Skipping slugless child entry"
                );
                continue;
            };
            if !emitted.insert(&child.id) {
                tracing::warn!(
                    id = %child.id,
                    slug = %child_slug,
                    list = %list.id,
                    "Entry contained in multiple PageLists, keeping first parent chain"
                );
                continue;
            }

            let mut segments = parent_segments.clone();
            segments.push(child_slug);

            insert_route(
                &mut routes,
                RouteMetadata {
                    path: route_path(&segments),
                    content_type: child.content_type,
                    content_id: child.id.clone(),
                    title: child.name.clone(),
                    parents: summaries(&chain, page_lists),
                    is_nested: !chain.is_empty(),
                    priority: route_priority(chain.len()),
                    change_frequency: route_change_frequency(child.content_type),
                },
            );
        }
    }

    Ok(RoutingSnapshot {
        routes,
        generated_at: chrono::Utc::now().to_rfc3339(),
        version: version.to_owned(),
    })
}

/// Parent edge per PageList: index of the first PageList in scan order
/// whose children reference it, by id or by slug.
fn parent_edges(page_lists: &[PageList]) -> Vec<Option<usize>> {
    let mut parents: Vec<Option<usize>> = vec![None; page_lists.len()];

    for (j, list) in page_lists.iter().enumerate() {
        for child in &list.children {
            let Some(i) = page_lists.iter().position(|candidate| {
                child.id == candidate.id
                    || (child.slug.is_some() && child.slug == candidate.slug)
            }) else {
                continue;
            };
            match parents[i] {
                None => parents[i] = Some(j),
                Some(existing) if existing != j => {
                    tracing::warn!(
                        list = %page_lists[i].id,
                        first_parent = %page_lists[existing].id,
                        other_parent = %list.id,
                        "PageList contained in multiple PageLists, keeping first parent"
                    );
                }
                Some(_) => {}
            }
        }
    }

    parents
}

/// Fail when any parent chain revisits a PageList.
fn validate_acyclic(
    page_lists: &[PageList],
    parents: &[Option<usize>],
) -> Result<(), GenerateError> {
    for start in 0..page_lists.len() {
        let mut seen = HashSet::new();
        let mut path = Vec::new();
        let mut current = Some(start);
        while let Some(i) = current {
            if !seen.insert(i) {
                path.push(i);
                let chain = path.iter().map(|&idx| label(&page_lists[idx])).collect();
                return Err(GenerateError::CyclicContainment { chain });
            }
            path.push(i);
            current = parents[i];
        }
    }
    Ok(())
}

/// Human-readable identifier for cycle reporting.
fn label(list: &PageList) -> String {
    list.slug.clone().unwrap_or_else(|| list.id.clone())
}

/// Ancestor chain of a PageList, root-first, cut at the first slugless
/// ancestor (a slugless list roots its subtree, mirroring the live
/// path builder).
fn slugged_ancestors(i: usize, page_lists: &[PageList], parents: &[Option<usize>]) -> Vec<usize> {
    let mut chain = Vec::new();
    let mut current = parents[i];
    while let Some(p) = current {
        if page_lists[p].slug.is_none() {
            break;
        }
        chain.push(p);
        current = parents[p];
    }
    chain.reverse();
    chain
}

/// Like [`slugged_ancestors`], but with the list itself appended when it
/// carries a slug. Used as the parent chain for child entries.
fn slugged_ancestors_including(
    i: usize,
    page_lists: &[PageList],
    parents: &[Option<usize>],
) -> Vec<usize> {
    if page_lists[i].slug.is_none() {
        return Vec::new();
    }
    let mut chain = slugged_ancestors(i, page_lists, parents);
    chain.push(i);
    chain
}

fn summaries(chain: &[usize], page_lists: &[PageList]) -> Vec<PageListSummary> {
    chain
        .iter()
        .map(|&i| PageListSummary::from(&page_lists[i]))
        .collect()
}

fn route_path(segments: &[&str]) -> String {
    format!("/{}", segments.join("/"))
}

/// Insert keyed by the route's own path; duplicates keep the first entry.
fn insert_route(routes: &mut BTreeMap<String, RouteMetadata>, route: RouteMetadata) {
    match routes.entry(route.path.clone()) {
        Entry::Vacant(entry) => {
            entry.insert(route);
        }
        Entry::Occupied(entry) => {
            tracing::warn!(
                path = %entry.key(),
                kept = %entry.get().content_id,
                dropped = %route.content_id,
                "Duplicate route path, keeping first entry"
            );
        }
    }
}

/// Sitemap priority by nesting depth.
fn route_priority(depth: usize) -> f32 {
    match depth {
        0 => 0.8,
        1 => 0.6,
        _ => 0.4,
    }
}

/// Sitemap change frequency by content type. Navigation groups and blog
/// posts churn more than detail pages.
fn route_change_frequency(content_type: ContentType) -> ChangeFrequency {
    match content_type {
        ContentType::PageList | ContentType::Post => ChangeFrequency::Weekly,
        _ => ChangeFrequency::Monthly,
    }
}

/// Convenience check used by callers that only need validation.
///
/// # Errors
///
/// Same as [`generate_snapshot`].
pub fn validate_containment(page_lists: &[PageList]) -> Result<(), GenerateError> {
    validate_acyclic(page_lists, &parent_edges(page_lists))
}

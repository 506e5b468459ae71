//! Ancestor path resolution over the PageList containment graph.
//!
//! Given a target entry (identified by slug or id) and the complete set
//! of PageLists, [`build_routing_path`] reconstructs the ordered chain of
//! ancestor slugs from root to the target's immediate parent. The target
//! itself is never part of the result.
//!
//! PageLists can reference each other, so the content graph is not
//! guaranteed to be a tree or even acyclic. The walk carries a visited
//! set and a hard depth limit; a cycle or a depth overrun invalidates the
//! whole resolution and yields an empty chain, which callers treat as
//! "top-level route".

use std::collections::HashSet;

use crate::types::PageList;

/// Maximum ancestor chain depth before resolution gives up.
pub const MAX_DEPTH: usize = 10;

/// Build the root-to-parent slug chain for a target entry.
///
/// The target may be an entry id or a slug; children are matched on
/// either. The first PageList in scan order containing the target wins,
/// so an entry erroneously nested under multiple PageLists reports a
/// single parent chain.
///
/// Returns an empty chain when the target is not contained in any
/// PageList, when the containment graph is cyclic, or when the chain
/// exceeds [`MAX_DEPTH`].
#[must_use]
pub fn build_routing_path(target: &str, page_lists: &[PageList]) -> Vec<String> {
    let mut visited = HashSet::new();
    walk(target, page_lists, &mut visited, 0).unwrap_or_default()
}

/// Recursive walk; `None` poisons the entire resolution.
fn walk<'a>(
    target: &str,
    page_lists: &'a [PageList],
    visited: &mut HashSet<&'a str>,
    depth: usize,
) -> Option<Vec<String>> {
    if depth >= MAX_DEPTH {
        return None;
    }

    for list in page_lists {
        if !list.contains(target) {
            continue;
        }
        // Re-encountering a list already on the chain means the
        // containment graph loops back on itself.
        if visited.contains(list.id.as_str()) {
            return None;
        }
        visited.insert(list.id.as_str());

        // A slugless parent contributes no path segment and cannot be
        // resolved further; the chain roots here.
        let Some(slug) = &list.slug else {
            return Some(Vec::new());
        };

        let mut chain = walk(slug, page_lists, visited, depth + 1)?;
        chain.push(slug.clone());
        return Some(chain);
    }

    Some(Vec::new())
}

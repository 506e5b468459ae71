//! URL path normalization.
//!
//! Cache keys are always leading-slash-normalized with no trailing slash
//! except for the root path `/`. Normalization is idempotent, so lookups
//! accept any spelling of a path.

/// Normalize a URL path to its canonical cache-key form.
///
/// Empty segments (duplicate, leading, or trailing slashes) are dropped.
/// An empty input collapses to the root path `/`.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len() + 1);
    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        normalized.push('/');
        normalized.push_str(segment);
    }
    if normalized.is_empty() {
        normalized.push('/');
    }
    normalized
}

/// Join path segments into a normalized path.
///
/// An empty segment list maps to the root path `/`.
#[must_use]
pub fn path_from_segments<S: AsRef<str>>(segments: &[S]) -> String {
    let joined = segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("/");
    normalize_path(&joined)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_normalize_adds_leading_slash() {
        assert_eq!(normalize_path("products/trackers"), "/products/trackers");
    }

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(normalize_path("products/trackers/"), "/products/trackers");
        assert_eq!(normalize_path("/products/trackers/"), "/products/trackers");
    }

    #[test]
    fn test_normalize_collapses_duplicate_slashes() {
        assert_eq!(normalize_path("//products///trackers"), "/products/trackers");
    }

    #[test]
    fn test_normalize_empty_is_root() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_path("products/trackers/");
        assert_eq!(normalize_path(&once), once);
    }

    #[test]
    fn test_path_from_segments() {
        assert_eq!(
            path_from_segments(&["products", "trackers"]),
            "/products/trackers"
        );
    }

    #[test]
    fn test_path_from_empty_segments_is_root() {
        let segments: [&str; 0] = [];
        assert_eq!(path_from_segments(&segments), "/");
    }
}

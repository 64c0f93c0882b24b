//! Slash normalization and path segment extraction.

use super::parts::{join_segments, raw_segments, split_url, split_url_or_root};

/// Canonicalize the slash structure of a URL path.
///
/// Repeated slashes collapse to one, a leading slash is forced and a trailing
/// slash is stripped unless the whole path is `/`. The query and hash are kept
/// verbatim. Empty or whitespace-only input yields `/`.
///
/// - `normalize("/en//blog//post//")` → `"/en/blog/post"`
/// - `normalize("blog?page=1")` → `"/blog?page=1"`
pub fn normalize(url: &str) -> String {
    let parts = split_url_or_root(url);
    parts.join_with_path(&join_segments(raw_segments(parts.path)))
}

/// Non-empty path segments of `url`, ignoring its query and hash.
///
/// The root path yields an empty list.
pub fn path_segments(url: &str) -> Vec<String> {
    let normalized = normalize(url);
    raw_segments(split_url(&normalized).path)
        .map(str::to_string)
        .collect()
}

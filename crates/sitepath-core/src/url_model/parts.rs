//! Splitting a URL string into path, query and hash.

/// Borrowed view of a `path?query#hash` string.
///
/// The hash starts at the first `#`; the query starts at the first `?` that
/// precedes the hash. Both keep their content verbatim (without the leading
/// delimiter), and `Some("")` records a delimiter with nothing after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub hash: Option<&'a str>,
}

impl UrlParts<'_> {
    /// Reassemble the parts, using `path` in place of the original path.
    pub fn join_with_path(&self, path: &str) -> String {
        let mut out = String::with_capacity(
            path.len()
                + self.query.map_or(0, |q| q.len() + 1)
                + self.hash.map_or(0, |h| h.len() + 1),
        );
        out.push_str(path);
        if let Some(query) = self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(hash) = self.hash {
            out.push('#');
            out.push_str(hash);
        }
        out
    }

    pub fn join(&self) -> String {
        self.join_with_path(self.path)
    }
}

/// Split `url` into its path, query and hash components.
pub fn split_url(url: &str) -> UrlParts<'_> {
    let (rest, hash) = match url.split_once('#') {
        Some((rest, hash)) => (rest, Some(hash)),
        None => (url, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };
    UrlParts { path, query, hash }
}

/// Like [`split_url`], but empty or whitespace-only input splits as the root.
///
/// Other whitespace is left in place; a trailing space may belong to the
/// query or hash.
pub(super) fn split_url_or_root(url: &str) -> UrlParts<'_> {
    if url.trim().is_empty() {
        split_url("")
    } else {
        split_url(url)
    }
}

/// Non-empty `/`-separated segments of a path (no query or hash).
pub(super) fn raw_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Join segments into an absolute path; no segments yields `/`.
pub(super) fn join_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for segment in segments.into_iter().filter(|s| !s.is_empty()) {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_full_url() {
        let parts = split_url("/blog/post?page=2&tag=rust#comments");
        assert_eq!(parts.path, "/blog/post");
        assert_eq!(parts.query, Some("page=2&tag=rust"));
        assert_eq!(parts.hash, Some("comments"));
    }

    #[test]
    fn question_mark_inside_hash_is_not_a_query() {
        let parts = split_url("/a#frag?x=1");
        assert_eq!(parts.path, "/a");
        assert_eq!(parts.query, None);
        assert_eq!(parts.hash, Some("frag?x=1"));
    }

    #[test]
    fn join_keeps_empty_delimiters() {
        assert_eq!(split_url("/a?#").join(), "/a?#");
        assert_eq!(split_url("/a?x=1#h").join_with_path("/b"), "/b?x=1#h");
    }

    #[test]
    fn join_segments_root() {
        assert_eq!(join_segments(Vec::<&str>::new()), "/");
        assert_eq!(join_segments(["en", "", "blog"]), "/en/blog");
    }
}

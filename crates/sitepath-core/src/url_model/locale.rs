//! Locale prefixes as the first path segment.

use serde::{Deserialize, Serialize};

use super::parts::{join_segments, raw_segments, split_url_or_root};

/// The set of recognized locale codes and the fallback locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locales {
    pub valid: Vec<String>,
    pub default: String,
}

impl Default for Locales {
    fn default() -> Self {
        Self::new(["en", "es"], "en")
    }
}

impl Locales {
    pub fn new<I, S>(valid: I, default: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            valid: valid.into_iter().map(Into::into).collect(),
            default: default.into(),
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.valid.iter().any(|v| v == code)
    }
}

/// Loose locale heuristic: two or three lowercase ASCII letters.
///
/// Only [`change_locale`] consults this; it matches short slugs like `go` too.
pub fn looks_like_locale(segment: &str) -> bool {
    (2..=3).contains(&segment.len()) && segment.bytes().all(|b| b.is_ascii_lowercase())
}

/// Replace or insert the locale prefix of `url`.
///
/// A first segment that is a valid locale, or merely looks like one, is
/// replaced; otherwise `new_locale` is inserted in front. Query and hash are
/// preserved and the root becomes `/{new_locale}`.
///
/// - `change_locale("/fr/blog", "es", &Locales::default())` → `"/es/blog"`
/// - `change_locale("/blog?p=1", "es", &Locales::default())` → `"/es/blog?p=1"`
pub fn change_locale(url: &str, new_locale: &str, locales: &Locales) -> String {
    let parts = split_url_or_root(url);
    let mut segments: Vec<&str> = raw_segments(parts.path).collect();
    let replace = segments
        .first()
        .is_some_and(|first| locales.contains(first) || looks_like_locale(first));
    if replace {
        segments[0] = new_locale;
    } else {
        segments.insert(0, new_locale);
    }
    parts.join_with_path(&join_segments(segments))
}

/// Strip the first path segment if, and only if, it is a valid locale.
///
/// - `remove_locale("/es/blog", &Locales::default())` → `"/blog"`
/// - `remove_locale("/fr/blog", &Locales::default())` → `"/fr/blog"`
pub fn remove_locale(url: &str, locales: &Locales) -> String {
    let parts = split_url_or_root(url);
    let segments: Vec<&str> = raw_segments(parts.path).collect();
    let rest = match segments.split_first() {
        Some((first, rest)) if locales.contains(first) => rest,
        _ => &segments[..],
    };
    parts.join_with_path(&join_segments(rest.iter().copied()))
}

/// The locale encoded in `url`, or the default when the first segment is not a
/// valid locale.
pub fn locale_of(url: &str, locales: &Locales) -> String {
    let parts = split_url_or_root(url);
    raw_segments(parts.path)
        .next()
        .filter(|first| locales.contains(first))
        .unwrap_or(locales.default.as_str())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en_es() -> Locales {
        Locales::default()
    }

    #[test]
    fn change_replaces_locale_looking_segment() {
        assert_eq!(change_locale("/fr/blog", "es", &en_es()), "/es/blog");
        assert_eq!(change_locale("/en/blog/post", "es", &en_es()), "/es/blog/post");
    }

    #[test]
    fn change_inserts_when_no_locale() {
        assert_eq!(change_locale("/blog?page=2#c", "es", &en_es()), "/es/blog?page=2#c");
        assert_eq!(change_locale("/", "es", &en_es()), "/es");
        assert_eq!(change_locale("", "en", &en_es()), "/en");
    }

    #[test]
    fn change_heuristic_catches_short_slugs() {
        // A two-letter slug is indistinguishable from a locale code.
        assert_eq!(change_locale("/go", "es", &en_es()), "/es");
        assert_eq!(change_locale("/Go", "es", &en_es()), "/es/Go");
    }

    #[test]
    fn change_replaces_configured_long_locale() {
        let locales = Locales::new(["en", "zh-hant"], "en");
        assert_eq!(change_locale("/zh-hant/docs", "en", &locales), "/en/docs");
    }

    #[test]
    fn remove_only_strips_valid_locales() {
        assert_eq!(remove_locale("/es/blog?x=1#y", &en_es()), "/blog?x=1#y");
        assert_eq!(remove_locale("/fr/blog", &en_es()), "/fr/blog");
        assert_eq!(remove_locale("/en", &en_es()), "/");
    }

    #[test]
    fn locale_of_falls_back_to_default() {
        assert_eq!(locale_of("/es/blog", &en_es()), "es");
        assert_eq!(locale_of("/fr/blog", &en_es()), "en");
        assert_eq!(locale_of("/", &Locales::new(["en", "es"], "es")), "es");
    }

    #[test]
    fn trailing_whitespace_in_hash_or_query_is_kept() {
        assert_eq!(change_locale("/blog#top ", "es", &en_es()), "/es/blog#top ");
        assert_eq!(remove_locale("/es/blog?q=a ", &en_es()), "/blog?q=a ");
        assert_eq!(locale_of("/es#x ", &en_es()), "es");
        assert_eq!(change_locale("  ", "es", &en_es()), "/es");
        assert_eq!(remove_locale(" \t", &en_es()), "/");
    }

    #[test]
    fn change_then_remove_strips_the_new_locale() {
        let locales = en_es();
        for url in ["/blog/post?p=1", "/en/blog", "/", "/es"] {
            let changed = change_locale(url, "es", &locales);
            assert_eq!(
                remove_locale(&changed, &locales),
                remove_locale(url, &locales),
                "url {url:?}"
            );
        }
    }
}

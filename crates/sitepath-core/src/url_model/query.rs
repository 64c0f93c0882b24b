//! Reading and mutating a single query parameter.

use url::form_urlencoded;

use super::build::ParamValue;
use super::parts::split_url;

/// Set `key` to `value` in the query of `url`, or delete it when `value` is null.
///
/// The path is kept as given (not renormalized) and the hash is reattached.
/// Setting a key replaces its first occurrence in place and drops later
/// duplicates; an absent key is appended. An empty resulting query drops the
/// `?` entirely.
///
/// - `set_query_param("/blog?page=1#s", "page", None::<&str>)` → `"/blog#s"`
pub fn set_query_param(url: &str, key: &str, value: impl Into<ParamValue>) -> String {
    let parts = split_url(url);
    let mut pairs: Vec<(String, String)> = parts
        .query
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();

    match value.into().to_query_value() {
        Some(value) => set_pair(&mut pairs, key, value),
        None => pairs.retain(|(k, _)| k != key),
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(&pairs)
        .finish();

    let mut out = parts.path.to_string();
    if !query.is_empty() {
        out.push('?');
        out.push_str(&query);
    }
    if let Some(hash) = parts.hash.filter(|h| !h.is_empty()) {
        out.push('#');
        out.push_str(hash);
    }
    out
}

/// Decoded value of the first `key` in the query of `url`; the hash is ignored.
pub fn get_query_param(url: &str, key: &str) -> Option<String> {
    let query = split_url(url).query?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

fn set_pair(pairs: &mut Vec<(String, String)>, key: &str, value: String) {
    let mut value = Some(value);
    pairs.retain_mut(|(k, v)| {
        if k != key {
            return true;
        }
        match value.take() {
            Some(new) => {
                *v = new;
                true
            }
            None => false,
        }
    });
    if let Some(value) = value {
        pairs.push((key.to_string(), value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_deletes_and_drops_empty_query() {
        assert_eq!(set_query_param("/blog?page=1#s", "page", None::<&str>), "/blog#s");
        assert_eq!(get_query_param("/blog#s", "page"), None);
    }

    #[test]
    fn set_replaces_in_place_and_appends_new_keys() {
        let url = set_query_param("/blog?page=1&tag=rust", "page", 2);
        assert_eq!(url, "/blog?page=2&tag=rust");
        let url = set_query_param(&url, "sort", "new");
        assert_eq!(url, "/blog?page=2&tag=rust&sort=new");
    }

    #[test]
    fn duplicates_collapse_to_one() {
        assert_eq!(set_query_param("/?a=1&b=2&a=3", "a", "x"), "/?a=x&b=2");
    }

    #[test]
    fn path_is_not_renormalized() {
        assert_eq!(set_query_param("blog//x/", "q", true), "blog//x/?q=true");
    }

    #[test]
    fn get_decodes_and_ignores_hash() {
        assert_eq!(get_query_param("/s?q=rust+%26+wasm", "q").as_deref(), Some("rust & wasm"));
        assert_eq!(get_query_param("/s#q=1", "q"), None);
        assert_eq!(get_query_param("/s?q=1&q=2", "q").as_deref(), Some("1"));
        assert_eq!(get_query_param("/s?q=", "q").as_deref(), Some(""));
    }
}

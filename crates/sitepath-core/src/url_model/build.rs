//! URL construction from path, locale, query parameters and hash.

use std::fmt;

use url::form_urlencoded;

use super::normalize::normalize;
use super::parts::split_url;

/// A query parameter value before stringification.
///
/// `Null` stands for an absent value: builders skip it and
/// [`set_query_param`](super::set_query_param) deletes the key.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl ParamValue {
    /// The string written into the query, or `None` for `Null`.
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            ParamValue::Null => None,
            other => Some(other.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{n}"),
            ParamValue::Float(x) => write_number(f, *x),
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Null => Ok(()),
        }
    }
}

/// Shortest round-trip decimal, switching to exponent form (`1e+21`,
/// `1e-7`) outside `[1e-6, 1e21)`. Both zeros print as `0`.
fn write_number(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("NaN");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if x == 0.0 {
        return f.write_str("0");
    }
    if (1e-6..1e21).contains(&x.abs()) {
        return write!(f, "{x}");
    }
    let exp = format!("{x:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => write!(f, "{mantissa}e+{power}"),
        _ => f.write_str(&exp),
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

/// Inputs for [`build_url`]. Parameters keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlOptions {
    pub path: String,
    pub locale: Option<String>,
    pub params: Vec<(String, ParamValue)>,
    pub hash: Option<String>,
    pub base_url: Option<String>,
}

impl UrlOptions {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// Build a URL from `options`.
///
/// The path is normalized, then prefixed with `/{locale}` (the root becomes
/// `/{locale}`, not `/{locale}/`). Non-null parameters are appended in order,
/// followed by `#hash` and finally the `base_url` prefix.
///
/// # Examples
///
/// - path `/blog`, locale `es`, params `page=2, tag=astro`, hash `comments`
///   → `"/es/blog?page=2&tag=astro#comments"`
/// - all components empty → `"/"`
pub fn build_url(options: &UrlOptions) -> String {
    let normalized = normalize(&options.path);
    let parts = split_url(&normalized);

    let path = match options.locale.as_deref().filter(|l| !l.is_empty()) {
        Some(locale) if parts.path == "/" => format!("/{locale}"),
        Some(locale) => format!("/{locale}{}", parts.path),
        None => parts.path.to_string(),
    };

    let existing = parts.query.unwrap_or_default().to_string();
    let mut query = form_urlencoded::Serializer::for_suffix(existing, 0);
    for (key, value) in &options.params {
        if let Some(value) = value.to_query_value() {
            query.append_pair(key, &value);
        }
    }
    let query = query.finish();

    let mut url = path;
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    let hash = options
        .hash
        .as_deref()
        .or(parts.hash)
        .map(|h| h.trim_start_matches('#'))
        .filter(|h| !h.is_empty());
    if let Some(hash) = hash {
        url.push('#');
        url.push_str(hash);
    }

    match options.base_url.as_deref().filter(|b| !b.is_empty()) {
        Some(base) => format!("{}{}", base.trim_end_matches('/'), url),
        None => url,
    }
}

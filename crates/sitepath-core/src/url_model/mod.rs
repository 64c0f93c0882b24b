//! URL modeling for site-relative links.
//!
//! Stateless transformations over `path?query#hash` strings:
//! - slash normalization and path segments
//! - URL construction with locale prefix, query parameters and hash
//! - locale prefix detection, replacement and removal
//! - single query parameter reads and writes
//! - origin comparison for external links
//!
//! None of these fail. Malformed input degrades to a best-effort result.

mod build;
mod locale;
mod normalize;
mod origin;
mod parts;
mod query;

pub use build::{build_url, ParamValue, UrlOptions};
pub use locale::{change_locale, locale_of, looks_like_locale, remove_locale, Locales};
pub use normalize::{normalize, path_segments};
pub use origin::{is_absolute_http, is_external, Origin, OriginError};
pub use parts::{split_url, UrlParts};
pub use query::{get_query_param, set_query_param};

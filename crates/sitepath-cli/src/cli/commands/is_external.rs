//! `sitepath is-external <url>` – compare a link against the site origin.

use sitepath_core::url_model::is_external;

/// Print `external` or `internal`; returns whether the URL is external.
pub fn run_is_external(url: &str, origin: Option<&str>) -> bool {
    if origin.is_none() {
        tracing::debug!("no site origin configured; absolute URLs count as external");
    }
    let external = is_external(url, origin);
    println!("{}", if external { "external" } else { "internal" });
    external
}

//! `sitepath get-param <url> <key>`

use sitepath_core::url_model::get_query_param;

/// Print the value if present; returns whether the key was found.
pub fn run_get_param(url: &str, key: &str) -> bool {
    match get_query_param(url, key) {
        Some(value) => {
            println!("{value}");
            true
        }
        None => false,
    }
}

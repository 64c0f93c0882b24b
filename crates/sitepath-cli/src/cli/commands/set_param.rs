//! `sitepath set-param <url> <key> [value]`

use sitepath_core::url_model::set_query_param;

pub fn run_set_param(url: &str, key: &str, value: Option<String>) {
    println!("{}", set_query_param(url, key, value));
}

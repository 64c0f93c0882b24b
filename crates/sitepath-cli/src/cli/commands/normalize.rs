//! `sitepath normalize <url>`

use sitepath_core::url_model::normalize;

pub fn run_normalize(url: &str) {
    println!("{}", normalize(url));
}

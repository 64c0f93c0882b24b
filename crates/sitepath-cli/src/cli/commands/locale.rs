//! `sitepath locale <url>`

use sitepath_core::url_model::{locale_of, Locales};

pub fn run_locale(url: &str, locales: &Locales) {
    println!("{}", locale_of(url, locales));
}

//! `sitepath remove-locale <url>`

use sitepath_core::url_model::{remove_locale, Locales};

pub fn run_remove_locale(url: &str, locales: &Locales) {
    println!("{}", remove_locale(url, locales));
}

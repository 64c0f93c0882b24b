//! `sitepath change-locale <url> <locale>`

use sitepath_core::url_model::{change_locale, Locales};

pub fn run_change_locale(url: &str, locale: &str, locales: &Locales) {
    if !locales.contains(locale) {
        tracing::warn!("{locale:?} is not a configured locale");
    }
    println!("{}", change_locale(url, locale, locales));
}

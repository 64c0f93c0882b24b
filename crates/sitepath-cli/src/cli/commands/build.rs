//! `sitepath build <path>` – assemble a URL from its parts.

use clap::Args;
use sitepath_core::url_model::{build_url, UrlOptions};

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Site-relative path, e.g. `/blog`.
    pub path: String,

    /// Locale prefix, e.g. `es`.
    #[arg(long)]
    pub locale: Option<String>,

    /// Query parameter as `key=value`; repeatable, order is kept.
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,

    /// Fragment without the leading `#`.
    #[arg(long)]
    pub hash: Option<String>,

    /// Prefix for the built URL (defaults to `base_url` from config).
    #[arg(long)]
    pub base_url: Option<String>,
}

pub(crate) fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, _)) if key.is_empty() => Err(format!("empty key in {s:?}")),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected KEY=VALUE, got {s:?}")),
    }
}

impl BuildArgs {
    fn to_options(&self, config_base_url: Option<&str>) -> UrlOptions {
        let mut opts = UrlOptions::new(self.path.as_str());
        if let Some(locale) = &self.locale {
            opts = opts.locale(locale.as_str());
        }
        for (key, value) in &self.params {
            opts = opts.param(key.as_str(), value.as_str());
        }
        if let Some(hash) = &self.hash {
            opts = opts.hash(hash.as_str());
        }
        if let Some(base) = self.base_url.as_deref().or(config_base_url) {
            opts = opts.base_url(base);
        }
        opts
    }
}

pub fn run_build(args: &BuildArgs, config_base_url: Option<&str>) {
    println!("{}", build_url(&args.to_options(config_base_url)));
}

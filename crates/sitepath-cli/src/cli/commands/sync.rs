//! `sitepath sync <url> <key> <value>` – run a state binding against a URL.
//!
//! Seeds an in-memory history with `url`, binds `key` with the given default,
//! sets `value` and prints the resulting href. Useful to check which links a
//! filter widget would produce.

use clap::Args;
use sitepath_core::url_sync::{array_serializer, Location, MemoryHistory, UrlSync};

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Current location, e.g. `/es/projects?page=2`.
    pub url: String,

    /// Query parameter the value is bound to.
    pub key: String,

    /// New value (comma-separated list with `--array`).
    pub value: String,

    /// Default value; setting it removes the parameter.
    #[arg(long, default_value = "")]
    pub default: String,

    /// Treat the value as a comma-separated list.
    #[arg(long)]
    pub array: bool,
}

/// Returns the href after the binding wrote `value`.
pub(crate) fn sync_href(args: &SyncArgs) -> String {
    let history = MemoryHistory::new(args.url.as_str());
    if args.array {
        let codec = array_serializer();
        let default = split_list(&args.default);
        let mut binding = UrlSync::with_codec(&history, args.key.as_str(), default, codec);
        tracing::debug!("initial {}={:?}", args.key, binding.get());
        binding.set(split_list(&args.value));
    } else {
        let mut binding = UrlSync::new(&history, args.key.as_str(), args.default.clone());
        tracing::debug!("initial {}={:?}", args.key, binding.get());
        binding.set(args.value.clone());
    }
    history.href()
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn run_sync(args: &SyncArgs) {
    println!("{}", sync_href(args));
}

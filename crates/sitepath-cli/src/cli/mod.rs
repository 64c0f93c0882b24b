//! CLI for the sitepath URL utilities.

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sitepath_core::config::{self, SitepathConfig};

use commands::{
    run_build, run_change_locale, run_get_param, run_is_external, run_locale, run_normalize,
    run_remove_locale, run_segments, run_set_param, run_sync, BuildArgs, SyncArgs,
};

/// Top-level CLI for sitepath.
#[derive(Debug, Parser)]
#[command(name = "sitepath")]
#[command(about = "sitepath: URL normalization, locale prefixes and query state", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Normalize the slashes of a URL path, keeping query and hash.
    Normalize {
        url: String,
    },

    /// Build a URL from a path, optional locale, query parameters and hash.
    Build(BuildArgs),

    /// Print the path segments of a URL.
    Segments {
        url: String,

        /// Print a JSON array instead of one segment per line.
        #[arg(long)]
        json: bool,
    },

    /// Replace (or insert) the locale prefix of a URL.
    ChangeLocale {
        url: String,
        /// New locale code, e.g. `es`.
        locale: String,
    },

    /// Remove the locale prefix of a URL if it is a configured locale.
    RemoveLocale {
        url: String,
    },

    /// Print the locale of a URL (or the configured default).
    Locale {
        url: String,
    },

    /// Exit 0 if the URL is external to the site origin, 1 otherwise.
    IsExternal {
        url: String,

        /// Site origin to compare against (defaults to `origin` from config).
        #[arg(long)]
        origin: Option<String>,
    },

    /// Set a query parameter; omit the value to delete it.
    SetParam {
        url: String,
        key: String,
        value: Option<String>,
    },

    /// Print the decoded value of a query parameter.
    GetParam {
        url: String,
        key: String,
    },

    /// Apply a bound value to a URL the way the page state binding does.
    Sync(SyncArgs),
}

impl CliCommand {
    /// Parse arguments, load config and run. Commands that answer a yes/no
    /// question (`is-external`, `get-param`) report "no" as exit status 1.
    pub fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let succeeded = cli.command.run(&cfg)?;
        Ok(if succeeded {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }

    /// Run against `cfg`; `Ok(false)` means the command answered "no".
    pub(crate) fn run(self, cfg: &SitepathConfig) -> Result<bool> {
        let locales = cfg.locales();

        match self {
            CliCommand::Normalize { url } => run_normalize(&url),
            CliCommand::Build(args) => run_build(&args, cfg.base_url.as_deref()),
            CliCommand::Segments { url, json } => run_segments(&url, json)?,
            CliCommand::ChangeLocale { url, locale } => run_change_locale(&url, &locale, &locales),
            CliCommand::RemoveLocale { url } => run_remove_locale(&url, &locales),
            CliCommand::Locale { url } => run_locale(&url, &locales),
            CliCommand::IsExternal { url, origin } => {
                let origin = origin.as_deref().or(cfg.origin.as_deref());
                return Ok(run_is_external(&url, origin));
            }
            CliCommand::SetParam { url, key, value } => run_set_param(&url, &key, value),
            CliCommand::GetParam { url, key } => return Ok(run_get_param(&url, &key)),
            CliCommand::Sync(args) => run_sync(&args),
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests;

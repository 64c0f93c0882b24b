use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_model::Locales;

/// Global configuration loaded from `~/.config/sitepath/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitepathConfig {
    /// Locale codes recognized as the first path segment.
    pub valid_locales: Vec<String>,
    /// Locale reported when a URL carries no valid locale prefix.
    pub default_locale: String,
    /// Origin of the site itself (e.g. `https://example.com`), used to tell
    /// external links apart when no origin is given on the command line.
    #[serde(default)]
    pub origin: Option<String>,
    /// Optional prefix for built URLs (e.g. a CDN or canonical host).
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for SitepathConfig {
    fn default() -> Self {
        let locales = Locales::default();
        Self {
            valid_locales: locales.valid,
            default_locale: locales.default,
            origin: None,
            base_url: None,
        }
    }
}

impl SitepathConfig {
    pub fn locales(&self) -> Locales {
        Locales::new(self.valid_locales.iter().cloned(), self.default_locale.clone())
    }

    /// Reject configs whose default locale is not one of the valid locales.
    pub fn validate(&self) -> Result<()> {
        if self.valid_locales.is_empty() {
            bail!("valid_locales must not be empty");
        }
        if !self.valid_locales.contains(&self.default_locale) {
            bail!(
                "default_locale {:?} is not one of valid_locales {:?}",
                self.default_locale,
                self.valid_locales
            );
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitepath")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load and validate configuration from `path`.
pub fn load_from_path(path: &Path) -> Result<SitepathConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: SitepathConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SitepathConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SitepathConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = SitepathConfig::default();
        assert_eq!(cfg.valid_locales, vec!["en", "es"]);
        assert_eq!(cfg.default_locale, "en");
        assert!(cfg.origin.is_none());
        assert_eq!(cfg.locales(), Locales::default());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SitepathConfig {
            origin: Some("https://example.com".to_string()),
            ..SitepathConfig::default()
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SitepathConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            valid_locales = ["en", "de", "fr"]
            default_locale = "de"
            base_url = "https://cdn.example.com"
        "#;
        let cfg: SitepathConfig = toml::from_str(toml).unwrap();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.locales().default, "de");
        assert!(cfg.locales().contains("fr"));
        assert_eq!(cfg.base_url.as_deref(), Some("https://cdn.example.com"));
        assert!(cfg.origin.is_none());
    }

    #[test]
    fn load_from_path_rejects_unknown_default_locale() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "valid_locales = [\"en\", \"es\"]\ndefault_locale = \"fr\"").unwrap();
        let err = load_from_path(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("default_locale"));
    }

    #[test]
    fn load_from_path_reads_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            f,
            "valid_locales = [\"en\"]\ndefault_locale = \"en\"\norigin = \"https://me.dev\""
        )
        .unwrap();
        let cfg = load_from_path(f.path()).unwrap();
        assert_eq!(cfg.origin.as_deref(), Some("https://me.dev"));
    }
}

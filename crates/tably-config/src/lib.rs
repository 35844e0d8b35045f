//! Shared configuration for the tably viewer.
//!
//! A single TOML file merged with `TABLY_`-prefixed environment
//! variables via figment. The binary layers its CLI flags on top --
//! this crate never parses argv.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use tably_api::TransportConfig;
use tably_core::PageSize;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config struct ──────────────────────────────────────────────

/// Viewer configuration, all fields overridable from the environment
/// (`TABLY_FEED_URL`, `TABLY_TIMEOUT_SECS`, ...).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Reservation feed URL.
    pub feed_url: String,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Accept self-signed TLS certificates on the feed host.
    #[serde(default)]
    pub insecure: bool,

    /// Initial table page size: 5, 10, or 25.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Log file path (the TUI never logs to stdout).
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: String::new(),
            timeout_secs: default_timeout(),
            insecure: false,
            page_size: default_page_size(),
            log_file: None,
        }
    }
}

fn default_timeout() -> u64 {
    30
}
fn default_page_size() -> usize {
    5
}

impl Config {
    /// Validated feed URL.
    pub fn feed_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.feed_url).map_err(|e| ConfigError::Validation {
            field: "feed_url".into(),
            reason: e.to_string(),
        })
    }

    /// Transport settings for building the feed client.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            accept_invalid_certs: self.insecure,
        }
    }

    /// Initial page size, validated against the fixed options.
    pub fn initial_page_size(&self) -> Result<PageSize, ConfigError> {
        PageSize::from_rows(self.page_size).ok_or_else(|| ConfigError::Validation {
            field: "page_size".into(),
            reason: format!("{} is not one of 5, 10, 25", self.page_size),
        })
    }
}

// ── Loading ─────────────────────────────────────────────────────────

/// Platform config file path (`~/.config/tably/config.toml` on Linux).
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tably").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load configuration: defaults < config file < environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));
    if let Some(path) = config_path() {
        figment = figment.merge(Toml::file(path));
    }
    let config: Config = figment.merge(Env::prefixed("TABLY_")).extract()?;
    Ok(config)
}

/// Load configuration from an explicit file path (still merged with the
/// environment, which wins).
pub fn load_config_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let config: Config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("TABLY_"))
        .extract()?;
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_for_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "feed_url = \"https://example.com/reservations.json\"").unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.page_size, 5);
        assert!(!config.insecure);
        assert_eq!(config.initial_page_size().unwrap(), PageSize::Five);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "feed_url = \"https://example.com/feed.json\"").unwrap();
        writeln!(file, "timeout_secs = 5").unwrap();
        writeln!(file, "page_size = 25").unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.initial_page_size().unwrap(), PageSize::TwentyFive);
        assert_eq!(config.transport().timeout, Duration::from_secs(5));
    }

    #[test]
    fn env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                "feed_url = \"https://example.com/feed.json\"\npage_size = 10\n",
            )?;
            jail.set_env("TABLY_PAGE_SIZE", "25");

            let config = load_config_from(std::path::Path::new("config.toml")).unwrap();
            assert_eq!(config.page_size, 25);
            Ok(())
        });
    }

    #[test]
    fn invalid_page_size_is_rejected() {
        let config = Config {
            feed_url: "https://example.com/feed.json".into(),
            page_size: 7,
            ..Config::default()
        };
        assert!(matches!(
            config.initial_page_size(),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn bad_feed_url_is_rejected() {
        let config = Config {
            feed_url: "not a url".into(),
            ..Config::default()
        };
        assert!(matches!(config.feed_url(), Err(ConfigError::Validation { .. })));
    }
}

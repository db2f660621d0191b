//! Runtime configuration.
//!
//! # Responsibility
//! - Resolve store, logging and site settings from `FOLIO_*` variables.
//! - Fall back to documented defaults when a variable is unset.
//!
//! # Invariants
//! - A set but malformed variable is an error, never silently defaulted.

use crate::db::DbOptions;
use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod site;

pub use site::{Author, NavItem, SiteConfig, SocialLinks};

pub const ENV_DB_PATH: &str = "FOLIO_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "FOLIO_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "FOLIO_LOG_DIR";
pub const ENV_DB_BUSY_TIMEOUT_MS: &str = "FOLIO_DB_BUSY_TIMEOUT_MS";
pub const ENV_SITE_URL: &str = "FOLIO_SITE_URL";

const DEFAULT_DB_FILE_NAME: &str = "folio.sqlite3";
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub key: &'static str,
    pub message: String,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.key, self.message)
    }
}

impl Error for ConfigError {}

/// Process-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: &'static str,
    /// File logging is enabled only when set; must be absolute.
    pub log_dir: Option<PathBuf>,
    pub busy_timeout: Duration,
    /// Public base URL without trailing slash.
    pub site_url: String,
}

impl AppConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &'static str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let db_path = value(ENV_DB_PATH).map(PathBuf::from).unwrap_or_else(|| {
            info!("{ENV_DB_PATH} not set, using default: {DEFAULT_DB_FILE_NAME}");
            PathBuf::from(DEFAULT_DB_FILE_NAME)
        });

        let log_level = match value(ENV_LOG_LEVEL) {
            Some(raw) => normalize_level(&raw).map_err(|err| ConfigError {
                key: ENV_LOG_LEVEL,
                message: err.to_string(),
            })?,
            None => default_log_level(),
        };

        let log_dir = value(ENV_LOG_DIR)
            .map(|raw| normalize_log_dir(Path::new(&raw)))
            .transpose()
            .map_err(|err| ConfigError {
                key: ENV_LOG_DIR,
                message: err.to_string(),
            })?;

        let busy_timeout_ms = match value(ENV_DB_BUSY_TIMEOUT_MS) {
            Some(raw) => raw.parse::<u64>().map_err(|err| ConfigError {
                key: ENV_DB_BUSY_TIMEOUT_MS,
                message: format!("expected milliseconds, got `{raw}`: {err}"),
            })?,
            None => DEFAULT_BUSY_TIMEOUT_MS,
        };

        let site_url = match value(ENV_SITE_URL) {
            Some(raw) => normalize_site_url(&raw).map_err(|message| ConfigError {
                key: ENV_SITE_URL,
                message,
            })?,
            None => DEFAULT_SITE_URL.to_string(),
        };

        Ok(Self {
            db_path,
            log_level,
            log_dir,
            busy_timeout: Duration::from_millis(busy_timeout_ms),
            site_url,
        })
    }

    pub fn db_options(&self) -> DbOptions {
        DbOptions {
            busy_timeout: self.busy_timeout,
        }
    }

    pub fn site(&self) -> SiteConfig {
        SiteConfig::new(self.site_url.clone())
    }
}

fn normalize_site_url(raw: &str) -> Result<String, String> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(format!("expected an http(s) URL, got `{raw}`"));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

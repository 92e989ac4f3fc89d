//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (ICONBATCH_*)
//! 2. TOML config file (if ICONBATCH_CONFIG_FILE set)
//! 3. Built-in defaults

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Surface the server binary exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// JSON endpoints over HTTP (`/icon`, `/icons`).
    Http,
    /// MCP tools over stdin/stdout.
    Stdio,
}

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (ICONBATCH_*)
/// 2. TOML config file (if ICONBATCH_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to SQLite cache database.
    ///
    /// Set via ICONBATCH_DB_PATH environment variable.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Base URL of the remote icon finder service.
    ///
    /// Set via ICONBATCH_FINDER_URL environment variable.
    #[serde(default = "default_finder_url")]
    pub finder_url: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via ICONBATCH_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum bytes accepted from the icon finder per request.
    ///
    /// Set via ICONBATCH_MAX_BYTES environment variable.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via ICONBATCH_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Which surface to serve.
    ///
    /// Set via ICONBATCH_TRANSPORT environment variable (`http` or `stdio`).
    #[serde(default = "default_transport")]
    pub transport: Transport,

    /// Bind address for the HTTP transport.
    ///
    /// Set via ICONBATCH_LISTEN_ADDR environment variable.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("./iconbatch-cache.sqlite")
}

fn default_finder_url() -> String {
    "http://127.0.0.1:8080".into()
}

fn default_user_agent() -> String {
    "iconbatch/0.1".into()
}

fn default_max_bytes() -> usize {
    1_048_576 // 1MB
}

fn default_timeout_ms() -> u64 {
    20_000
}

fn default_transport() -> Transport {
    Transport::Http
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            finder_url: default_finder_url(),
            user_agent: default_user_agent(),
            max_bytes: default_max_bytes(),
            timeout_ms: default_timeout_ms(),
            transport: default_transport(),
            listen_addr: default_listen_addr(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Parsed HTTP bind address.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `listen_addr` is not a socket address.
    pub fn listen_socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen_addr.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
            field: "listen_addr".into(),
            reason: e.to_string(),
        })
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `ICONBATCH_`
    /// 2. TOML file from `ICONBATCH_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("ICONBATCH_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("ICONBATCH_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}

//! Shared configuration for Lunance tools.
//!
//! TOML config with `LUNANCE_*` environment overrides, translation to the
//! transport settings `lunance-api` needs, and an on-disk
//! [`SessionStore`](lunance_core::SessionStore) next to the config file.

mod session;

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use lunance_api::{TlsMode, TransportConfig};

pub use session::FileSessionStore;

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

    #[error(transparent)]
    Session(#[from] lunance_core::SessionError),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config ──────────────────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// API root, e.g. `http://localhost:8000/api/v1`.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Accept invalid TLS certificates (development backends only).
    #[serde(default)]
    pub insecure: bool,

    /// Extra CA certificate to trust.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,

    /// How long the connectivity probe may take before reporting offline.
    #[serde(default = "default_reachability_timeout")]
    pub reachability_timeout_secs: u64,

    /// Default output format: `table`, `json` or `json-compact`.
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout(),
            insecure: false,
            ca_cert: None,
            reachability_timeout_secs: default_reachability_timeout(),
            output: default_output(),
        }
    }
}

fn default_api_url() -> String {
    "http://localhost:8000/api/v1".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_reachability_timeout() -> u64 {
    3
}
fn default_output() -> String {
    "table".into()
}

impl Config {
    /// Parse and check `api_url`.
    pub fn api_url(&self) -> Result<Url, ConfigError> {
        let url: Url = self.api_url.parse().map_err(|e| ConfigError::Validation {
            field: "api_url".into(),
            reason: format!("{e}: {}", self.api_url),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "api_url".into(),
                reason: format!("expected http or https, got '{}'", url.scheme()),
            });
        }
        Ok(url)
    }

    pub fn reachability_timeout(&self) -> Duration {
        Duration::from_secs(self.reachability_timeout_secs)
    }

    /// Validated API root plus the transport settings to reach it.
    pub fn to_transport_config(&self) -> Result<(Url, TransportConfig), ConfigError> {
        let url = self.api_url()?;

        let tls = if self.insecure {
            TlsMode::DangerAcceptInvalid
        } else if let Some(ref ca_path) = self.ca_cert {
            TlsMode::CustomCa(ca_path.clone())
        } else {
            TlsMode::System
        };

        let transport = TransportConfig::default()
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_tls(tls);
        Ok((url, transport))
    }
}

// ── Paths ───────────────────────────────────────────────────────────

fn project_dir() -> PathBuf {
    ProjectDirs::from("id", "lunance", "lunance").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("lunance");
            p
        },
        |dirs| dirs.config_dir().to_path_buf(),
    )
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dir().join("config.toml")
}

/// Where the persisted login session lives.
pub fn session_path() -> PathBuf {
    project_dir().join("session.toml")
}

// ── Loading / saving ────────────────────────────────────────────────

/// Load config from the canonical path plus `LUNANCE_*` environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Defaults, then the TOML file at `path` (if any), then environment.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("LUNANCE_"));

    let config: Config = figment.extract()?;
    config.api_url()?;
    Ok(config)
}

/// Serialize config to TOML at the canonical path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

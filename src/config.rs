//! Configuration types for stratgraph

use crate::editor::ConnectionPolicy;
use crate::telemetry::LogFormat;
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Editor behaviour
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditorConfig {
    /// Whether incompatible connections warn or fail
    #[serde(default)]
    pub connection_policy: ConnectionPolicy,
}

/// Session lifetime and pruning
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Seconds a session stays valid after login
    #[serde(default = "default_session_ttl")]
    pub ttl_secs: u64,

    /// Seconds between expired-session sweeps
    #[serde(default = "default_prune_interval")]
    pub prune_interval_secs: u64,
}

fn default_session_ttl() -> u64 {
    86_400 // 24 hours
}
fn default_prune_interval() -> u64 {
    86_400
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_session_ttl(),
            prune_interval_secs: default_prune_interval(),
        }
    }
}

/// In-memory backend seeding
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Create the `test` demo account at startup
    #[serde(default = "default_true")]
    pub seed_demo_user: bool,
}

fn default_true() -> bool {
    true
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            seed_demo_user: true,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Prometheus scrape port; no exporter when unset
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// The shipped example configuration
    pub fn example() -> anyhow::Result<Self> {
        Ok(toml::from_str(include_str!("../config.toml.example"))?)
    }
}

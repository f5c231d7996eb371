//! Runtime configuration.
//!
//! Stored as JSON at `~/.hexwire/config.json`. A missing file means defaults,
//! so the binary runs without any setup.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::composition::Strategy;
use crate::domain::{Person, Scenario, User};
use crate::error::{Error, Result};

/// Configuration data stored in JSON format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Simulated I/O latency of the auth, db and queue steps, in milliseconds.
    #[serde(default = "default_latency_ms", rename = "latencyMs")]
    pub latency_ms: u64,

    /// Upper bound for one top-level cascade, in milliseconds.
    #[serde(default, rename = "timeoutMs")]
    pub timeout_ms: Option<u64>,

    /// How the graph is wired.
    #[serde(default)]
    pub strategy: Strategy,

    /// Which cascades a run triggers.
    #[serde(default)]
    pub scenario: Scenario,

    /// Record the worker authenticates.
    #[serde(default)]
    pub user: User,

    /// Payload sent through the HTTP client.
    #[serde(default)]
    pub person: Person,
}

fn default_latency_ms() -> u64 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            timeout_ms: None,
            strategy: Strategy::default(),
            scenario: Scenario::default(),
            user: User::default(),
            person: Person::default(),
        }
    }
}

impl Config {
    /// Runtime view handed to the composition roots.
    pub fn settings(&self) -> Settings {
        Settings {
            latency: Duration::from_millis(self.latency_ms),
            timeout: self.timeout_ms.map(Duration::from_millis),
            user: self.user.clone(),
            person: self.person.clone(),
        }
    }
}

/// Resolved settings used while composing and running the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub latency: Duration,
    pub timeout: Option<Duration>,
    pub user: User,
    pub person: Person,
}

impl Default for Settings {
    fn default() -> Self {
        Config::default().settings()
    }
}

impl Settings {
    /// Defaults without simulated latency.
    pub fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Reads and writes [`Config`] on disk.
pub struct ConfigStore {
    config_path: PathBuf,
}

impl ConfigStore {
    /// Create a config store with the default path.
    ///
    /// Default path: `~/.hexwire/config.json`
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;

        Ok(Self {
            config_path: home.join(".hexwire").join("config.json"),
        })
    }

    /// Create a config store with a custom path.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration from disk.
    ///
    /// Returns default config if the file doesn't exist.
    pub async fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to disk.
    ///
    /// Creates the parent directory if needed and replaces the file atomically.
    pub async fn save(&self, config: &Config) -> Result<()> {
        if let Some(dir) = self.config_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).await.map_err(|e| {
                    Error::Config(format!("Failed to create config directory: {}", e))
                })?;
            }
        }

        let content = serde_json::to_string_pretty(config)?;

        let temp_path = self.config_path.with_extension("json.tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(content.as_bytes()).await?;
        file.sync_all().await?;
        fs::rename(&temp_path, &self.config_path).await?;

        Ok(())
    }
}

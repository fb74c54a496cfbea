//! # Application Configuration
//!
//! Where data lives and how the session behaves.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PASTRY_STORAGE=memory                                              │
//! │     PASTRY_DATA_DIR=/srv/pastry                                        │
//! │     PASTRY_SIGN_IN_DELAY_MS=0                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/pastry-inventory/config.toml (Linux)                     │
//! │     ~/Library/Application Support/com.pastry.inventory/config.toml     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     file backend in the platform data dir, 800 ms sign-in delay        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [storage]
//! backend = "file"          # file | memory
//! data_dir = "/srv/pastry"  # optional
//!
//! [auth]
//! sign_in_delay_ms = 800
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::session::AuthConfig;

/// Upper bound for the artificial sign-in delay.
const MAX_SIGN_IN_DELAY_MS: u64 = 60_000;

// =============================================================================
// Errors
// =============================================================================

/// Configuration load/save failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to save config: {0}")]
    SaveFailed(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::SaveFailed(err.to_string())
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Storage Settings
// =============================================================================

/// Which durable backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// One JSON file per collection under `data_dir`.
    #[default]
    File,

    /// Process memory only, gone on exit.
    Memory,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::File => write!(f, "file"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" | "disk" => Ok(StorageBackend::File),
            "memory" | "mem" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::Invalid(format!(
                "Unknown storage backend: '{}'. Valid options: file, memory",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Data directory for the file backend. Platform default when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

// =============================================================================
// Auth Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Artificial sign-in latency in milliseconds. Default: 800
    #[serde(default = "default_sign_in_delay_ms")]
    pub sign_in_delay_ms: u64,
}

fn default_sign_in_delay_ms() -> u64 {
    800
}

impl Default for AuthSettings {
    fn default() -> Self {
        AuthSettings {
            sign_in_delay_ms: default_sign_in_delay_ms(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub auth: AuthSettings,
}

impl AppConfig {
    /// In-memory storage with no sign-in delay. Handy for tests and demos.
    pub fn ephemeral() -> Self {
        AppConfig {
            storage: StorageSettings {
                backend: StorageBackend::Memory,
                data_dir: None,
            },
            auth: AuthSettings {
                sign_in_delay_ms: 0,
            },
        }
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (config.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ConfigError::SaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(dir) = &self.storage.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("data_dir must not be empty".into()));
            }
        }

        if self.auth.sign_in_delay_ms > MAX_SIGN_IN_DELAY_MS {
            return Err(ConfigError::Invalid(format!(
                "sign_in_delay_ms must be at most {}",
                MAX_SIGN_IN_DELAY_MS
            )));
        }

        Ok(())
    }

    /// Applies `PASTRY_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies overrides from any variable source. Unparseable values are
    /// logged and skipped.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(backend) = var("PASTRY_STORAGE") {
            match backend.parse() {
                Ok(parsed) => {
                    debug!(backend = %backend, "Overriding storage backend from environment");
                    self.storage.backend = parsed;
                }
                Err(_) => warn!(backend = %backend, "Unknown storage backend in environment"),
            }
        }

        if let Some(dir) = var("PASTRY_DATA_DIR") {
            debug!(dir = %dir, "Overriding data dir from environment");
            self.storage.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(delay) = var("PASTRY_SIGN_IN_DELAY_MS") {
            match delay.parse::<u64>() {
                Ok(ms) => self.auth.sign_in_delay_ms = ms,
                Err(_) => warn!(delay = %delay, "Invalid sign-in delay in environment"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Resolved data directory: explicit, platform default, or `./pastry-data`.
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("pastry-data"))
    }

    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig {
            sign_in_delay: Duration::from_millis(self.auth.sign_in_delay_ms),
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "pastry", "inventory")
}

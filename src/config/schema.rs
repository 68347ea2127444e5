//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub polling: PollingConfig,
}

/// Backend endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Where the session store lives on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(".storefront/session.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

/// Session behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Where unauthenticated users are sent
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Where non-admins are sent from admin-only routes
    #[serde(default = "default_home_path")]
    pub home_path: String,

    /// Seconds before expiry at which a refresh warning fires
    #[serde(default = "default_refresh_warning_secs")]
    pub refresh_warning_secs: i64,
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_home_path() -> String {
    "/".to_string()
}

fn default_refresh_warning_secs() -> i64 {
    300
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            home_path: default_home_path(),
            refresh_warning_secs: default_refresh_warning_secs(),
        }
    }
}

/// List refresh polling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_interval_secs() -> u64 {
    30
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

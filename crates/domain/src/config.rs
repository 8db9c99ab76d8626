//! Configuration management

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub remote: RemoteStoreConfig,
    pub server: ServerConfig,
}

/// Local mirror database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    pub pool_size: u32,
}

/// Remote document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteStoreConfig {
    /// Base URL of the remote collection API, e.g. `https://store.example.com/v1`
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// Whether a remote client should be constructed at all. When false the
    /// synchronizer runs mirror-only from the start.
    pub enabled: bool,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig { path: "roster.db".to_string(), pool_size: 8 },
            remote: RemoteStoreConfig {
                base_url: "http://localhost:9090/v1".to_string(),
                timeout_seconds: 30,
                enabled: true,
            },
            server: ServerConfig { host: "0.0.0.0".to_string(), port: 3000 },
        }
    }
}

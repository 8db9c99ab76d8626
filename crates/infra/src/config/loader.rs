//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `ROSTER_DB_PATH`: Mirror database file path
//! - `ROSTER_DB_POOL_SIZE`: Connection pool size
//! - `ROSTER_REMOTE_URL`: Base URL of the remote document store
//! - `ROSTER_REMOTE_TIMEOUT`: Remote request timeout in seconds
//! - `ROSTER_REMOTE_ENABLED`: Whether to initialise a remote client (true/false)
//! - `ROSTER_SERVER_HOST`: HTTP listen host
//! - `ROSTER_SERVER_PORT`: HTTP listen port
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./roster.json` or `./roster.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)

use std::path::PathBuf;

use roster_domain::{
    Config, DatabaseConfig, RemoteStoreConfig, Result, RosterError, ServerConfig,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `RosterError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// All required environment variables must be present. Returns an error
/// if any are missing.
///
/// # Errors
/// Returns `RosterError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let db_path = env_var("ROSTER_DB_PATH")?;
    let db_pool_size = env_var("ROSTER_DB_POOL_SIZE").and_then(|s| {
        s.parse::<u32>().map_err(|e| RosterError::Config(format!("Invalid pool size: {}", e)))
    })?;

    let remote_url = env_var("ROSTER_REMOTE_URL")?;
    let remote_timeout = env_var("ROSTER_REMOTE_TIMEOUT").and_then(|s| {
        s.parse::<u64>()
            .map_err(|e| RosterError::Config(format!("Invalid remote timeout: {}", e)))
    })?;
    let remote_enabled = env_bool("ROSTER_REMOTE_ENABLED", true);

    let server_host = env_var("ROSTER_SERVER_HOST")?;
    let server_port = env_var("ROSTER_SERVER_PORT").and_then(|s| {
        s.parse::<u16>().map_err(|e| RosterError::Config(format!("Invalid port: {}", e)))
    })?;

    Ok(Config {
        database: DatabaseConfig { path: db_path, pool_size: db_pool_size },
        remote: RemoteStoreConfig {
            base_url: remote_url,
            timeout_seconds: remote_timeout,
            enabled: remote_enabled,
        },
        server: ServerConfig { host: server_host, port: server_port },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `RosterError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(RosterError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            RosterError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| RosterError::Config(format!("Failed to read config file: {}", e)))?;

    let is_toml = config_path.extension().is_some_and(|ext| ext == "toml");
    if is_toml {
        toml::from_str(&contents)
            .map_err(|e| RosterError::Config(format!("Invalid TOML config: {}", e)))
    } else {
        serde_json::from_str(&contents)
            .map_err(|e| RosterError::Config(format!("Invalid JSON config: {}", e)))
    }
}

fn probe_config_paths() -> Option<PathBuf> {
    const CANDIDATES: [&str; 6] = [
        "config.json",
        "config.toml",
        "roster.json",
        "roster.toml",
        "../config.json",
        "../config.toml",
    ];

    CANDIDATES.iter().map(PathBuf::from).find(|p| p.exists())
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| RosterError::Config(format!("Missing environment variable: {}", name)))
}

fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name).map(|v| v == "true" || v == "1").unwrap_or(default)
}

//! Configuration loading and layered setting resolution
//!
//! Settings resolve in priority order:
//! 1. Command-line argument or environment variable (merged by clap in each binary)
//! 2. TOML config file
//! 3. Compiled default (fallback)
//!
//! A missing default config file is not an error: services start with defaults.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Contents of `config.toml`
///
/// Every field is optional; absent fields fall through to compiled defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TomlConfig {
    /// Provider API key (sent as `X-API-KEY`)
    pub api_key: Option<String>,
    /// Provider base URL
    pub base_url: Option<String>,
    /// Allowed CORS origin (`*` for any)
    pub cors_origin: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Delay between result-poll attempts
    pub poll_interval_ms: Option<u64>,
    /// Largest accepted multipart body
    pub max_upload_bytes: Option<usize>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[logging]` table
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Platform config file location (`~/.config/dfgate/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dfgate").join("config.toml"))
}

/// Parse a TOML config file
pub fn read_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse TOML failed ({}): {}", path.display(), e)))
}

/// Load configuration from an explicit path or the platform default
///
/// An explicit path that does not exist is an error. A missing default file
/// degrades to `TomlConfig::default()` with a log line.
pub fn load_config(explicit: Option<&Path>) -> Result<TomlConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        info!("Loading config from {}", path.display());
        return read_toml_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            info!("Loading config from {}", path.display());
            read_toml_config(&path)
        }
        Some(path) => {
            info!("No config file at {}, using defaults", path.display());
            Ok(TomlConfig::default())
        }
        None => {
            warn!("Could not determine config directory, using defaults");
            Ok(TomlConfig::default())
        }
    }
}

/// Pick a setting by priority: override (CLI/env) → file → default
pub fn resolve<T: std::fmt::Debug>(
    name: &str,
    override_value: Option<T>,
    file_value: Option<T>,
    default: T,
) -> T {
    if let Some(value) = override_value {
        debug!(setting = name, source = "cli/env", "Resolved {:?}", value);
        return value;
    }
    if let Some(value) = file_value {
        debug!(setting = name, source = "toml", "Resolved {:?}", value);
        return value;
    }
    debug!(setting = name, source = "default", "Resolved {:?}", default);
    default
}

/// Pick an optional secret by priority, ignoring blank values
///
/// Values are never logged.
pub fn resolve_secret(
    name: &str,
    override_value: Option<String>,
    file_value: Option<String>,
) -> Option<String> {
    let sources = [("cli/env", override_value), ("toml", file_value)];
    for (source, value) in sources {
        if let Some(value) = value.filter(|v| is_valid_key(v)) {
            debug!(setting = name, source, "Resolved secret");
            return Some(value);
        }
    }
    None
}

/// Validate a key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}

/// Validate an absolute http(s) base URL and strip any trailing slash
pub fn normalize_base_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(Error::InvalidInput(format!(
            "Base URL must start with http:// or https://: {}",
            url
        )));
    }
    Ok(trimmed.to_string())
}

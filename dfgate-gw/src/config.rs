//! Configuration resolution for dfgate-gw
//!
//! Provides multi-tier resolution with CLI → ENV → TOML → default priority.
//! clap merges the first two tiers; `dfgate_common::config` supplies the rest.

use clap::Parser;
use dfgate_common::config::{self, TomlConfig};
use dfgate_common::{Error, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://api.prd.realitydefender.xyz";
pub const DEFAULT_CORS_ORIGIN: &str = "*";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Command-line arguments for dfgate-gw
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "dfgate-gw")]
#[command(about = "Gateway in front of the Reality Defender deepfake-detection API")]
#[command(version)]
pub struct CliArgs {
    /// Config file (defaults to the platform config dir)
    #[arg(short, long, env = "DFGATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Provider API key
    #[arg(long, env = "REALITY_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Provider base URL
    #[arg(long, env = "REALITY_BASE")]
    pub base_url: Option<String>,

    /// Allowed CORS origin (`*` for any)
    #[arg(long, env = "CORS_ORIGIN")]
    pub cors_origin: Option<String>,

    /// Address to bind
    #[arg(long, env = "DFGATE_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "DFGATE_PORT")]
    pub port: Option<u16>,

    /// Delay between result-poll attempts, in milliseconds
    #[arg(long, env = "DFGATE_POLL_INTERVAL_MS")]
    pub poll_interval_ms: Option<u64>,

    /// Largest accepted upload body, in bytes
    #[arg(long, env = "DFGATE_MAX_UPLOAD_BYTES")]
    pub max_upload_bytes: Option<usize>,
}

/// Per-call timeouts for provider requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderTimeouts {
    pub presign: Duration,
    pub transfer: Duration,
    pub result: Duration,
}

impl Default for ProviderTimeouts {
    fn default() -> Self {
        Self {
            presign: Duration::from_secs(15),
            transfer: Duration::from_secs(20),
            result: Duration::from_secs(20),
        }
    }
}

/// Provider connection settings
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// `None` is allowed; provider calls will then be rejected upstream
    pub api_key: Option<String>,
    /// Base URL without trailing slash
    pub base_url: String,
    pub timeouts: ProviderTimeouts,
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            timeouts: ProviderTimeouts::default(),
        }
    }
}

/// Fully resolved gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub provider: ProviderConfig,
    pub cors_origin: String,
    pub host: String,
    pub port: u16,
    pub poll_interval: Duration,
    pub max_upload_bytes: usize,
}

impl GatewayConfig {
    /// Merge CLI/env values over the TOML file over compiled defaults
    pub fn resolve(args: &CliArgs, file: &TomlConfig) -> Result<Self> {
        let api_key = config::resolve_secret("api_key", args.api_key.clone(), file.api_key.clone());
        if api_key.is_none() {
            warn!("REALITY_API_KEY is not configured; provider calls will be rejected upstream");
        }

        let base_url = config::resolve(
            "base_url",
            args.base_url.clone(),
            file.base_url.clone(),
            DEFAULT_BASE_URL.to_string(),
        );
        let base_url = config::normalize_base_url(&base_url)?;

        let cors_origin = config::resolve(
            "cors_origin",
            args.cors_origin.clone(),
            file.cors_origin.clone(),
            DEFAULT_CORS_ORIGIN.to_string(),
        );
        if cors_origin.trim() != "*" && axum::http::HeaderValue::from_str(cors_origin.trim()).is_err() {
            return Err(Error::Config(format!("Invalid CORS origin: {:?}", cors_origin)));
        }
        let host = config::resolve(
            "host",
            args.host.clone(),
            file.host.clone(),
            DEFAULT_HOST.to_string(),
        );
        let port = config::resolve("port", args.port, file.port, DEFAULT_PORT);
        let poll_interval_ms = config::resolve(
            "poll_interval_ms",
            args.poll_interval_ms,
            file.poll_interval_ms,
            DEFAULT_POLL_INTERVAL_MS,
        );
        let max_upload_bytes = config::resolve(
            "max_upload_bytes",
            args.max_upload_bytes,
            file.max_upload_bytes,
            DEFAULT_MAX_UPLOAD_BYTES,
        );
        if max_upload_bytes == 0 {
            return Err(Error::Config("max_upload_bytes must be greater than 0".to_string()));
        }

        Ok(Self {
            provider: ProviderConfig::new(base_url, api_key),
            cors_origin,
            host,
            port,
            poll_interval: Duration::from_millis(poll_interval_ms),
            max_upload_bytes,
        })
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("Invalid bind address {}:{}: {}", self.host, self.port, e)))
    }
}

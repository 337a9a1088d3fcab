//! dfgate-gw - Deepfake-detection gateway
//!
//! Fronts the Reality Defender API with a smaller client contract:
//! uploads are presigned and transferred on the client's behalf, and
//! analysis records are trimmed to the image deepfake models.

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dfgate_gw::config::{CliArgs, GatewayConfig};
use dfgate_gw::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables win
    let dotenv_path = dotenv::dotenv().ok();

    let args = CliArgs::parse();

    // Config file is read before tracing so its log level can apply
    let file_config = dfgate_common::config::load_config(args.config.as_deref())
        .context("Failed to load config file")?;

    let default_filter = format!("dfgate_gw={0},dfgate_common={0},tower_http={0}", file_config.logging.level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting dfgate-gw v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("DFGATE_GIT_HASH"),
        env!("DFGATE_BUILD_TIMESTAMP"),
        env!("DFGATE_BUILD_PROFILE")
    );
    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }

    let config = GatewayConfig::resolve(&args, &file_config).context("Invalid configuration")?;
    info!("Provider: {}", config.provider.base_url);
    info!("CORS origin: {}", config.cors_origin);

    let state = AppState::new(&config).context("Failed to initialize provider client")?;
    let app = build_router(state);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}

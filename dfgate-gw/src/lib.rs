//! dfgate-gw library interface
//!
//! Gateway in front of the Reality Defender deepfake-detection API:
//! - `POST /upload` presigns, transfers and optionally polls for a result
//! - `GET /result/:request_id` returns the image deepfake models only
//! - `GET /health` for monitoring

pub mod api;
pub mod config;
pub mod error;
pub mod services;

pub use crate::error::{ApiError, ApiResult, GatewayError};

use axum::extract::DefaultBodyLimit;
use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::services::{ProviderClient, ResultProjector, UploadOrchestrator};

/// Application state shared across handlers
///
/// Holds no per-request data; every request runs independently.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<UploadOrchestrator>,
    pub projector: Arc<ResultProjector>,
    /// Allowed CORS origin (`*` for any)
    pub cors_origin: String,
    /// Body limit applied to uploads
    pub max_upload_bytes: usize,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let client = ProviderClient::new(&config.provider)?;

        Ok(Self {
            orchestrator: Arc::new(UploadOrchestrator::new(client.clone(), config.poll_interval)),
            projector: Arc::new(ResultProjector::new(client)),
            cors_origin: config.cors_origin.clone(),
            max_upload_bytes: config.max_upload_bytes,
            startup_time: Utc::now(),
        })
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let cors = api::cors_layer(&state.cors_origin);
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .merge(api::upload_routes())
        .merge(api::result_routes())
        .merge(api::health_routes())
        .layer(body_limit)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

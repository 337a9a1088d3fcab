//! Error types for dfgate-gw
//!
//! `GatewayError` covers every way the provider round-trips can fail.
//! `ApiError` is what handlers return; it renders the JSON error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::fmt;
use thiserror::Error;

/// Which provider call an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Presign,
    Transfer,
    Poll,
    Result,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Presign => "presign",
            Stage::Transfer => "transfer",
            Stage::Poll => "poll",
            Stage::Result => "result",
        };
        f.write_str(name)
    }
}

/// Upstream failures, all surfaced to the caller as gateway-class errors
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Provider answered with an unacceptable status
    #[error("{stage} request failed: status={status} body={body}")]
    UpstreamStatus {
        stage: Stage,
        status: u16,
        body: String,
    },

    /// Provider body was not valid JSON
    #[error("{stage} response not JSON: {message} body={body}")]
    UpstreamParse {
        stage: Stage,
        message: String,
        body: String,
    },

    /// Presign response lacked a destination URL / request id pair
    #[error("Presign response missing signedUrl or requestId (checked common keys).")]
    FieldResolution {
        checked_candidates: Vec<Value>,
        full_response: Value,
    },

    /// Destination rejected the file bytes
    #[error("Upload failed: status {status} body: {body}")]
    Transfer { status: u16, body: String },

    /// Connection, TLS or timeout failure talking to the provider
    #[error("{stage} network error: {message}")]
    Network { stage: Stage, message: String },

    /// Request id cannot be used as a single URL path segment
    #[error("Invalid request id: {request_id:?}")]
    InvalidRequestId { stage: Stage, request_id: String },

    /// Provider base URL cannot carry endpoint paths
    #[error("Invalid provider base URL {url}: {message}")]
    InvalidBaseUrl { url: String, message: String },
}

impl GatewayError {
    pub(crate) fn network(stage: Stage, err: reqwest::Error) -> Self {
        GatewayError::Network {
            stage,
            message: err.to_string(),
        }
    }

    /// Status code returned to our caller
    ///
    /// Result-fetch status failures mirror the upstream status and a bad
    /// caller-supplied request id is a 400; everything else is a 502.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::UpstreamStatus {
                stage: Stage::Result,
                status,
                ..
            } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            GatewayError::InvalidRequestId {
                stage: Stage::Result,
                ..
            } => StatusCode::BAD_REQUEST,
            _ => StatusCode::BAD_GATEWAY,
        }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::UpstreamStatus { .. } => "UPSTREAM_STATUS",
            GatewayError::UpstreamParse { .. } => "UPSTREAM_PARSE",
            GatewayError::FieldResolution { .. } => "FIELD_RESOLUTION",
            GatewayError::Transfer { .. } => "TRANSFER_FAILED",
            GatewayError::Network { .. } => "UPSTREAM_UNREACHABLE",
            GatewayError::InvalidRequestId { .. } => "INVALID_REQUEST_ID",
            GatewayError::InvalidBaseUrl { .. } => "INVALID_BASE_URL",
        }
    }

    /// Upstream status, when the provider produced one
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            GatewayError::UpstreamStatus { status, .. } | GatewayError::Transfer { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Upload exceeds the configured body limit (413)
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Provider failure (502 or mirrored upstream status)
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "code": "BAD_REQUEST", "message": msg }),
            ),
            ApiError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                json!({ "code": "PAYLOAD_TOO_LARGE", "message": msg }),
            ),
            ApiError::Gateway(err) => {
                let status = err.status_code();
                let mut error = json!({
                    "code": err.code(),
                    "message": err.to_string(),
                });
                if let Some(upstream) = err.upstream_status() {
                    error["upstream_status"] = json!(upstream);
                }
                if let GatewayError::FieldResolution {
                    checked_candidates,
                    full_response,
                } = err
                {
                    error["detail"] = json!({
                        "checked_candidates": checked_candidates,
                        "full_response": full_response,
                    });
                }
                (status, error)
            }
        };

        (status, Json(json!({ "error": error }))).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

//! File upload endpoint
//!
//! `POST /upload` takes a multipart body with the file in the `file` part.
//! Query flags control the optional result poll and the presign debug view.

use axum::{
    body::Bytes,
    extract::{multipart::MultipartError, rejection::QueryRejection, Multipart, Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Deserialize;

use crate::api::query::flexible_bool;
use crate::error::{ApiError, ApiResult};
use crate::services::result_poller::budget_from_seconds;
use crate::services::upload_orchestrator::{UploadOutcome, UploadRequest, DEFAULT_FILE_NAME};
use crate::AppState;

/// Multipart part carrying the file
pub const FILE_FIELD: &str = "file";

/// Query parameters for `POST /upload`
#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    /// Poll for the analysis after the transfer
    #[serde(default, deserialize_with = "flexible_bool")]
    pub try_fetch_result: bool,

    /// Total polling budget in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout: i64,

    /// Return the raw presign response instead of uploading
    #[serde(default, deserialize_with = "flexible_bool")]
    pub debug: bool,
}

fn default_fetch_timeout() -> i64 {
    5
}

fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(err.body_text())
    } else {
        ApiError::BadRequest(format!("Failed to parse multipart data: {}", err.body_text()))
    }
}

/// Pull the `file` part out of the multipart body
///
/// Other parts are skipped. A part without a filename gets `upload.bin`.
async fn read_file_part(multipart: &mut Multipart) -> ApiResult<(String, Bytes)> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_FILE_NAME)
            .to_string();
        let bytes = field.bytes().await.map_err(multipart_error)?;
        return Ok((file_name, bytes));
    }

    Err(ApiError::BadRequest(format!(
        "Missing multipart part '{}'",
        FILE_FIELD
    )))
}

/// POST /upload
pub async fn upload_file(
    State(state): State<AppState>,
    query: Result<Query<UploadQuery>, QueryRejection>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadOutcome>> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let (file_name, bytes) = read_file_part(&mut multipart).await?;

    let outcome = state
        .orchestrator
        .handle_upload(UploadRequest {
            file_name,
            bytes,
            try_fetch_result: query.try_fetch_result,
            fetch_timeout: budget_from_seconds(query.fetch_timeout),
            debug: query.debug,
        })
        .await?;

    Ok(Json(outcome))
}

/// Build upload routes
pub fn upload_routes() -> Router<AppState> {
    Router::new().route("/upload", post(upload_file))
}

//! Analysis result endpoint
//!
//! `GET /result/:request_id` returns the projected deepfake-model view.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::error::ApiResult;
use crate::services::result_projector::ProjectedResult;
use crate::AppState;

/// GET /result/:request_id
pub async fn get_result(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
) -> ApiResult<Json<ProjectedResult>> {
    let projected = state.projector.get_result(&request_id).await?;
    Ok(Json(projected))
}

/// Build result routes
pub fn result_routes() -> Router<AppState> {
    Router::new().route("/result/:request_id", get(get_result))
}

//! Analysis record projection
//!
//! Fetches the provider's full analysis record and keeps only the image
//! deepfake models, renamed to the gateway's client contract.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{GatewayError, Stage};
use crate::services::provider_client::ProviderClient;

/// Models reported to clients; everything else is dropped
pub const DEEPFAKE_IMAGE_MODELS: [&str; 6] = [
    "rd-context-img",
    "rd-pine-img",
    "rd-img-ensemble",
    "rd-cedar-img",
    "rd-elm-img",
    "rd-oak-img",
];

/// One kept model entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepfakeModel {
    pub name: Value,
    pub status: Value,
    /// `predictionNumber` upstream
    pub score: Value,
    pub final_score: Value,
    /// `normalizedPredictionNumber` upstream
    pub normalized_score: Value,
}

/// Client-facing view of an analysis record
///
/// Missing upstream fields are `null`, never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedResult {
    pub request_id: Value,
    pub overall_status: Value,
    pub results_summary: Value,
    pub deepfake_models: Vec<DeepfakeModel>,
}

fn field(object: &Map<String, Value>, key: &str) -> Value {
    object.get(key).cloned().unwrap_or(Value::Null)
}

fn is_deepfake_model(entry: &Map<String, Value>) -> bool {
    entry
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| DEEPFAKE_IMAGE_MODELS.iter().any(|allowed| *allowed == name))
}

/// Project a parsed analysis record
pub fn project(record: &Value) -> ProjectedResult {
    let empty = Map::new();
    let top = record.as_object().unwrap_or(&empty);

    let deepfake_models = top
        .get("models")
        .and_then(Value::as_array)
        .map(|models| {
            models
                .iter()
                .filter_map(Value::as_object)
                .filter(|entry| is_deepfake_model(entry))
                .map(|entry| DeepfakeModel {
                    name: field(entry, "name"),
                    status: field(entry, "status"),
                    score: field(entry, "predictionNumber"),
                    final_score: field(entry, "finalScore"),
                    normalized_score: field(entry, "normalizedPredictionNumber"),
                })
                .collect()
        })
        .unwrap_or_default();

    ProjectedResult {
        request_id: field(top, "requestId"),
        overall_status: field(top, "overallStatus"),
        results_summary: field(top, "resultsSummary"),
        deepfake_models,
    }
}

/// Fetches and projects analysis records
#[derive(Debug, Clone)]
pub struct ResultProjector {
    client: ProviderClient,
}

impl ResultProjector {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }

    pub async fn get_result(&self, request_id: &str) -> Result<ProjectedResult, GatewayError> {
        let response = self.client.fetch_media(request_id, Stage::Result).await?;

        if response.status != 200 {
            tracing::warn!(
                request_id = request_id,
                status = response.status,
                "Failed to fetch result"
            );
            return Err(GatewayError::UpstreamStatus {
                stage: Stage::Result,
                status: response.status,
                body: response.body,
            });
        }

        let record: Value =
            serde_json::from_str(&response.body).map_err(|e| GatewayError::UpstreamParse {
                stage: Stage::Result,
                message: e.to_string(),
                body: response.body.clone(),
            })?;

        let projected = project(&record);
        tracing::debug!(
            request_id = request_id,
            models = projected.deepfake_models.len(),
            "Projected analysis record"
        );
        Ok(projected)
    }
}

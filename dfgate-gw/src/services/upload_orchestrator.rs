//! Upload orchestration
//!
//! Presign → field extraction → transfer → optional bounded result poll.
//! Every upstream failure is returned as a [`GatewayError`]; only the poll
//! tolerates non-200 answers.

use axum::body::Bytes;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::error::{GatewayError, Stage};
use crate::services::presign::PresignFieldResolver;
use crate::services::provider_client::ProviderClient;
use crate::services::result_poller::ResultPoller;

/// Filename used when the client sends none
pub const DEFAULT_FILE_NAME: &str = "upload.bin";

/// Statuses the presigned destination may answer with on success
const TRANSFER_OK: [u16; 3] = [200, 201, 204];

/// One inbound upload
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_name: String,
    pub bytes: Bytes,
    pub try_fetch_result: bool,
    pub fetch_timeout: Duration,
    pub debug: bool,
}

/// Successful upload summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub request_id: String,
    pub upload_status: u16,
    /// Outer `None`: polling not requested (field omitted).
    /// `Some(None)`: polled but nothing arrived in time (`null`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Option<Value>>,
}

/// Raw presign answer, returned when debug mode is on
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresignDebugView {
    pub presign_status: u16,
    pub presign_body: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UploadOutcome {
    Uploaded(UploadResult),
    PresignDebug(PresignDebugView),
}

/// Drives the presign/transfer/poll flow against the provider
#[derive(Debug, Clone)]
pub struct UploadOrchestrator {
    client: ProviderClient,
    resolver: PresignFieldResolver,
    poller: ResultPoller,
}

impl UploadOrchestrator {
    pub fn new(client: ProviderClient, poll_interval: Duration) -> Self {
        Self {
            poller: ResultPoller::new(client.clone(), poll_interval),
            resolver: PresignFieldResolver::default(),
            client,
        }
    }

    pub async fn handle_upload(&self, request: UploadRequest) -> Result<UploadOutcome, GatewayError> {
        tracing::info!(
            file_name = %request.file_name,
            size = request.bytes.len(),
            "Requesting presigned URL"
        );

        // Step 1: presign
        let presign = self.client.presign(&request.file_name).await?;
        if !presign.is_success() {
            tracing::warn!(status = presign.status, "Presign request rejected");
            return Err(GatewayError::UpstreamStatus {
                stage: Stage::Presign,
                status: presign.status,
                body: presign.body,
            });
        }

        let presign_body: Value =
            serde_json::from_str(&presign.body).map_err(|e| GatewayError::UpstreamParse {
                stage: Stage::Presign,
                message: e.to_string(),
                body: presign.body.clone(),
            })?;

        if request.debug {
            return Ok(UploadOutcome::PresignDebug(PresignDebugView {
                presign_status: presign.status,
                presign_body,
            }));
        }

        tracing::debug!(body = %presign_body, "Presign response JSON");
        let target = self.resolver.resolve(&presign_body)?;

        // Step 2: transfer
        let transfer = self.client.put_file(&target.signed_url, request.bytes).await?;
        if !TRANSFER_OK.contains(&transfer.status) {
            tracing::warn!(status = transfer.status, "Transfer rejected");
            return Err(GatewayError::Transfer {
                status: transfer.status,
                body: transfer.body,
            });
        }
        tracing::info!(
            request_id = %target.request_id,
            status = transfer.status,
            "File transferred"
        );

        // Step 3: optional short poll
        let analysis = if request.try_fetch_result {
            Some(
                self.poller
                    .poll(&target.request_id, request.fetch_timeout)
                    .await?,
            )
        } else {
            None
        };

        Ok(UploadOutcome::Uploaded(UploadResult {
            request_id: target.request_id,
            upload_status: transfer.status,
            analysis,
        }))
    }
}

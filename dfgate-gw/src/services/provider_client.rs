//! Reality Defender API client
//!
//! Thin wrapper over the three provider endpoints the gateway uses:
//! - `POST {base}/api/files/aws-presigned` (presign a write target)
//! - `PUT {signedUrl}` (transfer file bytes)
//! - `GET {base}/api/media/users/{requestId}` (analysis record)
//!
//! Responses are returned raw (status + body text); callers decide what a
//! failure means for their step.

use axum::body::Bytes;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Url;
use serde_json::json;

use crate::config::{ProviderConfig, ProviderTimeouts};
use crate::error::{GatewayError, Stage};

const USER_AGENT: &str = concat!("dfgate-gw/", env!("CARGO_PKG_VERSION"));
const API_KEY_HEADER: &str = "x-api-key";
const PRESIGN_SEGMENTS: [&str; 3] = ["api", "files", "aws-presigned"];
const MEDIA_SEGMENTS: [&str; 3] = ["api", "media", "users"];

/// Status and body text of a provider response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Provider API client
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http_client: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
    timeouts: ProviderTimeouts,
}

impl ProviderClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, GatewayError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| GatewayError::network(Stage::Presign, e))?;

        let base_url = Url::parse(&config.base_url).map_err(|e| GatewayError::InvalidBaseUrl {
            url: config.base_url.clone(),
            message: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::InvalidBaseUrl {
                url: config.base_url.clone(),
                message: "URL cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            http_client,
            base_url,
            api_key: config.api_key.clone(),
            timeouts: config.timeouts,
        })
    }

    /// Base URL with `segments` appended, each percent-encoded
    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                message: "URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// URL of the analysis record for a request id
    ///
    /// The id always stays a single path segment. Ids that would be read as
    /// dot segments are rejected.
    pub fn media_url(&self, request_id: &str, stage: Stage) -> Result<Url, GatewayError> {
        if matches!(request_id, "" | "." | "..") {
            return Err(GatewayError::InvalidRequestId {
                stage,
                request_id: request_id.to_string(),
            });
        }
        let mut segments = MEDIA_SEGMENTS.to_vec();
        segments.push(request_id);
        self.endpoint(segments)
    }

    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(key) = &self.api_key {
            match HeaderValue::from_str(key) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(API_KEY_HEADER, value);
                }
                Err(_) => tracing::warn!("API key contains invalid header characters; omitting"),
            }
        }
        headers
    }

    async fn into_raw(response: reqwest::Response, stage: Stage) -> Result<RawResponse, GatewayError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::network(stage, e))?;
        Ok(RawResponse { status, body })
    }

    /// Request a temporary write target for `file_name`
    pub async fn presign(&self, file_name: &str) -> Result<RawResponse, GatewayError> {
        let url = self.endpoint(PRESIGN_SEGMENTS)?;
        tracing::debug!(file_name = file_name, "Requesting presigned upload URL");

        let response = self
            .http_client
            .post(url)
            .headers(self.auth_headers())
            .json(&json!({ "fileName": file_name }))
            .timeout(self.timeouts.presign)
            .send()
            .await
            .map_err(|e| GatewayError::network(Stage::Presign, e))?;

        Self::into_raw(response, Stage::Presign).await
    }

    /// Write file bytes to a presigned destination
    ///
    /// No provider credentials are attached; the URL carries its own grant.
    pub async fn put_file(&self, signed_url: &str, bytes: Bytes) -> Result<RawResponse, GatewayError> {
        tracing::debug!(size = bytes.len(), "Transferring file to presigned URL");

        let response = self
            .http_client
            .put(signed_url)
            .body(bytes)
            .timeout(self.timeouts.transfer)
            .send()
            .await
            .map_err(|e| GatewayError::network(Stage::Transfer, e))?;

        Self::into_raw(response, Stage::Transfer).await
    }

    /// Fetch the analysis record for a request id
    pub async fn fetch_media(&self, request_id: &str, stage: Stage) -> Result<RawResponse, GatewayError> {
        let response = self
            .http_client
            .get(self.media_url(request_id, stage)?)
            .headers(self.auth_headers())
            .timeout(self.timeouts.result)
            .send()
            .await
            .map_err(|e| GatewayError::network(stage, e))?;

        Self::into_raw(response, stage).await
    }
}

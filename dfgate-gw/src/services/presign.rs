//! Presign response field extraction
//!
//! The provider has shipped the presign payload in several shapes: fields at
//! the top level, or nested under `response`, `data` or `result`, with
//! varying key spellings. Extraction is driven by a lookup table of
//! containers and key synonyms.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::GatewayError;

/// A logical field and the keys it may appear under, in priority order
#[derive(Debug, Clone, Copy)]
pub struct FieldAliases {
    pub name: &'static str,
    pub synonyms: &'static [&'static str],
}

pub const SIGNED_URL_FIELD: FieldAliases = FieldAliases {
    name: "signedUrl",
    synonyms: &["signedUrl", "signed_url", "signedURL", "uploadUrl", "url"],
};

pub const REQUEST_ID_FIELD: FieldAliases = FieldAliases {
    name: "requestId",
    synonyms: &["requestId", "request_id", "requestID", "id"],
};

/// Sub-objects searched after the top-level object, in order
pub const DEFAULT_CONTAINERS: &[&str] = &["response", "data", "result"];

/// Destination URL and tracking id extracted from a presign response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignResult {
    pub signed_url: String,
    pub request_id: String,
}

/// Table-driven resolver for [`PresignResult`]
#[derive(Debug, Clone)]
pub struct PresignFieldResolver {
    containers: Vec<&'static str>,
    signed_url: FieldAliases,
    request_id: FieldAliases,
}

impl Default for PresignFieldResolver {
    fn default() -> Self {
        Self {
            containers: DEFAULT_CONTAINERS.to_vec(),
            signed_url: SIGNED_URL_FIELD,
            request_id: REQUEST_ID_FIELD,
        }
    }
}

impl PresignFieldResolver {
    /// Append another container key to search
    pub fn with_container(mut self, key: &'static str) -> Self {
        self.containers.push(key);
        self
    }

    /// Objects to search: the top level, then each container that is an object
    ///
    /// A non-object body has no candidates.
    pub fn candidates<'a>(&self, body: &'a Value) -> Vec<&'a Map<String, Value>> {
        let Some(top) = body.as_object() else {
            return Vec::new();
        };

        let mut candidates = vec![top];
        candidates.extend(
            self.containers
                .iter()
                .filter_map(|key| top.get(*key).and_then(Value::as_object)),
        );
        candidates
    }

    /// Find the first candidate carrying both a URL and a request id
    pub fn resolve(&self, body: &Value) -> Result<PresignResult, GatewayError> {
        let candidates = self.candidates(body);

        for (index, candidate) in candidates.iter().enumerate() {
            let signed_url = first_present(candidate, &self.signed_url).and_then(url_value);
            let request_id = first_present(candidate, &self.request_id).and_then(id_value);

            if let (Some(signed_url), Some(request_id)) = (signed_url, request_id) {
                tracing::debug!(
                    candidate = index,
                    request_id = %request_id,
                    "Resolved presign fields"
                );
                return Ok(PresignResult {
                    signed_url,
                    request_id,
                });
            }
        }

        tracing::warn!(
            candidates = candidates.len(),
            "Presign response missing {} or {}",
            self.signed_url.name,
            self.request_id.name
        );
        Err(GatewayError::FieldResolution {
            checked_candidates: candidates
                .into_iter()
                .map(|c| Value::Object(c.clone()))
                .collect(),
            full_response: body.clone(),
        })
    }
}

/// Value of the first synonym present on the object (case-sensitive)
fn first_present<'a>(object: &'a Map<String, Value>, field: &FieldAliases) -> Option<&'a Value> {
    field.synonyms.iter().find_map(|key| object.get(*key))
}

fn url_value(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Ids may arrive as strings or numbers
fn id_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

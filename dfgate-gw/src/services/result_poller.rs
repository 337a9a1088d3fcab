//! Bounded result polling
//!
//! After a transfer the analysis may already be available. The poller asks
//! for it with a fixed delay between attempts until a 200 arrives or the
//! caller's time budget runs out. There is no backoff.

use serde_json::Value;
use std::time::Duration;
use tokio::time::Instant;

use crate::error::{GatewayError, Stage};
use crate::services::provider_client::ProviderClient;

/// Budgets beyond this are clamped before computing the deadline
pub const MAX_POLL_BUDGET: Duration = Duration::from_secs(60 * 60 * 24);

/// Fixed-delay, deadline-bounded poller
#[derive(Debug, Clone)]
pub struct ResultPoller {
    client: ProviderClient,
    interval: Duration,
}

impl ResultPoller {
    pub fn new(client: ProviderClient, interval: Duration) -> Self {
        Self { client, interval }
    }

    /// Poll the analysis record for `request_id` within `budget`
    ///
    /// Returns `Ok(None)` when the budget expires first. The deadline is taken
    /// once up front and checked before every attempt, so a zero budget makes
    /// no request. Non-200 statuses mean "not ready". Budgets are clamped to
    /// [`MAX_POLL_BUDGET`].
    pub async fn poll(&self, request_id: &str, budget: Duration) -> Result<Option<Value>, GatewayError> {
        let now = Instant::now();
        let deadline = now
            .checked_add(budget.min(MAX_POLL_BUDGET))
            .unwrap_or(now);
        let mut attempts = 0u32;

        while Instant::now() < deadline {
            attempts += 1;
            let response = self.client.fetch_media(request_id, Stage::Poll).await?;

            if response.status == 200 {
                let analysis = serde_json::from_str(&response.body).map_err(|e| {
                    GatewayError::UpstreamParse {
                        stage: Stage::Poll,
                        message: e.to_string(),
                        body: response.body.clone(),
                    }
                })?;
                tracing::info!(request_id = request_id, attempts, "Analysis result ready");
                return Ok(Some(analysis));
            }

            tracing::debug!(
                request_id = request_id,
                attempts,
                status = response.status,
                "Analysis not ready"
            );
            tokio::time::sleep(self.interval).await;
        }

        tracing::info!(request_id = request_id, attempts, "Result poll budget exhausted");
        Ok(None)
    }
}

/// Convert the caller's `fetch_timeout` (seconds, may be negative) to a budget
pub fn budget_from_seconds(seconds: i64) -> Duration {
    Duration::from_secs(seconds.max(0) as u64)
}

//! HTTP data access for the two backend collections.
//!
//! Issues plain GETs against `{base_url}/alerts` and `{base_url}/triage_rules`
//! and decodes the JSON arrays into typed records. No retries, no caching,
//! no timeout beyond the transport's own: one page load maps to exactly one
//! request per collection.

use std::future::Future;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::models::{Alert, TriageRule};
use crate::state::LoadOutcome;

/// Read-only client for the triage backend API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client rooted at `base_url`. Trailing slashes are trimmed so
    /// both `.../api/v1` and `.../api/v1/` work.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("triage-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch all alerts. A non-success status collapses to the fixed
    /// "Failed to fetch alerts" message.
    pub async fn fetch_alerts(&self) -> ApiResult<Vec<Alert>> {
        self.fetch_collection("alerts", "alerts").await
    }

    /// Fetch all triage rules. A non-success status collapses to the fixed
    /// "Failed to fetch triage rules" message.
    pub async fn fetch_triage_rules(&self) -> ApiResult<Vec<TriageRule>> {
        self.fetch_collection("triage_rules", "triage rules").await
    }

    /// Run both collection fetches concurrently and join them
    /// all-or-nothing into a single outcome for the reducer.
    pub async fn load_dashboard(&self) -> LoadOutcome {
        match join_all_or_nothing(self.fetch_alerts(), self.fetch_triage_rules()).await {
            Ok((alerts, rules)) => LoadOutcome::Loaded { alerts, rules },
            Err(err) => LoadOutcome::Failed(err.to_string()),
        }
    }

    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &'static str,
    ) -> ApiResult<Vec<T>> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(url = %url, "Fetching collection");
        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::UpstreamStatus {
                resource,
                status: resp.status(),
            });
        }
        Ok(resp.json().await?)
    }
}

/// Await two independent fallible operations and combine them
/// all-or-nothing: success carries both results, failure carries the first
/// error in operand order.
///
/// Intentionally all-or-nothing: the successful half of a failed join is
/// discarded, never surfaced. Both operations are driven to completion
/// rather than cancelled on the other's failure, so identical inputs
/// always produce the identical outcome regardless of response timing.
pub async fn join_all_or_nothing<A, B, E>(
    a: impl Future<Output = Result<A, E>>,
    b: impl Future<Output = Result<B, E>>,
) -> Result<(A, B), E> {
    let (res_a, res_b) = tokio::join!(a, b);
    Ok((res_a?, res_b?))
}

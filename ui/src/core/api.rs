//! Client for the remote gender-gap statistics service.
//!
//! The client is constructed exactly once by the shell and handed down
//! through context; it issues plain GET requests and performs no retries and
//! no caching. A failed request surfaces as an [`ApiError`] that the
//! requesting view renders as an error banner.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use super::format::compact_snapshot;
use super::model::{GapPayload, MetricQuery, Snapshot};

/// Base URL of the statistics service.
pub const DEFAULT_API_BASE: &str = "https://genderscope-api.wmcloud.org/v1";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("service returned HTTP {status} for {url}")]
    Status { status: u16, url: String },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    /// The list of available dataset snapshots. Fetched once at startup by
    /// the shell and shared read-only with every view.
    pub async fn snapshots(&self) -> Result<Vec<Snapshot>, ApiError> {
        self.get_json(snapshots_url(&self.base)).await
    }

    /// One `{meta, metrics}` payload for the given query.
    pub async fn gap_metrics(&self, query: &MetricQuery) -> Result<GapPayload, ApiError> {
        self.get_json(metrics_url(&self.base, query)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        debug!(%url, "requesting");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode { url, source })
    }
}

fn snapshots_url(base: &str) -> String {
    format!("{base}/available_snapshots")
}

/// Pure URL construction, kept separate from the client so it can be tested
/// without a network.
fn metrics_url(base: &str, query: &MetricQuery) -> String {
    format!(
        "{base}/{bias}/{metric}/{snapshot}/{population}/properties/{field}/all?label_lang={lang}",
        bias = query.bias,
        metric = query.metric,
        snapshot = compact_snapshot(&query.snapshot),
        population = query.population.as_param(),
        field = query.property.as_param(),
        lang = query.label_lang,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Population, PropertyField};

    #[test]
    fn metrics_url_compacts_dated_snapshots() {
        let query = MetricQuery::gender_gap(
            "2021-01-04".to_string(),
            Population::GteOneSitelink,
            PropertyField::DateOfBirth,
        );
        assert_eq!(
            metrics_url("https://stats.example/v1", &query),
            "https://stats.example/v1/gender/gap/20210104/gte_one_sitelink/properties/date_of_birth/all?label_lang=en"
        );
    }

    #[test]
    fn metrics_url_passes_latest_through() {
        let query = MetricQuery::gender_gap(
            "latest".to_string(),
            Population::AllWikidata,
            PropertyField::Country,
        );
        assert_eq!(
            metrics_url("https://stats.example/v1", &query),
            "https://stats.example/v1/gender/gap/latest/all_wikidata/properties/country/all?label_lang=en"
        );
    }

    #[test]
    fn client_trims_trailing_slash_from_base() {
        let client = ApiClient::new("https://stats.example/v1/");
        assert_eq!(client.base, "https://stats.example/v1");
        assert_eq!(
            snapshots_url(&client.base),
            "https://stats.example/v1/available_snapshots"
        );
    }
}

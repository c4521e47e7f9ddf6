use std::{fmt::Debug, sync::Arc, time::Duration};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::AppError;

use super::metrics::{Endpoint, RequestMetrics};
use super::region::Platform;

const METRICS_LOG_PERIOD: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub struct RiotClient {
    client: reqwest::Client,
    /// Riot API Key
    key: String,
    base_url: String,
    metrics: Arc<RequestMetrics>,
}

impl RiotClient {
    pub fn new(key: String, platform: Platform) -> Self {
        Self::with_base_url(key, platform.base_url())
    }

    /// Client targeting an arbitrary host, e.g. a proxy in front of the Riot API.
    pub fn with_base_url(key: String, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();

        Self {
            client: reqwest::Client::new(),
            key,
            base_url: base_url.trim_end_matches('/').to_string(),
            metrics: RequestMetrics::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn metrics(&self) -> Arc<RequestMetrics> {
        self.metrics.clone()
    }

    /// Spawn a task logging per-endpoint request counts every minute.
    pub fn start_metrics_logging(&self) {
        let metrics = self.metrics();
        tokio::spawn(async move { metrics.log_loop(METRICS_LOG_PERIOD).await });
    }

    pub(super) async fn get<T: DeserializeOwned + Debug>(
        &self,
        endpoint: Endpoint,
        url: &str,
    ) -> Result<T, AppError> {
        self.metrics.record(endpoint);

        let res = self
            .client
            .get(url)
            .header("X-Riot-Token", &self.key)
            .send()
            .await?;

        match res.status() {
            StatusCode::OK => Ok(res.json().await?),
            status => {
                let message = res.text().await.unwrap_or_default();
                Err(AppError::RiotApi {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

//! HTTP client for the prediction service

use super::reply::{PredictionError, PredictionReply};
use super::traits::PredictionApi;
use crate::state::AggregateRecord;
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;

/// Default prediction service address
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/";

/// Client for the prediction service
pub struct PredictionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PredictionClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionApi for PredictionClient {
    async fn predict(&self, record: &AggregateRecord) -> Result<PredictionReply, PredictionError> {
        tracing::info!(endpoint = %self.endpoint, "Requesting prediction");

        let response = self.http.post(&self.endpoint).json(record).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let reply = PredictionReply::from_json(&body)?;
        tracing::info!(result = reply.value(), "Prediction received");
        Ok(reply)
    }
}

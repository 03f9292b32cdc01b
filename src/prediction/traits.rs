//! Trait abstraction for the prediction client to enable mocking in tests

use super::reply::{PredictionError, PredictionReply};
use crate::state::AggregateRecord;
use async_trait::async_trait;

/// Trait for prediction service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// Send the whole record and wait for the predicted value
    async fn predict(&self, record: &AggregateRecord) -> Result<PredictionReply, PredictionError>;
}

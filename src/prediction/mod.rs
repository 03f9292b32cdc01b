//! Prediction service module for HTTP communication

mod client;
mod reply;
mod traits;

pub use client::{PredictionClient, DEFAULT_ENDPOINT};
pub use reply::{PredictionError, PredictionReply};
pub use traits::PredictionApi;

#[cfg(test)]
pub use traits::MockPredictionApi;

//! Reply parsing and classification

use crate::state::SubmissionOutcome;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Results above this are not prices: the model was fed a combination of
/// categories it never saw together (e.g. a neighbourhood outside its market
/// region) and extrapolated wildly.
pub const DOMAIN_FLAG_THRESHOLD: f64 = 100_000_000.0;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("could not reach prediction service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("prediction service returned HTTP {0}")]
    Status(u16),
    #[error("malformed reply: {0}")]
    MalformedReply(String),
    #[error("prediction task ended without a reply")]
    Aborted,
}

#[derive(Debug, Deserialize)]
struct WireReply {
    result: Value,
}

/// Numeric result sent back by the prediction service
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReply {
    value: f64,
    /// The result as the service rendered it
    text: String,
}

impl PredictionReply {
    /// Parse a `{"result": ...}` body. The result may be a JSON number or a
    /// string holding one.
    pub fn from_json(body: &str) -> Result<Self, PredictionError> {
        let wire: WireReply = serde_json::from_str(body)
            .map_err(|e| PredictionError::MalformedReply(e.to_string()))?;

        let (value, text) = match wire.result {
            Value::Number(n) => {
                let value = n.as_f64().ok_or_else(|| {
                    PredictionError::MalformedReply(format!("result {n} is out of range"))
                })?;
                // Whole floats print without a trailing ".0"
                let text = if n.is_f64() {
                    value.to_string()
                } else {
                    n.to_string()
                };
                (value, text)
            }
            Value::String(s) => {
                let text = s.trim().to_string();
                let value = text.parse::<f64>().map_err(|_| {
                    PredictionError::MalformedReply(format!("result {s:?} is not a number"))
                })?;
                (value, text)
            }
            other => {
                return Err(PredictionError::MalformedReply(format!(
                    "result has unexpected value {other}"
                )))
            }
        };

        if !value.is_finite() {
            return Err(PredictionError::MalformedReply(format!(
                "result {text} is not finite"
            )));
        }
        Ok(Self { value, text })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn classify(&self) -> SubmissionOutcome {
        if self.value.trunc() > DOMAIN_FLAG_THRESHOLD {
            SubmissionOutcome::InvalidCombination
        } else {
            SubmissionOutcome::Success {
                display: format!("Prediction: ${}", self.text),
            }
        }
    }
}

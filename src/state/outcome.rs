//! Submission outcome shown in the result box

/// Result of the most recent submit action
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    /// Request sent, waiting for the prediction service
    Loading,
    Success {
        display: String,
    },
    /// The service returned a value far outside the trained domain
    InvalidCombination,
    /// At least one required field is still at its default; nothing was sent
    MissingFields,
    /// Transport or reply parsing failed
    Failed {
        reason: String,
    },
}

impl SubmissionOutcome {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionOutcome::Loading)
    }

    /// Text for the result box
    pub fn display_text(&self) -> String {
        match self {
            SubmissionOutcome::Idle => "💤💤💤".to_string(),
            SubmissionOutcome::Loading => "Loading...".to_string(),
            SubmissionOutcome::Success { display } => display.clone(),
            SubmissionOutcome::InvalidCombination => "Invalid feature combination".to_string(),
            SubmissionOutcome::MissingFields => "Missing/Incorrect values".to_string(),
            SubmissionOutcome::Failed { reason } => format!("Prediction failed: {reason}"),
        }
    }
}

//! Prediction form: owns the field controllers, the aggregate record and the
//! submission outcome

use super::controller::FieldController;
use super::field::{FieldDeclaration, FieldValue};
use super::record::{AggregateRecord, FieldSink};
use crate::prediction::{PredictionError, PredictionReply};
use crate::state::SubmissionOutcome;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// The property form and its submission workflow
#[derive(Debug, Clone)]
pub struct PredictionForm {
    declarations: Vec<FieldDeclaration>,
    controllers: Vec<FieldController>,
    record: AggregateRecord,
    outcome: SubmissionOutcome,
    /// One past the last field is the Predict button
    pub active_field_index: usize,
}

impl PredictionForm {
    pub fn new(declarations: Vec<FieldDeclaration>) -> Self {
        let controllers = declarations
            .iter()
            .map(FieldController::from_declaration)
            .collect();
        let record = AggregateRecord::new(&declarations);
        Self {
            declarations,
            controllers,
            record,
            outcome: SubmissionOutcome::Idle,
            active_field_index: 0,
        }
    }

    /// Discard every entered value and start over
    pub fn reset(&mut self) {
        *self = Self::new(std::mem::take(&mut self.declarations));
    }

    pub fn controllers(&self) -> &[FieldController] {
        &self.controllers
    }

    #[cfg(test)]
    pub fn record(&self) -> &AggregateRecord {
        &self.record
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    /// Returns true if the Predict button has focus
    pub fn is_button_active(&self) -> bool {
        self.active_field_index == self.controllers.len()
    }

    pub fn active_controller(&self) -> Option<&FieldController> {
        self.controllers.get(self.active_field_index)
    }

    /// Run `f` on the focused controller with the form as its sink
    fn with_active(&mut self, f: impl FnOnce(&mut FieldController, &mut dyn FieldSink)) {
        // Detached while the controller reports into the form
        let mut controllers = std::mem::take(&mut self.controllers);
        if let Some(controller) = controllers.get_mut(self.active_field_index) {
            f(controller, self);
        }
        self.controllers = controllers;
    }

    pub fn activate(&mut self) {
        self.with_active(|c, sink| c.activate(sink));
    }

    pub fn push_char(&mut self, c: char) {
        self.with_active(|field, sink| field.push_char(c, sink));
    }

    pub fn pop_char(&mut self) {
        self.with_active(|c, sink| c.pop_char(sink));
    }

    pub fn step_forward(&mut self) {
        self.with_active(|c, sink| c.step_forward(sink));
    }

    pub fn step_back(&mut self) {
        self.with_active(|c, sink| c.step_back(sink));
    }

    /// Non-exempt fields whose recorded value still equals their default
    pub fn missing_fields(&self) -> Vec<&str> {
        self.declarations
            .iter()
            .filter(|d| !d.is_exempt())
            .filter(|d| self.record.get(&d.name) == Some(&d.default_value()))
            .map(|d| d.name.as_str())
            .collect()
    }

    /// Run the completeness gate and, if it passes, move to `Loading` and hand
    /// back a snapshot of the record to send.
    ///
    /// Returns `None` when a request is already in flight or when a required
    /// field is unfilled (outcome becomes `MissingFields`).
    pub fn begin_submit(&mut self) -> Option<AggregateRecord> {
        if self.outcome.is_loading() {
            tracing::debug!("Ignoring submit while a prediction is pending");
            return None;
        }

        let missing = self.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(?missing, "Submission rejected");
            self.outcome = SubmissionOutcome::MissingFields;
            return None;
        }

        self.outcome = SubmissionOutcome::Loading;
        Some(self.record.clone())
    }

    /// Apply the service reply for the pending submission
    pub fn finish_submit(&mut self, reply: Result<PredictionReply, PredictionError>) {
        if !self.outcome.is_loading() {
            tracing::debug!("Discarding reply with no pending submission");
            return;
        }
        self.outcome = match reply {
            Ok(reply) => reply.classify(),
            Err(err) => {
                // Already shown in the result box; stderr shares the terminal
                tracing::debug!("Prediction request failed: {err}");
                SubmissionOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        };
    }
}

impl FieldSink for PredictionForm {
    /// Overwrite the record entry for `name`. No validation happens here.
    fn on_field_change(&mut self, name: &str, value: FieldValue) {
        self.record.on_field_change(name, value);
    }
}

impl Form for PredictionForm {
    fn field_count(&self) -> usize {
        self.controllers.len() + 1 // fields, Predict button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.controllers.len());
    }
}

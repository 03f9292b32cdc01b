//! Application state definitions

use super::forms::{property_fields, FieldDeclaration, PredictionForm};
use crate::prediction::DEFAULT_ENDPOINT;

/// Main application state
pub struct AppState {
    pub form: PredictionForm,
    /// Prediction service address, shown in the status bar
    pub endpoint: String,
    pub show_help: bool,
}

impl AppState {
    pub fn new(declarations: Vec<FieldDeclaration>, endpoint: impl Into<String>) -> Self {
        Self {
            form: PredictionForm::new(declarations),
            endpoint: endpoint.into(),
            show_help: false,
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(property_fields(), DEFAULT_ENDPOINT)
    }
}

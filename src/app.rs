//! Application state and core logic

use crate::config::{TuiConfig, ENDPOINT_ENV};
use crate::prediction::{PredictionApi, PredictionClient, PredictionError, PredictionReply};
use crate::state::{property_fields_with_options, AppState, FieldController, Form};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};

type PendingReply = oneshot::Receiver<Result<PredictionReply, PredictionError>>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Prediction service client
    client: Arc<dyn PredictionApi>,
    /// Reply channel of the in-flight submission
    pending: Option<PendingReply>,
    /// Whether the app should quit
    quit: bool,
    /// One-shot feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance from user configuration
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let endpoint = config.resolve_endpoint(std::env::var(ENDPOINT_ENV).ok());
        let client = PredictionClient::new(endpoint.clone(), config.request_timeout())?;
        let declarations = property_fields_with_options(&config.field_options());
        tracing::info!(endpoint = client.endpoint(), "Prediction form ready");

        Ok(Self::with_client(
            AppState::new(declarations, endpoint),
            Arc::new(client),
        ))
    }

    pub fn with_client(state: AppState, client: Arc<dyn PredictionApi>) -> Self {
        Self {
            state,
            client,
            pending: None,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate the form and, if complete, send it in the background
    pub fn submit(&mut self) {
        let Some(record) = self.state.form.begin_submit() else {
            return;
        };
        tracing::info!(fields = record.len(), "Submitting prediction request");

        let client = Arc::clone(&self.client);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = client.predict(&record).await;
            // Receiver is gone if the form was reset meanwhile
            let _ = tx.send(result);
        });
        self.pending = Some(rx);
    }

    /// Pick up the reply of the in-flight submission, if it has arrived
    pub fn poll_submission(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(PredictionError::Aborted),
        };
        self.pending = None;
        self.state.form.finish_submit(result);
    }

    /// Throw away all input (and any pending reply) and start a fresh form
    pub fn reset_form(&mut self) {
        self.pending = None;
        self.state.form.reset();
        self.status_message = Some("Form cleared".to_string());
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message = None;

        if self.state.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Enter) {
                self.state.show_help = false;
            }
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('r') => self.reset_form(),
                _ => {}
            }
            return;
        }

        let on_button = self.state.form.is_button_active();
        let on_checkbox = matches!(
            self.state.form.active_controller(),
            Some(FieldController::Boolean(_))
        );

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::F(1) => self.state.toggle_help(),
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter if on_button => self.submit(),
            KeyCode::Enter if on_checkbox => self.state.form.activate(),
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Char(' ') if on_checkbox => self.state.form.activate(),
            KeyCode::Right => self.state.form.step_forward(),
            KeyCode::Left => self.state.form.step_back(),
            KeyCode::Backspace => self.state.form.pop_char(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                self.state.form.push_char(c)
            }
            _ => {}
        }
    }
}

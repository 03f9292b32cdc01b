//! Configuration handling for the TUI

use crate::prediction::DEFAULT_ENDPOINT;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the prediction service address
pub const ENDPOINT_ENV: &str = "HOMEVAL_ENDPOINT";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Prediction service address
    pub endpoint: Option<String>,
    /// Seconds to wait for a prediction before giving up
    pub request_timeout_secs: Option<u64>,
    /// Replacement suggestion lists, keyed by field name
    pub field_options: Option<HashMap<String, Vec<String>>>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "homeval", "homeval-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded configuration from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Endpoint to use: environment, then file, then the default
    pub fn resolve_endpoint(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        )
    }

    pub fn field_options(&self) -> HashMap<String, Vec<String>> {
        self.field_options.clone().unwrap_or_default()
    }
}

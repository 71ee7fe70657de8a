//! Configuration for the CEP lookup service

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lookup configuration.
///
/// Both fields have working defaults, so `CepConfig::default()` talks to the
/// public ViaCEP API with the standard 5 second timeout. Tests override
/// `base_url` to point at local responders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CepConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in milliseconds. When it elapses the in-flight
    /// call is aborted and the lookup reports a network error.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://viacep.com.br/ws".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for CepConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl CepConfig {
    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse CEP configuration")
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_json_str(&content)
    }
}

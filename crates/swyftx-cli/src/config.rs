/*
[INPUT]:  YAML configuration file and CLI overrides
[OUTPUT]: Parsed CLI configuration and adapter ClientConfig
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use serde::{Deserialize, Serialize};
use std::time::Duration;
use swyftx_adapter::ClientConfig;

/// Top-level configuration for the CLI
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    /// Pre-obtained access token
    #[serde(default)]
    pub access_token: String,
    /// API base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Default request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Buy/sell price lookup timeout in milliseconds
    #[serde(default)]
    pub price_timeout_ms: Option<u64>,
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Replace the file token when one was given on the command line or env
    pub fn with_token_override(mut self, token: Option<String>) -> Self {
        if let Some(token) = token {
            self.access_token = token;
        }
        self
    }

    pub fn client_config(&self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            timeout: self
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            price_timeout: self
                .price_timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.price_timeout),
            ..defaults
        }
    }
}

#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::model::StatusPolicy;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_PATH: &str = "/send";

/// Fully resolved settings: defaults, then the TOML file, then flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    pub base_url: String,
    pub path: String,
    pub timeout_seconds: Option<u64>,
    pub status_policy: StatusPolicy,
    pub discard_stale: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            path: DEFAULT_PATH.to_string(),
            timeout_seconds: None,
            status_policy: StatusPolicy::default(),
            discard_stale: false,
        }
    }
}

impl ConfigProvider for RelayConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_path(&self) -> &str {
        &self.path
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn status_policy(&self) -> StatusPolicy {
        self.status_policy
    }

    fn discard_stale(&self) -> bool {
        self.discard_stale
    }
}

impl Validate for RelayConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_endpoint_path("path", &self.path)?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_url() {
        let config = RelayConfig::default();
        assert_eq!(config.endpoint_url(), "http://127.0.0.1:8080/send");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let config = RelayConfig {
            base_url: "https://example.com/".to_string(),
            ..RelayConfig::default()
        };
        assert_eq!(config.endpoint_url(), "https://example.com/send");
    }
}

use crate::config::RelayConfig;
use crate::domain::model::StatusPolicy;
use crate::utils::error::{RelayError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub endpoint: EndpointConfig,
    pub behavior: Option<BehaviorConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub base_url: String,
    pub path: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    pub status_policy: Option<StatusPolicy>,
    pub discard_stale: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RelayError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RelayError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RelayError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Layers the file's values over `base`.
    pub fn apply_to(&self, base: RelayConfig) -> RelayConfig {
        let behavior = self.behavior.clone().unwrap_or_default();

        RelayConfig {
            base_url: self.endpoint.base_url.clone(),
            path: self.endpoint.path.clone().unwrap_or(base.path),
            timeout_seconds: self.endpoint.timeout_seconds.or(base.timeout_seconds),
            status_policy: behavior.status_policy.unwrap_or(base.status_policy),
            discard_stale: behavior.discard_stale.unwrap_or(base.discard_stale),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint.base_url", &self.endpoint.base_url)?;

        if let Some(path) = &self.endpoint.path {
            validation::validate_endpoint_path("endpoint.path", path)?;
        }

        if let Some(timeout) = self.endpoint.timeout_seconds {
            validation::validate_positive_number("endpoint.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[endpoint]
base_url = "http://localhost:9000"
path = "/relay"
timeout_seconds = 5

[behavior]
status_policy = "require-success"
discard_stale = true
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());

        let resolved = config.apply_to(RelayConfig::default());
        assert_eq!(resolved.base_url, "http://localhost:9000");
        assert_eq!(resolved.path, "/relay");
        assert_eq!(resolved.timeout_seconds, Some(5));
        assert_eq!(resolved.status_policy, StatusPolicy::RequireSuccess);
        assert!(resolved.discard_stale);
    }

    #[test]
    fn test_missing_sections_keep_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[endpoint]
base_url = "http://localhost:9000"
"#,
        )
        .unwrap();

        let resolved = config.apply_to(RelayConfig::default());
        assert_eq!(resolved.path, "/send");
        assert_eq!(resolved.timeout_seconds, None);
        assert_eq!(resolved.status_policy, StatusPolicy::Ignore);
        assert!(!resolved.discard_stale);
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("MESSAGE_RELAY_TEST_HOST", "relay.internal");
        let config = TomlConfig::from_toml_str(
            r#"
[endpoint]
base_url = "http://${MESSAGE_RELAY_TEST_HOST}:8080"
path = "${MESSAGE_RELAY_TEST_UNSET_PATH}"
"#,
        )
        .unwrap();

        assert_eq!(config.endpoint.base_url, "http://relay.internal:8080");
        assert_eq!(
            config.endpoint.path.as_deref(),
            Some("${MESSAGE_RELAY_TEST_UNSET_PATH}")
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[endpoint\nbase_url = 1").unwrap_err();
        assert!(matches!(err, RelayError::ConfigError { .. }));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = TomlConfig::from_toml_str(
            r#"
[endpoint]
base_url = "ftp://localhost"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[endpoint]
base_url = "http://localhost"
timeout_seconds = 0
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}

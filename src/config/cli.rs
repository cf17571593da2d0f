use crate::config::toml_config::TomlConfig;
use crate::config::RelayConfig;
use crate::domain::model::StatusPolicy;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "message-relay")]
#[command(about = "Send each line typed on stdin to a JSON message endpoint and print the reply")]
pub struct CliConfig {
    #[arg(long, help = "Server origin [default: http://127.0.0.1:8080]")]
    pub base_url: Option<String>,

    #[arg(long, help = "Endpoint path [default: /send]")]
    pub path: Option<String>,

    #[arg(long, help = "TOML configuration file; flags take precedence over it")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, help = "How non-2xx responses are treated [default: ignore]")]
    pub status_policy: Option<StatusPolicy>,

    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Drop responses that arrive after a newer submission started (--discard-stale=false turns it off)"
    )]
    pub discard_stale: Option<bool>,

    #[arg(long, help = "Request timeout in seconds (none by default)")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: LogFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Resolves defaults, then the TOML file (if any), then explicit flags.
    pub fn resolve(&self) -> Result<RelayConfig> {
        let mut config = RelayConfig::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from {}", path.display());
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            config = file.apply_to(config);
        }

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(path) = &self.path {
            config.path = path.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = Some(timeout);
        }
        if let Some(policy) = self.status_policy {
            config.status_policy = policy;
        }
        if let Some(discard_stale) = self.discard_stale {
            config.discard_stale = discard_stale;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_flags() {
        let cli = CliConfig::parse_from(["message-relay"]);
        let config = cli.resolve().unwrap();
        assert_eq!(config, RelayConfig::default());
        assert_eq!(cli.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[endpoint]
base_url = "http://from-file:9000"
path = "/relay"

[behavior]
status_policy = "require-success"
"#
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "message-relay",
            "--config",
            file.path().to_str().unwrap(),
            "--base-url",
            "http://from-flag:7000",
            "--status-policy",
            "ignore",
            "--discard-stale",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.base_url, "http://from-flag:7000");
        assert_eq!(config.path, "/relay");
        assert_eq!(config.status_policy, StatusPolicy::Ignore);
        assert!(config.discard_stale);
    }

    #[test]
    fn test_discard_stale_flag_can_turn_off_file_value() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[endpoint]
base_url = "http://from-file:9000"

[behavior]
discard_stale = true
"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let from_file = CliConfig::parse_from(["message-relay", "--config", path]);
        assert!(from_file.resolve().unwrap().discard_stale);

        let turned_off =
            CliConfig::parse_from(["message-relay", "--config", path, "--discard-stale=false"]);
        assert_eq!(turned_off.discard_stale, Some(false));
        assert!(!turned_off.resolve().unwrap().discard_stale);

        let bare = CliConfig::parse_from(["message-relay", "--discard-stale"]);
        assert_eq!(bare.discard_stale, Some(true));
        assert!(bare.resolve().unwrap().discard_stale);
    }

    #[test]
    fn test_invalid_flag_value_fails_validation() {
        let cli = CliConfig::parse_from(["message-relay", "--path", "send"]);
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let cli = CliConfig::parse_from(["message-relay", "--config", "/nonexistent/relay.toml"]);
        assert!(matches!(
            cli.resolve(),
            Err(crate::utils::error::RelayError::IoError(_))
        ));
    }
}

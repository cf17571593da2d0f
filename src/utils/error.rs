use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Response body is null")]
    NullResponse,

    #[error("Unexpected response status: {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RelayError {
    /// Whether the error came from one exchange with the server rather than from setup.
    pub fn is_exchange_failure(&self) -> bool {
        matches!(
            self,
            RelayError::ApiError(_)
                | RelayError::SerializationError(_)
                | RelayError::NullResponse
                | RelayError::UnexpectedStatus { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RelayError::ApiError(e) if e.is_connect() => {
                "Could not reach the message server".to_string()
            }
            RelayError::ApiError(e) if e.is_timeout() => {
                "The message server did not answer in time".to_string()
            }
            RelayError::ApiError(_) => "The message could not be sent".to_string(),
            RelayError::SerializationError(_) => {
                "The server reply was not valid JSON".to_string()
            }
            RelayError::NullResponse => "The server reply carried no message".to_string(),
            RelayError::UnexpectedStatus { status } => {
                format!("The server rejected the message (HTTP {})", status)
            }
            RelayError::IoError(e) => format!("I/O failure: {}", e),
            RelayError::ConfigError { message } => format!("Invalid configuration: {}", message),
            RelayError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration value for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RelayError::ApiError(_) => "Check that the server is running and --base-url is correct",
            RelayError::SerializationError(_) | RelayError::NullResponse => {
                "Check that the endpoint returns a JSON object body"
            }
            RelayError::UnexpectedStatus { .. } => {
                "Inspect the server logs, or use --status-policy ignore"
            }
            RelayError::IoError(_) => "Check file paths and permissions",
            RelayError::ConfigError { .. } | RelayError::InvalidConfigValueError { .. } => {
                "Fix the flag or the TOML file and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;

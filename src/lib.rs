pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{HttpExchange, LineInput, MemoryView, TerminalView};
pub use crate::config::{toml_config::TomlConfig, RelayConfig};
pub use crate::core::{
    form::{FormBinding, Submission},
    handler::SubmissionHandler,
};
pub use crate::domain::model::{IncomingResult, OutgoingPayload, Outcome, StatusPolicy, SubmitEvent};
pub use crate::utils::error::{RelayError, Result};

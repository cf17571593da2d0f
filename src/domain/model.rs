use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Request body sent to the endpoint: `{"message": "<text>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingPayload {
    pub message: String,
}

impl OutgoingPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Parsed reply body. Only the `message` field is ever read, and its absence is not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingResult {
    body: Value,
}

impl IncomingResult {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// `None` when the field is missing or the body is not a JSON object.
    pub fn message(&self) -> Option<&Value> {
        self.body.get("message")
    }

    /// Text written into the view. A missing or `null` field becomes empty and
    /// strings are taken verbatim. Numbers, booleans, arrays and objects are
    /// rendered as compact JSON text, not with browser `toString` coercion.
    pub fn display_text(&self) -> String {
        match self.message() {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// One form submission. Clones share the "default prevented" flag.
#[derive(Debug, Clone)]
pub struct SubmitEvent {
    sequence: u64,
    default_prevented: Arc<AtomicBool>,
}

impl SubmitEvent {
    pub fn new(sequence: u64) -> Self {
        Self {
            sequence,
            default_prevented: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn prevent_default(&self) {
        self.default_prevented.store(true, Ordering::SeqCst);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.load(Ordering::SeqCst)
    }
}

/// How a single submission settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Displayed(String),
    Failed,
    /// A newer submission started before this response arrived.
    Discarded,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum StatusPolicy {
    /// The status code is never inspected; any JSON body is displayed.
    #[default]
    Ignore,
    /// Non-2xx responses are exchange failures.
    RequireSuccess,
}

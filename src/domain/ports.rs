use crate::domain::model::{IncomingResult, OutgoingPayload, StatusPolicy};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The text field whose current value is sent on each submission.
pub trait MessageInput: Send + Sync {
    fn value(&self) -> String;
}

/// Where the server's reported message ends up. Each call replaces the previous text.
pub trait ResponseView: Send + Sync {
    fn set_text(&self, text: &str);
}

/// One request/response cycle with the message endpoint.
#[async_trait]
pub trait Exchange: Send + Sync {
    async fn send(&self, payload: &OutgoingPayload) -> Result<IncomingResult>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn endpoint_path(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
    fn status_policy(&self) -> StatusPolicy;
    fn discard_stale(&self) -> bool;

    fn endpoint_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url().trim_end_matches('/'),
            self.endpoint_path()
        )
    }
}

use crate::domain::model::{IncomingResult, OutgoingPayload, StatusPolicy};
use crate::domain::ports::{ConfigProvider, Exchange};
use crate::utils::error::{RelayError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

/// POSTs the payload as JSON and parses whatever comes back as JSON.
#[derive(Debug, Clone)]
pub struct HttpExchange {
    client: Client,
    endpoint: String,
    status_policy: StatusPolicy,
}

impl HttpExchange {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            status_policy: StatusPolicy::default(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint_url(),
            status_policy: config.status_policy(),
        })
    }

    pub fn with_status_policy(mut self, status_policy: StatusPolicy) -> Self {
        self.status_policy = status_policy;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Exchange for HttpExchange {
    async fn send(&self, payload: &OutgoingPayload) -> Result<IncomingResult> {
        tracing::debug!(
            "POST {} ({} chars)",
            self.endpoint,
            payload.message.chars().count()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if self.status_policy == StatusPolicy::RequireSuccess && !status.is_success() {
            return Err(RelayError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let body: serde_json::Value = serde_json::from_slice(&bytes)?;

        // reading `message` off a `null` body is a failure, not an empty message
        if body.is_null() {
            return Err(RelayError::NullResponse);
        }

        Ok(IncomingResult::new(body))
    }
}

use crate::domain::model::{OutgoingPayload, Outcome, SubmitEvent};
use crate::domain::ports::{Exchange, MessageInput, ResponseView};
use std::sync::atomic::{AtomicU64, Ordering};

/// Bridges one submission to one exchange and writes the reply into the view.
///
/// Failures are logged and swallowed; the view only changes on success.
/// Overlapping submissions are independent, so the last one to resolve wins
/// unless stale discarding is enabled.
pub struct SubmissionHandler<I, V, E> {
    input: I,
    view: V,
    exchange: E,
    discard_stale: bool,
    latest: AtomicU64,
}

impl<I, V, E> SubmissionHandler<I, V, E>
where
    I: MessageInput,
    V: ResponseView,
    E: Exchange,
{
    pub fn new(input: I, view: V, exchange: E) -> Self {
        Self {
            input,
            view,
            exchange,
            discard_stale: false,
            latest: AtomicU64::new(0),
        }
    }

    /// Drop responses that arrive after a newer submission has started.
    pub fn with_discard_stale(mut self, discard_stale: bool) -> Self {
        self.discard_stale = discard_stale;
        self
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Handles a submission end to end.
    pub async fn handle(&self, event: &SubmitEvent) -> Outcome {
        let payload = self.begin(event);
        self.complete(event.sequence(), payload).await
    }

    /// Synchronous part of a submission: prevents the default action, claims
    /// the sequence token and reads the input as it is right now.
    pub fn begin(&self, event: &SubmitEvent) -> OutgoingPayload {
        event.prevent_default();
        self.latest.fetch_max(event.sequence(), Ordering::SeqCst);
        OutgoingPayload::new(self.input.value())
    }

    /// Asynchronous part of a submission: the exchange and the view update.
    pub async fn complete(&self, sequence: u64, payload: OutgoingPayload) -> Outcome {
        let result = match self.exchange.send(&payload).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Error sending message: {}", e);
                return Outcome::Failed;
            }
        };

        if self.discard_stale && sequence < self.latest.load(Ordering::SeqCst) {
            tracing::debug!(
                "Discarding response for submission #{} (latest is #{})",
                sequence,
                self.latest.load(Ordering::SeqCst)
            );
            return Outcome::Discarded;
        }

        if result.message().is_none() {
            tracing::debug!("Response for submission #{} has no message field", sequence);
        }

        let text = result.display_text();
        self.view.set_text(&text);
        Outcome::Displayed(text)
    }
}

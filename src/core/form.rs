use crate::core::handler::SubmissionHandler;
use crate::domain::model::{OutgoingPayload, Outcome, SubmitEvent};
use crate::domain::ports::{Exchange, MessageInput, ResponseView};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::{JoinHandle, JoinSet};

/// A form with one submit handler registered on it.
///
/// Every submission runs as its own task. Nothing is queued or cancelled.
pub struct FormBinding<I, V, E> {
    handler: Arc<SubmissionHandler<I, V, E>>,
    next_sequence: AtomicU64,
}

/// An in-flight submission.
pub struct Submission {
    pub event: SubmitEvent,
    pub task: JoinHandle<Outcome>,
}

impl Submission {
    /// Waits for the submission to settle.
    pub async fn settled(self) -> Outcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Submission #{} task failed: {}", self.event.sequence(), e);
                Outcome::Failed
            }
        }
    }
}

impl<I, V, E> FormBinding<I, V, E>
where
    I: MessageInput + 'static,
    V: ResponseView + 'static,
    E: Exchange + 'static,
{
    pub fn bind(handler: SubmissionHandler<I, V, E>) -> Self {
        Self {
            handler: Arc::new(handler),
            next_sequence: AtomicU64::new(0),
        }
    }

    pub fn handler(&self) -> &SubmissionHandler<I, V, E> {
        &self.handler
    }

    /// Fires a submit event. Must be called from within a tokio runtime.
    pub fn submit(&self) -> Submission {
        let (event, payload) = self.start();
        let sequence = event.sequence();

        let handler = Arc::clone(&self.handler);
        let task = tokio::spawn(async move { handler.complete(sequence, payload).await });

        Submission { event, task }
    }

    /// Like [`submit`](Self::submit), but the task is owned by `tasks` so a
    /// long-running caller can reap settled submissions as it goes.
    pub fn submit_into(&self, tasks: &mut JoinSet<Outcome>) -> SubmitEvent {
        let (event, payload) = self.start();
        let sequence = event.sequence();

        let handler = Arc::clone(&self.handler);
        tasks.spawn(async move { handler.complete(sequence, payload).await });

        event
    }

    fn start(&self) -> (SubmitEvent, OutgoingPayload) {
        let sequence = self.next_sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let event = SubmitEvent::new(sequence);

        let payload = self.handler.begin(&event);
        tracing::debug!("Submission #{} started", sequence);

        (event, payload)
    }

    pub fn submissions(&self) -> u64 {
        self.next_sequence.load(Ordering::SeqCst)
    }
}

//! Background booking submission
//!
//! Runs a single submission on a tokio task so the UI keeps handling input
//! while the request is outstanding. The outcome is delivered over a channel
//! and picked up by the event loop without blocking.

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tracing::{debug, warn};

use crate::booking::BookingFormValues;
use crate::client::{BookingClient, SubmissionOutcome};

/// Handle to one in-flight submission
pub struct SubmitTask {
    /// Channel that receives the outcome once the request resolves
    receiver: mpsc::Receiver<SubmissionOutcome>,
}

impl SubmitTask {
    /// Spawns a task that posts `values` once and reports the outcome
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(client: BookingClient, values: BookingFormValues) -> Self {
        let (tx, rx) = mpsc::channel(1);

        tokio::spawn(async move {
            let result = client.submit(&values).await;
            let outcome = SubmissionOutcome::from_result(&result);
            debug!(?outcome, "submission resolved");
            // The receiver is gone only if the app quit mid-flight
            let _ = tx.send(outcome).await;
        });

        Self { receiver: rx }
    }

    /// Checks for the outcome without blocking
    ///
    /// # Returns
    /// * `Some(SubmissionOutcome)` once the request has resolved
    /// * `None` while it is still running
    ///
    /// A task that ended without reporting resolves as `NetworkError`.
    pub fn try_recv(&mut self) -> Option<SubmissionOutcome> {
        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                warn!("submission task ended without an outcome");
                Some(SubmissionOutcome::NetworkError)
            }
        }
    }

    /// Waits for the outcome
    ///
    /// Falls back to `NetworkError` if the task died without reporting.
    pub async fn wait(mut self) -> SubmissionOutcome {
        self.receiver
            .recv()
            .await
            .unwrap_or(SubmissionOutcome::NetworkError)
    }
}

/// A handle whose task ended without sending an outcome
#[cfg(test)]
pub(crate) fn abandoned_task() -> SubmitTask {
    let (_, rx) = mpsc::channel(1);
    SubmitTask { receiver: rx }
}

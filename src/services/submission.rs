use crate::{
    error::{AppError, AppResult},
    models::{RecommendResponse, SelectedMovie},
    services::providers::ScoringProvider,
};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Submission lifecycle: `Idle -> Submitting -> Idle`
///
/// No success or error state is retained; the settled result is handed to
/// the caller and the controller resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
}

/// Drives the request/response cycle against the scoring collaborator
///
/// At most one submission is in flight: a `submit` issued while `Submitting`
/// is ignored, and `Idle` is restored only once the in-flight call settles.
/// The provider call runs on a spawned task, so an abandoned submission still
/// completes; there is no cancellation and no automatic retry.
pub struct SubmissionController {
    provider: Arc<dyn ScoringProvider>,
    state: SubmitState,
    pending: Option<oneshot::Receiver<AppResult<RecommendResponse>>>,
}

impl SubmissionController {
    pub fn new(provider: Arc<dyn ScoringProvider>) -> Self {
        Self {
            provider,
            state: SubmitState::Idle,
            pending: None,
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Starts a submission from a selection snapshot
    ///
    /// Returns whether a request was actually dispatched. No-ops on an empty
    /// snapshot (the entry action is disabled by the view flag, but the
    /// controller does not rely on that) and while a submission is already in
    /// flight.
    pub fn submit(&mut self, snapshot: Vec<SelectedMovie>) -> bool {
        if snapshot.is_empty() {
            tracing::debug!("Ignoring submit with empty selection");
            return false;
        }
        if self.state == SubmitState::Submitting {
            tracing::debug!("Submission already in flight, ignoring");
            return false;
        }

        tracing::info!(movies = snapshot.len(), "Submitting selection for scoring");

        let (tx, rx) = oneshot::channel();
        let provider = Arc::clone(&self.provider);
        tokio::spawn(async move {
            let result = provider.recommend(snapshot).await;
            // The controller may have been dropped; the result is then discarded
            let _ = tx.send(result);
        });

        self.state = SubmitState::Submitting;
        self.pending = Some(rx);
        true
    }

    /// Awaits the in-flight submission and restores `Idle`
    ///
    /// Returns `None` when nothing is pending.
    pub async fn settle(&mut self) -> Option<AppResult<RecommendResponse>> {
        let rx = self.pending.take()?;

        let result = match rx.await {
            Ok(result) => result,
            Err(_) => Err(AppError::Internal(
                "scoring task dropped before settling".to_string(),
            )),
        };

        self.state = SubmitState::Idle;
        Some(result)
    }
}

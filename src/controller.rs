//! Inquiry form controller
//!
//! Owns the [`InquiryState`], runs the submission effect on a tokio task and
//! feeds the task's result back through the reducer.

use crate::sink::{SubmissionError, SubmissionReceipt, SubmissionSink};
use crate::state::{
    Effect, FieldName, InquiryAction, InquiryState, InquiryView, SubmissionStatus, Transition,
};
use std::sync::Arc;
use tokio::task::JoinHandle;

type PendingSubmission = JoinHandle<Result<SubmissionReceipt, SubmissionError>>;

/// Drives the inquiry form against a submission sink
pub struct InquiryController {
    state: InquiryState,
    sink: Arc<dyn SubmissionSink>,
    /// The one in-flight submission, if any
    pending: Option<PendingSubmission>,
}

impl InquiryController {
    pub fn new(sink: Arc<dyn SubmissionSink>) -> Self {
        Self {
            state: InquiryState::new(),
            sink,
            pending: None,
        }
    }

    pub fn state(&self) -> &InquiryState {
        &self.state
    }

    pub fn view(&self) -> InquiryView {
        InquiryView::for_status(self.state.status)
    }

    pub fn is_submitting(&self) -> bool {
        self.state.status == SubmissionStatus::Submitting
    }

    fn dispatch(&mut self, action: InquiryAction) -> Option<Effect> {
        let Transition { state, effect } = self.state.reduce(action);
        if state.status != self.state.status {
            tracing::debug!(
                from = self.state.status.label(),
                to = state.status.label(),
                "Inquiry status changed"
            );
        }
        self.state = state;
        effect
    }

    /// Overwrite one field
    pub fn edit(&mut self, field: FieldName, value: String) {
        self.dispatch(InquiryAction::Edit { field, value });
    }

    /// Validate and, if the form passes, start sending it.
    ///
    /// Returns true when a submission was started. Must be called from within
    /// a tokio runtime.
    pub fn submit(&mut self) -> bool {
        match self.dispatch(InquiryAction::Submit) {
            Some(Effect::Submit(input)) => {
                tracing::info!(
                    sink = self.sink.name(),
                    name_len = input.name.chars().count(),
                    message_len = input.message.chars().count(),
                    "Submitting inquiry"
                );
                let sink = Arc::clone(&self.sink);
                self.pending = Some(tokio::spawn(async move { sink.submit(&input).await }));
                true
            }
            None => false,
        }
    }

    /// Apply the result of the in-flight submission if it has finished.
    ///
    /// Returns true when the state changed.
    pub async fn poll_submission(&mut self) -> bool {
        let finished = self
            .pending
            .as_ref()
            .is_some_and(|handle| handle.is_finished());
        if !finished {
            return false;
        }
        self.finish_submission().await;
        true
    }

    /// Wait for the in-flight submission, if any, and apply its result
    pub async fn wait_for_submission(&mut self) {
        self.finish_submission().await;
    }

    async fn finish_submission(&mut self) {
        let Some(handle) = self.pending.take() else {
            return;
        };
        let result = match handle.await {
            Ok(result) => result,
            Err(err) => Err(SubmissionError::Interrupted(err.to_string())),
        };
        match &result {
            Ok(receipt) => tracing::info!(id = %receipt.id, "Inquiry accepted"),
            Err(err) => tracing::error!("Inquiry submission failed: {err}"),
        }
        self.dispatch(InquiryAction::Completed(result));
    }

    /// "Send another message" after success, or dismiss a failure
    pub fn reset(&mut self) {
        self.dispatch(InquiryAction::Reset);
    }
}

//! Stand-in sink that simulates a network call

use super::error::SubmissionError;
use super::traits::{SubmissionReceipt, SubmissionSink};
use crate::state::FormInput;
use async_trait::async_trait;
use std::time::Duration;

/// Waits a fixed delay, then accepts (or refuses) every inquiry.
///
/// Nothing leaves the process. Deployments swap this for a real sink.
#[derive(Debug, Clone)]
pub struct StubSink {
    delay: Duration,
    fail: bool,
}

impl StubSink {
    /// Default simulated round-trip
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    /// Stub that always accepts after `delay`
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// Stub that always refuses after `delay`
    pub fn failing(delay: Duration) -> Self {
        Self { delay, fail: true }
    }
}

impl Default for StubSink {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl SubmissionSink for StubSink {
    async fn submit(&self, _input: &FormInput) -> Result<SubmissionReceipt, SubmissionError> {
        tokio::time::sleep(self.delay).await;
        if self.fail {
            return Err(SubmissionError::Rejected(
                "stub sink is configured to fail".to_string(),
            ));
        }
        Ok(SubmissionReceipt::issue())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

//! Trait abstraction for submission sinks to enable mocking in tests

use super::error::SubmissionError;
use crate::state::FormInput;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Proof that a sink accepted an inquiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Reference number shown to the user
    pub id: Uuid,
    /// When the sink accepted the inquiry
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    /// Issue a fresh receipt stamped with the current time
    pub fn issue() -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }

    /// First block of the id, short enough to read over the phone
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_uppercase()
    }
}

/// Destination for completed inquiries.
///
/// A call either delivers the whole inquiry or fails; there is no partial
/// success. Implementations must not retry on their own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver one inquiry
    async fn submit(&self, input: &FormInput) -> Result<SubmissionReceipt, SubmissionError>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_creates_distinct_ids() {
        let a = SubmissionReceipt::issue();
        let b = SubmissionReceipt::issue();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_short_id_is_eight_uppercase_hex_chars() {
        let receipt = SubmissionReceipt::issue();
        let short = receipt.short_id();
        assert_eq!(short.len(), 8);
        assert!(short
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_receipt_serialization() {
        let receipt = SubmissionReceipt::issue();
        let json = serde_json::to_string(&receipt).unwrap();
        let parsed: SubmissionReceipt = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, receipt);
    }

    #[tokio::test]
    async fn test_mock_sink_returns_configured_receipt() {
        let receipt = SubmissionReceipt::issue();
        let expected = receipt.clone();

        let mut sink = MockSubmissionSink::new();
        sink.expect_submit()
            .times(1)
            .returning(move |_| Ok(receipt.clone()));

        let result = sink.submit(&FormInput::default()).await.unwrap();
        assert_eq!(result, expected);
    }
}

//! Sink that files each inquiry as a JSON document in a directory

use super::error::SubmissionError;
use super::traits::{SubmissionReceipt, SubmissionSink};
use crate::state::FormInput;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One inquiry as written to the outbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryRecord {
    #[serde(flatten)]
    pub receipt: SubmissionReceipt,
    pub inquiry: FormInput,
}

/// Writes `<submitted_at>-<id>.json` files for a downstream mailer or CRM import
#[derive(Debug, Clone)]
pub struct OutboxSink {
    dir: PathBuf,
}

impl OutboxSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file_name(receipt: &SubmissionReceipt) -> String {
        format!(
            "{}-{}.json",
            receipt.submitted_at.format("%Y%m%dT%H%M%SZ"),
            receipt.id.simple()
        )
    }
}

#[async_trait]
impl SubmissionSink for OutboxSink {
    async fn submit(&self, input: &FormInput) -> Result<SubmissionReceipt, SubmissionError> {
        let record = InquiryRecord {
            receipt: SubmissionReceipt::issue(),
            inquiry: input.clone(),
        };
        let content = serde_json::to_string_pretty(&record)?;

        tokio::fs::create_dir_all(&self.dir).await?;
        let final_path = self.dir.join(Self::file_name(&record.receipt));
        // Write under a temporary name so readers never see a partial file
        let tmp_path = final_path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, content).await?;
        tokio::fs::rename(&tmp_path, &final_path).await?;

        tracing::info!(path = %final_path.display(), "Inquiry written to outbox");
        Ok(record.receipt)
    }

    fn name(&self) -> &'static str {
        "outbox"
    }
}

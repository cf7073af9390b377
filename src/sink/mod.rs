//! Submission sinks: where finished inquiries are delivered

mod error;
mod outbox;
mod stub;
mod traits;

pub use error::SubmissionError;
pub use outbox::OutboxSink;
pub use stub::StubSink;
pub use traits::{SubmissionReceipt, SubmissionSink};

#[cfg(test)]
pub use traits::MockSubmissionSink;

use crate::config::{InquiryConfig, SinkKind};
use std::sync::Arc;

/// Build the sink selected by the configuration
pub fn from_config(config: &InquiryConfig) -> Arc<dyn SubmissionSink> {
    match config.sink_kind() {
        SinkKind::Stub => {
            let delay = config.stub_delay();
            if config.stub_fails() {
                Arc::new(StubSink::failing(delay))
            } else {
                Arc::new(StubSink::new(delay))
            }
        }
        SinkKind::Outbox => Arc::new(OutboxSink::new(config.outbox_dir())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_stub() {
        let sink = from_config(&InquiryConfig::default());
        assert_eq!(sink.name(), "stub");
    }

    #[test]
    fn test_outbox_config_builds_outbox() {
        let config = InquiryConfig {
            sink: Some(SinkKind::Outbox),
            ..Default::default()
        };
        assert_eq!(from_config(&config).name(), "outbox");
    }
}

//! Submission failure type

/// Why a submission sink could not take an inquiry
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The receiving side refused the inquiry
    #[error("submission rejected: {0}")]
    Rejected(String),
    /// Writing the inquiry out failed
    #[error("could not store inquiry: {0}")]
    Io(#[from] std::io::Error),
    /// The inquiry could not be encoded
    #[error("could not encode inquiry: {0}")]
    Encode(#[from] serde_json::Error),
    /// The task running the submission stopped before reporting back
    #[error("submission interrupted: {0}")]
    Interrupted(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message() {
        let err = SubmissionError::Rejected("quota exceeded".to_string());
        assert_eq!(err.to_string(), "submission rejected: quota exceeded");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: SubmissionError = io.into();
        assert!(matches!(err, SubmissionError::Io(_)));
        assert!(err.to_string().contains("read-only"));
    }
}

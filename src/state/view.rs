//! Which screen the inquiry section shows

use super::submission::SubmissionStatus;

/// Renderable views of the inquiry section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InquiryView {
    /// Editable form with inline errors
    #[default]
    Form,
    /// Success panel with a "send another" action
    Confirmation,
}

impl InquiryView {
    /// Pick the view for a submission status.
    ///
    /// `Failed` keeps the form on screen; the failure itself is surfaced by an
    /// overlay in the presentation layer.
    pub fn for_status(status: SubmissionStatus) -> Self {
        match status {
            SubmissionStatus::Succeeded => Self::Confirmation,
            SubmissionStatus::Idle | SubmissionStatus::Submitting | SubmissionStatus::Failed => {
                Self::Form
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_success_shows_confirmation() {
        assert_eq!(
            InquiryView::for_status(SubmissionStatus::Succeeded),
            InquiryView::Confirmation
        );
        for status in [
            SubmissionStatus::Idle,
            SubmissionStatus::Submitting,
            SubmissionStatus::Failed,
        ] {
            assert_eq!(InquiryView::for_status(status), InquiryView::Form);
        }
    }

    #[test]
    fn test_default_is_form() {
        assert_eq!(InquiryView::default(), InquiryView::Form);
    }
}

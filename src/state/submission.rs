//! Submission state machine for the inquiry form
//!
//! All changes go through [`InquiryState::reduce`], which returns the next
//! state plus an optional [`Effect`] for the caller to run. The state itself
//! is never mutated in place.

use super::forms::{FieldName, FormInput};
use super::{validate, ValidationErrors};
use crate::sink::{SubmissionError, SubmissionReceipt};

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

/// Events that can change the form state
#[derive(Debug)]
pub enum InquiryAction {
    /// A field received a new value
    Edit { field: FieldName, value: String },
    /// The user asked to send the form
    Submit,
    /// The submission sink reported back
    Completed(Result<SubmissionReceipt, SubmissionError>),
    /// "Send another message" or dismissing a failure
    Reset,
}

/// Work the caller must carry out after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand this snapshot to the submission sink
    Submit(FormInput),
}

/// Result of applying one action
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: InquiryState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn to(state: InquiryState) -> Self {
        Self {
            state,
            effect: None,
        }
    }
}

/// Complete state of the inquiry form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryState {
    pub input: FormInput,
    pub errors: ValidationErrors,
    pub status: SubmissionStatus,
    /// Receipt of the last successful submission, shown on the confirmation panel
    pub receipt: Option<SubmissionReceipt>,
    /// Description of the last failed submission
    pub failure: Option<String>,
}

impl InquiryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the submit control accepts input
    pub fn can_submit(&self) -> bool {
        self.status == SubmissionStatus::Idle
    }

    /// Compute the state that follows `action`
    pub fn reduce(&self, action: InquiryAction) -> Transition {
        match action {
            InquiryAction::Edit { field, value } => {
                let mut next = self.clone();
                next.input = self.input.with(field, value);
                next.errors.clear_field(field);
                Transition::to(next)
            }
            InquiryAction::Submit => self.reduce_submit(),
            InquiryAction::Completed(result) => self.reduce_completed(result),
            InquiryAction::Reset => self.reduce_reset(),
        }
    }

    fn reduce_submit(&self) -> Transition {
        // Disabled while a submission is in flight or a result is on screen
        if !self.can_submit() {
            return Transition::to(self.clone());
        }

        let errors = validate(&self.input);
        let mut next = self.clone();
        if !errors.is_empty() {
            next.errors = errors;
            return Transition::to(next);
        }

        next.errors = ValidationErrors::default();
        next.status = SubmissionStatus::Submitting;
        Transition {
            effect: Some(Effect::Submit(self.input.clone())),
            state: next,
        }
    }

    fn reduce_completed(&self, result: Result<SubmissionReceipt, SubmissionError>) -> Transition {
        if self.status != SubmissionStatus::Submitting {
            return Transition::to(self.clone());
        }

        let mut next = self.clone();
        match result {
            Ok(receipt) => {
                next.status = SubmissionStatus::Succeeded;
                next.input = FormInput::default();
                next.errors = ValidationErrors::default();
                next.receipt = Some(receipt);
                next.failure = None;
            }
            Err(err) => {
                next.status = SubmissionStatus::Failed;
                next.failure = Some(err.to_string());
            }
        }
        Transition::to(next)
    }

    fn reduce_reset(&self) -> Transition {
        match self.status {
            SubmissionStatus::Succeeded => Transition::to(Self::default()),
            SubmissionStatus::Failed => {
                let mut next = self.clone();
                next.status = SubmissionStatus::Idle;
                next.failure = None;
                Transition::to(next)
            }
            // No cancellation once a submission has started
            SubmissionStatus::Idle | SubmissionStatus::Submitting => Transition::to(self.clone()),
        }
    }
}

//! Application state and core logic

use crate::controller::InquiryController;
use crate::i18n::Locale;
use crate::platform::SEND_MODIFIER;
use crate::sink::SubmissionSink;
use crate::state::{backspaced, typed, AppState, InquiryView, SubmissionStatus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Terminal UI state around the form
    pub state: AppState,
    /// Inquiry form and its submission
    pub controller: InquiryController,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(locale: Locale, sink: Arc<dyn SubmissionSink>) -> Self {
        Self {
            state: AppState::new(locale),
            controller: InquiryController::new(sink),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// A submission is in flight and the screen should refresh quickly
    pub fn is_busy(&self) -> bool {
        self.controller.is_submitting()
    }

    /// Apply a finished submission, if any
    pub async fn tick(&mut self) {
        if !self.controller.poll_submission().await {
            return;
        }
        let strings = self.state.locale.strings();
        let inquiry = self.controller.state();
        self.state.status_message = match (&inquiry.status, &inquiry.receipt) {
            (SubmissionStatus::Succeeded, Some(receipt)) => Some(format!(
                "{} ({} {})",
                strings.success_title,
                strings.receipt_label,
                receipt.short_id()
            )),
            _ => None,
        };
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        // Failure dialog is modal
        if self.controller.state().status == SubmissionStatus::Failed {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.controller.reset();
            }
            return;
        }

        match self.controller.view() {
            InquiryView::Form => self.handle_form_key(key),
            InquiryView::Confirmation => self.handle_confirmation_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let field = self.state.focus.field();
        let shortcut = key.modifiers.intersects(SEND_MODIFIER | KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab => self.state.next_form_field(),
            KeyCode::BackTab => self.state.prev_form_field(),
            KeyCode::Char('s') if shortcut => self.submit(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Enter => match field {
                // Enter in the message field adds a newline
                Some(field) if field.is_multiline() => {
                    let value = typed(self.controller.state().input.get(field), '\n');
                    self.controller.edit(field, value);
                }
                Some(_) => self.state.next_form_field(),
                None => self.submit(),
            },
            KeyCode::Char(c) if !shortcut => {
                if let Some(field) = field {
                    let value = typed(self.controller.state().input.get(field), c);
                    self.controller.edit(field, value);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = field {
                    if let Some(value) = backspaced(self.controller.state().input.get(field)) {
                        self.controller.edit(field, value);
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => {
                self.controller.reset();
                self.state.focus.reset();
            }
            KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    /// Submit the form, or jump to the first rejected field
    fn submit(&mut self) {
        if !self.controller.submit() {
            self.state.focus_first_error(&self.controller.state().errors);
        }
    }
}

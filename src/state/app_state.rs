//! Terminal UI state that sits around the inquiry form

use super::forms::{Form, InquiryFocus};
use super::ValidationErrors;
use crate::i18n::Locale;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Focus
    pub focus: InquiryFocus,

    // Presentation
    pub locale: Locale,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Default::default()
        }
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.focus.next_field();
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        self.focus.prev_field();
    }

    /// Put the cursor on the first field the validator rejected
    pub fn focus_first_error(&mut self, errors: &ValidationErrors) {
        if let Some(field) = errors.first_field() {
            self.focus.focus_field(field);
        }
    }
}

/// Value of a field after typing one character
pub fn typed(value: &str, c: char) -> String {
    let mut next = String::with_capacity(value.len() + c.len_utf8());
    next.push_str(value);
    next.push(c);
    next
}

/// Value of a field after one backspace, `None` when already empty
pub fn backspaced(value: &str) -> Option<String> {
    let mut chars = value.chars();
    chars.next_back()?;
    Some(chars.as_str().to_string())
}

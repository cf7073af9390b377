//! Form focus management

use super::field::FieldName;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Keyboard focus within the inquiry form.
///
/// Slots 0..4 are the fields in [`FieldName::ALL`] order, the last slot is the
/// submit button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryFocus {
    pub active_field_index: usize,
}

impl InquiryFocus {
    /// Index of the submit button slot
    pub const BUTTON_INDEX: usize = FieldName::ALL.len();

    /// Field currently receiving input, `None` when on the button
    pub fn field(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    /// Returns true if the submit button is focused
    pub fn is_button_active(&self) -> bool {
        self.active_field_index == Self::BUTTON_INDEX
    }

    /// Move focus straight to a field
    pub fn focus_field(&mut self, field: FieldName) {
        self.active_field_index = field.index();
    }

    /// Move focus back to the first field
    pub fn reset(&mut self) {
        self.active_field_index = 0;
    }
}

impl Form for InquiryFocus {
    fn field_count(&self) -> usize {
        FieldName::ALL.len() + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTON_INDEX);
    }
}

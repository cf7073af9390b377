//! Form domain layer
//!
//! Field identifiers, the raw input value object, and keyboard focus for the
//! quotation-request form.

mod field;
mod form_state;
mod input;

pub use field::FieldName;
pub use form_state::{Form, InquiryFocus};
pub use input::FormInput;

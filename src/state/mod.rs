//! Application state module

mod app_state;
mod forms;
mod submission;
mod validation;
mod view;

pub use app_state::*;
pub use forms::*;
pub use submission::*;
pub use validation::{validate, ValidationErrors};
pub use view::*;

#[cfg(test)]
pub use validation::FieldError;

//! Form input value object

use super::field::FieldName;
use serde::{Deserialize, Serialize};

/// Raw values typed into the quotation-request form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl FormInput {
    /// Get the current value of a field
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Message => &self.message,
        }
    }

    /// Return a copy with one field overwritten
    pub fn with(&self, field: FieldName, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            FieldName::Name => &mut next.name,
            FieldName::Email => &mut next.email,
            FieldName::Phone => &mut next.phone,
            FieldName::Message => &mut next.message,
        };
        *slot = value.into();
        next
    }
}

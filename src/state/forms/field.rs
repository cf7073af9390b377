//! Form field identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields of the quotation-request form, in on-screen order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Phone,
    Email,
    Message,
}

impl FieldName {
    /// All fields in focus order
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Phone,
        FieldName::Email,
        FieldName::Message,
    ];

    /// Stable key used in logs and serialized records
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Whether the form refuses to submit while this field is blank
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Message)
    }

    /// Whether Enter inserts a newline instead of moving on
    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }

    /// Position of the field in focus order
    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Phone => 1,
            Self::Email => 2,
            Self::Message => 3,
        }
    }

    /// Field at a focus position, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

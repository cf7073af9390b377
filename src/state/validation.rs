//! Field validation rules for the inquiry form

use super::forms::{FieldName, FormInput};
use crate::i18n::Locale;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Something shaped like `x@y.z` somewhere in the value
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Thai number: a leading zero and nine more digits
static PHONE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[0-9]{9}$").expect("phone pattern compiles"));

/// Why a single field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("name required")]
    NameRequired,
    #[error("email required")]
    EmailRequired,
    #[error("invalid email format")]
    EmailInvalid,
    #[error("phone required")]
    PhoneRequired,
    #[error("invalid phone format")]
    PhoneInvalid,
}

impl FieldError {
    /// Message shown next to the field
    pub fn message(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Self::NameRequired => "name required",
                Self::EmailRequired => "email required",
                Self::EmailInvalid => "invalid email format",
                Self::PhoneRequired => "phone required",
                Self::PhoneInvalid => "invalid phone format",
            },
            Locale::Th => match self {
                Self::NameRequired => "กรุณาระบุชื่อผู้ติดต่อ",
                Self::EmailRequired => "กรุณาระบุอีเมล",
                Self::EmailInvalid => "รูปแบบอีเมลไม่ถูกต้อง",
                Self::PhoneRequired => "กรุณาระบุเบอร์โทรศัพท์",
                Self::PhoneInvalid => "กรุณาระบุเบอร์มือถือให้ถูกต้อง (10 หลัก)",
            },
        }
    }
}

/// Per-field validation failures. A field with no entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<FieldName, FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, field: FieldName) -> Option<FieldError> {
        self.entries.get(&field).copied()
    }

    /// Drop the entry for one field, leaving the rest untouched
    pub fn clear_field(&mut self, field: FieldName) {
        self.entries.remove(&field);
    }

    /// First invalid field in on-screen order
    pub fn first_field(&self) -> Option<FieldName> {
        self.entries.keys().next().copied()
    }
}

#[cfg(test)]
impl ValidationErrors {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn insert(&mut self, field: FieldName, error: FieldError) {
        self.entries.insert(field, error);
    }

    /// Fields with an error, in on-screen order
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.entries.keys().copied()
    }
}

impl FromIterator<(FieldName, FieldError)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (FieldName, FieldError)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Blank after trimming whitespace, counting the byte order mark as whitespace
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

fn check_name(name: &str) -> Option<FieldError> {
    is_blank(name).then_some(FieldError::NameRequired)
}

fn check_email(email: &str) -> Option<FieldError> {
    if is_blank(email) {
        Some(FieldError::EmailRequired)
    } else if !EMAIL_SHAPE.is_match(email) {
        Some(FieldError::EmailInvalid)
    } else {
        None
    }
}

fn check_phone(phone: &str) -> Option<FieldError> {
    if is_blank(phone) {
        return Some(FieldError::PhoneRequired);
    }
    let digits = phone.replace('-', "");
    if PHONE_SHAPE.is_match(&digits) {
        None
    } else {
        Some(FieldError::PhoneInvalid)
    }
}

/// Check every rule against the input. Rules are independent; the result
/// holds one entry per failing field and is empty when the input is valid.
pub fn validate(input: &FormInput) -> ValidationErrors {
    [
        (FieldName::Name, check_name(&input.name)),
        (FieldName::Email, check_email(&input.email)),
        (FieldName::Phone, check_phone(&input.phone)),
    ]
    .into_iter()
    .filter_map(|(field, error)| error.map(|e| (field, e)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> FormInput {
        FormInput {
            name: "สมชาย".to_string(),
            email: "a@b.com".to_string(),
            phone: "0812345678".to_string(),
            message: String::new(),
        }
    }

    mod name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blank_names_are_rejected() {
            for name in ["", " ", "\t\n", "\u{3000}", "\u{FEFF}", " \u{FEFF}\u{00A0}"] {
                let errors = validate(&valid_input().with(FieldName::Name, name));
                assert_eq!(
                    errors.get(FieldName::Name),
                    Some(FieldError::NameRequired),
                    "name {name:?}"
                );
            }
        }

        #[test]
        fn test_any_visible_name_is_accepted() {
            for name in ["a", " สมชาย ", "O'Brien", "1"] {
                let errors = validate(&valid_input().with(FieldName::Name, name));
                assert!(!errors.contains(FieldName::Name), "name {name:?}");
            }
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blank_email_is_required_error() {
            for email in ["   ", "\u{FEFF}"] {
                let errors = validate(&valid_input().with(FieldName::Email, email));
                assert_eq!(
                    errors.get(FieldName::Email),
                    Some(FieldError::EmailRequired),
                    "email {email:?}"
                );
            }
        }

        #[test]
        fn test_malformed_emails_are_rejected() {
            for email in ["plain", "a@b", "@b.co", "a@.co", "a@b.", "a @b.co", "a@ b.co"] {
                let errors = validate(&valid_input().with(FieldName::Email, email));
                assert_eq!(
                    errors.get(FieldName::Email),
                    Some(FieldError::EmailInvalid),
                    "email {email:?}"
                );
            }
        }

        #[test]
        fn test_minimal_shape_is_accepted() {
            for email in ["a@b.co", "sales@thaiconcrete.co.th", "x@y.z"] {
                let errors = validate(&valid_input().with(FieldName::Email, email));
                assert!(!errors.contains(FieldName::Email), "email {email:?}");
            }
        }

        #[test]
        fn test_shape_may_appear_anywhere_in_value() {
            // Unanchored search, not a full-string match
            let errors = validate(&valid_input().with(FieldName::Email, "mail me at a@b.co"));
            assert!(!errors.contains(FieldName::Email));
        }
    }

    mod phone {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blank_phone_is_required_error() {
            for phone in ["", "\u{FEFF}\t"] {
                let errors = validate(&valid_input().with(FieldName::Phone, phone));
                assert_eq!(
                    errors.get(FieldName::Phone),
                    Some(FieldError::PhoneRequired),
                    "phone {phone:?}"
                );
            }
        }

        #[test]
        fn test_ten_digits_with_leading_zero_are_accepted() {
            for phone in ["0212345670", "02-1234-5670", "081-234-5678", "0-8-1-2-3-4-5-6-7-8"] {
                let errors = validate(&valid_input().with(FieldName::Phone, phone));
                assert!(!errors.contains(FieldName::Phone), "phone {phone:?}");
            }
        }

        #[test]
        fn test_other_shapes_are_rejected() {
            for phone in [
                "0212345",
                "02-123-4567",
                "1812345678",
                "08123456789",
                "08 1234 5678",
                "+66812345678",
                "081234567a",
                "０８１２３４５６７８",
                "-",
            ] {
                let errors = validate(&valid_input().with(FieldName::Phone, phone));
                assert_eq!(
                    errors.get(FieldName::Phone),
                    Some(FieldError::PhoneInvalid),
                    "phone {phone:?}"
                );
            }
        }
    }

    mod whole_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_input_has_no_errors() {
            assert!(validate(&valid_input()).is_empty());
        }

        #[test]
        fn test_message_is_never_validated() {
            let input = valid_input().with(FieldName::Message, "   ");
            assert!(validate(&input).is_empty());
        }

        #[test]
        fn test_rules_are_not_short_circuited() {
            let errors = validate(&FormInput::default());
            assert_eq!(errors.len(), 3);
            assert_eq!(errors.get(FieldName::Name), Some(FieldError::NameRequired));
            assert_eq!(errors.get(FieldName::Email), Some(FieldError::EmailRequired));
            assert_eq!(errors.get(FieldName::Phone), Some(FieldError::PhoneRequired));
        }

        #[test]
        fn test_validation_is_idempotent() {
            let input = FormInput {
                name: String::new(),
                email: "bad".to_string(),
                phone: "123".to_string(),
                message: "hi".to_string(),
            };
            assert_eq!(validate(&input), validate(&input));
        }

        #[test]
        fn test_first_field_follows_screen_order() {
            let input = valid_input()
                .with(FieldName::Email, "bad")
                .with(FieldName::Phone, "bad");
            let errors = validate(&input);
            assert_eq!(errors.first_field(), Some(FieldName::Phone));
            assert_eq!(
                errors.fields().collect::<Vec<_>>(),
                vec![FieldName::Phone, FieldName::Email]
            );
        }
    }

    mod messages {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_english_messages_match_display() {
            for error in [
                FieldError::NameRequired,
                FieldError::EmailRequired,
                FieldError::EmailInvalid,
                FieldError::PhoneRequired,
                FieldError::PhoneInvalid,
            ] {
                assert_eq!(error.message(Locale::En), error.to_string());
            }
        }

        #[test]
        fn test_thai_messages_differ_from_english() {
            assert_ne!(
                FieldError::PhoneInvalid.message(Locale::Th),
                FieldError::PhoneInvalid.message(Locale::En)
            );
        }
    }
}

//! User-facing copy in the supported languages

use crate::state::FieldName;
use serde::{Deserialize, Serialize};

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Th,
    En,
}

impl Locale {
    /// Parse a locale code such as `th` or `en-US`
    pub fn parse(code: &str) -> Option<Self> {
        let lang = code.split(['-', '_']).next()?.trim().to_ascii_lowercase();
        match lang.as_str() {
            "th" => Some(Self::Th),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Copy table for this locale
    pub fn strings(self) -> &'static Strings {
        match self {
            Self::Th => &TH,
            Self::En => &EN,
        }
    }
}

/// One contact channel shown next to the form
#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

/// All static copy used by the terminal front end
#[derive(Debug)]
pub struct Strings {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub form_title: &'static str,
    pub contact_title: &'static str,
    pub contact_intro: &'static str,
    pub channels: [ContactChannel; 3],
    name_label: &'static str,
    phone_label: &'static str,
    email_label: &'static str,
    message_label: &'static str,
    name_placeholder: &'static str,
    phone_placeholder: &'static str,
    email_placeholder: &'static str,
    message_placeholder: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub success_title: &'static str,
    pub success_body: &'static str,
    pub send_another: &'static str,
    pub receipt_label: &'static str,
    pub failure_title: &'static str,
    pub failure_hint: &'static str,
    pub send_verb: &'static str,
    pub form_help: &'static str,
    pub confirmation_help: &'static str,
    pub dialog_help: &'static str,
}

impl Strings {
    /// Field label, with a `*` marker on required fields
    pub fn field_label(&self, field: FieldName) -> String {
        let label = match field {
            FieldName::Name => self.name_label,
            FieldName::Phone => self.phone_label,
            FieldName::Email => self.email_label,
            FieldName::Message => self.message_label,
        };
        if field.is_required() {
            format!("{label} *")
        } else {
            label.to_string()
        }
    }

    /// Hint shown in an empty field
    pub fn placeholder(&self, field: FieldName) -> &'static str {
        match field {
            FieldName::Name => self.name_placeholder,
            FieldName::Phone => self.phone_placeholder,
            FieldName::Email => self.email_placeholder,
            FieldName::Message => self.message_placeholder,
        }
    }
}

static TH: Strings = Strings {
    brand: "S.V. CONCRETE",
    tagline: "รากฐานที่มั่นคง เริ่มต้นที่คอนกรีตคุณภาพ",
    form_title: "ขอใบเสนอราคา",
    contact_title: "พร้อมเริ่มโครงการของคุณ?",
    contact_intro: "ทีมงานของเราพร้อมให้คำปรึกษาและประเมินราคาฟรี",
    channels: [
        ContactChannel {
            label: "โทรศัพท์",
            value: "02-123-4567",
            note: "ฝ่ายขาย (จ-ส 8:00-17:00)",
        },
        ContactChannel {
            label: "อีเมล",
            value: "sales@thaiconcrete.co.th",
            note: "ตอบกลับภายใน 24 ชม.",
        },
        ContactChannel {
            label: "ที่ตั้งโรงงาน",
            value: "123 ถ.บางนา-ตราด กม.15",
            note: "จ.สมุทรปราการ 10540",
        },
    ],
    name_label: "ชื่อ-นามสกุล",
    phone_label: "เบอร์โทรศัพท์",
    email_label: "อีเมล",
    message_label: "รายละเอียดเพิ่มเติม",
    name_placeholder: "คุณสมชาย ใจดี",
    phone_placeholder: "08x-xxx-xxxx",
    email_placeholder: "example@email.com",
    message_placeholder: "ระบุสถานที่จัดส่ง, ปริมาณคอนกรีต, หรือข้อสงสัยอื่นๆ...",
    submit: "ขอใบเสนอราคาฟรี",
    submitting: "กำลังประมวลผล...",
    success_title: "ส่งข้อมูลเรียบร้อย",
    success_body: "เจ้าหน้าที่จะติดต่อกลับภายใน 24 ชั่วโมงครับ",
    send_another: "ส่งข้อมูลเพิ่มเติม",
    receipt_label: "เลขอ้างอิง",
    failure_title: "ส่งข้อมูลไม่สำเร็จ",
    failure_hint: "ข้อมูลในแบบฟอร์มยังอยู่ กรุณาลองใหม่อีกครั้ง",
    send_verb: "ส่ง",
    form_help: "Tab: ช่องถัดไป | Shift+Tab: ช่องก่อนหน้า | Esc: ออก",
    confirmation_help: "Enter/n: ส่งข้อมูลเพิ่มเติม | Esc: ออก",
    dialog_help: "กด Enter หรือ Esc เพื่อกลับไปแก้ไข",
};

static EN: Strings = Strings {
    brand: "S.V. CONCRETE",
    tagline: "Solid foundations start with quality concrete",
    form_title: "Request a quotation",
    contact_title: "Ready to start your project?",
    contact_intro: "Our team offers free consultation and pricing.",
    channels: [
        ContactChannel {
            label: "Phone",
            value: "02-123-4567",
            note: "Sales (Mon-Sat 8:00-17:00)",
        },
        ContactChannel {
            label: "Email",
            value: "sales@thaiconcrete.co.th",
            note: "Reply within 24 hours",
        },
        ContactChannel {
            label: "Factory",
            value: "123 Bangna-Trad Rd. km 15",
            note: "Samut Prakan 10540",
        },
    ],
    name_label: "Full name",
    phone_label: "Phone",
    email_label: "Email",
    message_label: "Details",
    name_placeholder: "Somchai Jaidee",
    phone_placeholder: "08x-xxx-xxxx",
    email_placeholder: "example@email.com",
    message_placeholder: "Delivery site, volume, or other questions...",
    submit: "Get a free quote",
    submitting: "Processing...",
    success_title: "Inquiry sent",
    success_body: "Our staff will contact you within 24 hours.",
    send_another: "Send another message",
    receipt_label: "Reference",
    failure_title: "Could not send inquiry",
    failure_hint: "Your answers are kept. Please try again.",
    send_verb: "send",
    form_help: "Tab: next field | Shift+Tab: previous field | Esc: quit",
    confirmation_help: "Enter/n: send another | Esc: quit",
    dialog_help: "Press Enter or Esc to go back to the form",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_thai() {
        assert_eq!(Locale::default(), Locale::Th);
    }

    #[test]
    fn test_parse_accepts_region_suffix() {
        assert_eq!(Locale::parse("en-US"), Some(Locale::En));
        assert_eq!(Locale::parse("th_TH"), Some(Locale::Th));
        assert_eq!(Locale::parse("TH"), Some(Locale::Th));
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_required_labels_are_marked() {
        let strings = Locale::En.strings();
        assert_eq!(strings.field_label(FieldName::Name), "Full name *");
        assert_eq!(strings.field_label(FieldName::Message), "Details");
    }

    #[test]
    fn test_both_locales_share_contact_values() {
        let th = Locale::Th.strings();
        let en = Locale::En.strings();
        assert_eq!(th.channels[0].value, en.channels[0].value);
        assert_eq!(th.channels[1].value, en.channels[1].value);
    }

    #[test]
    fn test_locale_deserializes_lowercase() {
        let locale: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(locale, Locale::En);
    }
}

//! Field validators for the contact form.
//!
//! Every validator answers yes or no for a single raw field. The aggregate
//! [`validate_form_data`] turns those answers into per-field messages that
//! the form renders inline; nothing here returns an error or panics.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::contact::models::ContactFormData;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;
const EMAIL_MAX: usize = 320;
const COMPANY_MIN: usize = 2;
const COMPANY_MAX: usize = 100;
const MESSAGE_MIN: usize = 10;
const MESSAGE_MAX: usize = 2000;
const PHONE_DIGITS_MIN: usize = 10;
const PHONE_DIGITS_MAX: usize = 15;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s'-]+$").unwrap());
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());
// [0-9] rather than \d: the regex crate's \d is Unicode-aware
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+(27|61)[0-9]{8,12}$").unwrap());
static COMPANY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9\s&.,'()-]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Phone,
    Service,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Phone => "phone",
            Field::Service => "service",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn validate_name(name: &str) -> bool {
    let trimmed = name.trim();
    let len = char_len(trimmed);
    (NAME_MIN..=NAME_MAX).contains(&len) && NAME_RE.is_match(trimmed)
}

pub fn validate_email(email: &str) -> bool {
    char_len(email) <= EMAIL_MAX && EMAIL_RE.is_match(email)
}

/// South African (+27) or Australian (+61) numbers in international form.
pub fn validate_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    PHONE_RE.is_match(phone) && (PHONE_DIGITS_MIN..=PHONE_DIGITS_MAX).contains(&digits)
}

/// Company is optional, so blank input passes.
pub fn validate_company(company: &str) -> bool {
    let trimmed = company.trim();
    if trimmed.is_empty() {
        return true;
    }
    let len = char_len(trimmed);
    (COMPANY_MIN..=COMPANY_MAX).contains(&len) && COMPANY_RE.is_match(trimmed)
}

pub fn validate_message(message: &str) -> bool {
    let len = char_len(message.trim());
    (MESSAGE_MIN..=MESSAGE_MAX).contains(&len)
}

pub fn validate_form_data(data: &ContactFormData) -> ValidationResult {
    let mut errors = BTreeMap::new();

    if !validate_name(&data.name) {
        errors.insert(
            Field::Name,
            "Please enter a valid name (2-50 characters, letters only)".to_string(),
        );
    }

    if !validate_email(&data.email) {
        errors.insert(Field::Email, "Please enter a valid email address".to_string());
    }

    if let Some(company) = data.company.as_deref() {
        if !validate_company(company) {
            errors.insert(
                Field::Company,
                "Company name contains invalid characters".to_string(),
            );
        }
    }

    if let Some(phone) = data.phone.as_deref().filter(|p| !p.trim().is_empty()) {
        if !validate_phone(phone) {
            errors.insert(
                Field::Phone,
                "Please enter a valid South African (+27) or Australian (+61) phone number"
                    .to_string(),
            );
        }
    }

    if let Some(service) = data.service.as_deref() {
        if service.trim().is_empty() {
            errors.insert(Field::Service, "Please select a service".to_string());
        }
    }

    if !validate_message(&data.message) {
        errors.insert(
            Field::Message,
            "Message must be between 10 and 2000 characters".to_string(),
        );
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ContactFormData {
        ContactFormData {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            company: None,
            phone: Some("+61412345678".to_string()),
            service: None,
            message: "I need help with my network setup please.".to_string(),
        }
    }

    #[test]
    fn phone_requires_country_code_and_digit_count() {
        assert!(validate_phone("+61412345678"));
        assert!(validate_phone("+27821234567"));
        assert!(validate_phone("+2712345678"));
        assert!(validate_phone("+61123456789012"));
        assert!(!validate_phone("+611234567890123"));
        assert!(!validate_phone("+611234567"));
        assert!(!validate_phone("+44412345678"));
        assert!(!validate_phone("0412345678"));
        assert!(!validate_phone("+61 412 345 678"));
        assert!(!validate_phone("12345"));
        assert!(!validate_phone(""));
    }

    #[test]
    fn phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits would satisfy a Unicode \d
        assert!(!validate_phone("+61٤١٢٣٤٥٦٧٨"));
    }

    #[test]
    fn name_length_and_charset() {
        assert!(validate_name("Jane Doe"));
        assert!(validate_name("  O'Brien-Smith  "));
        assert!(validate_name("Al"));
        assert!(!validate_name("J"));
        assert!(!validate_name("  J  "));
        assert!(!validate_name(&"a".repeat(51)));
        assert!(validate_name(&"a".repeat(50)));
        assert!(!validate_name("Jane2"));
        assert!(!validate_name("Jane <script>"));
        assert!(!validate_name("José"));
    }

    #[test]
    fn email_format_and_length() {
        assert!(validate_email("jane@example.com"));
        assert!(validate_email("first.last+tag@sub.example.com.au"));
        assert!(!validate_email("jane@example"));
        assert!(!validate_email("jane.example.com"));
        assert!(!validate_email("jane@@example.com"));
        assert!(!validate_email(""));

        let long_local = format!("{}@example.com", "a".repeat(320));
        assert!(!validate_email(&long_local));
    }

    #[test]
    fn message_bounds() {
        assert!(!validate_message(""));
        assert!(validate_message(&"a".repeat(10)));
        assert!(validate_message(&"a".repeat(2000)));
        assert!(!validate_message(&"a".repeat(2001)));
        assert!(!validate_message("   short   "));
    }

    #[test]
    fn company_is_optional() {
        assert!(validate_company(""));
        assert!(validate_company("  "));
        assert!(validate_company("Acme Pty. Ltd. (AU) & Co"));
        assert!(!validate_company("A"));
        assert!(!validate_company("Acme <b>"));
        assert!(!validate_company(&"a".repeat(101)));
    }

    #[test]
    fn valid_form_has_no_errors() {
        let result = validate_form_data(&jane());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn bad_phone_is_reported_on_phone_field_only() {
        let mut data = jane();
        data.phone = Some("12345".to_string());

        let result = validate_form_data(&data);
        assert!(!result.is_valid);
        assert!(result.error(Field::Phone).is_some());
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn blank_optional_fields_pass_but_blank_service_does_not() {
        let mut data = jane();
        data.phone = Some("   ".to_string());
        data.company = Some(String::new());
        assert!(validate_form_data(&data).is_valid);

        data.service = Some(" ".to_string());
        let result = validate_form_data(&data);
        assert_eq!(
            result.errors.keys().copied().collect::<Vec<_>>(),
            vec![Field::Service]
        );
    }

    #[test]
    fn every_failing_field_is_collected() {
        let data = ContactFormData {
            name: "x".to_string(),
            email: "nope".to_string(),
            company: Some("!".to_string()),
            phone: Some("+1".to_string()),
            service: Some(String::new()),
            message: "hi".to_string(),
        };

        let result = validate_form_data(&data);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 6);
        assert_eq!(Field::Message.to_string(), "message");
    }
}

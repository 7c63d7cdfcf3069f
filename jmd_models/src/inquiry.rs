use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The raw values of the contact form, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub query: String,
}

impl InquiryForm {
    pub fn get(&self, field: InquiryField) -> &str {
        match field {
            InquiryField::Name => &self.name,
            InquiryField::Email => &self.email,
            InquiryField::Contact => &self.contact,
            InquiryField::Query => &self.query,
        }
    }

    pub fn validate(&self) -> ValidationResult {
        ValidationResult::of(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryField {
    Name,
    Email,
    Contact,
    Query,
}

/// Validates a single raw field value.
pub type FieldValidator = fn(&str) -> Option<InquiryFieldError>;

impl InquiryField {
    /// All fields in focus priority order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Contact, Self::Query];

    /// The id of the input element of this field.
    pub fn input_id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Contact => "contact",
            Self::Query => "query",
        }
    }

    /// The id of the element that displays this field's error message.
    pub fn error_slot_id(self) -> &'static str {
        match self {
            Self::Name => "nameError",
            Self::Email => "emailError",
            Self::Contact => "contactError",
            Self::Query => "queryError",
        }
    }

    pub fn validator(self) -> FieldValidator {
        match self {
            Self::Name => validate_name,
            Self::Email => validate_email,
            Self::Contact => validate_contact,
            Self::Query => validate_query,
        }
    }

    pub fn validate(self, value: &str) -> Option<InquiryFieldError> {
        self.validator()(value)
    }

    /// The message shown next to this field for the given error.
    pub fn error_message(self, error: InquiryFieldError) -> &'static str {
        use InquiryFieldError::*;

        match (self, error) {
            (Self::Name, Required) => "Full name is required",
            (Self::Name, TooShort) => "Name must be at least 2 characters long",
            (Self::Name, InvalidFormat) => "Name should only contain letters and spaces",
            (Self::Email, Required) => "Email address is required",
            (Self::Email, InvalidFormat) => "Please enter a valid email address",
            (Self::Contact, Required) => "Contact number is required",
            (Self::Contact, InvalidLength) => "Please enter a valid 10-digit mobile number",
            (Self::Contact, InvalidFormat) => "Please enter a valid Indian mobile number",
            (Self::Query, Required) => "Property query is required",
            (Self::Query, TooShort) => "Please provide more details (at least 10 characters)",
            // not produced by any validator
            (_, Required) => "This field is required",
            (_, TooShort) => "This value is too short",
            (_, InvalidFormat) => "This value is invalid",
            (_, InvalidLength) => "This value has an invalid length",
        }
    }
}

impl fmt::Display for InquiryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input_id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryFieldError {
    Required,
    TooShort,
    InvalidFormat,
    InvalidLength,
}

pub const NAME_MIN_LENGTH: usize = 2;
pub const QUERY_MIN_LENGTH: usize = 10;
pub const CONTACT_DIGITS: usize = 10;

pub static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());

pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn validate_name(name: &str) -> Option<InquiryFieldError> {
    let name = name.trim();
    if name.is_empty() {
        Some(InquiryFieldError::Required)
    } else if text_length(name) < NAME_MIN_LENGTH {
        Some(InquiryFieldError::TooShort)
    } else if !NAME_REGEX.is_match(name) {
        Some(InquiryFieldError::InvalidFormat)
    } else {
        None
    }
}

pub fn validate_email(email: &str) -> Option<InquiryFieldError> {
    let email = email.trim();
    if email.is_empty() {
        Some(InquiryFieldError::Required)
    } else if !EMAIL_REGEX.is_match(email) {
        Some(InquiryFieldError::InvalidFormat)
    } else {
        None
    }
}

/// Mobile numbers must have 10 digits and start with 6, 7, 8 or 9.
/// Separators such as spaces or dashes are ignored.
pub fn validate_contact(contact: &str) -> Option<InquiryFieldError> {
    let contact = contact.trim();
    if contact.is_empty() {
        return Some(InquiryFieldError::Required);
    }

    let digits = contact_digits(contact);
    if digits.len() != CONTACT_DIGITS {
        Some(InquiryFieldError::InvalidLength)
    } else if !digits.starts_with(['6', '7', '8', '9']) {
        Some(InquiryFieldError::InvalidFormat)
    } else {
        None
    }
}

pub fn validate_query(query: &str) -> Option<InquiryFieldError> {
    let query = query.trim();
    if query.is_empty() {
        Some(InquiryFieldError::Required)
    } else if text_length(query) < QUERY_MIN_LENGTH {
        Some(InquiryFieldError::TooShort)
    } else {
        None
    }
}

/// Length in UTF-16 code units, as the page counts it. Characters outside the
/// basic multilingual plane count twice.
fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

fn contact_digits(contact: &str) -> String {
    contact.chars().filter(char::is_ascii_digit).collect()
}

/// Normalizes the contact field while the user is typing: only digits are
/// kept, and at most [`CONTACT_DIGITS`] of them.
pub fn normalize_contact(contact: &str) -> String {
    contact
        .chars()
        .filter(char::is_ascii_digit)
        .take(CONTACT_DIGITS)
        .collect()
}

/// The outcome of validating every field of an [`InquiryForm`].
///
/// A field without an error is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub name: Option<InquiryFieldError>,
    pub email: Option<InquiryFieldError>,
    pub contact: Option<InquiryFieldError>,
    pub query: Option<InquiryFieldError>,
}

impl ValidationResult {
    /// Runs all validators, even if an earlier one already failed.
    pub fn of(form: &InquiryForm) -> Self {
        Self {
            name: validate_name(&form.name),
            email: validate_email(&form.email),
            contact: validate_contact(&form.contact),
            query: validate_query(&form.query),
        }
    }

    pub fn get(&self, field: InquiryField) -> Option<InquiryFieldError> {
        match field {
            InquiryField::Name => self.name,
            InquiryField::Email => self.email,
            InquiryField::Contact => self.contact,
            InquiryField::Query => self.query,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    /// Returns all errors in focus priority order.
    pub fn errors(&self) -> impl Iterator<Item = (InquiryField, InquiryFieldError)> + '_ {
        InquiryField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|error| (field, error)))
    }

    /// The field that should receive focus after a failed submission.
    pub fn first_invalid(&self) -> Option<InquiryField> {
        self.errors().next().map(|(field, _)| field)
    }
}

/// An inquiry whose fields passed validation, holding the trimmed values.
///
/// This type can only be obtained through [`ValidInquiry::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidInquiry {
    name: String,
    email: String,
    contact: String,
    query: String,
}

impl ValidInquiry {
    pub fn validate(form: &InquiryForm) -> Result<Self, ValidationResult> {
        let result = form.validate();
        if !result.is_valid() {
            return Err(result);
        }

        Ok(Self {
            name: form.name.trim().into(),
            email: form.email.trim().into(),
            contact: form.contact.trim().into(),
            query: form.query.trim().into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

impl TryFrom<&InquiryForm> for ValidInquiry {
    type Error = ValidationResult;

    fn try_from(form: &InquiryForm) -> Result<Self, Self::Error> {
        Self::validate(form)
    }
}

/// Static information about the business that is appended to every inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessContext {
    pub name: String,
    pub areas: Vec<String>,
    pub services: Vec<String>,
}

/// The text sent to the business, together with the inquiry it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryMessage {
    inquiry: ValidInquiry,
    text: String,
}

impl InquiryMessage {
    pub fn new(inquiry: ValidInquiry, text: String) -> Self {
        Self { inquiry, text }
    }

    pub fn inquiry(&self) -> &ValidInquiry {
        &self.inquiry
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use jmd_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;
    use super::InquiryFieldError::*;

    fn form(name: &str, email: &str, contact: &str, query: &str) -> InquiryForm {
        InquiryForm {
            name: name.into(),
            email: email.into(),
            contact: contact.into(),
            query: query.into(),
        }
    }

    #[test]
    fn name() {
        for (input, expected) in [
            ("", Some(Required)),
            ("   ", Some(Required)),
            ("A", Some(TooShort)),
            (" A ", Some(TooShort)),
            ("A1", Some(InvalidFormat)),
            ("Amit-Kumar", Some(InvalidFormat)),
            ("Amit Kumar", None),
            ("  Amit Kumar  ", None),
            ("Jo", None),
            ("é", Some(TooShort)),
            ("🏠", Some(InvalidFormat)),
        ] {
            assert_eq!(validate_name(input), expected, "{input:?}");
        }
    }

    #[test]
    fn name_letters_and_single_spaces() {
        let words = ["a", "Ab", "Amit", "KUMAR", "x", "Sonipat", "de", "LA"];
        for first in words {
            for second in words {
                for candidate in [format!("{first}{second}"), format!("{first} {second}")] {
                    assert_eq!(validate_name(&candidate), None, "{candidate:?}");
                }
            }
        }
    }

    #[test]
    fn email() {
        for (input, expected) in [
            ("", Some(Required)),
            ("  ", Some(Required)),
            ("a@b.com", None),
            (" amit@example.com ", None),
            ("a@b", Some(InvalidFormat)),
            ("a b@c.com", Some(InvalidFormat)),
            ("@b.com", Some(InvalidFormat)),
            ("a@@b.com", Some(InvalidFormat)),
            ("a@b.", Some(InvalidFormat)),
            ("plainaddress", Some(InvalidFormat)),
        ] {
            assert_eq!(validate_email(input), expected, "{input:?}");
        }
    }

    #[test]
    fn contact() {
        for (input, expected) in [
            ("", Some(Required)),
            ("   ", Some(Required)),
            ("98122 57473", None),
            ("9812257473", None),
            ("6000000000", None),
            ("+91 98122-57473", Some(InvalidLength)),
            ("1234567890", Some(InvalidFormat)),
            ("5812257473", Some(InvalidFormat)),
            ("98122", Some(InvalidLength)),
            ("98122574731", Some(InvalidLength)),
            ("phone", Some(InvalidLength)),
        ] {
            assert_eq!(validate_contact(input), expected, "{input:?}");
        }
    }

    #[test]
    fn query() {
        for (input, expected) in [
            ("", Some(Required)),
            ("\n\t ", Some(Required)),
            ("need 2bhk", Some(TooShort)),
            ("   need 2bhk   ", Some(TooShort)),
            ("need a 2bhk flat", None),
            ("0123456789", None),
            ("🏠 2bhk", Some(TooShort)),
            ("🏠🏠🏠🏠", Some(TooShort)),
            ("🏠🏠🏠🏠🏠", None),
            ("ghar chahiye ✓", None),
        ] {
            assert_eq!(validate_query(input), expected, "{input:?}");
        }
    }

    #[test]
    fn normalize() {
        for (input, expected) in [
            ("", ""),
            ("98122 57473", "9812257473"),
            ("98a12-25 74731", "9812257473"),
            ("+91 98122 57473", "9198122574"),
            ("abc", ""),
        ] {
            assert_eq!(normalize_contact(input), expected, "{input:?}");
        }
    }

    #[test]
    fn normalized_contact_validates() {
        let normalized = normalize_contact("98122 57473");
        assert_eq!(normalized, "9812257473");
        assert_eq!(validate_contact(&normalized), None);
    }

    #[test]
    fn field_validator_dispatch() {
        assert_eq!(InquiryField::Name.validate("A1"), Some(InvalidFormat));
        assert_eq!(InquiryField::Email.validate("a@b"), Some(InvalidFormat));
        assert_eq!(InquiryField::Contact.validate("98122"), Some(InvalidLength));
        assert_eq!(InquiryField::Query.validate("need 2bhk"), Some(TooShort));
    }

    #[test]
    fn error_messages() {
        for (field, error, expected) in [
            (InquiryField::Name, Required, "Full name is required"),
            (
                InquiryField::Name,
                TooShort,
                "Name must be at least 2 characters long",
            ),
            (
                InquiryField::Name,
                InvalidFormat,
                "Name should only contain letters and spaces",
            ),
            (InquiryField::Email, Required, "Email address is required"),
            (
                InquiryField::Email,
                InvalidFormat,
                "Please enter a valid email address",
            ),
            (InquiryField::Contact, Required, "Contact number is required"),
            (
                InquiryField::Contact,
                InvalidLength,
                "Please enter a valid 10-digit mobile number",
            ),
            (
                InquiryField::Contact,
                InvalidFormat,
                "Please enter a valid Indian mobile number",
            ),
            (InquiryField::Query, Required, "Property query is required"),
            (
                InquiryField::Query,
                TooShort,
                "Please provide more details (at least 10 characters)",
            ),
        ] {
            assert_eq!(field.error_message(error), expected);
        }
    }

    #[test]
    fn result_collects_every_field() {
        // Arrange
        let form = form("", "a@b", "98122", "need 2bhk");

        // Act
        let result = ValidationResult::of(&form);

        // Assert
        assert_eq!(
            result,
            ValidationResult {
                name: Some(Required),
                email: Some(InvalidFormat),
                contact: Some(InvalidLength),
                query: Some(TooShort),
            }
        );
        assert!(!result.is_valid());
        assert_eq!(result.errors().count(), 4);
        assert_eq!(result.first_invalid(), Some(InquiryField::Name));
    }

    #[test]
    fn first_invalid_follows_priority() {
        let result = form("Amit Kumar", "amit@example.com", "1234567890", "short").validate();
        assert_eq!(result.first_invalid(), Some(InquiryField::Contact));
        assert_eq!(
            result.errors().collect::<Vec<_>>(),
            [
                (InquiryField::Contact, InvalidFormat),
                (InquiryField::Query, TooShort),
            ]
        );
    }

    #[test]
    fn valid_inquiry_trims_values() {
        // Arrange
        let form = form(
            "  Amit Kumar ",
            " amit@example.com",
            " 9876543210 ",
            " Looking for a 2BHK flat in Sonipat\n",
        );

        // Act
        let result = ValidInquiry::try_from(&form);

        // Assert
        let inquiry = result.unwrap();
        assert_eq!(inquiry.name(), "Amit Kumar");
        assert_eq!(inquiry.email(), "amit@example.com");
        assert_eq!(inquiry.contact(), "9876543210");
        assert_eq!(inquiry.query(), "Looking for a 2BHK flat in Sonipat");
    }

    #[test]
    fn valid_inquiry_rejects_invalid_form() {
        let form = form("", "amit@example.com", "9876543210", "need a 2bhk flat");
        assert_matches!(
            ValidInquiry::validate(&form),
            Err(ValidationResult {
                name: Some(Required),
                email: None,
                contact: None,
                query: None,
            })
        );
    }

    #[test]
    fn field_serde() {
        assert_eq!(
            serde_json::to_value(InquiryField::Contact).unwrap(),
            serde_json::json!("contact")
        );
        assert_eq!(
            serde_json::from_value::<InquiryFieldError>(serde_json::json!("invalid_length"))
                .unwrap(),
            InvalidLength
        );
    }
}

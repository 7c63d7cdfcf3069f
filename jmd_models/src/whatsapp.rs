use std::{fmt, sync::LazyLock};

use nutype::nutype;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use url::Url;

use crate::inquiry::InquiryMessage;

pub const DEFAULT_DOMAIN: &str = "wa.me";

/// The phone number that receives inquiries, in international format without
/// any symbols.
#[nutype(
    sanitize(trim),
    validate(regex = RECIPIENT_REGEX),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Display,
        TryFrom,
        Deref,
        Serialize,
        Deserialize
    )
)]
pub struct WhatsAppRecipient(String);

pub static RECIPIENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8,15}$").unwrap());

/// Everything except the characters `encodeURIComponent` keeps verbatim. The
/// apostrophe is escaped as well, since url would escape it in a query anyway.
const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

/// A link that opens a chat with the recipient, prefilled with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionLink(Url);

impl SubmissionLink {
    pub fn new(
        domain: &str,
        recipient: &WhatsAppRecipient,
        message: &InquiryMessage,
    ) -> Result<Self, url::ParseError> {
        let text = utf8_percent_encode(message.text(), MESSAGE_ENCODE_SET);
        Url::parse(&format!("https://{domain}/{recipient}?text={text}")).map(Self)
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Decodes the prefilled message.
    pub fn text(&self) -> Option<String> {
        self.0
            .query_pairs()
            .find(|(key, _)| key == "text")
            .map(|(_, value)| value.into_owned())
    }
}

impl fmt::Display for SubmissionLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<SubmissionLink> for Url {
    fn from(value: SubmissionLink) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::inquiry::{InquiryForm, ValidInquiry};

    fn message(text: &str) -> InquiryMessage {
        let inquiry = ValidInquiry::validate(&InquiryForm {
            name: "Amit Kumar".into(),
            email: "amit@example.com".into(),
            contact: "9876543210".into(),
            query: "Looking for a 2BHK flat in Sonipat".into(),
        })
        .unwrap();
        InquiryMessage::new(inquiry, text.into())
    }

    #[test]
    fn recipient() {
        for (input, ok) in [
            ("918607002111", true),
            (" 918607002111\n", true),
            ("+918607002111", false),
            ("91 8607002111", false),
            ("1234", false),
            ("", false),
        ] {
            assert_eq!(WhatsAppRecipient::try_new(input).is_ok(), ok, "{input:?}");
        }
    }

    #[test]
    fn link_encodes_message() {
        // Arrange
        let recipient = WhatsAppRecipient::try_new("918607002111").unwrap();
        let message = message("🏠 Hi there!\nIt's (really) ~50% *done* & a+b=c");

        // Act
        let link = SubmissionLink::new(DEFAULT_DOMAIN, &recipient, &message).unwrap();

        // Assert
        assert_eq!(
            link.as_str(),
            "https://wa.me/918607002111?text=%F0%9F%8F%A0%20Hi%20there!%0AIt%27s%20(really)%20~50%25%20*done*%20%26%20a%2Bb%3Dc"
        );
        assert_eq!(link.text().unwrap(), message.text());
    }

    #[test]
    fn link_custom_domain() {
        let recipient = WhatsAppRecipient::try_new("918607002111").unwrap();
        let link = SubmissionLink::new("api.whatsapp.com", &recipient, &message("hello")).unwrap();
        assert_eq!(link.as_url().host_str(), Some("api.whatsapp.com"));
        assert_eq!(link.to_string(), "https://api.whatsapp.com/918607002111?text=hello");
    }

    #[test]
    fn link_invalid_domain() {
        let recipient = WhatsAppRecipient::try_new("918607002111").unwrap();
        SubmissionLink::new("wa me", &recipient, &message("hello")).unwrap_err();
    }
}

use std::sync::LazyLock;

use jmd_models::{
    inquiry::{BusinessContext, InquiryForm, InquiryMessage, ValidInquiry},
    whatsapp::{SubmissionLink, DEFAULT_DOMAIN},
};

use crate::RECIPIENT;

pub static BUSINESS: LazyLock<BusinessContext> = LazyLock::new(|| BusinessContext {
    name: "JMD Associates".into(),
    areas: vec!["Sonipat".into(), "Kundli".into(), "Kharkhoda".into()],
    services: vec!["BUY".into(), "SELL".into(), "RENT".into()],
});

pub static AMIT: LazyLock<InquiryForm> = LazyLock::new(|| InquiryForm {
    name: "Amit Kumar".into(),
    email: "amit@example.com".into(),
    contact: "9876543210".into(),
    query: "Looking for a 2BHK flat in Sonipat".into(),
});

/// Same as [`AMIT`] but without a name.
pub static ANONYMOUS: LazyLock<InquiryForm> = LazyLock::new(|| InquiryForm {
    name: String::new(),
    ..AMIT.clone()
});

/// Every field fails validation.
pub static GARBAGE: LazyLock<InquiryForm> = LazyLock::new(|| InquiryForm {
    name: "A1".into(),
    email: "a@b".into(),
    contact: "98122".into(),
    query: "need 2bhk".into(),
});

pub const AMIT_MESSAGE: &str = "🏠 *New Property Inquiry - JMD Associates*

*Name:* Amit Kumar
*Email:* amit@example.com
*Contact:* 9876543210

*Property Query:*
Looking for a 2BHK flat in Sonipat

*Areas of Interest:* Sonipat, Kundli, Kharkhoda
*Services:* BUY | SELL | RENT

Please respond at your earliest convenience. Thank you!

_Sent from JMD Associates Website_";

pub const AMIT_LINK: &str = "https://wa.me/918607002111?text=%F0%9F%8F%A0%20*New%20Property%20Inquiry%20-%20JMD%20Associates*%0A%0A*Name%3A*%20Amit%20Kumar%0A*Email%3A*%20amit%40example.com%0A*Contact%3A*%209876543210%0A%0A*Property%20Query%3A*%0ALooking%20for%20a%202BHK%20flat%20in%20Sonipat%0A%0A*Areas%20of%20Interest%3A*%20Sonipat%2C%20Kundli%2C%20Kharkhoda%0A*Services%3A*%20BUY%20%7C%20SELL%20%7C%20RENT%0A%0APlease%20respond%20at%20your%20earliest%20convenience.%20Thank%20you!%0A%0A_Sent%20from%20JMD%20Associates%20Website_";

pub static AMIT_VALID: LazyLock<ValidInquiry> =
    LazyLock::new(|| ValidInquiry::validate(&AMIT).unwrap());

pub static AMIT_SUBMISSION_LINK: LazyLock<SubmissionLink> = LazyLock::new(|| {
    let message = InquiryMessage::new(AMIT_VALID.clone(), AMIT_MESSAGE.into());
    SubmissionLink::new(DEFAULT_DOMAIN, &RECIPIENT, &message).unwrap()
});

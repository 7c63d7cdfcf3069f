use std::sync::LazyLock;

use jmd_models::{whatsapp::WhatsAppRecipient, PhoneNumber};

pub mod inquiry;

pub static RECIPIENT: LazyLock<WhatsAppRecipient> =
    LazyLock::new(|| "918607002111".try_into().unwrap());

pub static FALLBACK_PHONES: LazyLock<Vec<PhoneNumber>> = LazyLock::new(|| {
    ["9812257473", "8607002111"]
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
});

pub const MAPS_URL: &str =
    "https://www.google.com/maps/search/?api=1&query=2042+Sector+7+Sonipat+Haryana";

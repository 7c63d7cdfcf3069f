use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;

pub mod inquiry;
pub mod notification;
pub mod page;
pub mod whatsapp;

/// A phone number shown to visitors for manual follow-up.
#[nutype(
    sanitize(trim),
    validate(regex = PHONE_NUMBER_REGEX),
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
pub struct PhoneNumber(String);

pub static PHONE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{6,15}$").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_number() {
        for (input, expected) in [
            ("9812257473", Some("9812257473")),
            (" 8607002111 ", Some("8607002111")),
            ("+918607002111", Some("+918607002111")),
            ("98122 57473", None),
            ("call me", None),
            ("", None),
        ] {
            let output = PhoneNumber::try_new(input).ok();
            assert_eq!(output.as_deref().map(String::as_str), expected);
        }
    }
}

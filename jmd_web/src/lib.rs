//! Browser adapter for the JMD Associates website.
//!
//! On `wasm32` this crate implements the host capabilities on top of the DOM
//! and registers the page's event listeners on load. The wiring itself is
//! target independent and tested natively.
//!
//! # Building
//!
//! ```bash
//! wasm-pack build jmd_web --target web
//! ```

use jmd_models::inquiry::InquiryField;

pub mod environment;
pub mod handlers;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

/// The id of the contact form.
pub const FORM_ID: &str = "contactForm";

/// The id of the button that switches between light and dark mode.
pub const THEME_TOGGLE_ID: &str = "themeToggle";

/// Links that open the business location in a maps application.
pub const LOCATION_LINK_SELECTOR: &str = ".location-link";

/// Shown on the submit button while WhatsApp is being opened.
pub const BUSY_LABEL_HTML: &str = r#"<i class="fas fa-spinner fa-spin"></i> Opening WhatsApp..."#;

/// Resolve the field an input element belongs to.
pub fn field_for_input_id(id: &str) -> Option<InquiryField> {
    InquiryField::ALL
        .into_iter()
        .find(|field| field.input_id() == id)
}

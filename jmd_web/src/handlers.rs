//! What each DOM listener does once the event has been read. Kept apart from
//! the listeners so it can run natively against mocked features.

use jmd_core_inquiry_contracts::{InquiryFeatureService, InquirySubmitError, InquirySubmitOutcome};
use jmd_core_page_contracts::PageFeatureService;
use jmd_models::{
    inquiry::{InquiryField, InquiryFieldError, InquiryForm},
    page::{HeaderVisibility, Theme},
};

pub const INVALID_FORM_LOG: &str = "Form has errors, not submitting";

/// Returns the value to write back into the input, if it changed.
pub fn input(
    inquiry: &impl InquiryFeatureService,
    field: InquiryField,
    value: &str,
) -> Option<String> {
    let normalized = inquiry.on_field_input(field, value);
    (normalized != value).then_some(normalized)
}

pub fn blur(
    inquiry: &impl InquiryFeatureService,
    field: InquiryField,
    value: &str,
) -> Option<InquiryFieldError> {
    inquiry.on_field_blur(field, value)
}

/// Submit the form. Returns the line to write to the console, if any.
///
/// Every outcome the visitor needs to see is already shown by the feature
/// itself. An overlapping submit gets no notification of its own: the attempt
/// in flight settles with one, and a second would contradict it.
pub async fn submit(inquiry: &impl InquiryFeatureService, form: InquiryForm) -> Option<String> {
    match inquiry.submit(form).await {
        Ok(InquirySubmitOutcome::Invalid(_)) => Some(INVALID_FORM_LOG.into()),
        Ok(
            InquirySubmitOutcome::Sent(_)
            | InquirySubmitOutcome::Fallback(_)
            | InquirySubmitOutcome::Failed,
        ) => None,
        Err(err @ InquirySubmitError::InProgress) => Some(err.to_string()),
    }
}

pub fn toggle_theme(page: &impl PageFeatureService) -> Theme {
    page.toggle_theme()
}

/// Overscroll at the top of the page reports negative offsets, which count as
/// the top.
pub fn scroll(page: &impl PageFeatureService, offset: f64) -> HeaderVisibility {
    page.on_scroll(offset.max(0.0))
}

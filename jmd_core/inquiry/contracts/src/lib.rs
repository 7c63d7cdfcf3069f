use std::future::Future;

use jmd_models::{
    inquiry::{InquiryField, InquiryFieldError, InquiryForm, ValidationResult},
    whatsapp::SubmissionLink,
};
use thiserror::Error;

pub mod link;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait InquiryFeatureService: Send + Sync + 'static {
    /// Handle an input event on `field` and return the value the input should
    /// display afterwards.
    ///
    /// Clears the error currently shown for the field. Contact numbers are
    /// normalized to at most ten digits.
    fn on_field_input(&self, field: InquiryField, value: &str) -> String;

    /// Validate `field` when it loses focus and present the result.
    fn on_field_blur(&self, field: InquiryField, value: &str) -> Option<InquiryFieldError>;

    /// Show `error` for `field`, or clear the field if there is none.
    fn present_field(&self, field: InquiryField, error: Option<InquiryFieldError>);

    /// Validate the whole form and, if it is valid, hand the inquiry over to
    /// WhatsApp.
    fn submit(
        &self,
        form: InquiryForm,
    ) -> impl Future<Output = Result<InquirySubmitOutcome, InquirySubmitError>>;

    /// The state of the most recent submission attempt.
    fn state(&self) -> InquirySubmitState;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InquirySubmitOutcome {
    /// At least one field is invalid. The errors are displayed and the first
    /// invalid field is focused.
    Invalid(ValidationResult),
    /// WhatsApp was opened in a new context and the form has been reset.
    Sent(SubmissionLink),
    /// Opening a new context was blocked, so the current context navigated to
    /// the link instead.
    Fallback(SubmissionLink),
    /// The hand-off failed. The visitor has been told to call instead and the
    /// form is kept.
    Failed,
}

#[derive(Debug, Error)]
pub enum InquirySubmitError {
    /// Every dispatch fault is reported as [`InquirySubmitOutcome::Failed`], so
    /// the only way a submission can fail is by overlapping another one.
    #[error("Another submission is still in progress.")]
    InProgress,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InquirySubmitState {
    #[default]
    Idle,
    Validating,
    Invalid,
    Building,
    Dispatching,
    SettledSuccess,
    SettledFallback,
    Failed,
}

#[cfg(feature = "mock")]
impl MockInquiryFeatureService {
    pub fn with_on_field_input(
        mut self,
        field: InquiryField,
        value: &'static str,
        result: &'static str,
    ) -> Self {
        self.expect_on_field_input()
            .once()
            .withf(move |f, v| *f == field && v == value)
            .return_const(result.to_owned());
        self
    }

    pub fn with_on_field_blur(
        mut self,
        field: InquiryField,
        value: &'static str,
        result: Option<InquiryFieldError>,
    ) -> Self {
        self.expect_on_field_blur()
            .once()
            .withf(move |f, v| *f == field && v == value)
            .return_const(result);
        self
    }

    pub fn with_submit(
        mut self,
        form: InquiryForm,
        result: Result<InquirySubmitOutcome, InquirySubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}

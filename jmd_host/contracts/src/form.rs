use jmd_models::inquiry::InquiryField;

/// The contact form as rendered by the host.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FormView: Send + Sync + 'static {
    /// Display `message` in the error slot of `field` and mark the field as
    /// invalid.
    fn show_field_error(&self, field: InquiryField, message: &str);

    /// Empty the error slot of `field` and mark it as valid.
    ///
    /// Clearing a field without an error has no observable effect.
    fn clear_field_error(&self, field: InquiryField);

    /// Move the input focus to `field`.
    fn focus_field(&self, field: InquiryField);

    /// Disable the submit control and show a progress label, or restore it.
    fn set_submit_busy(&self, busy: bool);

    /// Empty all input fields.
    fn reset(&self);
}

#[cfg(feature = "mock")]
impl MockFormView {
    pub fn with_show_field_error(mut self, field: InquiryField, message: &'static str) -> Self {
        self.expect_show_field_error()
            .once()
            .withf(move |f, m| *f == field && m == message)
            .return_const(());
        self
    }

    pub fn with_clear_field_error(mut self, field: InquiryField) -> Self {
        self.expect_clear_field_error()
            .once()
            .with(mockall::predicate::eq(field))
            .return_const(());
        self
    }

    /// Expects every field to be cleared exactly once.
    pub fn with_clear_all(self) -> Self {
        jmd_models::inquiry::InquiryField::ALL
            .into_iter()
            .fold(self, Self::with_clear_field_error)
    }

    pub fn with_focus_field(mut self, field: InquiryField) -> Self {
        self.expect_focus_field()
            .once()
            .with(mockall::predicate::eq(field))
            .return_const(());
        self
    }

    pub fn with_set_submit_busy(mut self, busy: bool) -> Self {
        self.expect_set_submit_busy()
            .once()
            .with(mockall::predicate::eq(busy))
            .return_const(());
        self
    }

    pub fn with_reset(mut self) -> Self {
        self.expect_reset().once().return_const(());
        self
    }
}

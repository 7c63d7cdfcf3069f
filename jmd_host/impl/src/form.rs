use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use jmd_host_contracts::form::FormView;
use jmd_models::inquiry::InquiryField;
use jmd_utils::MutexExt;

/// A form view without any rendering surface. It only records what a real
/// form would display, so callers can inspect it after a submission.
#[derive(Debug, Clone, Default)]
pub struct HeadlessFormView {
    state: Arc<Mutex<FormSnapshot>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub errors: BTreeMap<InquiryField, String>,
    pub focused: Option<InquiryField>,
    pub busy: bool,
    pub resets: usize,
}

impl HeadlessFormView {
    pub fn snapshot(&self) -> FormSnapshot {
        self.state.lock_unpoisoned().clone()
    }
}

impl FormView for HeadlessFormView {
    fn show_field_error(&self, field: InquiryField, message: &str) {
        tracing::debug!(%field, text = message, "show field error");
        self.state
            .lock_unpoisoned()
            .errors
            .insert(field, message.into());
    }

    fn clear_field_error(&self, field: InquiryField) {
        self.state.lock_unpoisoned().errors.remove(&field);
    }

    fn focus_field(&self, field: InquiryField) {
        self.state.lock_unpoisoned().focused = Some(field);
    }

    fn set_submit_busy(&self, busy: bool) {
        tracing::debug!(busy, "set submit busy");
        self.state.lock_unpoisoned().busy = busy;
    }

    fn reset(&self) {
        let mut state = self.state.lock_unpoisoned();
        state.errors.clear();
        state.focused = None;
        state.resets += 1;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn show_is_idempotent() {
        // Arrange
        let sut = HeadlessFormView::default();

        // Act
        sut.show_field_error(InquiryField::Email, "Email address is required");
        sut.show_field_error(InquiryField::Email, "Email address is required");

        // Assert
        assert_eq!(
            sut.snapshot().errors,
            [(InquiryField::Email, "Email address is required".into())].into()
        );
    }

    #[test]
    fn clear_without_error_is_noop() {
        // Arrange
        let sut = HeadlessFormView::default();
        sut.show_field_error(InquiryField::Name, "Full name is required");

        // Act
        sut.clear_field_error(InquiryField::Query);
        sut.clear_field_error(InquiryField::Query);

        // Assert
        assert_eq!(sut.snapshot().errors.len(), 1);
    }

    #[test]
    fn clones_share_state() {
        // Arrange
        let sut = HeadlessFormView::default();
        let view = sut.clone();

        // Act
        view.set_submit_busy(true);
        view.focus_field(InquiryField::Contact);
        view.reset();

        // Assert
        assert_eq!(
            sut.snapshot(),
            FormSnapshot {
                errors: BTreeMap::new(),
                focused: None,
                busy: true,
                resets: 1,
            }
        );
    }
}

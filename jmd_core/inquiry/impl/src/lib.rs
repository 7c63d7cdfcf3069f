use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use jmd_core_inquiry_contracts::{
    link::InquiryLinkService, InquiryFeatureService, InquirySubmitError, InquirySubmitOutcome,
    InquirySubmitState,
};
use jmd_host_contracts::{
    delay::DelayService,
    form::FormView,
    navigator::{NavigatorService, OpenOutcome},
    notification::NotificationService,
};
use jmd_models::{
    inquiry::{normalize_contact, InquiryField, InquiryFieldError, InquiryForm, ValidInquiry},
    notification::Notification,
    whatsapp::SubmissionLink,
    PhoneNumber,
};
use jmd_utils::MutexExt;

pub mod link;

pub const SUCCESS_TEXT: &str =
    "WhatsApp is opening with your inquiry. Please send the message to complete your request.";

#[derive(Debug, Clone)]
pub struct InquiryFeatureServiceImpl<Form, Notification, Navigator, Delay, InquiryLink> {
    form: Form,
    notification: Notification,
    navigator: Navigator,
    delay: Delay,
    inquiry_link: InquiryLink,
    config: InquiryFeatureConfig,
    state: Arc<SubmitState>,
}

#[derive(Debug, Clone)]
pub struct InquiryFeatureConfig {
    pub dispatch_delay: Duration,
    pub fallback_phones: Arc<[PhoneNumber]>,
}

impl InquiryFeatureConfig {
    /// The error shown when the inquiry could not be handed over to WhatsApp.
    pub fn failure_text(&self) -> String {
        let phones = self
            .fallback_phones
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" or ");
        format!("Unable to open WhatsApp automatically. Please call us at {phones}")
    }
}

#[derive(Debug, Default)]
struct SubmitState {
    in_flight: AtomicBool,
    current: Mutex<InquirySubmitState>,
}

/// Marks a submission as in flight until dropped.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<Form, NotificationS, Navigator, Delay, InquiryLink>
    InquiryFeatureServiceImpl<Form, NotificationS, Navigator, Delay, InquiryLink>
{
    pub fn new(
        form: Form,
        notification: NotificationS,
        navigator: Navigator,
        delay: Delay,
        inquiry_link: InquiryLink,
        config: InquiryFeatureConfig,
    ) -> Self {
        Self {
            form,
            notification,
            navigator,
            delay,
            inquiry_link,
            config,
            state: Default::default(),
        }
    }

    fn transition(&self, state: InquirySubmitState) {
        tracing::debug!(?state, "inquiry submission state");
        *self.state.current.lock_unpoisoned() = state;
    }
}

impl<Form, NotificationS, Navigator, Delay, InquiryLink> InquiryFeatureService
    for InquiryFeatureServiceImpl<Form, NotificationS, Navigator, Delay, InquiryLink>
where
    Form: FormView,
    NotificationS: NotificationService,
    Navigator: NavigatorService,
    Delay: DelayService,
    InquiryLink: InquiryLinkService,
{
    fn on_field_input(&self, field: InquiryField, value: &str) -> String {
        self.form.clear_field_error(field);
        match field {
            InquiryField::Contact => normalize_contact(value),
            _ => value.into(),
        }
    }

    fn on_field_blur(&self, field: InquiryField, value: &str) -> Option<InquiryFieldError> {
        let error = field.validate(value);
        self.present_field(field, error);
        error
    }

    fn present_field(&self, field: InquiryField, error: Option<InquiryFieldError>) {
        match error {
            Some(error) => self.form.show_field_error(field, field.error_message(error)),
            None => self.form.clear_field_error(field),
        }
    }

    async fn submit(&self, form: InquiryForm) -> Result<InquirySubmitOutcome, InquirySubmitError> {
        let Some(_guard) = InFlightGuard::acquire(&self.state.in_flight) else {
            tracing::warn!("rejected overlapping inquiry submission");
            return Err(InquirySubmitError::InProgress);
        };

        self.transition(InquirySubmitState::Validating);
        let validated = ValidInquiry::validate(&form);

        for field in InquiryField::ALL {
            self.form.clear_field_error(field);
        }

        let inquiry = match validated {
            Ok(inquiry) => inquiry,
            Err(result) => {
                for (field, error) in result.errors() {
                    self.present_field(field, Some(error));
                }
                if let Some(field) = result.first_invalid() {
                    self.form.focus_field(field);
                }
                self.transition(InquirySubmitState::Invalid);
                return Ok(InquirySubmitOutcome::Invalid(result));
            }
        };

        self.transition(InquirySubmitState::Building);
        self.form.set_submit_busy(true);

        let outcome = match self.dispatch(inquiry).await {
            Ok(Dispatched::Opened(link)) => {
                self.transition(InquirySubmitState::SettledSuccess);
                self.notification.show(Notification::success(SUCCESS_TEXT));
                self.form.reset();
                InquirySubmitOutcome::Sent(link)
            }
            Ok(Dispatched::Navigated(link)) => {
                self.transition(InquirySubmitState::SettledFallback);
                self.notification.show(Notification::success(SUCCESS_TEXT));
                InquirySubmitOutcome::Fallback(link)
            }
            Err(err) => {
                tracing::error!("failed to dispatch inquiry: {err:#}");
                self.transition(InquirySubmitState::Failed);
                self.notification
                    .show(Notification::error(self.config.failure_text()));
                InquirySubmitOutcome::Failed
            }
        };

        self.form.set_submit_busy(false);

        Ok(outcome)
    }

    fn state(&self) -> InquirySubmitState {
        *self.state.current.lock_unpoisoned()
    }
}

enum Dispatched {
    Opened(SubmissionLink),
    Navigated(SubmissionLink),
}

impl<Form, NotificationS, Navigator, Delay, InquiryLink>
    InquiryFeatureServiceImpl<Form, NotificationS, Navigator, Delay, InquiryLink>
where
    Navigator: NavigatorService,
    Delay: DelayService,
    InquiryLink: InquiryLinkService,
{
    async fn dispatch(&self, inquiry: ValidInquiry) -> anyhow::Result<Dispatched> {
        let link = self.inquiry_link.build(inquiry)?;
        tracing::debug!(%link, "built whatsapp link");

        self.delay.delay(self.config.dispatch_delay).await;

        self.transition(InquirySubmitState::Dispatching);
        match self.navigator.open(link.as_url())? {
            OpenOutcome::Opened => Ok(Dispatched::Opened(link)),
            OpenOutcome::Blocked => {
                tracing::info!("opening a new context was blocked, navigating instead");
                self.navigator.navigate(link.as_url())?;
                Ok(Dispatched::Navigated(link))
            }
        }
    }
}

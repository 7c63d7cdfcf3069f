use jmd_models::{inquiry::ValidInquiry, whatsapp::SubmissionLink};

/// Builds the WhatsApp link that carries a formatted inquiry.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait InquiryLinkService: Send + Sync + 'static {
    fn build(&self, inquiry: ValidInquiry) -> anyhow::Result<SubmissionLink>;
}

#[cfg(feature = "mock")]
impl MockInquiryLinkService {
    pub fn with_build(mut self, inquiry: ValidInquiry, result: anyhow::Result<SubmissionLink>) -> Self {
        self.expect_build()
            .once()
            .with(mockall::predicate::eq(inquiry))
            .return_once(|_| result);
        self
    }
}

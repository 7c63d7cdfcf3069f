use std::sync::Arc;

use anyhow::Context;
use jmd_core_inquiry_contracts::link::InquiryLinkService;
use jmd_models::{
    inquiry::{BusinessContext, InquiryMessage, ValidInquiry},
    whatsapp::{SubmissionLink, WhatsAppRecipient},
};
use jmd_templates_contracts::{InquiryMessageTemplate, TemplateService};

#[derive(Debug, Clone)]
pub struct InquiryLinkServiceImpl<Template> {
    template: Template,
    config: InquiryLinkServiceConfig,
}

#[derive(Debug, Clone)]
pub struct InquiryLinkServiceConfig {
    pub domain: Arc<str>,
    pub recipient: WhatsAppRecipient,
    pub business: Arc<BusinessContext>,
}

impl<Template> InquiryLinkServiceImpl<Template> {
    pub fn new(template: Template, config: InquiryLinkServiceConfig) -> Self {
        Self { template, config }
    }
}

impl<Template> InquiryLinkService for InquiryLinkServiceImpl<Template>
where
    Template: TemplateService,
{
    fn build(&self, inquiry: ValidInquiry) -> anyhow::Result<SubmissionLink> {
        let text = self
            .template
            .render(&InquiryMessageTemplate::new(&inquiry, &self.config.business))
            .context("Failed to render the inquiry message")?;
        let message = InquiryMessage::new(inquiry, text);

        SubmissionLink::new(&self.config.domain, &self.config.recipient, &message)
            .context("Failed to build the WhatsApp link")
    }
}

#[cfg(test)]
mod tests {
    use jmd_demo::{
        inquiry::{AMIT_LINK, AMIT_MESSAGE, AMIT_SUBMISSION_LINK, AMIT_VALID, BUSINESS},
        RECIPIENT,
    };
    use jmd_models::whatsapp::DEFAULT_DOMAIN;
    use jmd_templates_contracts::MockTemplateService;
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_config(domain: &str) -> InquiryLinkServiceConfig {
        InquiryLinkServiceConfig {
            domain: domain.into(),
            recipient: RECIPIENT.clone(),
            business: Arc::new(BUSINESS.clone()),
        }
    }

    #[test]
    fn ok() {
        // Arrange
        let template = MockTemplateService::new().with_render(
            InquiryMessageTemplate::new(&AMIT_VALID, &BUSINESS),
            Ok(AMIT_MESSAGE.into()),
        );

        let sut = InquiryLinkServiceImpl::new(template, make_config(DEFAULT_DOMAIN));

        // Act
        let result = sut.build(AMIT_VALID.clone());

        // Assert
        let link = result.unwrap();
        assert_eq!(link, *AMIT_SUBMISSION_LINK);
        assert_eq!(link.as_str(), AMIT_LINK);
        assert_eq!(link.text().as_deref(), Some(AMIT_MESSAGE));
    }

    #[test]
    fn render_error() {
        // Arrange
        let template = MockTemplateService::new().with_render(
            InquiryMessageTemplate::new(&AMIT_VALID, &BUSINESS),
            Err(anyhow::anyhow!("template not found")),
        );

        let sut = InquiryLinkServiceImpl::new(template, make_config(DEFAULT_DOMAIN));

        // Act
        let result = sut.build(AMIT_VALID.clone());

        // Assert
        assert_eq!(
            result.unwrap_err().to_string(),
            "Failed to render the inquiry message"
        );
    }

    #[test]
    fn invalid_domain() {
        // Arrange
        let template = MockTemplateService::new().with_render(
            InquiryMessageTemplate::new(&AMIT_VALID, &BUSINESS),
            Ok(AMIT_MESSAGE.into()),
        );

        let sut = InquiryLinkServiceImpl::new(template, make_config("wa me"));

        // Act
        let result = sut.build(AMIT_VALID.clone());

        // Assert
        assert_eq!(
            result.unwrap_err().to_string(),
            "Failed to build the WhatsApp link"
        );
    }
}

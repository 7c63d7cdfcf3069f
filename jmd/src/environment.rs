use std::sync::Arc;

use jmd_config::Config;
use jmd_core_inquiry_impl::{
    link::{InquiryLinkServiceConfig, InquiryLinkServiceImpl},
    InquiryFeatureConfig, InquiryFeatureServiceImpl,
};
use jmd_host_impl::{
    delay::TokioDelayService, form::HeadlessFormView, navigator::SystemNavigatorService,
    notification::TerminalNotificationService,
};
use jmd_templates_impl::TemplateServiceImpl;

pub type InquiryLink = InquiryLinkServiceImpl<TemplateServiceImpl>;

pub type InquiryFeature = InquiryFeatureServiceImpl<
    HeadlessFormView,
    TerminalNotificationService,
    SystemNavigatorService,
    TokioDelayService,
    InquiryLink,
>;

pub fn inquiry_link(config: &Config) -> anyhow::Result<InquiryLink> {
    Ok(InquiryLinkServiceImpl::new(
        TemplateServiceImpl::new()?,
        InquiryLinkServiceConfig {
            domain: config.whatsapp.domain.as_str().into(),
            recipient: config.whatsapp.recipient.clone(),
            business: Arc::new(config.business.context()),
        },
    ))
}

pub fn inquiry_feature(
    config: &Config,
    form: HeadlessFormView,
    navigator: SystemNavigatorService,
) -> anyhow::Result<InquiryFeature> {
    Ok(InquiryFeatureServiceImpl::new(
        form,
        TerminalNotificationService,
        navigator,
        TokioDelayService,
        inquiry_link(config)?,
        InquiryFeatureConfig {
            dispatch_delay: *config.inquiry.dispatch_delay,
            fallback_phones: config.contact.fallback_phones.as_slice().into(),
        },
    ))
}

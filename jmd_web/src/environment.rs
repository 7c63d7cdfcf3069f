use std::sync::Arc;

use jmd_config::Config;
use jmd_core_inquiry_impl::{
    link::{InquiryLinkServiceConfig, InquiryLinkServiceImpl},
    InquiryFeatureConfig, InquiryFeatureServiceImpl,
};
use jmd_core_page_impl::{PageFeatureConfig, PageFeatureServiceImpl};
use jmd_templates_impl::TemplateServiceImpl;

pub type InquiryLink = InquiryLinkServiceImpl<TemplateServiceImpl>;

pub type InquiryFeature<Form, Notification, Navigator, Delay> =
    InquiryFeatureServiceImpl<Form, Notification, Navigator, Delay, InquiryLink>;

pub type PageFeature<ThemeV, Header, Navigator> =
    PageFeatureServiceImpl<ThemeV, Header, Navigator>;

/// The host capabilities the page needs.
pub struct Hosts<Form, Notification, Navigator, Delay, ThemeV, Header, MapNavigator> {
    pub form: Form,
    pub notification: Notification,
    pub navigator: Navigator,
    pub delay: Delay,
    pub theme: ThemeV,
    pub header: Header,
    pub map_navigator: MapNavigator,
}

pub struct Environment<Form, Notification, Navigator, Delay, ThemeV, Header, MapNavigator> {
    pub inquiry: InquiryFeature<Form, Notification, Navigator, Delay>,
    pub page: PageFeature<ThemeV, Header, MapNavigator>,
}

impl<Form, Notification, Navigator, Delay, ThemeV, Header, MapNavigator>
    Environment<Form, Notification, Navigator, Delay, ThemeV, Header, MapNavigator>
{
    pub fn new(
        config: &Config,
        hosts: Hosts<Form, Notification, Navigator, Delay, ThemeV, Header, MapNavigator>,
    ) -> anyhow::Result<Self> {
        let inquiry_link = InquiryLinkServiceImpl::new(
            TemplateServiceImpl::new()?,
            InquiryLinkServiceConfig {
                domain: config.whatsapp.domain.as_str().into(),
                recipient: config.whatsapp.recipient.clone(),
                business: Arc::new(config.business.context()),
            },
        );

        let inquiry = InquiryFeatureServiceImpl::new(
            hosts.form,
            hosts.notification,
            hosts.navigator,
            hosts.delay,
            inquiry_link,
            InquiryFeatureConfig {
                dispatch_delay: *config.inquiry.dispatch_delay,
                fallback_phones: config.contact.fallback_phones.as_slice().into(),
            },
        );

        let page = PageFeatureServiceImpl::new(
            hosts.theme,
            hosts.header,
            hosts.map_navigator,
            PageFeatureConfig {
                header_hide_threshold: config.page.header_hide_threshold,
                maps_url: Arc::new(config.business.maps_url.clone()),
            },
        );

        Ok(Self { inquiry, page })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use jmd_core_inquiry_contracts::{InquiryFeatureService, InquirySubmitOutcome};
    use jmd_core_inquiry_impl::SUCCESS_TEXT;
    use jmd_core_page_contracts::PageFeatureService;
    use jmd_demo::inquiry::{AMIT, AMIT_LINK};
    use jmd_host_contracts::{
        delay::MockDelayService,
        form::MockFormView,
        navigator::{MockNavigatorService, OpenOutcome},
        notification::MockNotificationService,
        page::{MockHeaderView, MockThemeView},
    };
    use jmd_models::{notification::Notification, page::Theme};
    use jmd_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn default_config_submits_demo_inquiry() {
        // Arrange
        let config = jmd_config::load_default().unwrap();

        let hosts = Hosts {
            form: MockFormView::new()
                .with_clear_all()
                .with_set_submit_busy(true)
                .with_set_submit_busy(false)
                .with_reset(),
            notification: MockNotificationService::new()
                .with_show(Notification::success(SUCCESS_TEXT)),
            navigator: MockNavigatorService::new()
                .with_open(AMIT_LINK.parse().unwrap(), Ok(OpenOutcome::Opened)),
            delay: MockDelayService::new().with_delay(Duration::from_millis(500)),
            theme: MockThemeView::new()
                .with_prefers_dark(false)
                .with_apply(Theme::Light),
            header: MockHeaderView::new(),
            map_navigator: MockNavigatorService::new(),
        };

        let sut = Environment::new(&config, hosts).unwrap();

        // Act
        let theme = sut.page.init_theme();
        let result = sut.inquiry.submit(AMIT.clone()).await;

        // Assert
        assert_eq!(theme, Theme::Light);
        assert_matches!(result, Ok(InquirySubmitOutcome::Sent(link)) if link.as_str() == AMIT_LINK);
    }
}

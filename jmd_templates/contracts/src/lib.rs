use jmd_models::inquiry::{BusinessContext, ValidInquiry};
use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: anyhow::Result<String>,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| result);
        self
    }
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = stringify!($ident);
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    InquiryMessageTemplate("inquiry_message.txt"),
}

/// The message a visitor sends to the business via WhatsApp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryMessageTemplate {
    pub business_name: String,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub query: String,
    pub areas: Vec<String>,
    pub services: Vec<String>,
}

impl InquiryMessageTemplate {
    pub fn new(inquiry: &ValidInquiry, business: &BusinessContext) -> Self {
        Self {
            business_name: business.name.clone(),
            name: inquiry.name().into(),
            email: inquiry.email().into(),
            contact: inquiry.contact().into(),
            query: inquiry.query().into(),
            areas: business.areas.clone(),
            services: business.services.clone(),
        }
    }
}

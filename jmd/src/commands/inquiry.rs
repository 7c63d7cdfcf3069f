use anyhow::bail;
use clap::Args;
use jmd_config::Config;
use jmd_core_inquiry_contracts::{
    link::InquiryLinkService, InquiryFeatureService, InquirySubmitOutcome,
};
use jmd_host_impl::{form::HeadlessFormView, navigator::SystemNavigatorService};
use jmd_models::{
    inquiry::{InquiryField, InquiryForm, ValidInquiry, ValidationResult},
    whatsapp::SubmissionLink,
};

use crate::environment;

#[derive(Debug, Clone, Args)]
pub struct InquiryArgs {
    /// Full name of the visitor
    #[arg(long, default_value = "")]
    pub name: String,
    /// Email address of the visitor
    #[arg(long, default_value = "")]
    pub email: String,
    /// Indian mobile number of the visitor
    #[arg(long, default_value = "")]
    pub contact: String,
    /// What the visitor is looking for
    #[arg(long, default_value = "")]
    pub query: String,
}

impl From<InquiryArgs> for InquiryForm {
    fn from(args: InquiryArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            contact: args.contact,
            query: args.query,
        }
    }
}

/// Run the full submission pipeline as the website would.
pub async fn submit(config: Config, args: InquiryArgs, no_open: bool) -> anyhow::Result<()> {
    let navigator = if no_open {
        SystemNavigatorService::disabled()
    } else {
        SystemNavigatorService::new()
    };
    let form = HeadlessFormView::default();
    let feature = environment::inquiry_feature(&config, form.clone(), navigator)?;

    match feature.submit(args.into()).await? {
        InquirySubmitOutcome::Invalid(result) => {
            print_errors(&result);
            bail!("The inquiry is invalid");
        }
        InquirySubmitOutcome::Sent(link) => println!("{link}"),
        InquirySubmitOutcome::Fallback(_) => {}
        InquirySubmitOutcome::Failed => bail!("Failed to hand the inquiry over to WhatsApp"),
    }

    tracing::debug!(form = ?form.snapshot(), "submission finished");

    Ok(())
}

/// Print the WhatsApp link for an inquiry without opening it.
pub fn link(config: Config, args: InquiryArgs) -> anyhow::Result<()> {
    println!("{}", build_link(&config, args.into())?);
    Ok(())
}

/// Print the validation result of every field.
pub fn validate(args: InquiryArgs) -> anyhow::Result<()> {
    let result = InquiryForm::from(args).validate();

    for field in InquiryField::ALL {
        match result.get(field) {
            Some(error) => println!("{field}: {}", field.error_message(error)),
            None => println!("{field}: ok"),
        }
    }

    if !result.is_valid() {
        bail!("The inquiry is invalid");
    }

    Ok(())
}

fn build_link(config: &Config, form: InquiryForm) -> anyhow::Result<SubmissionLink> {
    let inquiry = match ValidInquiry::validate(&form) {
        Ok(inquiry) => inquiry,
        Err(result) => {
            print_errors(&result);
            bail!("The inquiry is invalid");
        }
    };

    environment::inquiry_link(config)?.build(inquiry)
}

fn print_errors(result: &ValidationResult) {
    for (field, error) in result.errors() {
        eprintln!("{field}: {}", field.error_message(error));
    }
}

#[cfg(test)]
mod tests {
    use jmd_demo::inquiry::{AMIT, AMIT_LINK, GARBAGE};
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(form: &InquiryForm) -> InquiryArgs {
        InquiryArgs {
            name: form.name.clone(),
            email: form.email.clone(),
            contact: form.contact.clone(),
            query: form.query.clone(),
        }
    }

    #[test]
    fn build_link_ok() {
        // Arrange
        let config = jmd_config::load_default().unwrap();

        // Act
        let result = build_link(&config, args(&AMIT).into());

        // Assert
        assert_eq!(result.unwrap().as_str(), AMIT_LINK);
    }

    #[test]
    fn build_link_invalid() {
        // Arrange
        let config = jmd_config::load_default().unwrap();

        // Act
        let result = build_link(&config, args(&GARBAGE).into());

        // Assert
        assert_eq!(result.unwrap_err().to_string(), "The inquiry is invalid");
    }

    #[test]
    fn validate_ok() {
        validate(args(&AMIT)).unwrap();
        validate(args(&GARBAGE)).unwrap_err();
    }

    #[tokio::test(start_paused = true)]
    async fn submit_without_opener_falls_back() {
        // Arrange
        let config = jmd_config::load_default().unwrap();

        // Act
        let result = submit(config, args(&AMIT), true).await;

        // Assert
        result.unwrap();
    }
}

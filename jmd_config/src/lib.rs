use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{File, FileFormat};
use jmd_models::{inquiry::BusinessContext, whatsapp::WhatsAppRecipient, PhoneNumber};
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

/// The built-in configuration, always loaded first.
pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Environment variable with a colon separated list of additional config
/// files that override the defaults.
pub const CONFIG_PATHS_ENV: &str = "JMD_CONFIG";

/// Loads the built-in configuration and merges the files listed in
/// [`CONFIG_PATHS_ENV`] on top of it.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var_os(CONFIG_PATHS_ENV)
        .map(|paths| std::env::split_paths(&paths).collect::<Vec<_>>())
        .unwrap_or_default();
    load_paths(&paths)
}

/// Loads only the built-in configuration.
pub fn load_default() -> anyhow::Result<Config> {
    load_paths::<PathBuf>(&[])
}

pub fn load_paths<P: AsRef<Path>>(paths: &[P]) -> anyhow::Result<Config> {
    let builder =
        config::Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));
    paths
        .iter()
        .try_fold(builder, |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub whatsapp: WhatsAppConfig,
    pub contact: ContactConfig,
    pub business: BusinessConfig,
    pub inquiry: InquiryConfig,
    pub notification: NotificationConfig,
    pub page: PageConfig,
}

#[derive(Debug, Deserialize)]
pub struct WhatsAppConfig {
    pub domain: String,
    pub recipient: WhatsAppRecipient,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub fallback_phones: Vec<PhoneNumber>,
}

#[derive(Debug, Deserialize)]
pub struct BusinessConfig {
    pub name: String,
    pub areas: Vec<String>,
    pub services: Vec<String>,
    pub maps_url: Url,
}

impl BusinessConfig {
    pub fn context(&self) -> BusinessContext {
        BusinessContext {
            name: self.name.clone(),
            areas: self.areas.clone(),
            services: self.services.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct InquiryConfig {
    pub dispatch_delay: Duration,
}

#[derive(Debug, Deserialize)]
pub struct NotificationConfig {
    pub ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct PageConfig {
    pub header_hide_threshold: f64,
}

use jmd_models::page::{HeaderVisibility, Theme};

/// Page chrome around the inquiry form: color scheme, header and the
/// location link.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PageFeatureService: Send + Sync + 'static {
    /// Pick the initial theme from the visitor's preference and apply it.
    fn init_theme(&self) -> Theme;

    /// The theme currently applied to the page.
    fn theme(&self) -> Theme;

    /// Switch to the other theme and apply it.
    fn toggle_theme(&self) -> Theme;

    /// Update the header for a new scroll offset.
    fn on_scroll(&self, offset: f64) -> HeaderVisibility;

    /// Open the business location in a maps application.
    fn open_map(&self) -> anyhow::Result<()>;
}

#[cfg(feature = "mock")]
impl MockPageFeatureService {
    pub fn with_toggle_theme(mut self, result: Theme) -> Self {
        self.expect_toggle_theme().once().return_const(result);
        self
    }

    pub fn with_on_scroll(mut self, offset: f64, result: HeaderVisibility) -> Self {
        self.expect_on_scroll()
            .once()
            .with(mockall::predicate::eq(offset))
            .return_const(result);
        self
    }
}

use jmd_models::page::{HeaderVisibility, Theme};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ThemeView: Send + Sync + 'static {
    /// Whether the visitor's system prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;

    /// Apply `theme` to the page and update the toggle icon.
    fn apply(&self, theme: Theme);
}

#[cfg(feature = "mock")]
impl MockThemeView {
    pub fn with_prefers_dark(mut self, prefers_dark: bool) -> Self {
        self.expect_prefers_dark().once().return_const(prefers_dark);
        self
    }

    pub fn with_apply(mut self, theme: Theme) -> Self {
        self.expect_apply()
            .once()
            .with(mockall::predicate::eq(theme))
            .return_const(());
        self
    }
}

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait HeaderView: Send + Sync + 'static {
    fn set_visibility(&self, visibility: HeaderVisibility);
}

#[cfg(feature = "mock")]
impl MockHeaderView {
    pub fn with_set_visibility(mut self, visibility: HeaderVisibility) -> Self {
        self.expect_set_visibility()
            .once()
            .with(mockall::predicate::eq(visibility))
            .return_const(());
        self
    }
}

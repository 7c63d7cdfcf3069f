use url::Url;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NavigatorService: Send + Sync + 'static {
    /// Open `url` in a new browsing context.
    ///
    /// Returns [`OpenOutcome::Blocked`] if the host refused to hand out the
    /// new context, e.g. because of a popup blocker.
    fn open(&self, url: &Url) -> anyhow::Result<OpenOutcome>;

    /// Navigate the current browsing context to `url`.
    fn navigate(&self, url: &Url) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    Blocked,
}

#[cfg(feature = "mock")]
impl MockNavigatorService {
    pub fn with_open(mut self, url: Url, result: anyhow::Result<OpenOutcome>) -> Self {
        self.expect_open()
            .once()
            .with(mockall::predicate::eq(url))
            .return_once(|_| result);
        self
    }

    pub fn with_navigate(mut self, url: Url, result: anyhow::Result<()>) -> Self {
        self.expect_navigate()
            .once()
            .with(mockall::predicate::eq(url))
            .return_once(|_| result);
        self
    }
}

use jmd_models::notification::Notification;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NotificationService: Send + Sync + 'static {
    /// Show a transient notification, replacing any notification that is
    /// still visible.
    fn show(&self, notification: Notification);
}

#[cfg(feature = "mock")]
impl MockNotificationService {
    pub fn with_show(mut self, notification: Notification) -> Self {
        self.expect_show()
            .once()
            .with(mockall::predicate::eq(notification))
            .return_const(());
        self
    }
}

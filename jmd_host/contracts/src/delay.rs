use std::{future::Future, time::Duration};

/// Suspends the current task without blocking the host's event loop.
///
/// The returned future is not required to be `Send`: browser timers can only
/// be awaited on the thread that created them.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait DelayService: Send + Sync + 'static {
    fn delay(&self, duration: Duration) -> impl Future<Output = ()>;
}

#[cfg(feature = "mock")]
impl MockDelayService {
    pub fn with_delay(mut self, duration: Duration) -> Self {
        self.expect_delay()
            .once()
            .with(mockall::predicate::eq(duration))
            .return_once(|_| Box::pin(std::future::ready(())));
        self
    }
}

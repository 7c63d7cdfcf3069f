use std::{future::Future, time::Duration};

use jmd_host_contracts::delay::DelayService;

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelayService;

impl DelayService for TokioDelayService {
    fn delay(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

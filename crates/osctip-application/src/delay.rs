//! Response delay implementations.

use async_trait::async_trait;
use std::time::Duration;

use osctip_core::clock::ResponseDelay;

/// Sleeps for a fixed duration on the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct TokioDelay {
    duration: Duration,
}

impl TokioDelay {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

#[async_trait]
impl ResponseDelay for TokioDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.duration).await;
    }
}

/// Resolves immediately. Used by tests and the `--no-delay` CLI mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl ResponseDelay for NoDelay {
    async fn wait(&self) {}
}

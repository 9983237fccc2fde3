//! Time and scheduling seams.
//!
//! The pipeline never reads the wall clock or sleeps directly; both go
//! through injected traits so tests run deterministically and without
//! real waits.

use async_trait::async_trait;

/// Source of the current time in epoch milliseconds.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall-clock implementation backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// The artificial pause before a simulated response resolves.
///
/// This is the single suspension point of the message pipeline. There is no
/// cancellation: once awaited, `wait` always completes.
#[async_trait]
pub trait ResponseDelay: Send + Sync {
    async fn wait(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now_millis();
        let b = clock.now_millis();
        assert!(b >= a);
        assert!(a > 1_600_000_000_000); // sanity: after Sep 2020
    }
}

//! The simulated response engine.
//!
//! `Responder` is the seam the message pipeline suspends on. The production
//! implementation pauses for the configured thinking time and then runs the
//! pure classifier with a seeded RNG; there is no real I/O behind it.

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::sync::Mutex;

use osctip_core::classifier::{ClassifiedResponse, classify};
use osctip_core::clock::ResponseDelay;
use osctip_core::error::Result;

/// Produces the assistant reply for the latest user message.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Resolves to a reply after the engine's own pacing. Once invoked it
    /// always resolves; there is no cancellation path.
    async fn respond(&self, latest_user_message: &str) -> Result<ClassifiedResponse>;
}

/// Classifier-backed responder with injected delay and RNG.
pub struct SimulatedResponder {
    delay: Arc<dyn ResponseDelay>,
    rng: Mutex<StdRng>,
}

impl SimulatedResponder {
    /// Creates a responder with the given pacing and an optional RNG seed.
    /// An unset seed draws entropy from the OS.
    pub fn new(delay: Arc<dyn ResponseDelay>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            delay,
            rng: Mutex::new(rng),
        }
    }
}

#[async_trait]
impl Responder for SimulatedResponder {
    async fn respond(&self, latest_user_message: &str) -> Result<ClassifiedResponse> {
        self.delay.wait().await;

        let mut rng = self.rng.lock().await;
        Ok(classify(latest_user_message, &mut *rng))
    }
}

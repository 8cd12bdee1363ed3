//! Simulated assistant
//!
//! Echoes the user's message after a fixed delay. The delay lives here, in
//! the caller layer, and never inside the login pipeline.

use log::debug;
use std::time::Duration;
use tokio::time::sleep;

#[derive(Debug, Clone)]
pub struct Responder {
    delay: Duration,
}

impl Responder {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Reply text for `message`, without waiting
    pub fn compose(message: &str) -> String {
        format!(
            "I received your message: \"{message}\". This is a simulated response. \
             In the next phase, I'll be connected to DeepSeek AI to provide intelligent responses!"
        )
    }

    /// Waits the configured delay, then returns the reply.
    pub async fn reply(&self, message: &str) -> String {
        debug!("Simulating assistant latency of {:?}", self.delay);
        sleep(self.delay).await;
        Self::compose(message)
    }
}

//! Shared state for the API layer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::generation::ChartGenerator;
use crate::workflow::ChartWorkflow;

/// Shared context for all routes and middleware. One per process,
/// cloned per request; the workflow holds the single generation client
/// handle constructed at startup.
#[derive(Clone)]
pub struct ApiContext {
    pub workflow: Arc<ChartWorkflow>,
    pub rate_limiter: Arc<Mutex<RateLimiter>>,
}

impl ApiContext {
    pub fn new(generator: Arc<dyn ChartGenerator>, timeout_secs: u64) -> Self {
        Self {
            workflow: Arc::new(ChartWorkflow::new(generator, timeout_secs)),
            rate_limiter: Arc::new(Mutex::new(RateLimiter::new())),
        }
    }
}

/// Generation requests allowed per client per minute.
const GENERATE_PER_MINUTE: u32 = 10;
/// Generation requests allowed per client per 15-minute window.
const GENERATE_PER_WINDOW: u32 = 100;
/// The long window length.
const WINDOW: Duration = Duration::from_secs(15 * 60);

/// Per-client sliding-window rate limiter for the generation endpoint.
pub struct RateLimiter {
    windows: HashMap<String, Vec<Instant>>,
    per_minute: u32,
    per_window: u32,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            per_minute: GENERATE_PER_MINUTE,
            per_window: GENERATE_PER_WINDOW,
        }
    }

    #[cfg(test)]
    pub fn with_limits(per_minute: u32, per_window: u32) -> Self {
        Self {
            windows: HashMap::new(),
            per_minute,
            per_window,
        }
    }

    /// Check whether a client is within limits. Returns `Ok(())` or
    /// `Err(retry_after_secs)` when exceeded.
    pub fn check(&mut self, client: &str) -> Result<(), u64> {
        let now = Instant::now();
        let entries = self.windows.entry(client.to_string()).or_default();

        entries.retain(|ts| now.duration_since(*ts) < WINDOW);

        let last_minute = entries
            .iter()
            .filter(|ts| now.duration_since(**ts) < Duration::from_secs(60))
            .count() as u32;
        if last_minute >= self.per_minute {
            return Err(60);
        }

        if entries.len() as u32 >= self.per_window {
            return Err(WINDOW.as_secs());
        }

        entries.push(now);
        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

//! Chartwright: nursing documentation generation service.
//!
//! Structured assessment input comes in over HTTP, gets classified into
//! a tool category, enriched with rule-derived clinical signals, and
//! turned into a chart by the Gemini generation API. Request handling
//! is stateless; the only shared handles are the generation client and
//! the rate limiter, both constructed once at startup.

pub mod api;
pub mod config;
pub mod generation;
pub mod models;
pub mod render;
pub mod routing;
pub mod rules;
pub mod templates;
pub mod workflow;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{server, ApiContext};
use crate::generation::{ChartGenerator, GeminiClient};

/// Initialize logging, build the client handle, and serve until
/// interrupted.
pub async fn run() -> Result<(), api::server::ServeError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let client = GeminiClient::from_env();
    if !client.is_configured() {
        tracing::warn!("GEMINI_API_KEY not set; generation requests will fail until configured");
    } else {
        tracing::info!(model = client.model(), "generation client ready");
    }

    let ctx = ApiContext::new(Arc::new(client), config::generation_timeout_secs());

    server::serve(config::bind_addr(), ctx).await
}

//! Process configuration: constants plus environment overrides.
//!
//! Everything has a working default so the service starts with no
//! environment at all (generation then fails per-request until
//! `GEMINI_API_KEY` is provided).

use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "Chartwright";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default bind address when `CHARTWRIGHT_ADDR` is unset.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Default Gemini model when `GEMINI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default Gemini API endpoint base.
pub const DEFAULT_GENERATION_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default upstream timeout in seconds when `GEMINI_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Tracing filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    "info,chartwright=debug".to_string()
}

/// Address the HTTP server binds to.
pub fn bind_addr() -> SocketAddr {
    let raw = std::env::var("CHARTWRIGHT_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    parse_addr(&raw)
}

/// Parse a bind address, falling back to the default on malformed input.
pub fn parse_addr(raw: &str) -> SocketAddr {
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(raw, "invalid CHARTWRIGHT_ADDR, using default");
        DEFAULT_ADDR.parse().expect("default address is valid")
    })
}

/// Gemini API key. Empty when unset; generation reports a configuration
/// error per-request rather than refusing to start.
pub fn gemini_api_key() -> String {
    std::env::var("GEMINI_API_KEY").unwrap_or_default()
}

/// Gemini model identifier.
pub fn gemini_model() -> String {
    std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string())
}

/// Gemini API base URL. Overridable for tests and proxies.
pub fn generation_base_url() -> String {
    std::env::var("GEMINI_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_GENERATION_BASE_URL.to_string())
}

/// Upstream generation timeout in seconds.
pub fn generation_timeout_secs() -> u64 {
    std::env::var("GEMINI_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

/// Allowed CORS origin. `None` means same-origin only.
pub fn cors_origin() -> Option<String> {
    std::env::var("CORS_ORIGIN").ok().filter(|v| !v.is_empty())
}

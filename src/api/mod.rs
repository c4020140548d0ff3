//! HTTP API.
//!
//! Routes are nested under `/api/` and the generation endpoint sits
//! behind a per-client rate limit. The router is composable;
//! `charting_router()` returns a `Router` that can be mounted on any
//! axum server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::charting_router;
pub use types::ApiContext;

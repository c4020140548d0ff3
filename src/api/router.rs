//! Route table.
//!
//! Returns a composable `Router` with all endpoints under `/api/`.
//! Only the generation endpoint is rate limited; catalog and validation
//! endpoints are cheap and unlimited.
//!
//! Middleware uses `Extension<ApiContext>` (injected as the outermost
//! layer). Endpoint handlers use `State<ApiContext>` (provided via
//! `with_state`).

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Extension, Router};
use tower_http::cors::CorsLayer;

use super::endpoints::{charting, health};
use super::middleware;
use super::types::ApiContext;
use crate::config;

/// Build the charting API router.
pub fn charting_router(ctx: ApiContext) -> Router {
    let generation = Router::new()
        .route("/charting/generate", post(charting::generate))
        .layer(axum::middleware::from_fn(middleware::limit_generation));

    let open = Router::new()
        .route("/health", get(health::check))
        .route("/charting/validate", post(charting::validate))
        .route("/charting/templates", get(charting::list_templates))
        .route("/charting/guidelines", get(charting::list_guidelines))
        .route("/charting/test-connection", get(charting::test_connection));

    let mut router = Router::new()
        .nest("/api", generation.merge(open))
        .layer(Extension(ctx.clone()))
        .with_state(ctx);

    if let Some(origin) = config::cors_origin() {
        match origin.parse::<HeaderValue>() {
            Ok(value) => {
                router = router.layer(
                    CorsLayer::new()
                        .allow_origin(value)
                        .allow_methods(tower_http::cors::AllowMethods::mirror_request())
                        .allow_headers(tower_http::cors::AllowHeaders::mirror_request()),
                );
            }
            Err(_) => tracing::warn!(origin, "invalid CORS_ORIGIN ignored"),
        }
    }

    router
}

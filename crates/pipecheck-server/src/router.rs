//! Axum router setup for the pipecheck server

use axum::http::{HeaderValue, Method, header::CONTENT_TYPE};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::handlers::{health_check, parse_pipeline, ping};

/// Create the axum router with all routes.
pub fn create_router(allowed_origin: HeaderValue) -> Router {
    Router::new()
        // The one analysis endpoint
        .route("/pipelines/parse", post(parse_pipeline))
        // Liveness
        .route("/", get(ping))
        .route("/api/health", get(health_check))
        // CORS for the browser frontend; credentialed, so the origin must be
        // named explicitly rather than wildcarded
        .layer(
            CorsLayer::new()
                .allow_origin(allowed_origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([CONTENT_TYPE])
                .allow_credentials(true),
        )
}

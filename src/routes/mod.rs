//! Router assembly: API and common routes under one tower middleware stack.

mod bakery;
mod common;

pub use bakery::bakery_routes;
pub use common::common_routes;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

async fn not_found() -> AppError {
    AppError::NotFound("Not found".into())
}

/// Full application: every route, a JSON 404 fallback, request tracing, a body size cap and a per-request timeout.
/// The timeout sits innermost so it wraps the router's own response body.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(bakery_routes(state.clone()))
        .merge(common_routes(state))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(config.body_limit))
                .layer(TimeoutLayer::new(config.request_timeout)),
        )
}

//! Estimator API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//!
//! Middleware stack (outermost → innermost):
//! 1. Extension(ApiContext) → 2. CORS → 3. Request log

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Build the estimator API router.
///
/// Middleware uses `Extension<ApiContext>` (injected as the outermost layer).
/// Endpoint handlers use `State<ApiContext>` (provided via `with_state`).
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn estimator_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/", get(endpoints::home::welcome))
        .route("/estimate", post(endpoints::estimate::json))
        .route("/estimate/:format", post(endpoints::estimate::formatted))
        .route("/logs", get(endpoints::logs::list))
        .fallback(endpoints::not_found)
        .with_state(ctx.clone())
        .layer(
            ServiceBuilder::new()
                // Extension must be outermost so middleware can extract ApiContext
                .layer(axum::Extension(ctx))
                .layer(CorsLayer::permissive())
                .layer(axum::middleware::from_fn(middleware::request_log::record)),
        )
}

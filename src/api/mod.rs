//! HTTP boundary for the estimator.
//!
//! Decodes requests, calls `estimator::estimate`, renders JSON or XML, and
//! records every request in the request log. Routes:
//! `GET /`, `POST /estimate`, `POST /estimate/:format`, `GET /logs`.
//!
//! The router is composable — `estimator_router()` returns a `Router`
//! that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;
pub mod xml;

pub use error::ApiError;
pub use router::estimator_router;
pub use server::{EstimatorServer, ServerError, ServerSession};
pub use types::{ApiContext, ResponseFormat};

//! API endpoint handlers.
//!
//! Handlers decode the request, hand the input to the estimator, and
//! serialize what comes back. No estimation logic lives here.

pub mod estimate;
pub mod home;
pub mod logs;

use crate::api::error::ApiError;
use axum::http::{Method, Uri};

/// Fallback for unknown routes.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {method} {}", uri.path()))
}

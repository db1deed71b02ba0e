//! Request logging middleware.
//!
//! Times each request from receipt to response and appends
//! `{method, path, status, duration}` to the request log store. The store
//! is rewritten to disk in a background task so persistence never delays
//! or fails the response.

use std::time::Instant;

use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::api::types::ApiContext;
use crate::request_log::RequestLogEntry;

/// Record every handled request.
/// Accesses `ApiContext` from request extensions.
pub async fn record(req: Request<axum::body::Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let ctx = req.extensions().get::<ApiContext>().cloned();

    let response = next.run(req).await;

    if let Some(ctx) = ctx {
        let status = response.status().as_u16();
        let entry = RequestLogEntry::new(&method, &path, status, start.elapsed());
        tracing::debug!(
            method = %entry.method,
            path = %entry.path,
            status,
            duration_ms = %entry.duration,
            "Request handled"
        );

        ctx.log_store.append(entry).await;

        let store = ctx.log_store.clone();
        tokio::spawn(async move {
            if let Err(e) = store.persist().await {
                tracing::warn!(path = %store.path().display(), "Failed to persist request log: {e}");
            }
        });
    }

    response
}

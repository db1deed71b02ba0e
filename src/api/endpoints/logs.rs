//! Request log listing.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::endpoints::home::StatusMessage;
use crate::api::types::ApiContext;
use crate::request_log;

pub const NO_LOGS_MESSAGE: &str = "There are no request logs yet.";

/// `GET /logs` — tab-separated plain-text listing of handled requests.
pub async fn list(State(ctx): State<ApiContext>) -> Response {
    let entries = ctx.log_store.entries().await;
    if entries.is_empty() {
        return Json(StatusMessage {
            status: 200,
            message: NO_LOGS_MESSAGE,
        })
        .into_response();
    }

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        request_log::render_lines(&entries),
    )
        .into_response()
}

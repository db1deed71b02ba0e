//! Welcome endpoint.

use axum::Json;
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to the on-covid-19 app.";

/// `{status, message}` body shared by informational responses.
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub status: u16,
    pub message: &'static str,
}

/// `GET /` — service greeting.
pub async fn welcome() -> Json<StatusMessage> {
    Json(StatusMessage {
        status: 200,
        message: WELCOME_MESSAGE,
    })
}

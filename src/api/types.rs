//! Shared types for the API layer.

use std::sync::Arc;

use crate::request_log::RequestLogStore;

// ═══════════════════════════════════════════════════════════
// API context — shared state for the router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub log_store: Arc<RequestLogStore>,
    /// Run boundary validation before estimating.
    pub validate_input: bool,
}

impl ApiContext {
    pub fn new(log_store: Arc<RequestLogStore>, validate_input: bool) -> Self {
        Self {
            log_store,
            validate_input,
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Response format
// ═══════════════════════════════════════════════════════════

/// Serialization requested through `POST /estimate/:format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Xml,
}

impl ResponseFormat {
    /// Exactly `xml` selects XML; everything else falls back to JSON.
    pub fn from_param(param: &str) -> Self {
        if param == "xml" {
            ResponseFormat::Xml
        } else {
            ResponseFormat::Json
        }
    }
}

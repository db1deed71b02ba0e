//! Estimate endpoints.
//!
//! Two endpoints:
//! - `POST /estimate` — JSON response
//! - `POST /estimate/:format` — `xml` for XML, anything else for JSON

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::extract::EstimateInput;
use crate::api::types::{ApiContext, ResponseFormat};
use crate::api::xml;
use crate::estimator::{self, InputData};

const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// `POST /estimate` — estimate rendered as JSON.
pub async fn json(
    State(ctx): State<ApiContext>,
    EstimateInput(input): EstimateInput,
) -> Result<Response, ApiError> {
    respond(&ctx, input, ResponseFormat::Json)
}

/// `POST /estimate/:format` — estimate rendered in the requested format.
pub async fn formatted(
    State(ctx): State<ApiContext>,
    Path(format): Path<String>,
    EstimateInput(input): EstimateInput,
) -> Result<Response, ApiError> {
    respond(&ctx, input, ResponseFormat::from_param(&format))
}

fn respond(ctx: &ApiContext, input: InputData, format: ResponseFormat) -> Result<Response, ApiError> {
    if ctx.validate_input {
        estimator::validate(&input)?;
    }

    let estimate = estimator::estimate(input);
    tracing::debug!(
        reported_cases = estimate.data.reported_cases,
        time_to_elapse = estimate.data.time_to_elapse,
        ?format,
        "Estimate computed"
    );

    match format {
        ResponseFormat::Json => Ok(Json(estimate).into_response()),
        ResponseFormat::Xml => {
            let value = serde_json::to_value(&estimate)?;
            Ok((
                [(header::CONTENT_TYPE, XML_CONTENT_TYPE)],
                xml::render_document(&value),
            )
                .into_response())
        }
    }
}

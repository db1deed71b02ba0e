//! Request body decoding for estimate endpoints.
//!
//! Accepts the nested JSON input record, or a flat form-encoded body where
//! region fields are sent as `region[avgDailyIncomeInUSD]` and friends.

use axum::extract::{FromRequest, Request};
use axum::http::header;
use axum::{Form, Json};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::estimator::{InputData, PeriodType, Region};

/// Decoded estimator input, whichever encoding the client used.
#[derive(Debug)]
pub struct EstimateInput(pub InputData);

#[axum::async_trait]
impl<S> FromRequest<S> for EstimateInput
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(input) = Json::<InputData>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            Ok(Self(input))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(form) = Form::<FormInput>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            Ok(Self(form.into()))
        } else {
            Err(ApiError::UnsupportedMediaType(content_type))
        }
    }
}

/// Flat form-encoded rendering of [`InputData`].
#[derive(Debug, Deserialize)]
pub struct FormInput {
    #[serde(rename = "region[name]", default)]
    pub region_name: Option<String>,
    #[serde(rename = "region[avgAge]", default)]
    pub region_avg_age: Option<f64>,
    #[serde(rename = "region[avgDailyIncomeInUSD]")]
    pub region_avg_daily_income_in_usd: f64,
    #[serde(rename = "region[avgDailyIncomePopulation]")]
    pub region_avg_daily_income_population: f64,
    #[serde(rename = "periodType", default)]
    pub period_type: PeriodType,
    #[serde(rename = "timeToElapse")]
    pub time_to_elapse: i64,
    #[serde(rename = "reportedCases")]
    pub reported_cases: i64,
    #[serde(default)]
    pub population: Option<i64>,
    #[serde(rename = "totalHospitalBeds")]
    pub total_hospital_beds: i64,
}

impl From<FormInput> for InputData {
    fn from(form: FormInput) -> Self {
        InputData {
            region: Region {
                name: form.region_name,
                avg_age: form.region_avg_age,
                avg_daily_income_in_usd: form.region_avg_daily_income_in_usd,
                avg_daily_income_population: form.region_avg_daily_income_population,
            },
            period_type: form.period_type,
            time_to_elapse: form.time_to_elapse,
            reported_cases: form.reported_cases,
            population: form.population,
            total_hospital_beds: form.total_hospital_beds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(content_type: Option<&str>, body: &str) -> Request {
        let mut builder = axum::http::Request::builder()
            .method("POST")
            .uri("/estimate");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn decodes_json_body() {
        let body = r#"{"region":{"avgDailyIncomeInUSD":1.5,"avgDailyIncomePopulation":0.6},
            "periodType":"weeks","timeToElapse":4,"reportedCases":10,"totalHospitalBeds":5000}"#;
        let EstimateInput(input) = EstimateInput::from_request(request(Some("application/json"), body), &())
            .await
            .unwrap();
        assert_eq!(input.period_type, PeriodType::Weeks);
        assert_eq!(input.time_to_elapse, 4);
        assert_eq!(input.region.avg_daily_income_in_usd, 1.5);
    }

    #[tokio::test]
    async fn decodes_form_body() {
        let body = "region%5Bname%5D=Africa&region%5BavgDailyIncomeInUSD%5D=5\
            &region%5BavgDailyIncomePopulation%5D=0.71&periodType=days\
            &timeToElapse=58&reportedCases=674&population=66622705&totalHospitalBeds=1380614";
        let EstimateInput(input) = EstimateInput::from_request(
            request(Some("application/x-www-form-urlencoded"), body),
            &(),
        )
        .await
        .unwrap();
        assert_eq!(input.region.name.as_deref(), Some("Africa"));
        assert_eq!(input.region.avg_daily_income_population, 0.71);
        assert_eq!(input.reported_cases, 674);
        assert_eq!(input.population, Some(66_622_705));
        assert_eq!(input.total_hospital_beds, 1_380_614);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let err = EstimateInput::from_request(request(Some("application/json"), "{"), &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn missing_required_field_is_bad_request() {
        let body = r#"{"region":{"avgDailyIncomeInUSD":1.5,"avgDailyIncomePopulation":0.6},
            "timeToElapse":4,"totalHospitalBeds":5000}"#;
        let err = EstimateInput::from_request(request(Some("application/json"), body), &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(msg) if msg.contains("reportedCases")));
    }

    #[tokio::test]
    async fn other_content_types_are_unsupported() {
        let err = EstimateInput::from_request(request(Some("text/plain"), "hi"), &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::UnsupportedMediaType(ct) if ct == "text/plain"));

        let err = EstimateInput::from_request(request(None, "{}"), &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::UnsupportedMediaType(_)));
    }
}

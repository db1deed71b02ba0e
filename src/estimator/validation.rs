//! Boundary checks run before the pipeline.
//!
//! The pipeline itself is permissive and computes whatever its inputs imply.
//! These checks let a caller reject inputs that can only produce nonsense.

use super::types::InputData;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("timeToElapse must be greater than zero (got {0})")]
    NonPositiveTimeToElapse(i64),
    #[error("reportedCases must not be negative (got {0})")]
    NegativeReportedCases(i64),
    #[error("totalHospitalBeds must not be negative (got {0})")]
    NegativeHospitalBeds(i64),
    #[error("region.{field} must be a finite number")]
    NonFiniteIncome { field: &'static str },
}

/// Reject inputs the formulas cannot meaningfully handle.
pub fn validate(input: &InputData) -> Result<(), ValidationError> {
    if input.time_to_elapse <= 0 {
        return Err(ValidationError::NonPositiveTimeToElapse(input.time_to_elapse));
    }
    if input.reported_cases < 0 {
        return Err(ValidationError::NegativeReportedCases(input.reported_cases));
    }
    if input.total_hospital_beds < 0 {
        return Err(ValidationError::NegativeHospitalBeds(input.total_hospital_beds));
    }
    if !input.region.avg_daily_income_in_usd.is_finite() {
        return Err(ValidationError::NonFiniteIncome {
            field: "avgDailyIncomeInUSD",
        });
    }
    if !input.region.avg_daily_income_population.is_finite() {
        return Err(ValidationError::NonFiniteIncome {
            field: "avgDailyIncomePopulation",
        });
    }
    Ok(())
}

//! Input and output records for the estimation pipeline.
//!
//! Wire names are camelCase to match what clients send and expect back.
//! Projection fields are `f64` throughout: long horizons overflow any integer
//! type, and NaN/Infinity must flow through rather than fault.

use serde::{Deserialize, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════
// Input
// ═══════════════════════════════════════════════════════════

/// Demographic and income figures for the region under study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_age: Option<f64>,
    #[serde(rename = "avgDailyIncomeInUSD")]
    pub avg_daily_income_in_usd: f64,
    /// Fraction (0–1) of the population earning the average daily income.
    pub avg_daily_income_population: f64,
}

/// Unit in which `timeToElapse` is expressed.
///
/// Unknown units are kept verbatim and treated as days.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PeriodType {
    #[default]
    Days,
    Weeks,
    Months,
    Other(String),
}

impl From<String> for PeriodType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "days" => PeriodType::Days,
            "weeks" => PeriodType::Weeks,
            "months" => PeriodType::Months,
            _ => PeriodType::Other(raw),
        }
    }
}

impl From<PeriodType> for String {
    fn from(period: PeriodType) -> Self {
        match period {
            PeriodType::Days => "days".into(),
            PeriodType::Weeks => "weeks".into(),
            PeriodType::Months => "months".into(),
            PeriodType::Other(raw) => raw,
        }
    }
}

/// Reported figures supplied by the caller. Never mutated by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputData {
    pub region: Region,
    #[serde(default)]
    pub period_type: PeriodType,
    pub time_to_elapse: i64,
    pub reported_cases: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<i64>,
    pub total_hospital_beds: i64,
}

// ═══════════════════════════════════════════════════════════
// Scenarios
// ═══════════════════════════════════════════════════════════

/// The two parallel projection tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Actual infections assumed to be 10× reported.
    Mild,
    /// Actual infections assumed to be 50× reported.
    Severe,
}

/// One value per scenario. Stages map a pair into the next pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioPair<T> {
    pub mild: T,
    pub severe: T,
}

impl<T> ScenarioPair<T> {
    /// Build a pair by evaluating `f` once per scenario.
    pub fn from_fn(mut f: impl FnMut(Scenario) -> T) -> Self {
        Self {
            mild: f(Scenario::Mild),
            severe: f(Scenario::Severe),
        }
    }

    /// Transform both sides independently.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> ScenarioPair<U> {
        ScenarioPair {
            mild: f(self.mild),
            severe: f(self.severe),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Staged projection records
// ═══════════════════════════════════════════════════════════

/// Stage 1 output: current and projected infections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfectionProjection {
    #[serde(serialize_with = "serialize_number")]
    pub currently_infected: f64,
    #[serde(serialize_with = "serialize_number")]
    pub infections_by_requested_time: f64,
}

/// Stage 2 output: stage 1 plus severe cases and remaining bed capacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalProjection {
    #[serde(flatten)]
    pub infections: InfectionProjection,
    #[serde(serialize_with = "serialize_number")]
    pub severe_cases_by_requested_time: f64,
    /// Negative when demand exceeds the beds assumed free.
    #[serde(serialize_with = "serialize_number")]
    pub hospital_beds_by_requested_time: f64,
}

/// Stage 3 output: the complete per-scenario impact record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactProjection {
    #[serde(flatten)]
    pub hospital: HospitalProjection,
    #[serde(
        rename = "casesForICUByRequestedTime",
        serialize_with = "serialize_number"
    )]
    pub cases_for_icu_by_requested_time: f64,
    #[serde(serialize_with = "serialize_number")]
    pub cases_for_ventilators_by_requested_time: f64,
    #[serde(serialize_with = "serialize_number")]
    pub dollars_in_flight: f64,
}

impl ImpactProjection {
    pub fn currently_infected(&self) -> f64 {
        self.hospital.infections.currently_infected
    }

    pub fn infections_by_requested_time(&self) -> f64 {
        self.hospital.infections.infections_by_requested_time
    }

    pub fn severe_cases_by_requested_time(&self) -> f64 {
        self.hospital.severe_cases_by_requested_time
    }

    pub fn hospital_beds_by_requested_time(&self) -> f64 {
        self.hospital.hospital_beds_by_requested_time
    }
}

/// Final result handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    /// Echo of the input the estimate was computed from.
    pub data: InputData,
    pub impact: ImpactProjection,
    pub severe_impact: ImpactProjection,
}

// ═══════════════════════════════════════════════════════════
// Wire helpers
// ═══════════════════════════════════════════════════════════

/// Largest magnitude at which every integer is exactly representable in `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Emit whole numbers as JSON integers and non-finite values as `null`.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        serializer.serialize_none()
    } else if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

//! Outbreak impact estimation pipeline.
//!
//! Three stages run in order, each consuming the previous stage's record
//! and returning a larger one:
//!
//! 1. `infections` — current and projected infections
//! 2. `hospital` — severe cases and remaining bed capacity
//! 3. `critical_care` — ICU/ventilator demand and dollars in flight
//!
//! The pipeline is pure: no I/O, no logging, no shared state. Anomalous
//! inputs (zero horizon, negative counts) produce anomalous numbers rather
//! than errors. Callers that want to reject them use [`validation::validate`]
//! first.

pub mod critical_care;
pub mod hospital;
pub mod infections;
pub mod period;
pub mod types;
pub mod validation;

pub use types::{
    Estimate, HospitalProjection, ImpactProjection, InfectionProjection, InputData, PeriodType,
    Region, Scenario, ScenarioPair,
};
pub use validation::{validate, ValidationError};

/// Run the full pipeline for one input.
pub fn estimate(input: InputData) -> Estimate {
    let days = period::normalize_to_days(&input.period_type, input.time_to_elapse);

    let infections = infections::project_infections(input.reported_cases, days);
    let hospital = hospital::project_hospital_load(infections, input.total_hospital_beds);
    let impact = critical_care::project_critical_care(hospital, &input.region, days);

    Estimate {
        data: input,
        impact: impact.mild,
        severe_impact: impact.severe,
    }
}

//! Stage 3: ICU and ventilator demand, and dollars lost to workforce
//! incapacitation over the projection window.

use super::types::{HospitalProjection, ImpactProjection, Region, ScenarioPair};

/// Share of projected infections needing intensive care.
pub const ICU_RATE: f64 = 0.05;

/// Share of projected infections needing a ventilator.
pub const VENTILATOR_RATE: f64 = 0.02;

/// Income lost per infected person per day of the projection.
///
/// Zero days divides by zero and yields Infinity or NaN; callers that care
/// must reject `timeToElapse <= 0` before the pipeline runs.
pub fn daily_dollar_loss(region: &Region, days_of_projection: i64) -> f64 {
    (region.avg_daily_income_in_usd * region.avg_daily_income_population)
        / days_of_projection as f64
}

/// Stage 3 entry point.
pub fn project_critical_care(
    hospital: ScenarioPair<HospitalProjection>,
    region: &Region,
    days_of_projection: i64,
) -> ScenarioPair<ImpactProjection> {
    let dollar_loss = daily_dollar_loss(region, days_of_projection);
    hospital.map(|hospital| {
        let infections = hospital.infections.infections_by_requested_time;
        ImpactProjection {
            hospital,
            cases_for_icu_by_requested_time: (infections * ICU_RATE).floor(),
            cases_for_ventilators_by_requested_time: (infections * VENTILATOR_RATE).floor(),
            dollars_in_flight: (infections * dollar_loss).floor(),
        }
    })
}

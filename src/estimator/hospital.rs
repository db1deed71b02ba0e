//! Stage 2: severe cases and remaining hospital bed capacity.

use super::types::{HospitalProjection, InfectionProjection, ScenarioPair};

/// Share of projected infections that require hospitalization.
pub const SEVERE_CASE_RATE: f64 = 0.15;

/// Share of total hospital beds assumed free for outbreak patients.
pub const AVAILABLE_BED_RATE: f64 = 0.35;

/// Whole beds assumed free, rounded down.
pub fn available_beds(total_hospital_beds: i64) -> f64 {
    (total_hospital_beds as f64 * AVAILABLE_BED_RATE).floor()
}

pub fn severe_cases(infections_by_requested_time: f64) -> f64 {
    infections_by_requested_time * SEVERE_CASE_RATE
}

/// Stage 2 entry point. Each scenario is measured against the same bed pool.
///
/// A negative `hospital_beds_by_requested_time` is a bed deficit, not an error.
pub fn project_hospital_load(
    infections: ScenarioPair<InfectionProjection>,
    total_hospital_beds: i64,
) -> ScenarioPair<HospitalProjection> {
    let beds = available_beds(total_hospital_beds);
    infections.map(|infections| {
        let severe_cases_by_requested_time = severe_cases(infections.infections_by_requested_time);
        HospitalProjection {
            infections,
            severe_cases_by_requested_time,
            hospital_beds_by_requested_time: beds - severe_cases_by_requested_time,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infections(mild: f64, severe: f64) -> ScenarioPair<InfectionProjection> {
        ScenarioPair {
            mild: InfectionProjection {
                currently_infected: mild,
                infections_by_requested_time: mild,
            },
            severe: InfectionProjection {
                currently_infected: severe,
                infections_by_requested_time: severe,
            },
        }
    }

    #[test]
    fn available_beds_round_down() {
        assert_eq!(available_beds(10), 3.0);
        assert_eq!(available_beds(0), 0.0);
    }

    #[test]
    fn severe_cases_are_fifteen_percent_of_infections() {
        let projected = project_hospital_load(infections(102_400.0, 512_000.0), 5000);
        assert_eq!(
            projected.mild.severe_cases_by_requested_time,
            102_400.0 * SEVERE_CASE_RATE
        );
        assert_eq!(
            projected.severe.severe_cases_by_requested_time,
            512_000.0 * SEVERE_CASE_RATE
        );
    }

    #[test]
    fn bed_capacity_uses_each_scenarios_own_severe_cases() {
        let projected = project_hospital_load(infections(20.0, 100.0), 100);
        let beds = available_beds(100);
        assert_eq!(projected.mild.hospital_beds_by_requested_time, beds - 3.0);
        assert_eq!(projected.severe.hospital_beds_by_requested_time, beds - 15.0);
    }

    #[test]
    fn fractional_severe_cases_are_not_rounded() {
        // floor applies to the free beds only
        let projected = project_hospital_load(infections(10.0, 50.0), 10);
        assert_eq!(projected.mild.hospital_beds_by_requested_time, 3.0 - 1.5);
        assert_eq!(projected.severe.hospital_beds_by_requested_time, 3.0 - 7.5);
    }

    #[test]
    fn deficit_is_reported_as_negative_capacity() {
        let projected = project_hospital_load(infections(102_400.0, 512_000.0), 5000);
        assert!(projected.mild.hospital_beds_by_requested_time < 0.0);
        assert!(projected.severe.hospital_beds_by_requested_time < 0.0);
    }

    #[test]
    fn earlier_fields_are_carried_unchanged() {
        let input = infections(7.0, 35.0);
        let projected = project_hospital_load(input, 1000);
        assert_eq!(projected.mild.infections, input.mild);
        assert_eq!(projected.severe.infections, input.severe);
    }
}

//! Stage 1: current infection estimates and their exponential projection.
//!
//! Actual infections are assumed to be a fixed multiple of reported cases
//! (10× mild, 50× severe) and to double every three days. Only whole
//! three-day periods count.

use super::types::{InfectionProjection, Scenario, ScenarioPair};

pub const MILD_REPORTING_RATIO: f64 = 10.0;
pub const SEVERE_REPORTING_RATIO: f64 = 50.0;

/// Days it takes the infected population to double.
pub const DOUBLING_PERIOD_DAYS: i64 = 3;

impl Scenario {
    /// Assumed ratio of actual to reported infections.
    pub fn reporting_ratio(self) -> f64 {
        match self {
            Scenario::Mild => MILD_REPORTING_RATIO,
            Scenario::Severe => SEVERE_REPORTING_RATIO,
        }
    }
}

/// `2^(days / 3)` with the exponent truncated toward zero.
pub fn growth_multiplier(days_of_projection: i64) -> f64 {
    let doublings = days_of_projection / DOUBLING_PERIOD_DAYS;
    let exponent = doublings.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    2f64.powi(exponent)
}

/// Estimated infections today, per scenario.
pub fn current_infections(reported_cases: i64) -> ScenarioPair<f64> {
    let reported = reported_cases as f64;
    ScenarioPair::from_fn(|scenario| reported * scenario.reporting_ratio())
}

/// Stage 1 entry point.
pub fn project_infections(
    reported_cases: i64,
    days_of_projection: i64,
) -> ScenarioPair<InfectionProjection> {
    let multiplier = growth_multiplier(days_of_projection);
    current_infections(reported_cases).map(|currently_infected| InfectionProjection {
        currently_infected,
        infections_by_requested_time: currently_infected * multiplier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_counts_whole_doubling_periods() {
        let cases = [
            (0, 1.0),
            (1, 1.0),
            (2, 1.0),
            (3, 2.0),
            (4, 2.0),
            (5, 2.0),
            (6, 4.0),
            (9, 8.0),
            (30, 1024.0),
        ];
        for (days, expected) in cases {
            assert_eq!(growth_multiplier(days), expected, "days = {days}");
        }
    }

    #[test]
    fn negative_days_truncate_toward_zero() {
        // -4 / 3 truncates to -1, not -2
        assert_eq!(growth_multiplier(-4), 0.5);
        assert_eq!(growth_multiplier(-2), 1.0);
    }

    #[test]
    fn very_long_horizon_saturates_to_infinity() {
        assert!(growth_multiplier(i64::MAX).is_infinite());
    }

    #[test]
    fn current_infections_apply_reporting_ratios() {
        let current = current_infections(674);
        assert_eq!(current.mild, 6740.0);
        assert_eq!(current.severe, 33700.0);
    }

    #[test]
    fn projection_scales_both_scenarios() {
        let projected = project_infections(10, 30);
        assert_eq!(projected.mild.currently_infected, 100.0);
        assert_eq!(projected.mild.infections_by_requested_time, 102_400.0);
        assert_eq!(projected.severe.currently_infected, 500.0);
        assert_eq!(projected.severe.infections_by_requested_time, 512_000.0);
    }

    #[test]
    fn zero_reported_cases_project_zero() {
        let projected = project_infections(0, 90);
        assert_eq!(projected.mild.infections_by_requested_time, 0.0);
        assert_eq!(projected.severe.infections_by_requested_time, 0.0);
    }

    #[test]
    fn negative_reported_cases_are_not_rejected() {
        let projected = project_infections(-2, 3);
        assert_eq!(projected.mild.currently_infected, -20.0);
        assert_eq!(projected.severe.infections_by_requested_time, -200.0);
    }
}

//! Converts `(timeToElapse, periodType)` into a day count.

use super::types::PeriodType;

pub const DAYS_PER_WEEK: i64 = 7;
pub const DAYS_PER_MONTH: i64 = 30;

impl PeriodType {
    /// Number of days one unit of this period spans. Unknown units count as days.
    pub fn days_per_unit(&self) -> i64 {
        match self {
            PeriodType::Months => DAYS_PER_MONTH,
            PeriodType::Weeks => DAYS_PER_WEEK,
            PeriodType::Days | PeriodType::Other(_) => 1,
        }
    }
}

/// Total days covered by the projection.
pub fn normalize_to_days(period_type: &PeriodType, time_to_elapse: i64) -> i64 {
    time_to_elapse.saturating_mul(period_type.days_per_unit())
}

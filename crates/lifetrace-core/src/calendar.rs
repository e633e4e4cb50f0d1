//! Calendar constants and the approximate year/month/day decomposition.
//!
//! The breakdown deliberately uses fixed 365/30 divisors instead of real
//! calendar months. This matches the reference output bit-for-bit and is
//! kept that way on purpose; "fixing" it would change every displayed
//! breakdown.

use std::fmt;

/// Year length used for every year-to-day conversion (grid sizing,
/// expected end date, remaining time).
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Divisor for the years field of a breakdown.
pub const APPROX_DAYS_PER_YEAR: i64 = 365;

/// Divisor for the months field of a breakdown.
pub const APPROX_DAYS_PER_MONTH: i64 = 30;

/// Milliseconds in one day.
pub(crate) const MS_PER_DAY: i64 = 86_400_000;

/// Approximate (years, months, days) decomposition of a whole-day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBreakdown {
    pub years: i64,
    pub months: i64,
    pub days: i64,
}

impl TimeBreakdown {
    /// Decompose a signed day count with the fixed 365/30 divisors.
    ///
    /// Division is floored, so negative spans decompose the same way the
    /// reference did: the years field goes negative while months/days stay
    /// in their usual ranges.
    #[must_use]
    pub fn from_days(days: i64) -> Self {
        let years = days.div_euclid(APPROX_DAYS_PER_YEAR);
        let rem = days.rem_euclid(APPROX_DAYS_PER_YEAR);
        Self {
            years,
            months: rem / APPROX_DAYS_PER_MONTH,
            days: rem % APPROX_DAYS_PER_MONTH,
        }
    }

    /// Whole-day count this breakdown was derived from.
    #[must_use]
    pub fn total_days(&self) -> i64 {
        self.years * APPROX_DAYS_PER_YEAR + self.months * APPROX_DAYS_PER_MONTH + self.days
    }
}

impl fmt::Display for TimeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y {}m {}d", self.years, self.months, self.days)
    }
}

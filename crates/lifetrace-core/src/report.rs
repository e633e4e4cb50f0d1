//! The per-tick lifespan report and its component operations.
//!
//! Every operation takes `now` as an explicit argument; nothing in this
//! module reads the process clock. The individual functions are public so
//! they can be tested and reused on their own, with
//! [`LifespanReport::compute`] assembling all of them for one tick.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::calendar::{TimeBreakdown, DAYS_PER_YEAR, MS_PER_DAY};

/// Everything the presentation layer shows for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct LifespanReport {
    /// Whole years of age (birthday-aware).
    pub age_years: i32,
    /// Whole days lived, sub-day truncated.
    pub elapsed_days: i64,
    /// `elapsed_days` floor-divided by 7.
    pub elapsed_weeks: i64,
    /// Approximate elapsed (years, months, days).
    pub elapsed: TimeBreakdown,
    /// Elapsed over expected lifespan, as a percentage. Unbounded above
    /// 100 once the expected lifespan is exceeded.
    pub life_percentage: f64,
    /// Approximate remaining (years, months, days). Signed.
    pub remaining: TimeBreakdown,
    /// Birth date plus the expected lifespan duration.
    pub expected_end_date: NaiveDate,
}

impl LifespanReport {
    /// Compute the full report for one tick.
    #[must_use]
    pub fn compute(birth_date: NaiveDate, now: NaiveDateTime, expected_years: f64) -> Self {
        let days = elapsed_days(birth_date, now);
        Self {
            age_years: age_years(birth_date, now),
            elapsed_days: days,
            elapsed_weeks: elapsed_weeks(birth_date, now),
            elapsed: TimeBreakdown::from_days(days),
            life_percentage: life_percentage(birth_date, now, expected_years),
            remaining: remaining_time(birth_date, now, expected_years),
            expected_end_date: expected_end_date(birth_date, expected_years),
        }
    }
}

fn birth_instant(birth_date: NaiveDate) -> NaiveDateTime {
    birth_date.and_time(NaiveTime::MIN)
}

/// Expected lifespan as a millisecond-resolution duration.
fn lifespan_duration(expected_years: f64) -> TimeDelta {
    TimeDelta::milliseconds((expected_years * DAYS_PER_YEAR * MS_PER_DAY as f64).round() as i64)
}

/// Whole years between birth and `now`, minus one if this year's birthday
/// has not happened yet. Negative when `now` precedes the birth date; the
/// calculator does not guard that case.
#[must_use]
pub fn age_years(birth_date: NaiveDate, now: NaiveDateTime) -> i32 {
    let today = now.date();
    let before_birthday = (today.month(), today.day()) < (birth_date.month(), birth_date.day());
    today.year() - birth_date.year() - i32::from(before_birthday)
}

/// Whole days between birth and `now`, sub-day truncated.
#[must_use]
pub fn elapsed_days(birth_date: NaiveDate, now: NaiveDateTime) -> i64 {
    (now - birth_instant(birth_date)).num_days()
}

/// Whole weeks lived: `elapsed_days` floor-divided by 7.
#[must_use]
pub fn elapsed_weeks(birth_date: NaiveDate, now: NaiveDateTime) -> i64 {
    elapsed_days(birth_date, now).div_euclid(7)
}

/// Elapsed share of the expected lifespan, in percent.
///
/// Computed at millisecond precision, unlike `elapsed_days`, so the value
/// moves within a day. Exceeds 100 once the expected lifespan is passed.
#[must_use]
pub fn life_percentage(birth_date: NaiveDate, now: NaiveDateTime, expected_years: f64) -> f64 {
    let elapsed_ms = (now - birth_instant(birth_date)).num_milliseconds() as f64;
    let total_ms = expected_years * DAYS_PER_YEAR * MS_PER_DAY as f64;
    elapsed_ms / total_ms * 100.0
}

/// Expected lifespan duration minus elapsed, floored to whole days and
/// decomposed with the 365/30 divisors. Goes negative with no clamping
/// once the expected lifespan is exceeded.
#[must_use]
pub fn remaining_time(
    birth_date: NaiveDate,
    now: NaiveDateTime,
    expected_years: f64,
) -> TimeBreakdown {
    let remaining = lifespan_duration(expected_years) - (now - birth_instant(birth_date));
    let days = remaining.num_milliseconds().div_euclid(MS_PER_DAY);
    TimeBreakdown::from_days(days)
}

/// Birth date plus `expected_years * 365.25` days, as a calendar date.
///
/// Deterministic: does not depend on `now`.
#[must_use]
pub fn expected_end_date(birth_date: NaiveDate, expected_years: f64) -> NaiveDate {
    (birth_instant(birth_date) + lifespan_duration(expected_years)).date()
}

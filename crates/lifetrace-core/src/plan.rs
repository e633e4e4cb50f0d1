//! Validated startup inputs.

use chrono::NaiveDate;

use crate::error::ConfigError;

/// The two immutable startup constants: birth date and expected lifespan.
///
/// Construction is the startup validation gate; a `LifePlan` that exists
/// is safe to feed to the calculator forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifePlan {
    birth_date: NaiveDate,
    expected_years: f64,
}

impl LifePlan {
    /// Validate startup inputs against `today`.
    ///
    /// Rejects non-positive or non-finite lifespans and birth dates in the
    /// future. The calculator itself stays unguarded; this is the only
    /// place the "real past calendar date" invariant is enforced.
    pub fn new(
        birth_date: NaiveDate,
        expected_years: f64,
        today: NaiveDate,
    ) -> Result<Self, ConfigError> {
        if !expected_years.is_finite() || expected_years <= 0.0 {
            return Err(ConfigError::NonPositiveLifespan(expected_years.to_string()));
        }
        if birth_date > today {
            return Err(ConfigError::BirthDateInFuture(birth_date.to_string()));
        }
        Ok(Self {
            birth_date,
            expected_years,
        })
    }

    #[must_use]
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    #[must_use]
    pub fn expected_years(&self) -> f64 {
        self.expected_years
    }
}

//! Startup configuration errors.

use thiserror::Error;

/// Errors raised while validating startup inputs.
///
/// All of these are fatal before the tick loop starts; once validation
/// passes, the calculator arithmetic is total and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Expected lifespan must be a positive, finite number of years.
    #[error("expected lifespan must be positive, got {0} years")]
    NonPositiveLifespan(String),

    /// Birth date string did not parse to a real calendar date.
    #[error("invalid birth date: {0} (expected YYYY-MM-DD)")]
    InvalidBirthDate(String),

    /// Birth date lies after the current date.
    #[error("birth date {0} is in the future")]
    BirthDateInFuture(String),

    /// No birth date supplied via CLI or config file.
    #[error("no birth date configured (pass --birth-date or set birth_date in the config file)")]
    MissingBirthDate,
}

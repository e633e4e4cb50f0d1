//! Pure lifespan arithmetic for lifetrace.
//!
//! Maps `(birth_date, now, expected_lifespan_years)` to derived quantities:
//! age, elapsed days/weeks, approximate elapsed/remaining breakdowns, life
//! percentage, expected end date, and the life grid model. Everything here
//! is a pure function of its inputs; `now` is always injected by the caller
//! and the crate performs no I/O.

pub mod calendar;
pub mod error;
pub mod grid;
pub mod plan;
pub mod report;

pub use calendar::{TimeBreakdown, APPROX_DAYS_PER_MONTH, APPROX_DAYS_PER_YEAR, DAYS_PER_YEAR};
pub use error::ConfigError;
pub use grid::{CellState, LifeGrid, DEFAULT_CELLS_PER_ROW};
pub use plan::LifePlan;
pub use report::LifespanReport;

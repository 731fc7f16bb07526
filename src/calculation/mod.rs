//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation functions: calendar day
//! classification, evaluation window handling, payable-days aggregation,
//! salary rate derivation, earnings computation, and salary structure
//! resolution. All functions are synchronous over already-fetched inputs
//! and mutate no shared state, so computations for different officers can
//! run in parallel.

mod attendance_summary;
mod day_classification;
mod earnings;
mod salary_rates;
mod salary_structure;
mod window;

pub use attendance_summary::build_attendance_summary;
pub use day_classification::{CalendarMarks, DayClass, classify_date};
pub use earnings::calculate_earnings;
pub use salary_rates::{SalaryRates, derive_salary_rates};
pub use salary_structure::{
    derive_default_structure, resolve_salary_structure, resolve_statutory_info,
};
pub use window::{EvaluationWindow, days_in_month};

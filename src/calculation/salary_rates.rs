//! Salary rate derivation.
//!
//! This module converts an annual salary figure into monthly, per-day, and
//! per-hour rates for the reference month.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::window::days_in_month;

/// Derived pay rates for one officer and one reference month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRates {
    /// Monthly base salary (annual / 12).
    pub monthly_base: Decimal,
    /// Per-day salary (monthly base / days in the reference month).
    pub per_day_salary: Decimal,
    /// Per-hour rate (per-day salary / normal working hours per day).
    pub per_hour_rate: Decimal,
}

impl SalaryRates {
    /// Returns all-zero rates, used when no compensation record exists.
    pub fn zero() -> Self {
        Self {
            monthly_base: Decimal::ZERO,
            per_day_salary: Decimal::ZERO,
            per_hour_rate: Decimal::ZERO,
        }
    }
}

/// Derives monthly, per-day, and per-hour rates from an annual salary.
///
/// The per-day rate divides by the actual number of days in
/// `reference_date`'s month (28-31, leap-aware), so the same annual salary
/// yields a different per-day rate in February than in July. No rounding
/// is applied here; rounding happens only at presentation.
///
/// A zero annual salary or a non-positive `hours_per_day` degrades to
/// zero-valued rates rather than erroring, per the propagation policy:
/// calculation arithmetic never fails on missing/zero numeric input.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::derive_salary_rates;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rates = derive_salary_rates(
///     Decimal::new(1_200_000, 0),
///     NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(), // June: 30 days
///     Decimal::new(8, 0),
/// );
/// assert_eq!(rates.monthly_base, Decimal::new(100_000, 0));
/// assert_eq!(rates.per_day_salary.round_dp(2), Decimal::new(3_333_33, 2));
/// assert_eq!(rates.per_hour_rate.round_dp(2), Decimal::new(416_67, 2));
/// ```
pub fn derive_salary_rates(
    annual_salary: Decimal,
    reference_date: NaiveDate,
    hours_per_day: Decimal,
) -> SalaryRates {
    if annual_salary.is_zero() {
        return SalaryRates::zero();
    }

    let monthly_base = annual_salary / Decimal::from(12u32);
    let per_day_salary = monthly_base / Decimal::from(days_in_month(reference_date));
    let per_hour_rate = if hours_per_day > Decimal::ZERO {
        per_day_salary / hours_per_day
    } else {
        Decimal::ZERO
    };

    SalaryRates {
        monthly_base,
        per_day_salary,
        per_hour_rate,
    }
}

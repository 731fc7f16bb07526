//! Earnings calculation.
//!
//! This module combines the attendance summary with derived salary rates
//! to produce the earned-salary view for an evaluation window.

use rust_decimal::Decimal;

use crate::models::{AttendanceSummary, EarningsResult};

use super::salary_rates::SalaryRates;
use super::window::EvaluationWindow;

/// Calculates earned salary, overtime pay, and progress for a window.
///
/// - `earned_salary = payable_days × per_day_salary`
/// - `overtime_pay = approved_overtime_hours × per_hour_rate × multiplier`
/// - `total_earnings = earned_salary + overtime_pay`
/// - `progress_percentage = min(100, payable_days / day_of_month × 100)`
///   where `day_of_month` is the 1-based day number the window has
///   reached. The ratio compares accumulated payable days against elapsed
///   calendar days, so it can exceed 1 mid-month (weekend-heavy starts);
///   the cap keeps the result in [0, 100]. A zero day-of-month degrades
///   to 0 rather than dividing.
///
/// Zero-valued rates (no compensation record, zero annual salary) flow
/// through to zero-valued money outputs; this is not an error.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{
///     EvaluationWindow, calculate_earnings, derive_salary_rates,
/// };
/// use payroll_engine::models::AttendanceSummary;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let as_of = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
/// let window = EvaluationWindow::month_to_date(as_of);
/// let rates = derive_salary_rates(Decimal::new(1_200_000, 0), as_of, Decimal::new(8, 0));
/// let summary = AttendanceSummary {
///     days_present: 18,
///     total_hours_worked: Decimal::new(144, 0),
///     approved_overtime_hours: Decimal::new(4, 0),
///     paid_holidays: 1,
///     paid_leave_days: Decimal::ZERO,
///     weekends: 8,
///     payable_days: Decimal::new(27, 0),
/// };
///
/// let result = calculate_earnings(&summary, &rates, Decimal::new(15, 1), &window, true);
/// assert_eq!(result.earned_salary.round_dp(2), Decimal::new(90_000_00, 2));
/// assert_eq!(result.overtime_pay.round_dp(2), Decimal::new(2_500_00, 2));
/// assert_eq!(result.total_earnings.round_dp(2), Decimal::new(92_500_00, 2));
/// ```
pub fn calculate_earnings(
    summary: &AttendanceSummary,
    rates: &SalaryRates,
    overtime_multiplier: Decimal,
    window: &EvaluationWindow,
    data_complete: bool,
) -> EarningsResult {
    let earned_salary = summary.payable_days * rates.per_day_salary;
    let overtime_pay =
        summary.approved_overtime_hours * rates.per_hour_rate * overtime_multiplier;
    let total_earnings = earned_salary + overtime_pay;

    let progress_percentage = progress_percentage(summary.payable_days, window);

    EarningsResult {
        monthly_base: rates.monthly_base,
        days_present: summary.days_present,
        working_days: window.num_days(),
        earned_salary,
        overtime_hours: summary.approved_overtime_hours,
        overtime_pay,
        total_earnings,
        progress_percentage,
        payable_days: summary.payable_days,
        paid_holidays: summary.paid_holidays,
        paid_leave_days: summary.paid_leave_days,
        weekends: summary.weekends,
        per_day_salary: rates.per_day_salary,
        per_hour_rate: rates.per_hour_rate,
        data_complete,
    }
}

/// Payable days against the elapsed day-of-month, capped at 100.
fn progress_percentage(payable_days: Decimal, window: &EvaluationWindow) -> Decimal {
    use chrono::Datelike;

    let day_of_month = Decimal::from(window.end().day());
    if day_of_month.is_zero() {
        return Decimal::ZERO;
    }

    let hundred = Decimal::ONE_HUNDRED;
    let progress = payable_days / day_of_month * hundred;
    progress.min(hundred)
}

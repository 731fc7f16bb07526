//! Derived summary models.
//!
//! This module contains the [`AttendanceSummary`] and [`EarningsResult`]
//! types: ephemeral, per-request views computed by the engine and consumed
//! by dashboards, payslip rendering, and batch payroll export.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Categorized day counts for one officer over one evaluation window.
///
/// Recomputed per request; never persisted.
///
/// Invariant: `payable_days = days_present + paid_holidays +
/// paid_leave_days + weekends`. Presence is tallied independently of the
/// weekend/holiday classification sweep, so a date can contribute to both
/// `days_present` and `weekends` (or `paid_holidays`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Distinct dates with at least one completed attendance session.
    pub days_present: u32,
    /// Total hours worked across completed sessions.
    pub total_hours_worked: Decimal,
    /// Sum of requested hours over approved overtime requests.
    pub approved_overtime_hours: Decimal,
    /// Holidays in the window that do not fall on a weekend.
    pub paid_holidays: u32,
    /// Paid days contributed by approved, non-loss-of-pay leaves.
    pub paid_leave_days: Decimal,
    /// Weekend days in the window.
    pub weekends: u32,
    /// Total payable days for the window.
    pub payable_days: Decimal,
}

impl AttendanceSummary {
    /// Returns an all-zero summary.
    pub fn empty() -> Self {
        Self {
            days_present: 0,
            total_hours_worked: Decimal::ZERO,
            approved_overtime_hours: Decimal::ZERO,
            paid_holidays: 0,
            paid_leave_days: Decimal::ZERO,
            weekends: 0,
            payable_days: Decimal::ZERO,
        }
    }
}

/// The computed earnings view for one officer over one evaluation window.
///
/// Monetary fields carry full precision; call [`EarningsResult::rounded`]
/// at the presentation edge.
///
/// # Example
///
/// ```
/// use payroll_engine::models::EarningsResult;
/// use rust_decimal::Decimal;
///
/// let result = EarningsResult {
///     monthly_base: Decimal::new(100_000, 0),
///     days_present: 18,
///     working_days: 27,
///     earned_salary: Decimal::new(90_000, 0),
///     overtime_hours: Decimal::ZERO,
///     overtime_pay: Decimal::ZERO,
///     total_earnings: Decimal::new(90_000, 0),
///     progress_percentage: Decimal::new(100, 0),
///     payable_days: Decimal::new(27, 0),
///     paid_holidays: 1,
///     paid_leave_days: Decimal::ZERO,
///     weekends: 8,
///     per_day_salary: Decimal::new(3_333, 0),
///     per_hour_rate: Decimal::new(416, 0),
///     data_complete: true,
/// };
/// assert_eq!(result.total_earnings, Decimal::new(90_000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsResult {
    /// Monthly base salary (annual / 12).
    pub monthly_base: Decimal,
    /// Distinct days with a completed attendance session.
    pub days_present: u32,
    /// Calendar days in the evaluation window.
    pub working_days: u32,
    /// Earned salary: payable days times per-day rate.
    pub earned_salary: Decimal,
    /// Approved overtime hours compensated in this result.
    pub overtime_hours: Decimal,
    /// Overtime pay: overtime hours times per-hour rate times multiplier.
    pub overtime_pay: Decimal,
    /// Earned salary plus overtime pay.
    pub total_earnings: Decimal,
    /// Payable days against elapsed calendar days, capped at 100.
    pub progress_percentage: Decimal,
    /// Total payable days.
    pub payable_days: Decimal,
    /// Holidays counted (not falling on a weekend).
    pub paid_holidays: u32,
    /// Paid leave days counted.
    pub paid_leave_days: Decimal,
    /// Weekend days counted.
    pub weekends: u32,
    /// Derived per-day salary.
    pub per_day_salary: Decimal,
    /// Per-hour rate used for overtime pay.
    pub per_hour_rate: Decimal,
    /// False when the officer had no compensation record and salary was
    /// soft-defaulted to zero; consuming UIs should warn rather than
    /// display a silent zero.
    pub data_complete: bool,
}

impl EarningsResult {
    /// Returns a copy with every monetary field and the progress
    /// percentage rounded to two decimal places.
    ///
    /// Rounding happens only here, at the presentation edge; the
    /// calculation pipeline carries full precision throughout.
    pub fn rounded(&self) -> Self {
        Self {
            monthly_base: self.monthly_base.round_dp(2),
            earned_salary: self.earned_salary.round_dp(2),
            overtime_hours: self.overtime_hours.round_dp(2),
            overtime_pay: self.overtime_pay.round_dp(2),
            total_earnings: self.total_earnings.round_dp(2),
            progress_percentage: self.progress_percentage.round_dp(2),
            payable_days: self.payable_days.round_dp(2),
            paid_leave_days: self.paid_leave_days.round_dp(2),
            per_day_salary: self.per_day_salary.round_dp(2),
            per_hour_rate: self.per_hour_rate.round_dp(2),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_summary_is_all_zero() {
        let summary = AttendanceSummary::empty();
        assert_eq!(summary.days_present, 0);
        assert_eq!(summary.total_hours_worked, Decimal::ZERO);
        assert_eq!(summary.payable_days, Decimal::ZERO);
    }

    #[test]
    fn test_summary_serialization_uses_string_decimals() {
        let summary = AttendanceSummary {
            days_present: 18,
            total_hours_worked: dec("152.5"),
            approved_overtime_hours: dec("4"),
            paid_holidays: 1,
            paid_leave_days: dec("0"),
            weekends: 8,
            payable_days: dec("27"),
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"total_hours_worked\":\"152.5\""));
        assert!(json.contains("\"days_present\":18"));

        let back: AttendanceSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn test_rounded_rounds_money_to_two_places() {
        let result = EarningsResult {
            monthly_base: dec("100000"),
            days_present: 18,
            working_days: 27,
            earned_salary: dec("89999.999999999999999999999"),
            overtime_hours: dec("4"),
            overtime_pay: dec("2499.9999999999999999999999998"),
            total_earnings: dec("92499.999999999999999999999"),
            progress_percentage: dec("100"),
            payable_days: dec("27"),
            paid_holidays: 1,
            paid_leave_days: dec("0"),
            weekends: 8,
            per_day_salary: dec("3333.3333333333333333333333333"),
            per_hour_rate: dec("416.66666666666666666666666666"),
            data_complete: true,
        };

        let rounded = result.rounded();
        assert_eq!(rounded.earned_salary, dec("90000.00"));
        assert_eq!(rounded.overtime_pay, dec("2500.00"));
        assert_eq!(rounded.total_earnings, dec("92500.00"));
        assert_eq!(rounded.per_day_salary, dec("3333.33"));
        assert_eq!(rounded.per_hour_rate, dec("416.67"));
        // Count fields pass through untouched
        assert_eq!(rounded.days_present, 18);
        assert_eq!(rounded.weekends, 8);
    }

    #[test]
    fn test_earnings_result_round_trip() {
        let result = EarningsResult {
            monthly_base: dec("50000"),
            days_present: 10,
            working_days: 15,
            earned_salary: dec("25000"),
            overtime_hours: dec("0"),
            overtime_pay: dec("0"),
            total_earnings: dec("25000"),
            progress_percentage: dec("100"),
            payable_days: dec("15"),
            paid_holidays: 1,
            paid_leave_days: dec("2"),
            weekends: 2,
            per_day_salary: dec("1666.67"),
            per_hour_rate: dec("208.33"),
            data_complete: false,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"data_complete\":false"));

        let back: EarningsResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}

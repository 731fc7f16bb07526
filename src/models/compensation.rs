//! Compensation record model and calendar scope.
//!
//! This module defines the per-officer compensation record held by the
//! external compensation store, and the scope selector used when querying
//! the calendar service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{SalaryStructure, StatutoryInfo};

/// Selects which calendar applies when classifying dates.
///
/// Institutions may maintain their own holiday calendars; officers not
/// attached to an institution fall back to the company-wide calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "institution_id")]
pub enum CalendarScope {
    /// The company-wide default calendar.
    Company,
    /// The calendar of a specific institution.
    Institution(String),
}

/// Per-officer compensation record.
///
/// Held by the external compensation store; mutated only by HR/payroll
/// administration. All fields other than `annual_salary` are optional
/// overrides and stored artifacts.
///
/// # Example
///
/// ```
/// use payroll_engine::models::CompensationRecord;
/// use rust_decimal::Decimal;
///
/// let record = CompensationRecord {
///     officer_id: "off_001".to_string(),
///     designation: "Senior Counselor".to_string(),
///     annual_salary: Decimal::new(1_200_000, 0),
///     salary_structure: None,
///     statutory_info: None,
///     hourly_rate: None,
///     overtime_multiplier: None,
/// };
/// assert_eq!(record.annual_salary, Decimal::new(1_200_000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationRecord {
    /// Unique identifier of the officer this record belongs to.
    pub officer_id: String,
    /// The officer's designation (e.g., "Senior Counselor").
    pub designation: String,
    /// Annual gross compensation (cost to company).
    pub annual_salary: Decimal,
    /// Previously stored salary breakdown, if any.
    #[serde(default)]
    pub salary_structure: Option<SalaryStructure>,
    /// Explicitly stored statutory applicability flags, if any.
    #[serde(default)]
    pub statutory_info: Option<StatutoryInfo>,
    /// Optional override for the derived per-hour rate.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Optional override for the configured overtime multiplier.
    #[serde(default)]
    pub overtime_multiplier: Option<Decimal>,
}

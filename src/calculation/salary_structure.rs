//! Salary structure and statutory resolution.
//!
//! This module resolves the monthly salary breakdown for a compensation
//! record, preferring a stored structure and falling back to a derived
//! default, and resolves statutory contribution applicability flags from
//! configured thresholds.

use rust_decimal::Decimal;

use crate::config::{StatutoryConfig, StructureConfig};
use crate::models::{SalaryStructure, StatutoryInfo};

/// Derives the default salary breakdown from an annual salary.
///
/// The monthly salary (`annual / 12`) is split using configured rules:
/// basic and HRA as fractions of monthly, fixed conveyance and medical
/// amounts, and the remainder as special allowance, floored at zero so a
/// small salary never produces a negative component.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::derive_default_structure;
/// use payroll_engine::config::PayrollConfig;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::default();
/// let structure =
///     derive_default_structure(Decimal::new(960_000, 0), &config.structure);
/// assert_eq!(structure.basic_pay, Decimal::new(40_000, 0));
/// assert_eq!(structure.component_total(), Decimal::new(80_000, 0));
/// ```
pub fn derive_default_structure(
    annual_salary: Decimal,
    config: &StructureConfig,
) -> SalaryStructure {
    let monthly = annual_salary / Decimal::from(12u32);
    let basic_pay = monthly * config.basic_pct;
    let hra = monthly * config.hra_pct;
    let conveyance_allowance = config.conveyance_amount;
    let medical_allowance = config.medical_amount;
    let special_allowance = (monthly - basic_pay - hra - conveyance_allowance
        - medical_allowance)
        .max(Decimal::ZERO);

    SalaryStructure {
        basic_pay,
        hra,
        conveyance_allowance,
        medical_allowance,
        special_allowance,
        ..Default::default()
    }
}

/// Resolves the salary breakdown for a compensation record.
///
/// A stored structure wins when its components sum to more than zero; the
/// legacy `transport_allowance` field is folded into
/// `conveyance_allowance` once at read time. A missing or all-zero stored
/// structure falls back to the derived default.
pub fn resolve_salary_structure(
    stored: Option<&SalaryStructure>,
    annual_salary: Decimal,
    config: &StructureConfig,
) -> SalaryStructure {
    match stored {
        Some(structure) if structure.component_total() > Decimal::ZERO => {
            structure.clone().normalize_legacy()
        }
        _ => derive_default_structure(annual_salary, config),
    }
}

/// Resolves statutory contribution applicability for a compensation record.
///
/// Explicitly stored flags win. Otherwise: provident fund always applies,
/// state insurance applies when the monthly salary is at or below the
/// configured wage ceiling, and professional tax applies in the configured
/// default state.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::resolve_statutory_info;
/// use payroll_engine::config::PayrollConfig;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::default();
/// let info = resolve_statutory_info(None, Decimal::new(18_000, 0), &config.statutory);
/// assert!(info.pf_applicable);
/// assert!(info.esi_applicable); // 18,000 <= 21,000 ceiling
/// ```
pub fn resolve_statutory_info(
    stored: Option<&StatutoryInfo>,
    monthly_salary: Decimal,
    config: &StatutoryConfig,
) -> StatutoryInfo {
    if let Some(info) = stored {
        return info.clone();
    }

    StatutoryInfo {
        pf_applicable: true,
        esi_applicable: monthly_salary <= config.esi_wage_ceiling,
        pt_applicable: true,
        pt_state: config.default_pt_state.clone(),
    }
}

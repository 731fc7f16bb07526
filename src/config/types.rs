//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the payroll YAML configuration file.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Work-schedule configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkScheduleConfig {
    /// Weekdays treated as the weekend (default Saturday and Sunday).
    pub weekend_days: Vec<Weekday>,
    /// Normal working hours per day, used for the per-hour rate.
    pub normal_working_hours: Decimal,
    /// Default multiplier applied to approved overtime hours.
    pub overtime_multiplier: Decimal,
}

/// Percentage rules and fixed amounts for deriving a default salary
/// structure from a cost-to-company figure.
#[derive(Debug, Clone, Deserialize)]
pub struct StructureConfig {
    /// Basic pay as a fraction of monthly salary (e.g., "0.50").
    pub basic_pct: Decimal,
    /// Housing rent allowance as a fraction of monthly salary.
    pub hra_pct: Decimal,
    /// Fixed monthly conveyance allowance.
    pub conveyance_amount: Decimal,
    /// Fixed monthly medical allowance.
    pub medical_amount: Decimal,
}

/// Statutory-contribution thresholds and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryConfig {
    /// Monthly salary ceiling at or below which state insurance applies.
    pub esi_wage_ceiling: Decimal,
    /// Default state whose professional tax slab applies.
    pub default_pt_state: String,
}

/// The complete payroll configuration.
///
/// Loaded from `config/payroll.yaml`; [`PayrollConfig::default`] mirrors
/// the shipped file.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfig {
    /// Work-schedule settings.
    pub work_schedule: WorkScheduleConfig,
    /// Default salary-structure derivation rules.
    pub structure: StructureConfig,
    /// Statutory thresholds and defaults.
    pub statutory: StatutoryConfig,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            work_schedule: WorkScheduleConfig {
                weekend_days: vec![Weekday::Sat, Weekday::Sun],
                normal_working_hours: Decimal::new(8, 0),
                overtime_multiplier: Decimal::new(15, 1),
            },
            structure: StructureConfig {
                basic_pct: Decimal::new(50, 2),
                hra_pct: Decimal::new(20, 2),
                conveyance_amount: Decimal::new(1_600, 0),
                medical_amount: Decimal::new(1_250, 0),
            },
            statutory: StatutoryConfig {
                esi_wage_ceiling: Decimal::new(21_000, 0),
                default_pt_state: "KA".to_string(),
            },
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
    fn test_default_weekend_is_saturday_sunday() {
        let config = PayrollConfig::default();
        assert_eq!(
            config.work_schedule.weekend_days,
            vec![Weekday::Sat, Weekday::Sun]
        );
    }

    #[test]
    fn test_default_esi_ceiling() {
        let config = PayrollConfig::default();
        assert_eq!(config.statutory.esi_wage_ceiling, dec("21000"));
    }

    #[test]
    fn test_default_structure_percentages() {
        let config = PayrollConfig::default();
        assert_eq!(config.structure.basic_pct, dec("0.50"));
        assert_eq!(config.structure.hra_pct, dec("0.20"));
        assert_eq!(config.structure.conveyance_amount, dec("1600"));
        assert_eq!(config.structure.medical_amount, dec("1250"));
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = r#"
work_schedule:
  weekend_days: [Sat, Sun]
  normal_working_hours: "8"
  overtime_multiplier: "1.5"
structure:
  basic_pct: "0.50"
  hra_pct: "0.20"
  conveyance_amount: "1600"
  medical_amount: "1250"
statutory:
  esi_wage_ceiling: "21000"
  default_pt_state: KA
"#;

        let config: PayrollConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.work_schedule.normal_working_hours, dec("8"));
        assert_eq!(config.work_schedule.overtime_multiplier, dec("1.5"));
        assert_eq!(config.statutory.default_pt_state, "KA");
    }

    #[test]
    fn test_deserialize_single_weekend_day() {
        let yaml = r#"
work_schedule:
  weekend_days: [Sun]
  normal_working_hours: "9"
  overtime_multiplier: "2.0"
structure:
  basic_pct: "0.40"
  hra_pct: "0.16"
  conveyance_amount: "1600"
  medical_amount: "1250"
statutory:
  esi_wage_ceiling: "21000"
  default_pt_state: MH
"#;

        let config: PayrollConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.work_schedule.weekend_days, vec![Weekday::Sun]);
    }
}

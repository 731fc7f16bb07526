//! Configuration loading and management for the payroll engine.
//!
//! This module provides the strongly-typed payroll configuration (work
//! schedule, salary-structure derivation rules, statutory thresholds) and
//! the YAML file loader.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::load_payroll_config;
//!
//! let config = load_payroll_config("./config/payroll.yaml").unwrap();
//! println!("ESI ceiling: {}", config.statutory.esi_wage_ceiling);
//! ```

mod loader;
mod types;

pub use loader::load_payroll_config;
pub use types::{PayrollConfig, StatutoryConfig, StructureConfig, WorkScheduleConfig};

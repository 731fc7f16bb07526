//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod compensation;
mod salary_structure;
mod summary;

pub use attendance::{
    AttendanceRecord, AttendanceStatus, LeaveApplication, OvertimeRequest, OvertimeStatus,
};
pub use compensation::{CalendarScope, CompensationRecord};
pub use salary_structure::{SalaryStructure, StatutoryInfo};
pub use summary::{AttendanceSummary, EarningsResult};

//! Earned-Salary and Attendance-Payability Engine
//!
//! This crate computes month-to-date earned salary for institution officers
//! and staff from completed attendance, approved overtime, approved leave,
//! and calendar (weekend/holiday) data, and resolves monthly salary
//! structures with statutory contribution applicability flags.

#![warn(missing_docs)]

pub mod api;
pub mod cache;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod stores;

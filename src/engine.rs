//! The earnings engine.
//!
//! This module wires the collaborator stores to the pure calculation
//! pipeline. The four attendance-side queries (attendance, overtime,
//! leave, calendar classification) have no ordering dependency and are
//! issued concurrently; the computation itself mutates no shared state,
//! so calculations for different officers can run in parallel for batch
//! payroll runs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::cache::{SummaryCache, SummaryCacheKey};
use crate::calculation::{
    EvaluationWindow, build_attendance_summary, calculate_earnings, derive_salary_rates,
    resolve_salary_structure, resolve_statutory_info,
};
use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::{
    AttendanceSummary, CalendarScope, EarningsResult, SalaryStructure, StatutoryInfo,
};
use crate::stores::{
    AttendanceStore, CalendarService, CompensationStore, LeaveStore, OvertimeStore,
};

/// Orchestrates fetching and calculation for officer earnings.
///
/// Generic over the five collaborator stores so embedders can wire real
/// data sources while tests use the in-memory implementations.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::engine::EarningsEngine;
/// use payroll_engine::models::CalendarScope;
/// use payroll_engine::stores::{
///     InMemoryAttendanceStore, InMemoryCalendar, InMemoryCompensationStore,
///     InMemoryLeaveStore, InMemoryOvertimeStore,
/// };
/// use chrono::{NaiveDate, Weekday};
///
/// # async fn demo() {
/// let engine = EarningsEngine::new(
///     InMemoryAttendanceStore::new(),
///     InMemoryOvertimeStore::new(),
///     InMemoryLeaveStore::new(),
///     InMemoryCalendar::new(vec![Weekday::Sat, Weekday::Sun]),
///     InMemoryCompensationStore::new(),
///     PayrollConfig::default(),
/// );
///
/// let as_of = NaiveDate::from_ymd_opt(2025, 7, 18).unwrap();
/// let result = engine
///     .calculate("off_001", &CalendarScope::Company, as_of)
///     .await
///     .unwrap();
/// assert!(!result.data_complete); // no compensation record stored
/// # }
/// ```
pub struct EarningsEngine<A, O, L, C, P> {
    attendance: A,
    overtime: O,
    leave: L,
    calendar: C,
    compensation: P,
    config: PayrollConfig,
    cache: SummaryCache,
}

impl<A, O, L, C, P> EarningsEngine<A, O, L, C, P>
where
    A: AttendanceStore,
    O: OvertimeStore,
    L: LeaveStore,
    C: CalendarService,
    P: CompensationStore,
{
    /// Creates an engine over the given stores and configuration.
    pub fn new(
        attendance: A,
        overtime: O,
        leave: L,
        calendar: C,
        compensation: P,
        config: PayrollConfig,
    ) -> Self {
        Self {
            attendance,
            overtime,
            leave,
            calendar,
            compensation,
            config,
            cache: SummaryCache::new(),
        }
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Summarizes month-to-date attendance for an officer.
    ///
    /// The four independent queries run concurrently and are joined
    /// before aggregation; any failure aborts the summary with a fetch
    /// error rather than a partial result.
    pub async fn summarize(
        &self,
        officer_id: &str,
        scope: &CalendarScope,
        as_of: NaiveDate,
    ) -> EngineResult<AttendanceSummary> {
        let window = EvaluationWindow::month_to_date(as_of);

        let (records, requests, leaves, marks) = tokio::try_join!(
            self.attendance.attendance_records(officer_id, &window),
            self.overtime.overtime_requests(officer_id, &window),
            self.leave.approved_leaves(officer_id, &window),
            self.calendar.classify(scope, &window),
        )?;

        Ok(build_attendance_summary(
            &records, &requests, &leaves, &marks, &window,
        ))
    }

    /// Calculates month-to-date earnings for an officer.
    ///
    /// Results are cached by `(officer, institution, period_start)`;
    /// callers must [`EarningsEngine::invalidate`] when an underlying
    /// record changes. A missing compensation record soft-defaults the
    /// salary to zero and marks the result `data_complete = false`.
    pub async fn calculate(
        &self,
        officer_id: &str,
        scope: &CalendarScope,
        as_of: NaiveDate,
    ) -> EngineResult<EarningsResult> {
        let window = EvaluationWindow::month_to_date(as_of);
        let key = cache_key(officer_id, scope, window.start());

        if let Some(cached) = self.cache.get(&key) {
            debug!(officer_id, "earnings cache hit");
            return Ok(cached);
        }

        let summary = self.summarize(officer_id, scope, as_of).await?;
        let record = self.compensation.compensation(officer_id).await?;
        let data_complete = record.is_some();

        let annual_salary = record
            .as_ref()
            .map(|r| r.annual_salary)
            .unwrap_or(Decimal::ZERO);
        let mut rates = derive_salary_rates(
            annual_salary,
            as_of,
            self.config.work_schedule.normal_working_hours,
        );
        if let Some(hourly) = record.as_ref().and_then(|r| r.hourly_rate) {
            rates.per_hour_rate = hourly;
        }
        let multiplier = record
            .as_ref()
            .and_then(|r| r.overtime_multiplier)
            .unwrap_or(self.config.work_schedule.overtime_multiplier);

        let result = calculate_earnings(&summary, &rates, multiplier, &window, data_complete);

        info!(
            officer_id,
            payable_days = %result.payable_days,
            total_earnings = %result.total_earnings,
            "calculated earnings"
        );

        self.cache.insert(key, result.clone());
        Ok(result)
    }

    /// Resolves the salary breakdown and statutory flags for an officer.
    ///
    /// A missing compensation record resolves against a zero salary, so
    /// the caller still receives a well-formed (all-zero percentage)
    /// structure with default statutory flags.
    pub async fn salary_breakdown(
        &self,
        officer_id: &str,
    ) -> EngineResult<(SalaryStructure, StatutoryInfo)> {
        let record = self.compensation.compensation(officer_id).await?;

        let annual_salary = record
            .as_ref()
            .map(|r| r.annual_salary)
            .unwrap_or(Decimal::ZERO);
        let monthly = annual_salary / Decimal::from(12u32);

        let structure = resolve_salary_structure(
            record.as_ref().and_then(|r| r.salary_structure.as_ref()),
            annual_salary,
            &self.config.structure,
        );
        let statutory = resolve_statutory_info(
            record.as_ref().and_then(|r| r.statutory_info.as_ref()),
            monthly,
            &self.config.statutory,
        );

        Ok((structure, statutory))
    }

    /// Drops the cached result for one officer, scope, and period.
    pub fn invalidate(&self, officer_id: &str, scope: &CalendarScope, period_start: NaiveDate) {
        self.cache
            .invalidate(&cache_key(officer_id, scope, period_start));
    }

    /// Drops every cached result for an officer.
    pub fn invalidate_officer(&self, officer_id: &str) {
        self.cache.invalidate_officer(officer_id);
    }
}

fn cache_key(officer_id: &str, scope: &CalendarScope, period_start: NaiveDate) -> SummaryCacheKey {
    SummaryCacheKey {
        officer_id: officer_id.to_string(),
        institution_id: match scope {
            CalendarScope::Company => None,
            CalendarScope::Institution(id) => Some(id.clone()),
        },
        period_start,
    }
}

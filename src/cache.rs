//! Explicit earnings-result cache.
//!
//! Results are keyed by `(officer_id, institution_id, period_start)` and
//! invalidated explicitly when an underlying attendance, overtime, leave,
//! or calendar record changes. Batch payroll runs read a stable snapshot
//! through this cache instead of recomputing on every render.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::models::EarningsResult;

/// Cache key for one officer, institution scope, and evaluation period.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SummaryCacheKey {
    /// The officer the result belongs to.
    pub officer_id: String,
    /// The institution scope (`None` for the company-wide calendar).
    pub institution_id: Option<String>,
    /// The first day of the evaluation window.
    pub period_start: NaiveDate,
}

/// A thread-safe cache of computed earnings results.
///
/// # Example
///
/// ```
/// use payroll_engine::cache::{SummaryCache, SummaryCacheKey};
/// use chrono::NaiveDate;
///
/// let cache = SummaryCache::new();
/// let key = SummaryCacheKey {
///     officer_id: "off_001".to_string(),
///     institution_id: None,
///     period_start: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
/// };
/// assert!(cache.get(&key).is_none());
/// ```
#[derive(Debug, Default)]
pub struct SummaryCache {
    inner: RwLock<HashMap<SummaryCacheKey, EarningsResult>>,
}

impl SummaryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached result for the key, if present.
    pub fn get(&self, key: &SummaryCacheKey) -> Option<EarningsResult> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    /// Stores a result under the key, replacing any previous entry.
    pub fn insert(&self, key: SummaryCacheKey, result: EarningsResult) {
        self.inner
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key, result);
    }

    /// Removes the entry for one key.
    ///
    /// Call when an attendance, overtime, leave, or calendar record for
    /// that officer and period changes.
    pub fn invalidate(&self, key: &SummaryCacheKey) {
        self.inner
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
    }

    /// Removes every entry for an officer across all periods and scopes.
    pub fn invalidate_officer(&self, officer_id: &str) {
        self.inner
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .retain(|key, _| key.officer_id != officer_id);
    }

    /// The number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn key(officer: &str, period_start: NaiveDate) -> SummaryCacheKey {
        SummaryCacheKey {
            officer_id: officer.to_string(),
            institution_id: None,
            period_start,
        }
    }

    fn result() -> EarningsResult {
        EarningsResult {
            monthly_base: Decimal::new(100_000, 0),
            days_present: 18,
            working_days: 30,
            earned_salary: Decimal::new(90_000, 0),
            overtime_hours: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            total_earnings: Decimal::new(90_000, 0),
            progress_percentage: Decimal::new(90, 0),
            payable_days: Decimal::new(27, 0),
            paid_holidays: 1,
            paid_leave_days: Decimal::ZERO,
            weekends: 8,
            per_day_salary: Decimal::new(3_333, 0),
            per_hour_rate: Decimal::new(416, 0),
            data_complete: true,
        }
    }

    fn july() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    #[test]
    fn test_get_after_insert() {
        let cache = SummaryCache::new();
        cache.insert(key("off_001", july()), result());
        assert_eq!(cache.get(&key("off_001", july())), Some(result()));
    }

    #[test]
    fn test_get_miss_returns_none() {
        let cache = SummaryCache::new();
        assert!(cache.get(&key("off_001", july())).is_none());
    }

    #[test]
    fn test_invalidate_removes_entry() {
        let cache = SummaryCache::new();
        cache.insert(key("off_001", july()), result());
        cache.invalidate(&key("off_001", july()));
        assert!(cache.get(&key("off_001", july())).is_none());
    }

    #[test]
    fn test_invalidate_officer_removes_all_periods() {
        let cache = SummaryCache::new();
        let june = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        cache.insert(key("off_001", june), result());
        cache.insert(key("off_001", july()), result());
        cache.insert(key("off_002", july()), result());

        cache.invalidate_officer("off_001");
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&key("off_002", july())).is_some());
    }

    #[test]
    fn test_keys_distinguish_institution_scope() {
        let cache = SummaryCache::new();
        let company = key("off_001", july());
        let institution = SummaryCacheKey {
            institution_id: Some("inst_001".to_string()),
            ..company.clone()
        };

        cache.insert(company.clone(), result());
        assert!(cache.get(&institution).is_none());
        assert!(cache.get(&company).is_some());
    }
}

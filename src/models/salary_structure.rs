//! Salary structure and statutory information models.
//!
//! This module defines the named monthly salary breakdown and the statutory
//! contribution applicability flags attached to a compensation record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Named monetary components of a monthly salary.
///
/// The sum of the components equals the gross monthly salary. One
/// structure exists per officer compensation record; it is mutated only by
/// HR/payroll administration and persists until superseded.
///
/// Older records stored the conveyance component under
/// `transport_allowance`; [`SalaryStructure::normalize_legacy`] folds that
/// value into `conveyance_allowance` once at read time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// Basic pay component.
    #[serde(default)]
    pub basic_pay: Decimal,
    /// Housing rent allowance.
    #[serde(default)]
    pub hra: Decimal,
    /// Conveyance allowance.
    #[serde(default)]
    pub conveyance_allowance: Decimal,
    /// Medical allowance.
    #[serde(default)]
    pub medical_allowance: Decimal,
    /// Special allowance (balancing component).
    #[serde(default)]
    pub special_allowance: Decimal,
    /// Dearness allowance.
    #[serde(default)]
    pub da: Decimal,
    /// Legacy name for the conveyance component; superseded by
    /// `conveyance_allowance`.
    #[serde(default)]
    pub transport_allowance: Decimal,
    /// Any other allowances not broken out above.
    #[serde(default)]
    pub other_allowances: Decimal,
}

impl SalaryStructure {
    /// Returns the sum of all components (gross monthly salary).
    ///
    /// The legacy `transport_allowance` field is included so that a
    /// not-yet-normalized stored structure still totals correctly.
    pub fn component_total(&self) -> Decimal {
        self.basic_pay
            + self.hra
            + self.conveyance_allowance
            + self.medical_allowance
            + self.special_allowance
            + self.da
            + self.transport_allowance
            + self.other_allowances
    }

    /// Folds the legacy `transport_allowance` field into
    /// `conveyance_allowance`.
    ///
    /// Performed exactly once when a stored structure is read. If
    /// `conveyance_allowance` is zero and `transport_allowance` carries a
    /// value, the legacy value moves over; a populated
    /// `conveyance_allowance` always wins.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::SalaryStructure;
    /// use rust_decimal::Decimal;
    ///
    /// let legacy = SalaryStructure {
    ///     basic_pay: Decimal::new(40_000, 0),
    ///     transport_allowance: Decimal::new(1_600, 0),
    ///     ..Default::default()
    /// };
    /// let normalized = legacy.normalize_legacy();
    /// assert_eq!(normalized.conveyance_allowance, Decimal::new(1_600, 0));
    /// assert_eq!(normalized.transport_allowance, Decimal::ZERO);
    /// ```
    pub fn normalize_legacy(mut self) -> Self {
        if self.conveyance_allowance.is_zero() && !self.transport_allowance.is_zero() {
            self.conveyance_allowance = self.transport_allowance;
        }
        self.transport_allowance = Decimal::ZERO;
        self
    }
}

/// Statutory contribution applicability flags for a compensation record.
///
/// Either stored explicitly by HR or derived from configured thresholds;
/// see [`crate::calculation::resolve_statutory_info`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryInfo {
    /// Whether provident fund contributions apply.
    pub pf_applicable: bool,
    /// Whether state insurance contributions apply.
    pub esi_applicable: bool,
    /// Whether professional tax applies.
    pub pt_applicable: bool,
    /// The state whose professional tax slab applies.
    pub pt_state: String,
}

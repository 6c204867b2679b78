//! # Lot Filter
//!
//! Selects which statement entries become candidate lots.
//!
//! The policy is an explicit value passed to the ingestion step: a
//! minimum holding age, an optional plan name, and whether lots with a
//! per-unit loss may be sold.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use lot_optimizer::application::services::lot_filter::LotFilter;
//!
//! let as_of = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
//! let filter = LotFilter::new(as_of)
//!     .with_min_age_months(12)
//!     .with_plan("GSU Class C")
//!     .with_allow_loss(false);
//!
//! assert_eq!(filter.cutoff(), NaiveDate::from_ymd_opt(2023, 6, 30));
//! ```

use crate::domain::entities::statement_entry::StatementEntry;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default minimum holding age in months (the short-term cutoff).
pub const DEFAULT_MIN_AGE_MONTHS: u32 = 12;

/// Policy deciding which statement entries are offered for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotFilter {
    /// Entries must be acquired strictly before `as_of` minus this many months.
    min_age_months: u32,
    /// Only entries issued under this plan, when set.
    plan: Option<String>,
    /// Whether entries with a negative per-unit gain are eligible.
    allow_loss: bool,
    /// Reference date for the age check.
    as_of: NaiveDate,
}

impl LotFilter {
    /// Creates a filter with the default age, any plan, and losses excluded.
    #[must_use]
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            min_age_months: DEFAULT_MIN_AGE_MONTHS,
            plan: None,
            allow_loss: false,
            as_of,
        }
    }

    /// Sets the minimum holding age in months.
    #[must_use]
    pub fn with_min_age_months(mut self, months: u32) -> Self {
        self.min_age_months = months;
        self
    }

    /// Restricts entries to one plan. An empty name matches every plan.
    #[must_use]
    pub fn with_plan(mut self, plan: impl Into<String>) -> Self {
        let plan = plan.into();
        self.plan = (!plan.is_empty()).then_some(plan);
        self
    }

    /// Sets whether loss entries are eligible.
    #[must_use]
    pub fn with_allow_loss(mut self, allow: bool) -> Self {
        self.allow_loss = allow;
        self
    }

    /// Returns the minimum holding age in months.
    #[must_use]
    pub fn min_age_months(&self) -> u32 {
        self.min_age_months
    }

    /// Returns the plan restriction, if any.
    #[must_use]
    pub fn plan(&self) -> Option<&str> {
        self.plan.as_deref()
    }

    /// Returns whether loss entries are eligible.
    #[must_use]
    pub fn allow_loss(&self) -> bool {
        self.allow_loss
    }

    /// Latest acquisition date that is still too recent, exclusive bound.
    ///
    /// `None` when the subtraction leaves chrono's date range, in which case
    /// no entry is old enough.
    #[must_use]
    pub fn cutoff(&self) -> Option<NaiveDate> {
        self.as_of
            .checked_sub_months(Months::new(self.min_age_months))
    }

    /// Returns true if `entry` is eligible for sale.
    #[must_use]
    pub fn accepts(&self, entry: &StatementEntry) -> bool {
        let old_enough = self
            .cutoff()
            .is_some_and(|cutoff| entry.acquired < cutoff);
        let plan_matches = self.plan.as_ref().is_none_or(|plan| entry.plan == *plan);
        let gain_allowed = !entry.gain.is_negative() || self.allow_loss;

        entry.available > 0 && old_enough && plan_matches && gain_allowed
    }

    /// Keeps the accepted entries, in order.
    #[must_use]
    pub fn apply(&self, entries: Vec<StatementEntry>) -> Vec<StatementEntry> {
        let total = entries.len();
        let kept: Vec<_> = entries.into_iter().filter(|e| self.accepts(e)).collect();
        debug!(
            total,
            kept = kept.len(),
            min_age_months = self.min_age_months,
            plan = self.plan.as_deref().unwrap_or("*"),
            allow_loss = self.allow_loss,
            "statement entries filtered"
        );
        kept
    }
}

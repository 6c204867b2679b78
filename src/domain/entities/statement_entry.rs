//! # Statement Entry
//!
//! One holding line from a brokerage gain/loss statement, as produced by
//! the ingestion layer before any filtering.

use crate::domain::entities::lot::Lot;
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::Amount;
use crate::domain::value_objects::arithmetic::ArithmeticResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A statement line describing one acquired lot.
///
/// `price` is the estimated sale value per unit and `gain` the realized gain
/// per unit at that price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementEntry {
    /// Position of the line in the statement, used as the lot identity.
    pub index: usize,
    /// Acquisition date.
    pub acquired: NaiveDate,
    /// Issuing plan name; empty when the statement has none.
    #[serde(default)]
    pub plan: String,
    /// Units currently available for sale.
    pub available: u64,
    /// Estimated sale value per unit.
    pub price: Amount,
    /// Realized gain per unit.
    pub gain: Amount,
}

impl StatementEntry {
    /// Builds the lot for this entry, keyed by its statement index.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the entry has no available units or a
    /// negative price.
    pub fn to_lot(&self) -> DomainResult<Lot<usize>> {
        Lot::new(self.index, self.available, self.price, self.gain)
    }

    /// Describes a sale of `quantity` units of this entry.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if a product does not fit.
    pub fn describe_sale(&self, quantity: u64) -> ArithmeticResult<String> {
        Ok(format!(
            "{} {:>5} x {} = {} (gain {})",
            self.acquired,
            quantity,
            self.price,
            self.price.times(quantity)?,
            self.gain.times(quantity)?,
        ))
    }
}

impl fmt::Display for StatementEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<14} {:>5} @ {} gain/unit {}",
            self.acquired, self.plan, self.available, self.price, self.gain,
        )
    }
}

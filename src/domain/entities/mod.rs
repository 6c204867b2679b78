//! # Domain Entities
//!
//! Value-carrying records of the allocation problem.
//!
//! - [`Lot`]: A sellable lot with per-unit value and gain
//! - [`LotCatalog`]: Immutable, order-preserving lot collection
//! - [`Allocation`]: Units of one lot selected for sale
//! - [`StatementEntry`]: A raw statement line before filtering

pub mod allocation;
pub mod catalog;
pub mod lot;
pub mod statement_entry;

pub use allocation::Allocation;
pub use catalog::LotCatalog;
pub use lot::Lot;
pub use statement_entry::StatementEntry;

//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Numeric Types
//!
//! - [`Amount`]: Signed exact decimal amount with checked arithmetic
//! - [`SaleTotals`]: Aggregate shares, value and gain
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations
//! - [`floor_div`]: Division rounded towards negative infinity
//! - [`affordable_units`]: Whole units that fit within a budget

pub mod amount;
pub mod arithmetic;
pub mod totals;

pub use amount::Amount;
pub use arithmetic::{
    ArithmeticError, ArithmeticResult, CheckedArithmetic, affordable_units, floor_div,
};
pub use totals::SaleTotals;

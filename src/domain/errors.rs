//! # Domain Errors
//!
//! Error types for domain rule violations.
//!
//! # Examples
//!
//! ```
//! use lot_optimizer::domain::errors::DomainError;
//! use lot_optimizer::domain::value_objects::ArithmeticError;
//!
//! let err: DomainError = ArithmeticError::Overflow.into();
//! assert_eq!(err.to_string(), "arithmetic error: arithmetic overflow");
//! ```

use crate::domain::value_objects::arithmetic::ArithmeticError;
use thiserror::Error;

/// Error type for domain rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A unit count violates its bounds.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// A monetary amount violates its bounds.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Two lots share one identity.
    #[error("duplicate lot: {0}")]
    DuplicateLot(String),

    /// Checked arithmetic failed.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Creates an invalid quantity error.
    #[must_use]
    pub fn invalid_quantity(message: impl Into<String>) -> Self {
        Self::InvalidQuantity(message.into())
    }

    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount(message.into())
    }

    /// Creates a duplicate lot error.
    #[must_use]
    pub fn duplicate_lot(message: impl Into<String>) -> Self {
        Self::DuplicateLot(message.into())
    }

    /// Returns true if the error was raised while validating input records.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidQuantity(_) | Self::InvalidAmount(_) | Self::DuplicateLot(_)
        )
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)                 - Lot validation and arithmetic
//! ├── Infrastructure(InfrastructureError) - Files, formats, configuration
//! └── Validation(String)                  - Invalid request parameters
//! ```
//!
//! # Examples
//!
//! ```
//! use lot_optimizer::application::error::{ApplicationError, InfrastructureError};
//!
//! let err = ApplicationError::validation("no input statement given");
//! assert!(err.to_string().contains("no input statement"));
//!
//! let infra_err = InfrastructureError::configuration("bad gain ceiling");
//! let app_err: ApplicationError = infra_err.into();
//! assert!(matches!(app_err, ApplicationError::Infrastructure(_)));
//! ```

use crate::domain::errors::DomainError;
use crate::domain::value_objects::ArithmeticError;
use std::path::Path;
use thiserror::Error;

/// Infrastructure layer error.
///
/// Failures reading or writing files, decoding documents, or assembling
/// configuration.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// File system error.
    #[error("io error: {path}: {message}")]
    Io {
        /// Path being accessed.
        path: String,
        /// Error message.
        message: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// File format not recognised from its extension.
    #[error("unsupported statement format: {0}")]
    UnsupportedFormat(String),
}

impl InfrastructureError {
    /// Creates an io error for `path`.
    #[must_use]
    pub fn io(path: &Path, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Creates an unsupported format error.
    #[must_use]
    pub fn unsupported_format(message: impl Into<String>) -> Self {
        Self::UnsupportedFormat(message.into())
    }
}

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from lot validation or arithmetic.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Infrastructure error from files or configuration.
    #[error("infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<ArithmeticError> for ApplicationError {
    fn from(err: ArithmeticError) -> Self {
        Self::Domain(DomainError::from(err))
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

//! # Application Layer
//!
//! Allocation, ranking and filtering services plus their error types.

pub mod error;
pub mod services;

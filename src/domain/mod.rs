//! # Domain Layer
//!
//! Lots, allocations and the exact arithmetic they are built on.

pub mod entities;
pub mod errors;
pub mod value_objects;

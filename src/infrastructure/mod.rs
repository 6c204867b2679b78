//! # Infrastructure Layer
//!
//! Statement files and layered settings.

pub mod config;
pub mod statement;

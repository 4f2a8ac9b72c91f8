#![forbid(unsafe_code)]

//! Core domain model for the medication dosage formatter.
//!
//! This crate provides:
//! - Domain types (tablet and infusion dosages, medications)
//! - Formatting of dosages and medications
//! - Built-in reference medications
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod format;
pub mod catalog;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use format::{format_dosage, format_medication};
pub use catalog::{builtin_medications, find_medication};
pub use config::{Config, OutputFormat};

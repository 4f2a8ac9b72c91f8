//! Built-in reference medications.
//!
//! This module provides the medications printed by default.

use crate::types::{Dosage, Medication};
use once_cell::sync::Lazy;

/// Cached built-in medications - built once and reused across all operations
static BUILTIN_MEDICATIONS: Lazy<Vec<Medication>> =
    Lazy::new(|| vec![paracetamol(), infliximab()]);

/// Paracetamol, one tablet in the morning and two in the evening
pub fn paracetamol() -> Medication {
    Medication::new("Paracetamol", Dosage::tablet(1, 0, 2))
}

/// Infliximab, infused at 1.5 ml/min for two hours
pub fn infliximab() -> Medication {
    Medication::new("Infliximab", Dosage::infusion(1.5, 2))
}

/// All built-in medications, in display order
pub fn builtin_medications() -> &'static [Medication] {
    &BUILTIN_MEDICATIONS
}

/// Look up a built-in medication by drug name (case-insensitive)
pub fn find_medication(name: &str) -> Option<&'static Medication> {
    let found = builtin_medications()
        .iter()
        .find(|m| m.drug_name.eq_ignore_ascii_case(name.trim()));

    if found.is_none() {
        tracing::debug!("No built-in medication named {:?}", name);
    }

    found
}

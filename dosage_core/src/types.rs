//! Core domain types for the dosage formatter.
//!
//! This module defines the value types used throughout the system:
//! - Tablet and infusion regimens
//! - The closed `Dosage` union over them
//! - Medications pairing a drug name with a dosage

use serde::{Deserialize, Serialize};

// ============================================================================
// Dosage Regimens
// ============================================================================

/// Discrete doses taken at three times of day
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TabletDosage {
    pub morning: u32,
    pub midday: u32,
    pub evening: u32,
}

impl TabletDosage {
    pub fn new(morning: u32, midday: u32, evening: u32) -> Self {
        Self {
            morning,
            midday,
            evening,
        }
    }
}

/// Continuous infusion at a fixed rate
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct InfusionDosage {
    /// Delivery rate in ml/min
    pub speed: f64,
    /// Total duration in hours
    pub duration: u32,
}

impl InfusionDosage {
    pub fn new(speed: f64, duration: u32) -> Self {
        Self { speed, duration }
    }
}

/// Dosage regimen with type-safe variants
///
/// The set of variants is closed. Consumers match on it without a wildcard
/// arm, so a new regimen kind has to be handled everywhere before the
/// workspace compiles again.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Dosage {
    Tablet(TabletDosage),
    Infusion(InfusionDosage),
}

/// Discriminant of a [`Dosage`], without its payload
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DosageKind {
    Tablet,
    Infusion,
}

impl Dosage {
    /// Shorthand for `Dosage::Tablet(TabletDosage::new(..))`
    pub fn tablet(morning: u32, midday: u32, evening: u32) -> Self {
        Dosage::Tablet(TabletDosage::new(morning, midday, evening))
    }

    /// Shorthand for `Dosage::Infusion(InfusionDosage::new(..))`
    pub fn infusion(speed: f64, duration: u32) -> Self {
        Dosage::Infusion(InfusionDosage::new(speed, duration))
    }

    pub fn kind(&self) -> DosageKind {
        match self {
            Dosage::Tablet(_) => DosageKind::Tablet,
            Dosage::Infusion(_) => DosageKind::Infusion,
        }
    }
}

impl From<TabletDosage> for Dosage {
    fn from(tablet: TabletDosage) -> Self {
        Dosage::Tablet(tablet)
    }
}

impl From<InfusionDosage> for Dosage {
    fn from(infusion: InfusionDosage) -> Self {
        Dosage::Infusion(infusion)
    }
}

// ============================================================================
// Medication
// ============================================================================

/// A named drug paired with exactly one dosage regimen
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    pub drug_name: String,
    pub dosage: Dosage,
}

impl Medication {
    pub fn new(drug_name: impl Into<String>, dosage: impl Into<Dosage>) -> Self {
        Self {
            drug_name: drug_name.into(),
            dosage: dosage.into(),
        }
    }
}

//! Human-readable rendering of dosages and medications.
//!
//! - Tablet: `"{morning}-{midday}-{evening}"`
//! - Infusion: `"{speed} ml/min for {duration}h"`
//! - Medication: `"{drug_name}: {dosage}"`

use crate::types::{Dosage, InfusionDosage, Medication, TabletDosage};
use std::fmt;

impl fmt::Display for TabletDosage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.morning, self.midday, self.evening)
    }
}

impl fmt::Display for InfusionDosage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ml/min for {}h", self.speed, self.duration)
    }
}

impl fmt::Display for Dosage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dosage::Tablet(tablet) => fmt::Display::fmt(tablet, f),
            Dosage::Infusion(infusion) => fmt::Display::fmt(infusion, f),
        }
    }
}

impl fmt::Display for Medication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.drug_name, self.dosage)
    }
}

/// Format a dosage regimen for display
pub fn format_dosage(dosage: &Dosage) -> String {
    dosage.to_string()
}

/// Format a medication as `"{drug_name}: {dosage}"`
pub fn format_medication(medication: &Medication) -> String {
    medication.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tablet_format() {
        assert_eq!(format_dosage(&Dosage::tablet(1, 0, 2)), "1-0-2");
    }

    #[test]
    fn test_infusion_format() {
        assert_eq!(
            format_dosage(&Dosage::infusion(1.5, 2)),
            "1.5 ml/min for 2h"
        );
    }

    #[test]
    fn test_tablet_no_padding() {
        assert_eq!(format_dosage(&Dosage::tablet(10, 0, 125)), "10-0-125");
    }

    #[test]
    fn test_infusion_speed_uses_shortest_form() {
        assert_eq!(
            format_dosage(&Dosage::infusion(0.25, 12)),
            "0.25 ml/min for 12h"
        );
        assert_eq!(format_dosage(&Dosage::infusion(3.0, 1)), "3 ml/min for 1h");
    }

    #[test]
    fn test_medication_format() {
        let paracetamol = Medication::new("Paracetamol", Dosage::tablet(1, 0, 2));
        let infliximab = Medication::new("Infliximab", Dosage::infusion(1.5, 2));

        assert_eq!(format_medication(&paracetamol), "Paracetamol: 1-0-2");
        assert_eq!(
            format_medication(&infliximab),
            "Infliximab: 1.5 ml/min for 2h"
        );
    }

    #[test]
    fn test_every_variant_formats_non_empty() {
        let samples = [
            Dosage::tablet(0, 0, 0),
            Dosage::tablet(u32::MAX, 1, 2),
            Dosage::infusion(0.0, 0),
            Dosage::infusion(f64::MAX, u32::MAX),
        ];
        for dosage in &samples {
            assert!(!format_dosage(dosage).is_empty(), "{:?}", dosage);
        }
    }

    #[test]
    fn test_format_is_idempotent() {
        let med = Medication::new("Infliximab", Dosage::infusion(1.5, 2));
        let first = format_medication(&med);
        let second = format_medication(&med);
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_matches_free_functions() {
        let med = Medication::new("Paracetamol", Dosage::tablet(1, 0, 2));
        assert_eq!(format!("{}", med), format_medication(&med));
        assert_eq!(format!("{}", med.dosage), format_dosage(&med.dosage));
    }
}

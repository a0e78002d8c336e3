//! Classifier output class id → human-readable disease name.
//!
//! The pairs mirror the label encoding of the training run; ids are not
//! contiguous with insertion order on purpose, this is data, not code.

use std::collections::HashMap;

pub const DISEASE_LABELS: [(u32, &str); 17] = [
    (6, "Fungal infection"),
    (1, "Allergy"),
    (7, "GERD"),
    (5, "Drug Reaction"),
    (8, "Gastroenteritis"),
    (12, "Migraine"),
    (2, "Cervical spondylosis"),
    (11, "Malaria"),
    (3, "Chicken pox"),
    (4, "Dengue"),
    (15, "Tuberculosis"),
    (13, "Pneumonia"),
    (9, "Hypoglycemia"),
    (0, "Acne"),
    (16, "Urinary tract infection"),
    (14, "Psoriasis"),
    (10, "Impetigo"),
];

/// Fixed class-id → disease-name map, built once at startup.
pub struct DiseaseLabels {
    by_id: HashMap<u32, &'static str>,
}

impl DiseaseLabels {
    pub fn new() -> Self {
        Self {
            by_id: DISEASE_LABELS.iter().copied().collect(),
        }
    }

    /// Disease name for a classifier output, if the label map covers it.
    pub fn name_of(&self, class_id: u32) -> Option<&'static str> {
        self.by_id.get(&class_id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// All disease names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_id.values().copied()
    }
}

impl Default for DiseaseLabels {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_all_17_classes() {
        let labels = DiseaseLabels::new();
        assert_eq!(labels.len(), 17);
        for id in 0..17 {
            assert!(labels.name_of(id).is_some(), "class {id} unmapped");
        }
    }

    #[test]
    fn class_6_is_fungal_infection() {
        let labels = DiseaseLabels::new();
        assert_eq!(labels.name_of(6), Some("Fungal infection"));
        assert_eq!(labels.name_of(0), Some("Acne"));
        assert_eq!(labels.name_of(16), Some("Urinary tract infection"));
    }

    #[test]
    fn out_of_range_class_is_unmapped() {
        let labels = DiseaseLabels::new();
        assert_eq!(labels.name_of(17), None);
        assert_eq!(labels.name_of(u32::MAX), None);
    }
}

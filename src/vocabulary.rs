//! The fixed symptom vocabulary: every recognized symptom name bound to
//! one feature-vector slot.
//!
//! Slot order is the order the classifier was trained with. It must never
//! change independently of the model artifact; reordering or inserting
//! entries silently invalidates every prediction.

use std::collections::HashMap;

/// Symptom names in feature-vector slot order.
///
/// A few entries carry odd spacing (`"spotting_ urination"`,
/// `"foul_smell_of urine"`, `"dischromic _patches"`). They are preserved
/// verbatim because they are the exact keys the training data used.
pub const SYMPTOMS: [&str; 69] = [
    "itching",
    "skin_rash",
    "nodal_skin_eruptions",
    "continuous_sneezing",
    "shivering",
    "chills",
    "joint_pain",
    "stomach_pain",
    "acidity",
    "ulcers_on_tongue",
    "vomiting",
    "burning_micturition",
    "spotting_ urination",
    "fatigue",
    "anxiety",
    "weight_loss",
    "lethargy",
    "cough",
    "high_fever",
    "sunken_eyes",
    "breathlessness",
    "sweating",
    "dehydration",
    "indigestion",
    "headache",
    "nausea",
    "loss_of_appetite",
    "pain_behind_the_eyes",
    "back_pain",
    "diarrhoea",
    "mild_fever",
    "yellowing_of_eyes",
    "swelled_lymph_nodes",
    "malaise",
    "blurred_and_distorted_vision",
    "phlegm",
    "chest_pain",
    "weakness_in_limbs",
    "fast_heart_rate",
    "neck_pain",
    "dizziness",
    "excessive_hunger",
    "drying_and_tingling_lips",
    "slurred_speech",
    "stiff_neck",
    "loss_of_balance",
    "bladder_discomfort",
    "foul_smell_of urine",
    "continuous_feel_of_urine",
    "depression",
    "irritability",
    "muscle_pain",
    "red_spots_over_body",
    "dischromic _patches",
    "watering_from_eyes",
    "rusty_sputum",
    "visual_disturbances",
    "blood_in_sputum",
    "palpitations",
    "pus_filled_pimples",
    "blackheads",
    "scurring",
    "skin_peeling",
    "silver_like_dusting",
    "small_dents_in_nails",
    "inflammatory_nails",
    "blister",
    "red_sore_around_nose",
    "yellow_crust_ooze",
];

/// Closed symptom vocabulary with O(1) name → slot lookup.
pub struct SymptomVocabulary {
    index: HashMap<&'static str, usize>,
}

impl SymptomVocabulary {
    pub fn new() -> Self {
        let index = SYMPTOMS
            .iter()
            .enumerate()
            .map(|(slot, &name)| (name, slot))
            .collect();
        Self { index }
    }

    /// Feature-vector slot assigned to `name`, if it is a known symptom.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Vocabulary size == feature-vector length.
    pub fn len(&self) -> usize {
        SYMPTOMS.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All symptom names in slot order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        SYMPTOMS.iter().copied()
    }
}

impl Default for SymptomVocabulary {
    fn default() -> Self {
        Self::new()
    }
}

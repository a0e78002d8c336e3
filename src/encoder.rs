//! Feature encoder: symptom names → binary indicator vector.

use thiserror::Error;

use crate::vocabulary::SymptomVocabulary;

#[derive(Debug, Error)]
pub enum EncodeError {
    /// Input named a symptom outside the closed vocabulary. Skipping it
    /// would turn an input mistake into a confident wrong prediction, so
    /// it is a hard error instead.
    #[error("unknown symptom: {0:?}")]
    UnknownSymptom(String),
}

/// Encode a symptom list into the classifier's input shape: one 0/1 slot
/// per vocabulary entry. Duplicates are idempotent and order is
/// irrelevant; an empty list yields the all-zero vector.
pub fn encode(
    vocabulary: &SymptomVocabulary,
    symptoms: &[String],
) -> Result<Vec<f32>, EncodeError> {
    let mut features = vec![0.0f32; vocabulary.len()];
    for symptom in symptoms {
        let slot = vocabulary
            .index_of(symptom)
            .ok_or_else(|| EncodeError::UnknownSymptom(symptom.clone()))?;
        features[slot] = 1.0;
    }
    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> SymptomVocabulary {
        SymptomVocabulary::new()
    }

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn weight(features: &[f32]) -> usize {
        features.iter().filter(|&&x| x == 1.0).count()
    }

    #[test]
    fn sets_one_slot_per_distinct_symptom() {
        let features = encode(&vocab(), &strings(&["itching", "skin_rash", "cough"])).unwrap();
        assert_eq!(features.len(), 69);
        assert_eq!(weight(&features), 3);
        assert_eq!(features[0], 1.0); // itching
        assert_eq!(features[1], 1.0); // skin_rash
        assert_eq!(features[17], 1.0); // cough
    }

    #[test]
    fn order_independent() {
        let a = encode(&vocab(), &strings(&["chills", "headache", "nausea"])).unwrap();
        let b = encode(&vocab(), &strings(&["nausea", "chills", "headache"])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn duplicates_are_idempotent() {
        let once = encode(&vocab(), &strings(&["itching"])).unwrap();
        let thrice = encode(&vocab(), &strings(&["itching", "itching", "itching"])).unwrap();
        assert_eq!(once, thrice);
        assert_eq!(weight(&thrice), 1);
    }

    #[test]
    fn empty_list_is_all_zeros() {
        let features = encode(&vocab(), &[]).unwrap();
        assert_eq!(features.len(), 69);
        assert_eq!(weight(&features), 0);
    }

    #[test]
    fn unknown_symptom_is_a_hard_error() {
        let err = encode(&vocab(), &strings(&["itching", "not_a_real_symptom"])).unwrap_err();
        let EncodeError::UnknownSymptom(name) = err;
        assert_eq!(name, "not_a_real_symptom");
    }

    #[test]
    fn odd_spaced_names_encode_at_their_slots() {
        let features = encode(
            &vocab(),
            &strings(&["spotting_ urination", "foul_smell_of urine", "dischromic _patches"]),
        )
        .unwrap();
        assert_eq!(features[12], 1.0);
        assert_eq!(features[47], 1.0);
        assert_eq!(features[53], 1.0);
        assert_eq!(weight(&features), 3);
    }
}

//! Disease resolution and recommendation aggregation — the
//! encode → predict → label → join pipeline behind `/recommend`.

use serde::Serialize;
use thiserror::Error;

use crate::classifier::{Classifier, ClassifierError};
use crate::encoder::{self, EncodeError};
use crate::labels::DiseaseLabels;
use crate::reference::ReferenceTables;
use crate::vocabulary::SymptomVocabulary;

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    /// The classifier produced a class id the label map does not cover.
    /// Indicates model/label-map version skew; surfaced, never defaulted.
    #[error("classifier returned unknown class id {0}")]
    UnknownClassId(u32),
    /// The disease resolved but has no medications row. Medications are
    /// mandatory per disease; the other reference fields degrade to empty.
    #[error("no medications row for disease {0:?}")]
    MissingMedications(String),
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Composite per-request result: one disease plus its five reference
/// fields. Built per request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub disease: String,
    pub description: String,
    pub precautions: Vec<String>,
    pub medications: Vec<String>,
    pub diets: Vec<String>,
    pub workouts: Vec<String>,
}

/// Owns the read-only pipeline state: vocabulary, label map, reference
/// tables and the fitted classifier. Everything is immutable after
/// construction, so an `Arc<Engine>` is shared freely across requests.
pub struct Engine {
    vocabulary: SymptomVocabulary,
    labels: DiseaseLabels,
    tables: ReferenceTables,
    classifier: Box<dyn Classifier>,
}

impl Engine {
    pub fn new(tables: ReferenceTables, classifier: Box<dyn Classifier>) -> Self {
        Self {
            vocabulary: SymptomVocabulary::new(),
            labels: DiseaseLabels::new(),
            tables,
            classifier,
        }
    }

    pub fn vocabulary(&self) -> &SymptomVocabulary {
        &self.vocabulary
    }

    pub fn labels(&self) -> &DiseaseLabels {
        &self.labels
    }

    /// The full pipeline. Any stage failure aborts the whole request; no
    /// partial results, no retries (every stage is deterministic and
    /// in-memory).
    pub fn recommend(&self, symptoms: &[String]) -> Result<Recommendation, RecommendError> {
        let features = encoder::encode(&self.vocabulary, symptoms)?;
        let disease = self.resolve(&features)?;
        self.aggregate(&disease)
    }

    /// Classifier call plus label-map lookup.
    pub fn resolve(&self, features: &[f32]) -> Result<String, RecommendError> {
        let class_id = self.classifier.predict(features)?;
        match self.labels.name_of(class_id) {
            Some(name) => Ok(name.to_string()),
            None => {
                tracing::error!(class_id, "classifier output has no entry in the label map");
                Err(RecommendError::UnknownClassId(class_id))
            }
        }
    }

    /// Join one disease against all five reference tables.
    ///
    /// Multi-row policy: description, diets and workouts take every
    /// matching row; precautions and medications take the first row only.
    ///
    /// Missing-row policy: medications are mandatory (their absence is a
    /// data-integrity defect worth failing on); description degrades to an
    /// empty string and the advisory fields to empty lists.
    pub fn aggregate(&self, disease: &str) -> Result<Recommendation, RecommendError> {
        let description = self
            .tables
            .descriptions(disease)
            .iter()
            .map(|row| row.description.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let precautions = self
            .tables
            .precautions(disease)
            .first()
            .map(|row| {
                [
                    &row.precaution_1,
                    &row.precaution_2,
                    &row.precaution_3,
                    &row.precaution_4,
                ]
                .into_iter()
                .filter(|cell| !cell.is_empty())
                .cloned()
                .collect::<Vec<String>>()
            })
            .unwrap_or_default();

        let medications = match self.tables.medications(disease).first() {
            Some(row) => row
                .medication
                .split(',')
                .map(|item| item.trim().to_string())
                .collect(),
            None => {
                tracing::warn!(disease, "medications table has no row for resolved disease");
                return Err(RecommendError::MissingMedications(disease.to_string()));
            }
        };

        let diets = self
            .tables
            .diets(disease)
            .iter()
            .map(|row| row.diet.clone())
            .collect();

        let workouts = self
            .tables
            .workouts(disease)
            .iter()
            .map(|row| row.workout.clone())
            .collect();

        Ok(Recommendation {
            disease: disease.to_string(),
            description,
            precautions,
            medications,
            diets,
            workouts,
        })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::Arc;

    use super::Engine;
    use crate::classifier::FixedModel;
    use crate::reference::{
        DescriptionRow, DietRow, MedicationRow, PrecautionRow, ReferenceTables, WorkoutRow,
    };

    pub(crate) fn sample_tables() -> ReferenceTables {
        ReferenceTables::from_rows(
            vec![DescriptionRow {
                disease: "Fungal infection".into(),
                description: "Fungal infection is a common skin condition caused by fungi."
                    .into(),
            }],
            vec![PrecautionRow {
                disease: "Fungal infection".into(),
                precaution_1: "bath twice".into(),
                precaution_2: "use dettol or neem in bathing water".into(),
                precaution_3: "keep infected area dry".into(),
                precaution_4: "use clean cloths".into(),
            }],
            vec![MedicationRow {
                disease: "Fungal infection".into(),
                medication: "Antifungal Cream, Antihistamines".into(),
            }],
            vec![DietRow {
                disease: "Fungal infection".into(),
                diet: "Probiotic-rich foods".into(),
            }],
            vec![
                WorkoutRow {
                    disease: "Fungal infection".into(),
                    workout: "Light stretching".into(),
                },
                WorkoutRow {
                    disease: "Fungal infection".into(),
                    workout: "Walking".into(),
                },
            ],
        )
    }

    /// Engine over the sample tables with a classifier pinned to one
    /// class. The `Arc` lets tests keep a handle for call-count asserts.
    pub(crate) fn sample_engine(class_id: u32) -> (Engine, Arc<FixedModel>) {
        let model = Arc::new(FixedModel::new(class_id));
        let engine = Engine::new(sample_tables(), Box::new(model.clone()));
        (engine, model)
    }
}

//! Linear one-vs-rest classifier loaded from a JSON artifact.
//!
//! The artifact is an export of the fitted SVC the service was trained
//! with: one weight row and intercept per class, prediction is
//! `argmax(w·x + b)`. The file is provisioned data; this adapter only
//! validates its shape and evaluates it.

use std::path::Path;

use serde::Deserialize;

use super::{Classifier, ClassifierError};

#[derive(Debug, Deserialize)]
struct Artifact {
    classes: Vec<u32>,
    weights: Vec<Vec<f32>>,
    intercepts: Vec<f32>,
}

#[derive(Debug)]
pub struct LinearModel {
    classes: Vec<u32>,
    weights: Vec<Vec<f32>>,
    intercepts: Vec<f32>,
    features: usize,
}

impl LinearModel {
    /// Load the artifact from disk. Fails startup on a missing or
    /// malformed file; the process must not become ready without a model.
    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        if !path.exists() {
            return Err(ClassifierError::ArtifactNotFound(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ClassifierError::ArtifactInvalid(e.to_string()))?;
        let model = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            classes = model.classes.len(),
            features = model.features,
            "linear classifier artifact loaded"
        );
        Ok(model)
    }

    pub fn from_json(raw: &str) -> Result<Self, ClassifierError> {
        let artifact: Artifact = serde_json::from_str(raw)
            .map_err(|e| ClassifierError::ArtifactInvalid(e.to_string()))?;

        if artifact.classes.is_empty() {
            return Err(ClassifierError::ArtifactInvalid("no classes".into()));
        }
        if artifact.weights.len() != artifact.classes.len()
            || artifact.intercepts.len() != artifact.classes.len()
        {
            return Err(ClassifierError::ArtifactInvalid(format!(
                "{} classes but {} weight rows and {} intercepts",
                artifact.classes.len(),
                artifact.weights.len(),
                artifact.intercepts.len()
            )));
        }
        let features = artifact.weights[0].len();
        if features == 0 || artifact.weights.iter().any(|row| row.len() != features) {
            return Err(ClassifierError::ArtifactInvalid(
                "weight rows are empty or ragged".into(),
            ));
        }

        Ok(Self {
            classes: artifact.classes,
            weights: artifact.weights,
            intercepts: artifact.intercepts,
            features,
        })
    }

    /// Feature-vector length the artifact was fitted for.
    pub fn feature_len(&self) -> usize {
        self.features
    }
}

impl Classifier for LinearModel {
    fn predict(&self, features: &[f32]) -> Result<u32, ClassifierError> {
        if features.len() != self.features {
            return Err(ClassifierError::FeatureShape {
                got: features.len(),
                expected: self.features,
            });
        }

        let mut best = 0usize;
        let mut best_score = f32::NEG_INFINITY;
        for (index, (row, intercept)) in self.weights.iter().zip(&self.intercepts).enumerate() {
            let score = row
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f32>()
                + intercept;
            if score > best_score {
                best_score = score;
                best = index;
            }
        }
        Ok(self.classes[best])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_class_model() -> LinearModel {
        LinearModel::from_json(
            r#"{
                "classes": [4, 9],
                "weights": [[1.0, 0.0, 0.0], [0.0, 1.0, 1.0]],
                "intercepts": [0.0, -0.5]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn predicts_argmax_class() {
        let model = two_class_model();
        assert_eq!(model.predict(&[1.0, 0.0, 0.0]).unwrap(), 4);
        assert_eq!(model.predict(&[0.0, 1.0, 1.0]).unwrap(), 9);
    }

    #[test]
    fn prediction_is_deterministic() {
        let model = two_class_model();
        let features = [0.0, 1.0, 0.0];
        let first = model.predict(&features).unwrap();
        for _ in 0..10 {
            assert_eq!(model.predict(&features).unwrap(), first);
        }
    }

    #[test]
    fn zero_vector_falls_back_to_intercepts() {
        let model = two_class_model();
        // Scores are just the intercepts: 0.0 beats -0.5
        assert_eq!(model.predict(&[0.0, 0.0, 0.0]).unwrap(), 4);
    }

    #[test]
    fn wrong_feature_count_is_rejected() {
        let model = two_class_model();
        let err = model.predict(&[1.0, 0.0]).unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::FeatureShape { got: 2, expected: 3 }
        ));
    }

    #[test]
    fn reports_artifact_shape() {
        let model = two_class_model();
        assert_eq!(model.feature_len(), 3);
    }

    #[test]
    fn rejects_ragged_weight_matrix() {
        let err = LinearModel::from_json(
            r#"{"classes":[0,1],"weights":[[1.0,2.0],[1.0]],"intercepts":[0.0,0.0]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ClassifierError::ArtifactInvalid(_)));
    }

    #[test]
    fn rejects_mismatched_intercepts() {
        let err = LinearModel::from_json(
            r#"{"classes":[0,1],"weights":[[1.0],[2.0]],"intercepts":[0.0]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ClassifierError::ArtifactInvalid(_)));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = LinearModel::from_json("not json").unwrap_err();
        assert!(matches!(err, ClassifierError::ArtifactInvalid(_)));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = LinearModel::load(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, ClassifierError::ArtifactNotFound(_)));
    }
}

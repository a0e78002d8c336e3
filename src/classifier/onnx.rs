//! ONNX Runtime adapter for classifiers exported with skl2onnx.
//! Behind the `onnx-model` feature.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;

use super::{Classifier, ClassifierError};

/// Runs a `[1, n_features]` f32 input through an ONNX session and reads
/// the first output as int64 class labels (the shape skl2onnx emits for
/// an SVC's label output).
///
/// Uses interior mutability (Mutex) because `Session::run` requires
/// `&mut self` while the `Classifier` trait exposes `&self` for shared
/// use across request tasks.
pub struct OnnxModel {
    session: Mutex<Session>,
    features: usize,
}

impl OnnxModel {
    /// Load an ONNX classifier fitted for `features` input slots.
    pub fn load(path: &Path, features: usize) -> Result<Self, ClassifierError> {
        if !path.exists() {
            return Err(ClassifierError::ArtifactNotFound(path.to_path_buf()));
        }

        let session = Session::builder()
            .map_err(|e: ort::Error| ClassifierError::ArtifactInvalid(e.to_string()))?
            .with_intra_threads(2)
            .map_err(|e: ort::Error| ClassifierError::ArtifactInvalid(e.to_string()))?
            .commit_from_file(path)
            .map_err(|e: ort::Error| {
                ClassifierError::ArtifactInvalid(format!("ONNX load failed: {e}"))
            })?;

        tracing::info!(path = %path.display(), features, "ONNX classifier loaded");

        Ok(Self {
            session: Mutex::new(session),
            features,
        })
    }
}

impl Classifier for OnnxModel {
    fn predict(&self, features: &[f32]) -> Result<u32, ClassifierError> {
        use ort::value::TensorRef;

        if features.len() != self.features {
            return Err(ClassifierError::FeatureShape {
                got: features.len(),
                expected: self.features,
            });
        }

        let input = ndarray::Array2::from_shape_vec((1, features.len()), features.to_vec())
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let tensor = TensorRef::from_array_view(&input)
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| ClassifierError::Inference("session lock poisoned".to_string()))?;

        let outputs = session
            .run(ort::inputs![tensor])
            .map_err(|e| ClassifierError::Inference(format!("ONNX inference failed: {e}")))?;

        let (shape, labels) = outputs[0]
            .try_extract_tensor::<i64>()
            .map_err(|e| ClassifierError::Inference(format!("output extraction: {e}")))?;

        let label = labels.first().copied().ok_or_else(|| {
            ClassifierError::Inference(format!("empty label output, shape {shape:?}"))
        })?;

        u32::try_from(label)
            .map_err(|_| ClassifierError::Inference(format!("negative class label {label}")))
    }
}

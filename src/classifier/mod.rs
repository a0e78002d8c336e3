//! The opaque pre-trained disease classifier.
//!
//! The model is provisioned, not designed: this module only pins down the
//! single narrow contract (feature vector in, class id out) and the
//! adapters that load fitted artifacts.

pub mod linear;
#[cfg(feature = "onnx-model")]
pub mod onnx;

pub use linear::LinearModel;
#[cfg(feature = "onnx-model")]
pub use onnx::OnnxModel;

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier artifact not found at {0}")]
    ArtifactNotFound(PathBuf),
    #[error("classifier artifact invalid: {0}")]
    ArtifactInvalid(String),
    #[error("feature vector has {got} slots, model expects {expected}")]
    FeatureShape { got: usize, expected: usize },
    #[error("inference failed: {0}")]
    Inference(String),
}

/// Contract for the fitted model: one feature vector in, one class id out.
///
/// Implementations must be deterministic for a given input and safe to
/// share across request tasks; anything stateful inside serializes its own
/// access.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &[f32]) -> Result<u32, ClassifierError>;
}

impl<T: Classifier + ?Sized> Classifier for std::sync::Arc<T> {
    fn predict(&self, features: &[f32]) -> Result<u32, ClassifierError> {
        (**self).predict(features)
    }
}

/// Test double: always predicts the configured class and counts calls,
/// so tests can assert the classifier was (or was not) invoked.
pub struct FixedModel {
    class_id: u32,
    calls: AtomicUsize,
}

impl FixedModel {
    pub fn new(class_id: u32) -> Self {
        Self {
            class_id,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Classifier for FixedModel {
    fn predict(&self, _features: &[f32]) -> Result<u32, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.class_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn fixed_model_returns_configured_class() {
        let model = FixedModel::new(6);
        assert_eq!(model.predict(&[0.0; 69]).unwrap(), 6);
        assert_eq!(model.predict(&[1.0; 69]).unwrap(), 6);
        assert_eq!(model.calls(), 2);
    }

    #[test]
    fn arc_wrapper_delegates() {
        let model = Arc::new(FixedModel::new(3));
        let boxed: Box<dyn Classifier> = Box::new(model.clone());
        assert_eq!(boxed.predict(&[]).unwrap(), 3);
        assert_eq!(model.calls(), 1);
    }
}

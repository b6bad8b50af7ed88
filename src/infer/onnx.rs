use std::path::PathBuf;

use ndarray::{Array2, Array4};
use ort::session::Session;
use ort::session::builder::GraphOptimizationLevel;
use ort::value::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::infer::Classifier;
use crate::types::ModelFamily;

/// ONNX-Runtime-backed classifier.
///
/// The inference session is scoped to a single request: built from the model
/// file inside `classify`, run once, and dropped on every exit path. No
/// session state outlives a call, so concurrent requests need no
/// coordination and the normalization pipeline stays free of shared state.
pub struct OnnxClassifier {
    model_path: PathBuf,
    family: ModelFamily,
    name: String,
}

impl OnnxClassifier {
    pub fn new(model_path: impl Into<PathBuf>, family: ModelFamily) -> Result<Self> {
        let model_path = model_path.into();
        if !model_path.exists() {
            return Err(Error::InvalidArgument {
                arg: "model",
                value: model_path.display().to_string(),
            });
        }

        let name = model_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "model".to_string());

        Ok(Self {
            model_path,
            family,
            name,
        })
    }

    pub fn family(&self) -> ModelFamily {
        self.family
    }

    fn open_session(&self) -> Result<Session> {
        Session::builder()
            .map_err(Error::inference)?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(Error::inference)?
            .commit_from_file(&self.model_path)
            .map_err(Error::inference)
    }

}

impl Classifier for OnnxClassifier {
    fn classify(&self, pixels: &Array2<u8>) -> Result<Vec<f32>> {
        let (rows, cols) = pixels.dim();

        // Acquire the session for this request only
        let mut session = self.open_session()?;
        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .ok_or_else(|| Error::Inference("model declares no inputs".to_string()))?;

        // The matrix is laid out per model family, keeping the raw 0-255
        // range the training data uses.
        let outputs = match self.family {
            ModelFamily::Mlp => {
                let flat: Vec<f32> = pixels.iter().map(|&v| v as f32).collect();
                let tensor =
                    Array2::from_shape_vec((1, rows * cols), flat).map_err(Error::inference)?;
                session
                    .run(ort::inputs![
                        input_name.as_str() => Value::from_array(tensor).map_err(Error::inference)?
                    ])
                    .map_err(Error::inference)?
            }
            ModelFamily::Cnn => {
                let mut tensor = Array4::<f32>::zeros((1, rows, cols, 1));
                for ((row, col), &v) in pixels.indexed_iter() {
                    tensor[[0, row, col, 0]] = v as f32;
                }
                session
                    .run(ort::inputs![
                        input_name.as_str() => Value::from_array(tensor).map_err(Error::inference)?
                    ])
                    .map_err(Error::inference)?
            }
        };

        let probs: Vec<f32> = outputs[0]
            .try_extract_array::<f32>()
            .map_err(Error::inference)?
            .iter()
            .copied()
            .collect();

        if probs.is_empty() {
            return Err(Error::Inference(
                "model produced an empty probability vector".to_string(),
            ));
        }

        debug!(
            "Model '{}' returned {} class probabilities",
            self.name,
            probs.len()
        );

        Ok(probs)
        // session drops here, releasing the inference resource
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_file_is_rejected_up_front() {
        let result = OnnxClassifier::new("/nonexistent/model.onnx", ModelFamily::Mlp);
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn name_comes_from_the_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep_mlp.onnx");
        std::fs::write(&path, b"not a real model").unwrap();

        let classifier = OnnxClassifier::new(&path, ModelFamily::Mlp).unwrap();
        assert_eq!(classifier.name(), "deep_mlp");
        assert_eq!(classifier.family(), ModelFamily::Mlp);
    }

    #[test]
    #[ignore] // Only run if a real MNIST model is available
    fn classify_returns_ten_probabilities() {
        let classifier =
            OnnxClassifier::new("models/deep_mlp.onnx", ModelFamily::Mlp).unwrap();
        let pixels = Array2::<u8>::zeros((28, 28));
        let probs = classifier.classify(&pixels).unwrap();
        assert_eq!(probs.len(), 10);
    }
}

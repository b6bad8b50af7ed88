//! Inference-engine seam: the `Classifier` trait consumed by the transport
//! layer, plus ranking of raw probability vectors into top-n predictions.
//! The ONNX-backed implementation lives in `onnx` (feature `onnx`).
use ndarray::Array2;

use crate::error::Result;
use crate::types::Prediction;

#[cfg(feature = "onnx")]
pub mod onnx;
#[cfg(feature = "onnx")]
pub use onnx::OnnxClassifier;

/// A collaborator that turns a normalized intensity matrix into per-class
/// probabilities. The pipeline assumes nothing about the model family beyond
/// this contract.
pub trait Classifier: Send + Sync {
    /// Produce one probability per class, index = class label.
    fn classify(&self, pixels: &Array2<u8>) -> Result<Vec<f32>>;

    /// Short identifier for health reporting and logs.
    fn name(&self) -> &str;
}

/// Rank a probability vector into the top `n` predictions, sorted by
/// probability descending, ties broken by ascending class index.
pub fn top_predictions(probs: &[f32], n: usize) -> Vec<Prediction> {
    let mut ranked: Vec<Prediction> = probs
        .iter()
        .enumerate()
        .map(|(class, &prob)| Prediction { class, prob })
        .collect();

    ranked.sort_by(|a, b| {
        b.prob
            .partial_cmp(&a.prob)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.class.cmp(&b.class))
    });
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_two_of_three_sorted_descending() {
        let ranked = top_predictions(&[0.1, 0.7, 0.2], 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0], Prediction { class: 1, prob: 0.7 });
        assert_eq!(ranked[1], Prediction { class: 2, prob: 0.2 });
    }

    #[test]
    fn ties_break_by_ascending_class() {
        let ranked = top_predictions(&[0.4, 0.4, 0.2], 3);
        assert_eq!(ranked[0].class, 0);
        assert_eq!(ranked[1].class, 1);
        assert_eq!(ranked[2].class, 2);
    }

    #[test]
    fn n_larger_than_classes_returns_all() {
        let ranked = top_predictions(&[0.5, 0.5], 10);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn n_zero_returns_nothing() {
        assert!(top_predictions(&[0.9, 0.1], 0).is_empty());
    }
}

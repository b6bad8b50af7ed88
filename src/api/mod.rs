//! High-level, ergonomic library API: normalize encoded payloads to
//! model-ready matrices and classify them in one call. Prefer these
//! entrypoints over the low-level processing modules when embedding digitd.
use crate::core::params::NormalizeParams;
use crate::core::processing::pipeline::{NormalizedImage, normalize};
use crate::error::Result;
use crate::infer::{Classifier, top_predictions};
use crate::io::payload::{matrix_from_data_url, matrix_from_image_bytes};
use crate::types::Prediction;

/// Normalize a `data:image/...;base64,...` payload to the classifier's
/// input geometry.
pub fn normalize_data_url(payload: &str, params: &NormalizeParams) -> Result<NormalizedImage> {
    let matrix = matrix_from_data_url(payload)?;
    normalize(&matrix, params)
}

/// Normalize raw image bytes (PNG, JPEG, ...) to the classifier's input
/// geometry.
pub fn normalize_image_bytes(bytes: &[u8], params: &NormalizeParams) -> Result<NormalizedImage> {
    let matrix = matrix_from_image_bytes(bytes)?;
    normalize(&matrix, params)
}

/// Decode, normalize, and classify an encoded payload, returning the top `n`
/// predictions together with the normalized image record.
pub fn classify_data_url(
    payload: &str,
    params: &NormalizeParams,
    classifier: &dyn Classifier,
    top: usize,
) -> Result<(Vec<Prediction>, NormalizedImage)> {
    let normalized = normalize_data_url(payload, params)?;
    let probs = classifier.classify(&normalized.pixels)?;
    Ok((top_predictions(&probs, top), normalized))
}

/// Decode, normalize, and classify raw image bytes.
pub fn classify_image_bytes(
    bytes: &[u8],
    params: &NormalizeParams,
    classifier: &dyn Classifier,
    top: usize,
) -> Result<(Vec<Prediction>, NormalizedImage)> {
    let normalized = normalize_image_bytes(bytes, params)?;
    let probs = classifier.classify(&normalized.pixels)?;
    Ok((top_predictions(&probs, top), normalized))
}

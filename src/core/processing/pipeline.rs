use ndarray::Array2;
use tracing::debug;

use crate::core::params::NormalizeParams;
use crate::core::processing::resize::resize_to_target;
use crate::core::processing::square::{PaddingAmounts, pad_to_square};
use crate::core::processing::trim::{BoundingBox, trim};
use crate::error::Result;

/// Result of running the normalization pipeline on a decoded matrix.
///
/// Besides the model-ready pixels, the crop box and padding amounts are kept
/// so callers can relate output coordinates back to the source image.
#[derive(Debug, Clone)]
pub struct NormalizedImage {
    /// Exactly `target_height x target_width` pixels, foreground-high
    pub pixels: Array2<u8>,
    /// Dimensions of the decoded source matrix
    pub source_rows: usize,
    pub source_cols: usize,
    /// Foreground bounding box found by the trim stage
    pub crop: BoundingBox,
    /// Margin added by the square stage
    pub padding: PaddingAmounts,
}

/// Run trim -> square -> resize on a decoded intensity matrix.
///
/// Each stage produces a fresh matrix; any stage failure aborts the request
/// with no partial result.
pub fn normalize(pixels: &Array2<u8>, params: &NormalizeParams) -> Result<NormalizedImage> {
    let (source_rows, source_cols) = pixels.dim();

    let (trimmed, crop) = trim(pixels)?;
    let (squared, padding) = pad_to_square(
        &trimmed,
        params.tile_height,
        params.tile_width,
        params.fill,
    );
    let resized = resize_to_target(
        &squared,
        params.target_width,
        params.target_height,
        params.fill,
    )?;

    debug!(
        "Normalized {}x{} -> {}x{}",
        source_rows,
        source_cols,
        resized.nrows(),
        resized.ncols()
    );

    Ok(NormalizedImage {
        pixels: resized,
        source_rows,
        source_cols,
        crop,
        padding,
    })
}

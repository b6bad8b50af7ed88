use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use ndarray::{Array2, s};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Shrink-to-fit dimensions for `cols x rows` inside `target_cols x
/// target_rows`, preserving aspect ratio and never upscaling. The binding
/// axis lands exactly on the target; the other axis is floored, so the
/// result can undershoot the box by a pixel. `correct_shortfall` restores
/// the exact shape afterwards. Integer arithmetic keeps the result stable
/// across platforms.
pub fn fit_within(
    cols: usize,
    rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> (usize, usize) {
    if cols <= target_cols && rows <= target_rows {
        return (cols, rows);
    }

    // scale_x <= scale_y, cross-multiplied to stay in integers
    if target_cols * rows <= target_rows * cols {
        let new_rows = (rows * target_cols / cols).max(1);
        (target_cols, new_rows)
    } else {
        let new_cols = (cols * target_rows / rows).max(1);
        (new_cols, target_rows)
    }
}

fn resample(pixels: &Array2<u8>, new_cols: usize, new_rows: usize) -> Result<Array2<u8>> {
    let (rows, cols) = pixels.dim();

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src = pixels.as_standard_layout().into_owned().into_raw_vec();
    let src_image = Image::from_vec_u8(cols as u32, rows as u32, src, PixelType::U8)
        .map_err(|e| Error::Processing(e.to_string()))?;
    let mut dst_image = Image::new(new_cols as u32, new_rows as u32, PixelType::U8);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(|e| Error::Processing(e.to_string()))?;

    Array2::from_shape_vec((new_rows, new_cols), dst_image.into_vec())
        .map_err(|e| Error::Processing(e.to_string()))
}

/// Bring a resampled matrix to the exact target shape.
///
/// A one-row or one-column shortfall is a known quantization artifact of the
/// downsample; the missing row is appended at the bottom, the missing column
/// at the right, filled with `fill`. A shape exceeding the target on either
/// axis means an upstream invariant broke and is reported, not repaired.
pub fn correct_shortfall(
    resized: Array2<u8>,
    target_cols: usize,
    target_rows: usize,
    fill: u8,
) -> Result<Array2<u8>> {
    let (rows, cols) = resized.dim();
    if (rows, cols) == (target_rows, target_cols) {
        return Ok(resized);
    }

    if rows < target_rows {
        debug!("Resample came up short by a row: {}x{}", rows, cols);
        let mut fixed = Array2::from_elem((rows + 1, cols), fill);
        fixed.slice_mut(s![..rows, ..]).assign(&resized);
        Ok(fixed)
    } else if cols < target_cols {
        debug!("Resample came up short by a column: {}x{}", rows, cols);
        let mut fixed = Array2::from_elem((rows, cols + 1), fill);
        fixed.slice_mut(s![.., ..cols]).assign(&resized);
        Ok(fixed)
    } else {
        warn!(
            "Resample produced {}x{} for a {}x{} target",
            rows, cols, target_rows, target_cols
        );
        Err(Error::Oversize {
            rows,
            cols,
            target_rows,
            target_cols,
        })
    }
}

/// Downsample the padded matrix to the target shape expected downstream.
pub fn resize_to_target(
    pixels: &Array2<u8>,
    target_cols: usize,
    target_rows: usize,
    fill: u8,
) -> Result<Array2<u8>> {
    let (rows, cols) = pixels.dim();
    let (new_cols, new_rows) = fit_within(cols, rows, target_cols, target_rows);

    debug!(
        "Resizing {}x{} -> {}x{} (target {}x{})",
        rows, cols, new_rows, new_cols, target_rows, target_cols
    );

    let resized = if (new_cols, new_rows) == (cols, rows) {
        pixels.clone()
    } else {
        resample(pixels, new_cols, new_rows)?
    };

    correct_shortfall(resized, target_cols, target_rows, fill)
}

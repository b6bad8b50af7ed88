use ndarray::{Array2, s};
use tracing::debug;

use crate::error::{Error, Result};

/// Minimal rectangle enclosing all foreground pixels, inclusive coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl BoundingBox {
    pub fn rows(&self) -> usize {
        self.bottom - self.top + 1
    }

    pub fn cols(&self) -> usize {
        self.right - self.left + 1
    }
}

/// Find the bounding box of pixels that differ from the all-zero background.
/// Returns `None` when the matrix has no foreground at all.
pub fn foreground_bounds(pixels: &Array2<u8>) -> Option<BoundingBox> {
    let mut top = usize::MAX;
    let mut left = usize::MAX;
    let mut bottom = 0usize;
    let mut right = 0usize;
    let mut found = false;

    for ((row, col), &v) in pixels.indexed_iter() {
        if v != 0 {
            found = true;
            if row < top {
                top = row;
            }
            if row > bottom {
                bottom = row;
            }
            if col < left {
                left = col;
            }
            if col > right {
                right = col;
            }
        }
    }

    if found {
        Some(BoundingBox {
            top,
            left,
            bottom,
            right,
        })
    } else {
        None
    }
}

/// Crop the matrix to its foreground bounding box.
///
/// Blank input is reported as `Error::EmptyImage` rather than producing a
/// degenerate zero-size crop; the caller must not reach the padding stage
/// with nothing to pad.
pub fn trim(pixels: &Array2<u8>) -> Result<(Array2<u8>, BoundingBox)> {
    let bbox = foreground_bounds(pixels).ok_or(Error::EmptyImage)?;

    debug!(
        "Trimming {}x{} to rows {}..={}, cols {}..={}",
        pixels.nrows(),
        pixels.ncols(),
        bbox.top,
        bbox.bottom,
        bbox.left,
        bbox.right
    );

    let cropped = pixels
        .slice(s![bbox.top..=bbox.bottom, bbox.left..=bbox.right])
        .to_owned();
    Ok((cropped, bbox))
}

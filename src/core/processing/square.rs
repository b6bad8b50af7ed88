use ndarray::{Array2, s};
use tracing::info;

/// Pixels added on each side of a matrix to reach its padded shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaddingAmounts {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl PaddingAmounts {
    fn uniform(padding: usize) -> Self {
        Self {
            top: padding,
            bottom: padding,
            left: padding,
            right: padding,
        }
    }

    /// Swap the vertical and horizontal amounts (top<->left, bottom<->right).
    fn transposed(self) -> Self {
        Self {
            top: self.left,
            bottom: self.right,
            left: self.top,
            right: self.bottom,
        }
    }
}

/// Total padding that takes `len` past the next multiple of `tile`, plus one
/// more full tile of margin. Already-aligned lengths get two tiles.
fn tile_padding(len: usize, tile: usize) -> usize {
    tile - (len % tile) + tile
}

/// Equal halves when the total is even; the extra pixel goes to the trailing
/// side (bottom or right) when odd.
fn split_between(total: usize) -> (usize, usize) {
    (total / 2, total - total / 2)
}

fn pad_with(pixels: &Array2<u8>, pad: PaddingAmounts, fill: u8) -> Array2<u8> {
    let (h, w) = pixels.dim();
    let mut padded = Array2::from_elem((h + pad.top + pad.bottom, w + pad.left + pad.right), fill);
    padded
        .slice_mut(s![pad.top..pad.top + h, pad.left..pad.left + w])
        .assign(pixels);
    padded
}

/// Pad a trimmed glyph into a square matrix sized by the tile grid, leaving
/// margin on all sides. Returns the padded matrix together with the amounts
/// applied, so callers can map coordinates back to the input.
///
/// The longer dimension is padded to one tile past the next tile multiple;
/// the shorter dimension is padded out to match. The horizontal split is
/// keyed off the vertical padding total's parity, not its own: when the
/// vertical total is even and the horizontal total is odd, the result comes
/// up one column short of square, which the resize stage restores.
pub fn pad_to_square(
    pixels: &Array2<u8>,
    tile_height: usize,
    tile_width: usize,
    fill: u8,
) -> (Array2<u8>, PaddingAmounts) {
    let (h, w) = pixels.dim();

    if h == w {
        let padding = tile_padding(h, tile_height);
        let pad = PaddingAmounts::uniform(padding);
        info!(
            "Padding square {}x{} by {} on all sides -> {}x{}",
            h,
            w,
            padding,
            h + 2 * padding,
            w + 2 * padding
        );
        (pad_with(pixels, pad, fill), pad)
    } else if h > w {
        let total_h_padding = tile_padding(h, tile_height);
        let (pad_top, pad_bottom) = split_between(total_h_padding);

        let new_h = h + total_h_padding;

        // Pad the width out to the new height
        let total_w_padding = new_h - w;
        let (pad_left, pad_right) = if total_h_padding % 2 == 0 {
            (total_w_padding / 2, total_w_padding / 2)
        } else {
            split_between(total_w_padding)
        };

        let pad = PaddingAmounts {
            top: pad_top,
            bottom: pad_bottom,
            left: pad_left,
            right: pad_right,
        };
        info!(
            "Padding {}x{}: top={}, bottom={}, left={}, right={} -> {}x{}",
            h,
            w,
            pad.top,
            pad.bottom,
            pad.left,
            pad.right,
            h + pad.top + pad.bottom,
            w + pad.left + pad.right
        );
        (pad_with(pixels, pad, fill), pad)
    } else {
        // Wide case reduces to the tall case on the transposed matrix
        let transposed = pixels.t().to_owned();
        let (padded, pad) = pad_to_square(&transposed, tile_height, tile_width, fill);
        (padded.t().to_owned(), pad.transposed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_input_pads_uniformly() {
        let m = Array2::<u8>::from_elem((5, 5), 9);
        let (padded, pad) = pad_to_square(&m, 28, 28, 0);
        // 28 - (5 % 28) + 28 = 51
        assert_eq!(pad, PaddingAmounts::uniform(51));
        assert_eq!(padded.dim(), (107, 107));
        assert_eq!(padded[[50, 50]], 0);
        assert_eq!(padded[[51, 51]], 9);
        assert_eq!(padded[[55, 55]], 9);
        assert_eq!(padded[[56, 56]], 0);
    }

    #[test]
    fn aligned_square_input_gets_two_tiles() {
        let m = Array2::<u8>::from_elem((28, 28), 1);
        let (padded, pad) = pad_to_square(&m, 28, 28, 0);
        assert_eq!(pad, PaddingAmounts::uniform(56));
        assert_eq!(padded.dim(), (140, 140));
    }

    #[test]
    fn tall_input_even_total_splits_evenly() {
        let m = Array2::<u8>::from_elem((4, 2), 7);
        let (padded, pad) = pad_to_square(&m, 2, 2, 0);
        // total_h = 2 - 0 + 2 = 4, new_h = 8, total_w = 6
        assert_eq!(
            pad,
            PaddingAmounts {
                top: 2,
                bottom: 2,
                left: 3,
                right: 3
            }
        );
        assert_eq!(padded.dim(), (8, 8));
        assert_eq!(padded[[2, 3]], 7);
        assert_eq!(padded[[5, 4]], 7);
        assert_eq!(padded[[1, 3]], 0);
        assert_eq!(padded[[2, 2]], 0);
    }

    #[test]
    fn tall_input_odd_total_favors_bottom_and_right() {
        let m = Array2::<u8>::from_elem((4, 2), 3);
        let (padded, pad) = pad_to_square(&m, 3, 3, 0);
        // total_h = 3 - 1 + 3 = 5 (odd), new_h = 9, total_w = 7
        assert_eq!(
            pad,
            PaddingAmounts {
                top: 2,
                bottom: 3,
                left: 3,
                right: 4
            }
        );
        assert_eq!(padded.dim(), (9, 9));
    }

    #[test]
    fn even_vertical_odd_horizontal_comes_up_one_column_short() {
        // The horizontal split follows the vertical total's parity, so the
        // odd horizontal total loses its last column here.
        let m = Array2::<u8>::from_elem((4, 3), 1);
        let (padded, pad) = pad_to_square(&m, 28, 28, 0);
        // total_h = 52 (even), new_h = 56, total_w = 53 (odd)
        assert_eq!(
            pad,
            PaddingAmounts {
                top: 26,
                bottom: 26,
                left: 26,
                right: 26
            }
        );
        assert_eq!(padded.dim(), (56, 55));
    }

    #[test]
    fn wide_input_equals_transposed_tall_case() {
        let mut m = Array2::<u8>::zeros((4, 6));
        m[[0, 0]] = 11;
        m[[3, 5]] = 22;

        let (padded, pad) = pad_to_square(&m, 2, 2, 0);
        assert_eq!(padded.dim(), (10, 10));
        assert_eq!(
            pad,
            PaddingAmounts {
                top: 3,
                bottom: 3,
                left: 2,
                right: 2
            }
        );
        // Content block sits at row offset 3, column offset 2
        assert_eq!(padded[[3, 2]], 11);
        assert_eq!(padded[[6, 7]], 22);

        // Identical to transposing, padding the tall case, transposing back
        let (tall, _) = pad_to_square(&m.t().to_owned(), 2, 2, 0);
        assert_eq!(padded, tall.t().to_owned());
    }

    #[test]
    fn fill_value_is_used_for_margin() {
        let m = Array2::<u8>::from_elem((2, 2), 200);
        let (padded, pad) = pad_to_square(&m, 2, 2, 40);
        assert_eq!(padded[[0, 0]], 40);
        assert_eq!(padded[[pad.top, pad.left]], 200);
    }
}

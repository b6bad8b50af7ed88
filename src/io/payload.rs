use base64::{Engine as _, engine::general_purpose::STANDARD};
use ndarray::Array2;
use thiserror::Error;
use tracing::debug;

/// Maximum accepted payload size (10MB)
const MAX_PAYLOAD_SIZE: usize = 10 * 1024 * 1024;

/// Separator between the data-URL envelope and the encoded body
const BASE64_MARKER: &str = "base64,";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload does not contain a 'base64,' marker")]
    MissingBase64Marker,

    #[error("invalid base64 encoding: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("payload is too large: {0} bytes (max: {1} bytes)")]
    TooLarge(usize, usize),

    #[error("payload contains no image data")]
    EmptyData,

    #[error("failed to decode image: {0}")]
    InvalidImage(String),
}

/// Decode a `data:image/<format>;base64,<payload>` string into an intensity
/// matrix with foreground-as-high polarity.
///
/// Everything before (and including) the first `base64,` marker is envelope
/// and is discarded; the rest is the encoded image.
pub fn matrix_from_data_url(payload: &str) -> Result<Array2<u8>, DecodeError> {
    if payload.len() > MAX_PAYLOAD_SIZE {
        return Err(DecodeError::TooLarge(payload.len(), MAX_PAYLOAD_SIZE));
    }

    let (_, body) = payload
        .split_once(BASE64_MARKER)
        .ok_or(DecodeError::MissingBase64Marker)?;

    let bytes = STANDARD.decode(body)?;
    matrix_from_image_bytes(&bytes)
}

/// Decode raw image bytes (any format the image crate recognizes) into an
/// intensity matrix with foreground-as-high polarity.
///
/// The first channel of each pixel is taken as representative and inverted
/// (`255 - v`): the source convention draws ink as low intensity on a light
/// background, while the pipeline treats high intensity as foreground.
pub fn matrix_from_image_bytes(bytes: &[u8]) -> Result<Array2<u8>, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyData);
    }
    if bytes.len() > MAX_PAYLOAD_SIZE {
        return Err(DecodeError::TooLarge(bytes.len(), MAX_PAYLOAD_SIZE));
    }

    let img =
        image::load_from_memory(bytes).map_err(|e| DecodeError::InvalidImage(e.to_string()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    debug!("Decoded image: {}x{}, {} bytes", width, height, bytes.len());

    let mut matrix = Array2::<u8>::zeros((height as usize, width as usize));
    for (x, y, pixel) in rgba.enumerate_pixels() {
        matrix[[y as usize, x as usize]] = 255 - pixel[0];
    }

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GrayImage, ImageFormat, Luma};
    use std::io::Cursor;

    // 1x1 red PNG image (base64)
    const TINY_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8DwHwAFBQIAX8jx0gAAAABJRU5ErkJggg==";

    fn png_bytes(img: GrayImage) -> Vec<u8> {
        let mut buf = Vec::new();
        DynamicImage::ImageLuma8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn data_url_decodes_and_inverts() {
        let payload = format!("data:image/png;base64,{}", TINY_PNG_BASE64);
        let matrix = matrix_from_data_url(&payload).unwrap();
        assert_eq!(matrix.dim(), (1, 1));
        // Red pixel: first channel 255, inverted to background 0
        assert_eq!(matrix[[0, 0]], 0);
    }

    #[test]
    fn dark_ink_on_light_background_reads_high() {
        let mut img = GrayImage::from_pixel(3, 5, Luma([255u8]));
        img.put_pixel(1, 2, Luma([0u8]));
        let matrix = matrix_from_image_bytes(&png_bytes(img)).unwrap();

        // 3 wide, 5 tall -> 5 rows, 3 cols
        assert_eq!(matrix.dim(), (5, 3));
        assert_eq!(matrix[[2, 1]], 255);
        assert_eq!(matrix[[0, 0]], 0);
    }

    #[test]
    fn inversion_is_self_inverse() {
        let img = GrayImage::from_fn(4, 4, |x, y| Luma([(x * 16 + y) as u8]));
        let matrix = matrix_from_image_bytes(&png_bytes(img.clone())).unwrap();
        let twice = matrix.mapv(|v| 255 - v);
        for (x, y, pixel) in img.enumerate_pixels() {
            assert_eq!(twice[[y as usize, x as usize]], pixel[0]);
        }
    }

    #[test]
    fn missing_marker_is_rejected() {
        let result = matrix_from_data_url("data:image/png;charset=binary,abcd");
        assert!(matches!(result, Err(DecodeError::MissingBase64Marker)));
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let result = matrix_from_data_url("data:image/png;base64,not-valid-base64!!!");
        assert!(matches!(result, Err(DecodeError::InvalidBase64(_))));
    }

    #[test]
    fn corrupt_image_bytes_are_rejected() {
        let body = STANDARD.encode([0x89, 0x50, 0x4E, 0x47, 0x00, 0x00, 0x00, 0x00]);
        let result = matrix_from_data_url(&format!("data:image/png;base64,{}", body));
        assert!(matches!(result, Err(DecodeError::InvalidImage(_))));
    }

    #[test]
    fn empty_bytes_are_rejected() {
        assert!(matches!(
            matrix_from_image_bytes(&[]),
            Err(DecodeError::EmptyData)
        ));
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let bytes = vec![0u8; MAX_PAYLOAD_SIZE + 1];
        assert!(matches!(
            matrix_from_image_bytes(&bytes),
            Err(DecodeError::TooLarge(_, _))
        ));
    }
}
